//! Forward heating coil models used by the UA inversion.

use uom::si::f64::{Power, ThermalConductance};

use crate::support::hx::{CrossFlowUnmixed, StreamInlet, exchange};

use crate::models::hvac::sizing::core::CoilModelError;

/// Air and water streams entering a coil at its design point.
#[derive(Debug, Clone, Copy)]
pub struct CoilDesignPoint {
    pub air: StreamInlet,
    pub water: StreamInlet,
}

/// Heat a coil delivers to the air for a given UA.
///
/// The UA sizer inverts this relation. Heating rate must increase with UA
/// for the inversion to be well posed.
pub trait CoilPerformance {
    /// Heat gained by the air stream.
    ///
    /// # Errors
    ///
    /// Returns a [`CoilModelError`] if the design point cannot be evaluated.
    fn heating_rate(
        &self,
        ua: ThermalConductance,
        point: &CoilDesignPoint,
    ) -> Result<Power, CoilModelError>;
}

impl<T: CoilPerformance + ?Sized> CoilPerformance for &T {
    fn heating_rate(
        &self,
        ua: ThermalConductance,
        point: &CoilDesignPoint,
    ) -> Result<Power, CoilModelError> {
        (**self).heating_rate(ua, point)
    }
}

/// Hot-water coil as a cross-flow exchanger with both streams unmixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleHeatingCoil;

impl CoilPerformance for SimpleHeatingCoil {
    fn heating_rate(
        &self,
        ua: ThermalConductance,
        point: &CoilDesignPoint,
    ) -> Result<Power, CoilModelError> {
        Ok(exchange(&CrossFlowUnmixed, ua, [point.air, point.water])?.heat_to_first)
    }
}
