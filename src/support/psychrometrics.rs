//! Moist-air property functions.
//!
//! Sizing needs four properties of moist air, all pure functions of
//! dry-bulb temperature, humidity ratio, and (where relevant) barometric
//! pressure. They sit behind the [`Psychrometrics`] trait so a host
//! simulation can plug in its own property routines.
//!
//! [`StandardPsychrometrics`] implements the ASHRAE Handbook correlations.
//! Wet-bulb temperature has no closed form and is solved numerically.

mod error;
mod humidity_ratio;
mod standard;
mod wet_bulb;

pub use error::PsychrometricError;
pub use humidity_ratio::HumidityRatio;
pub use standard::StandardPsychrometrics;

use uom::si::f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature};

use crate::support::units::SpecificEnthalpy;

/// Moist-air property functions consumed by the sizers.
pub trait Psychrometrics {
    /// Enthalpy of moist air per unit mass of dry air.
    fn enthalpy(&self, dry_bulb: ThermodynamicTemperature, w: HumidityRatio) -> SpecificEnthalpy;

    /// Specific heat of moist air per unit mass of dry air.
    fn specific_heat(&self, w: HumidityRatio) -> SpecificHeatCapacity;

    /// Density of moist air.
    fn density(
        &self,
        pressure: Pressure,
        dry_bulb: ThermodynamicTemperature,
        w: HumidityRatio,
    ) -> MassDensity;

    /// Thermodynamic wet-bulb temperature.
    ///
    /// # Errors
    ///
    /// Returns a [`PsychrometricError`] if the state is outside the range the
    /// implementation supports.
    fn wet_bulb(
        &self,
        dry_bulb: ThermodynamicTemperature,
        w: HumidityRatio,
        pressure: Pressure,
    ) -> Result<ThermodynamicTemperature, PsychrometricError>;
}

impl<T: Psychrometrics + ?Sized> Psychrometrics for &T {
    fn enthalpy(&self, dry_bulb: ThermodynamicTemperature, w: HumidityRatio) -> SpecificEnthalpy {
        (**self).enthalpy(dry_bulb, w)
    }

    fn specific_heat(&self, w: HumidityRatio) -> SpecificHeatCapacity {
        (**self).specific_heat(w)
    }

    fn density(
        &self,
        pressure: Pressure,
        dry_bulb: ThermodynamicTemperature,
        w: HumidityRatio,
    ) -> MassDensity {
        (**self).density(pressure, dry_bulb, w)
    }

    fn wet_bulb(
        &self,
        dry_bulb: ThermodynamicTemperature,
        w: HumidityRatio,
        pressure: Pressure,
    ) -> Result<ThermodynamicTemperature, PsychrometricError> {
        (**self).wet_bulb(dry_bulb, w, pressure)
    }
}
