//! Design heat gain of fans coupled to a coil.

use uom::{
    ConstZero,
    si::f64::{Power, Pressure, VolumeRate},
};

use crate::support::constraint::{Constrained, ConstraintError, ConstraintResult, UnitInterval};

/// Fan position relative to the coil it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanPlacement {
    /// Upstream of the coil; fan heat warms the coil inlet.
    BlowThrough,

    /// Downstream of the coil; fan heat warms the supply after the coil.
    DrawThrough,
}

/// Design parameters of a fan, enough to compute its heat gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignFan {
    placement: FanPlacement,
    pressure_rise: Pressure,
    total_efficiency: Constrained<f64, UnitInterval>,
    motor_efficiency: Constrained<f64, UnitInterval>,
    motor_in_airstream_fraction: Constrained<f64, UnitInterval>,
}

impl DesignFan {
    /// Creates a fan description.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an efficiency or the motor fraction lies outside
    /// `[0, 1]`, or if the total efficiency is zero.
    pub fn new(
        placement: FanPlacement,
        pressure_rise: Pressure,
        total_efficiency: f64,
        motor_efficiency: f64,
        motor_in_airstream_fraction: f64,
    ) -> ConstraintResult<Self> {
        if total_efficiency == 0.0 {
            return Err(ConstraintError::Zero);
        }
        Ok(Self {
            placement,
            pressure_rise,
            total_efficiency: UnitInterval::new(total_efficiency)?,
            motor_efficiency: UnitInterval::new(motor_efficiency)?,
            motor_in_airstream_fraction: UnitInterval::new(motor_in_airstream_fraction)?,
        })
    }

    #[must_use]
    pub fn placement(&self) -> FanPlacement {
        self.placement
    }

    /// Heat the fan adds to the airstream at `flow`.
    ///
    /// Shaft power ends up in the air; motor losses only in the share of
    /// the motor that sits in the airstream.
    #[must_use]
    pub fn heat_gain(&self, flow: VolumeRate) -> Power {
        if flow <= VolumeRate::ZERO {
            return Power::ZERO;
        }
        let total: Power = flow * self.pressure_rise / *self.total_efficiency.as_ref();
        let shaft = total * *self.motor_efficiency.as_ref();
        shaft + (total - shaft) * *self.motor_in_airstream_fraction.as_ref()
    }
}

/// Fan heat included in a capacity, tagged with where it entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanHeat {
    pub heat: Power,
    pub placement: Option<FanPlacement>,
}

impl FanHeat {
    #[must_use]
    pub fn none() -> Self {
        Self {
            heat: Power::ZERO,
            placement: None,
        }
    }
}
