//! Unit helpers on top of [`uom`].
//!
//! All sizing quantities are [`uom`] SI quantities. Two things are missing
//! from [`uom`] itself and live here:
//!
//! - [`SpecificEnthalpy`], the J/kg quantity used for moist-air enthalpy.
//! - [`TemperatureDifference::minus`], which subtracts two absolute
//!   temperatures and yields a [`TemperatureInterval`].
//!
//! ```
//! use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
//! use twine_sizing::support::units::TemperatureDifference;
//!
//! let entering = ThermodynamicTemperature::new::<degree_celsius>(26.0);
//! let leaving = ThermodynamicTemperature::new::<degree_celsius>(13.0);
//! let _approach = entering.minus(leaving);
//! ```
//!
//! [`TemperatureInterval`]: uom::si::f64::TemperatureInterval

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin,
    },
    typenum::{N2, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Difference of two absolute temperatures.
///
/// `uom` does not subtract [`ThermodynamicTemperature`] values into a
/// [`TemperatureInterval`]; see
/// [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns `self - other` as an interval.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(self.get::<kelvin>() - other.get::<kelvin>())
    }
}
