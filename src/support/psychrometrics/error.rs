use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::constraint::ConstraintError;

/// Errors raised by [`StandardPsychrometrics`](super::StandardPsychrometrics).
#[derive(Debug, Error)]
pub enum PsychrometricError {
    /// Saturation pressure reached the barometric pressure (boiling).
    #[error("saturation pressure exceeds barometric pressure {pressure:?} at {temperature:?}")]
    AboveBoiling {
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    },

    /// Temperature outside the correlation range of -100 °C to 200 °C.
    #[error("temperature {0:?} is outside the supported range")]
    OutOfRange(ThermodynamicTemperature),

    /// A humidity ratio could not be represented.
    #[error("invalid humidity ratio")]
    HumidityRatio(#[from] ConstraintError),

    /// The wet-bulb bisection failed.
    #[error("wet-bulb solver error")]
    WetBulb(#[from] bisection::Error),
}
