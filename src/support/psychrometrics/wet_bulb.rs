//! Wet-bulb temperature by bisection on the psychrometric energy balance.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::degree_celsius,
};

use super::{HumidityRatio, PsychrometricError, standard::saturation_humidity_ratio};

/// Lowest wet-bulb temperature searched, °C.
const LOWER_LIMIT: f64 = -100.0;

/// Maximum wet-bulb depression searched, K.
const MAX_DEPRESSION: f64 = 80.0;

/// Solves for the thermodynamic wet-bulb temperature.
///
/// Saturated or supersaturated air returns the dry-bulb temperature.
/// A solve that stops on the iteration limit returns its best estimate.
pub(super) fn solve(
    dry_bulb: ThermodynamicTemperature,
    w: HumidityRatio,
    pressure: Pressure,
) -> Result<ThermodynamicTemperature, PsychrometricError> {
    let model = WetBulbModel {
        dry_bulb: dry_bulb.get::<degree_celsius>(),
        pressure: pressure.get::<pascal>(),
    };
    let problem = WetBulbProblem { w: w.value() };

    let upper = model.dry_bulb;
    if model.implied_humidity_ratio(upper)? <= problem.w {
        return Ok(dry_bulb);
    }

    let lower = (upper - MAX_DEPRESSION).max(LOWER_LIMIT);
    if model.implied_humidity_ratio(lower)? >= problem.w {
        return Ok(ThermodynamicTemperature::new::<degree_celsius>(lower));
    }

    let solution = bisection::solve(
        &model,
        &problem,
        [lower, upper],
        &bisection::Config {
            max_iters: 100,
            x_abs_tol: 1e-9,
            x_rel_tol: 0.0,
            residual_tol: 1e-12,
        },
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        log::debug!(
            "wet-bulb solve stopped after {} iterations, residual {:e}",
            solution.iters,
            solution.residual
        );
    }

    Ok(ThermodynamicTemperature::new::<degree_celsius>(solution.x))
}

/// Humidity ratio implied by a candidate wet-bulb temperature.
struct WetBulbModel {
    dry_bulb: f64,
    pressure: f64,
}

impl WetBulbModel {
    fn implied_humidity_ratio(&self, wet_bulb: f64) -> Result<f64, PsychrometricError> {
        let t = self.dry_bulb;
        let ws = saturation_humidity_ratio(wet_bulb, self.pressure)?;
        Ok(if wet_bulb >= 0.0 {
            ((2501.0 - 2.326 * wet_bulb) * ws - 1.006 * (t - wet_bulb))
                / (2501.0 + 1.86 * t - 4.186 * wet_bulb)
        } else {
            ((2830.0 - 0.24 * wet_bulb) * ws - 1.006 * (t - wet_bulb))
                / (2830.0 + 1.86 * t - 2.1 * wet_bulb)
        })
    }
}

impl Model for WetBulbModel {
    type Input = ThermodynamicTemperature;
    type Output = f64;
    type Error = PsychrometricError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.implied_humidity_ratio(input.get::<degree_celsius>())
    }
}

/// Residual `implied - actual` humidity ratio.
struct WetBulbProblem {
    w: f64,
}

impl EquationProblem<1> for WetBulbProblem {
    type Input = ThermodynamicTemperature;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<degree_celsius>(x[0]))
    }

    fn residuals(&self, _input: &Self::Input, output: &Self::Output) -> Result<[f64; 1], Self::Error> {
        Ok([output - self.w])
    }
}
