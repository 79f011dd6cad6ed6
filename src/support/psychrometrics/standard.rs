use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, SpecificHeatCapacity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::SpecificEnthalpy;

use super::{HumidityRatio, PsychrometricError, Psychrometrics, wet_bulb};

/// Specific heat of dry air, J/kg·K.
const CP_DRY_AIR: f64 = 1.00484e3;

/// Specific heat of water vapor, J/kg·K.
const CP_VAPOR: f64 = 1.85895e3;

/// Latent heat of vaporization at 0 °C, J/kg.
const H_FG_0C: f64 = 2.50094e6;

/// Gas constant of dry air, J/kg·K.
const R_DRY_AIR: f64 = 287.0;

/// Vapor term of the ideal-gas moist-air density.
const VAPOR_DENSITY_FACTOR: f64 = 1.607_768_7;

/// Humidity ratios below this are treated as this value.
const MIN_HUMIDITY_RATIO: f64 = 1.0e-5;

/// Molar mass ratio of water vapor to dry air.
pub(super) const EPSILON: f64 = 0.621_945;

/// ASHRAE Handbook moist-air correlations.
///
/// Humidity ratios below 1e-5 kg/kg are raised to 1e-5 in the enthalpy,
/// specific heat, and density correlations, matching common building
/// simulation practice for very dry air.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPsychrometrics;

impl Psychrometrics for StandardPsychrometrics {
    fn enthalpy(&self, dry_bulb: ThermodynamicTemperature, w: HumidityRatio) -> SpecificEnthalpy {
        let t = dry_bulb.get::<degree_celsius>();
        let w = w.value().max(MIN_HUMIDITY_RATIO);
        SpecificEnthalpy::new::<joule_per_kilogram>(CP_DRY_AIR * t + w * (H_FG_0C + CP_VAPOR * t))
    }

    fn specific_heat(&self, w: HumidityRatio) -> SpecificHeatCapacity {
        let w = w.value().max(MIN_HUMIDITY_RATIO);
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(CP_DRY_AIR + w * CP_VAPOR)
    }

    fn density(
        &self,
        pressure: Pressure,
        dry_bulb: ThermodynamicTemperature,
        w: HumidityRatio,
    ) -> MassDensity {
        let t = dry_bulb.get::<degree_celsius>() + 273.15;
        let w = w.value().max(MIN_HUMIDITY_RATIO);
        MassDensity::new::<kilogram_per_cubic_meter>(
            pressure.get::<pascal>() / (R_DRY_AIR * t * (1.0 + VAPOR_DENSITY_FACTOR * w)),
        )
    }

    fn wet_bulb(
        &self,
        dry_bulb: ThermodynamicTemperature,
        w: HumidityRatio,
        pressure: Pressure,
    ) -> Result<ThermodynamicTemperature, PsychrometricError> {
        wet_bulb::solve(dry_bulb, w, pressure)
    }
}

/// Saturation vapor pressure in Pa (Hyland-Wexler), over ice below 0 °C.
///
/// # Errors
///
/// Returns [`PsychrometricError::OutOfRange`] outside -100 °C to 200 °C.
pub(super) fn saturation_pressure(celsius: f64) -> Result<f64, PsychrometricError> {
    if !(-100.0..=200.0).contains(&celsius) {
        return Err(PsychrometricError::OutOfRange(
            ThermodynamicTemperature::new::<degree_celsius>(celsius),
        ));
    }

    let t = celsius + 273.15;
    let ln_p = if celsius < 0.0 {
        -5.674_535_9e3 / t + 6.392_524_7 - 9.677_843e-3 * t + 6.221_570_1e-7 * t.powi(2)
            + 2.074_782_5e-9 * t.powi(3)
            - 9.484_024e-13 * t.powi(4)
            + 4.163_501_9 * t.ln()
    } else {
        -5.800_220_6e3 / t + 1.391_499_3 - 4.864_023_9e-2 * t + 4.176_476_8e-5 * t.powi(2)
            - 1.445_209_3e-8 * t.powi(3)
            + 6.545_967_3 * t.ln()
    };
    Ok(ln_p.exp())
}

/// Saturation humidity ratio at `celsius` and `pressure` (Pa).
///
/// # Errors
///
/// Returns an error if the saturation pressure reaches the barometric
/// pressure or the temperature is out of range.
pub(super) fn saturation_humidity_ratio(celsius: f64, pressure: f64) -> Result<f64, PsychrometricError> {
    let p_ws = saturation_pressure(celsius)?;
    if p_ws >= pressure {
        return Err(PsychrometricError::AboveBoiling {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(celsius),
            pressure: Pressure::new::<pascal>(pressure),
        });
    }
    Ok(EPSILON * p_ws / (pressure - p_ws))
}
