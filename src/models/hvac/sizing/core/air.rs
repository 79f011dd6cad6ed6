//! Moist-air states used for sizing.

use uom::si::{
    f64::{ThermodynamicTemperature, VolumeRate},
    thermodynamic_temperature::kelvin,
};

use crate::support::psychrometrics::HumidityRatio;

/// Dry-bulb temperature and humidity ratio of an air stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirCondition {
    pub dry_bulb: ThermodynamicTemperature,
    pub humidity_ratio: HumidityRatio,
}

impl AirCondition {
    #[must_use]
    pub fn new(dry_bulb: ThermodynamicTemperature, humidity_ratio: HumidityRatio) -> Self {
        Self {
            dry_bulb,
            humidity_ratio,
        }
    }

    /// Mixes `fraction` of `first` with `1 - fraction` of `second`.
    ///
    /// The fraction is clamped to `[0, 1]`.
    #[must_use]
    pub fn blend(fraction: f64, first: Self, second: Self) -> Self {
        let f = fraction.clamp(0.0, 1.0);
        Self {
            dry_bulb: ThermodynamicTemperature::new::<kelvin>(
                f * first.dry_bulb.get::<kelvin>() + (1.0 - f) * second.dry_bulb.get::<kelvin>(),
            ),
            humidity_ratio: HumidityRatio::blend(f, first.humidity_ratio, second.humidity_ratio),
        }
    }

    /// Limits a leaving state to the entering state.
    ///
    /// A cooling coil cannot leave air warmer or wetter than it entered.
    #[must_use]
    pub fn no_warmer_than(self, inlet: Self) -> Self {
        Self {
            dry_bulb: if self.dry_bulb <= inlet.dry_bulb {
                self.dry_bulb
            } else {
                inlet.dry_bulb
            },
            humidity_ratio: self.humidity_ratio.min(inlet.humidity_ratio),
        }
    }
}

/// Partial replacement of a derived air state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StateOverride {
    pub dry_bulb: Option<ThermodynamicTemperature>,
    pub humidity_ratio: Option<HumidityRatio>,
}

impl StateOverride {
    #[must_use]
    pub fn apply(self, state: AirCondition) -> AirCondition {
        AirCondition {
            dry_bulb: self.dry_bulb.unwrap_or(state.dry_bulb),
            humidity_ratio: self.humidity_ratio.unwrap_or(state.humidity_ratio),
        }
    }
}

/// The air states a capacity was derived from.
///
/// `inlet` and `outlet` are `None` when no state was derived, for example
/// when the design flow was too small to size against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignAirState {
    pub inlet: Option<AirCondition>,
    pub outlet: Option<AirCondition>,
    pub volume_flow: VolumeRate,
    pub outdoor_air_fraction: Option<f64>,
}

impl DesignAirState {
    /// A flow with no derived states.
    #[must_use]
    pub fn unset(volume_flow: VolumeRate) -> Self {
        Self {
            inlet: None,
            outlet: None,
            volume_flow,
            outdoor_air_fraction: None,
        }
    }
}
