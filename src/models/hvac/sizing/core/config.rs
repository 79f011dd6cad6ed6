use uom::si::{
    f64::{MassDensity, Power, Pressure, SpecificHeatCapacity, ThermalConductance, VolumeRate},
    mass_density::kilogram_per_cubic_meter,
    power::watt,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductance::watt_per_kelvin,
    volume_rate::cubic_meter_per_second,
};

use crate::support::regula_falsi;

/// Engine constants shared by all sizers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingConfig {
    /// Design flows below this size to zero capacity.
    pub small_air_volume_flow: VolumeRate,

    /// Air-system UA loads below this are treated as zero.
    pub small_load: Power,

    pub standard_pressure: Pressure,
    pub standard_air_density: MassDensity,

    /// Water specific heat used by the UA forward model.
    pub water_specific_heat: SpecificHeatCapacity,

    /// UA assigned when a coil has no meaningful design point.
    pub nominal_ua: ThermalConductance,

    /// Emit warnings for zero capacities and plausibility corrections.
    pub verbose: bool,

    pub dx_envelope: FlowPerCapacityEnvelope,
    pub dedicated_outdoor_air_dx_envelope: FlowPerCapacityEnvelope,

    /// Rated flow per capacity assumed for dedicated outdoor air DX coils,
    /// in m³/s per W.
    pub dedicated_outdoor_air_dx_flow_per_capacity: f64,

    pub ua_solver: UaSolverConfig,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            small_air_volume_flow: VolumeRate::new::<cubic_meter_per_second>(0.001),
            small_load: Power::new::<watt>(1.0),
            standard_pressure: Pressure::new::<pascal>(101_325.0),
            standard_air_density: MassDensity::new::<kilogram_per_cubic_meter>(1.2),
            water_specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0),
            nominal_ua: ThermalConductance::new::<watt_per_kelvin>(1.0),
            verbose: false,
            dx_envelope: FlowPerCapacityEnvelope {
                min: 4.027e-5,
                max: 6.041e-5,
            },
            dedicated_outdoor_air_dx_envelope: FlowPerCapacityEnvelope {
                min: 1.677e-5,
                max: 3.355e-5,
            },
            dedicated_outdoor_air_dx_flow_per_capacity: 5.0e-5,
            ua_solver: UaSolverConfig::default(),
        }
    }
}

/// Rated volume flow per rated capacity bounds, in m³/s per W.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowPerCapacityEnvelope {
    pub min: f64,
    pub max: f64,
}

/// Settings for the UA inversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UaSolverConfig {
    pub max_iters: usize,

    /// Converged when the predicted load is within this fraction of the target.
    pub relative_accuracy: f64,

    /// Bracket ends as fractions of the design load, in W/K per W.
    pub bracket_fractions: [f64; 2],
}

impl Default for UaSolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 500,
            relative_accuracy: 1e-4,
            bracket_fractions: [0.001, 1.0],
        }
    }
}

impl UaSolverConfig {
    /// Root finder settings for a target load in W.
    pub(super) fn regula_falsi(&self, target_load: f64) -> regula_falsi::Config {
        regula_falsi::Config {
            max_iters: self.max_iters,
            residual_tol: self.relative_accuracy * target_load.abs(),
            x_rel_tol: 1e-12,
        }
    }

    /// Initial UA bracket in W/K for a target load in W.
    pub(super) fn bracket(&self, target_load: f64) -> [f64; 2] {
        self.bracket_fractions.map(|fraction| fraction * target_load)
    }
}
