use uom::si::f64::{Power, ThermalConductance, ThermodynamicTemperature};

use super::{
    Branch, CoilHandoff, DesignAirState, Diagnostic, FanHeat, GuardOutcome, SizingError,
};

/// A best-effort sizing value with its out-of-band error indicator.
#[derive(Debug)]
pub struct SizingResult<Q, D> {
    /// The value the component should use.
    pub value: Q,

    /// The design value derived from design data, when one was derived.
    ///
    /// Differs from `value` when the user supplied a value but a design run
    /// still produced a design size for reporting.
    pub autosized: Option<Q>,

    pub branch: Branch,
    pub error: Option<SizingError>,
    pub details: D,
    pub diagnostics: Vec<Diagnostic>,
}

impl<Q, D> SizingResult<Q, D> {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Cooling capacity result.
pub type CapacitySizing = SizingResult<Power, CapacityDetails>;

/// Heating coil UA result.
pub type UaSizing = SizingResult<ThermalConductance, UaDetails>;

/// The values a capacity was actually computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityDetails {
    pub design_air: Option<DesignAirState>,
    pub fan_heat: FanHeat,

    /// Coil entering wet-bulb used for the modifier curve.
    pub entering_wet_bulb: Option<ThermodynamicTemperature>,

    /// Rated-capacity modifier; 1 when none applies.
    pub modifier_factor: f64,

    /// Whether a modifier curve was evaluated.
    pub modifier_evaluated: bool,

    pub guard: Option<GuardOutcome>,

    /// Design state for a related sizer later in the same pass.
    pub handoff: Option<CoilHandoff>,
}

impl Default for CapacityDetails {
    fn default() -> Self {
        Self {
            design_air: None,
            fan_heat: FanHeat::none(),
            entering_wet_bulb: None,
            modifier_factor: 1.0,
            modifier_evaluated: false,
            guard: None,
            handoff: None,
        }
    }
}

impl CapacityDetails {
    /// Correction ratio from the minimum flow-per-capacity bound.
    #[must_use]
    pub fn min_ratio(&self) -> f64 {
        self.guard.map_or(1.0, |guard| guard.min_ratio)
    }

    /// Correction ratio from the maximum flow-per-capacity bound.
    #[must_use]
    pub fn max_ratio(&self) -> f64 {
        self.guard.map_or(1.0, |guard| guard.max_ratio)
    }
}

/// What the UA inversion did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UaDetails {
    pub solve: Option<UaSolveSummary>,

    /// The nominal UA was substituted for a degenerate design point.
    pub placeholder: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UaSolveSummary {
    pub bracket: [ThermalConductance; 2],
    pub iterations: usize,

    /// Predicted minus target load at the returned UA.
    pub residual: Power,

    pub converged: bool,
}

/// Run-level error flags, set-only within a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunState {
    /// Some call reported an error.
    pub errors_found: bool,

    /// Some call hit a configuration error that should halt the pass.
    pub fatal: bool,
}

impl RunState {
    pub(crate) fn record(&mut self, error: Option<&SizingError>) {
        if let Some(error) = error {
            self.errors_found = true;
            self.fatal |= error.is_fatal();
        }
    }
}
