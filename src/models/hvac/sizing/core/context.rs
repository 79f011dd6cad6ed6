use uom::si::f64::{MassDensity, ThermodynamicTemperature};

use crate::support::{
    psychrometrics::{PsychrometricError, Psychrometrics},
    units::SpecificEnthalpy,
};

use super::{AirCondition, SizingConfig};

/// Borrowed collaborators for one sizing call.
pub(crate) struct Context<'a, D, P, C> {
    pub(crate) design: &'a D,
    pub(crate) psych: &'a P,
    pub(crate) curves: &'a C,
    pub(crate) config: &'a SizingConfig,
}

impl<D, P: Psychrometrics, C> Context<'_, D, P, C> {
    pub(crate) fn enthalpy(&self, state: AirCondition) -> SpecificEnthalpy {
        self.psych.enthalpy(state.dry_bulb, state.humidity_ratio)
    }

    /// Moist-air density at standard pressure.
    pub(crate) fn density(&self, state: AirCondition) -> MassDensity {
        self.psych
            .density(self.config.standard_pressure, state.dry_bulb, state.humidity_ratio)
    }

    pub(crate) fn wet_bulb(
        &self,
        state: AirCondition,
    ) -> Result<ThermodynamicTemperature, PsychrometricError> {
        self.psych
            .wet_bulb(state.dry_bulb, state.humidity_ratio, self.config.standard_pressure)
    }
}
