//! Sizing requests.

use std::ops::Mul;

use num_traits::Zero;
use uom::si::f64::{MassRate, Power, ThermalConductance, ThermodynamicTemperature, VolumeRate};

use crate::support::curve::CurveId;

use super::{
    AirCondition, ComponentId, DesignFan, FlowPerCapacityEnvelope, PlantLoopId, SizingConfig,
    SizingScope, StateOverride,
};

/// One request to size a single value of one component.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingRequest<Q, I> {
    pub component: ComponentId,

    /// The user's value; meaningful when `auto_sized` is false.
    pub original: Q,

    /// Whether the user asked for the value to be computed.
    pub auto_sized: bool,

    pub overrides: Overrides<Q>,
    pub scope: SizingScope,

    /// Inputs specific to the sizer kind.
    pub inputs: I,
}

/// Cooling capacity request.
pub type CapacityRequest = SizingRequest<Power, CoolingInputs>;

/// Heating coil UA request.
pub type UaRequest = SizingRequest<ThermalConductance, UaInputs>;

/// Values supplied from outside the design data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overrides<Q> {
    /// Engine-level override; used verbatim.
    pub external: Option<Q>,

    /// An absolute sizing basis; used when `constant >= 0` and `fraction > 0`.
    pub constant_basis: Option<ConstantBasis<Q>>,

    /// A value supplied for a component outside any zone or air system.
    pub standalone: Option<Q>,
}

impl<Q> Default for Overrides<Q> {
    fn default() -> Self {
        Self {
            external: None,
            constant_basis: None,
            standalone: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantBasis<Q> {
    pub constant: Q,
    pub fraction: f64,
}

impl<Q> ConstantBasis<Q>
where
    Q: Copy + PartialOrd + Zero + Mul<f64, Output = Q>,
{
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.constant >= Q::zero() && self.fraction > 0.0
    }

    #[must_use]
    pub fn value(&self) -> Q {
        self.constant * self.fraction
    }
}

/// Physical technology of a cooling coil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoilTechnology {
    ChilledWater,
    ChilledWaterDetailed,

    /// Ideal loads air system; sized like a chilled-water coil.
    IdealLoads,

    Dx(DxClass),

    /// VRF coil with fluid-temperature control; variable flow per capacity.
    VrfFluidTemperatureControl,

    Other,
}

/// Direct-expansion coil service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DxClass {
    Standard,

    /// Serving 100 % outdoor air.
    DedicatedOutdoorAir,
}

impl CoilTechnology {
    /// Chilled-water coils and ideal loads size from the zone mass flow.
    #[must_use]
    pub fn is_water(self) -> bool {
        matches!(
            self,
            Self::ChilledWater | Self::ChilledWaterDetailed | Self::IdealLoads
        )
    }

    #[must_use]
    pub fn is_dx(self) -> bool {
        matches!(self, Self::Dx(_) | Self::VrfFluidTemperatureControl)
    }

    /// Flow-per-capacity envelope enforced for this technology.
    #[must_use]
    pub fn envelope(self, config: &SizingConfig) -> Option<FlowPerCapacityEnvelope> {
        match self {
            Self::Dx(DxClass::Standard) => Some(config.dx_envelope),
            Self::Dx(DxClass::DedicatedOutdoorAir) => Some(config.dedicated_outdoor_air_dx_envelope),
            _ => None,
        }
    }
}

/// Rated-capacity modifier applied to the peak load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapacityModifier {
    /// No modifier; factor 1.
    None,

    /// Biquadratic of entering wet-bulb and outdoor dry-bulb, both in °C.
    Curve(CurveId),

    /// A factor computed elsewhere.
    Fixed(f64),
}

/// Cooling capacity inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingInputs {
    pub technology: CoilTechnology,

    /// Design volume flow the coil is sized at.
    pub design_flow: VolumeRate,

    /// Air-system main branch flow override.
    pub air_flow_override: Option<VolumeRate>,

    /// Air-system main branch inlet overrides.
    pub inlet_override: StateOverride,

    /// Air-system main branch outlet overrides.
    pub outlet_override: StateOverride,

    pub supply_fan: Option<DesignFan>,
    pub return_fan: Option<DesignFan>,

    /// Shift coil temperatures by the fan temperature rise.
    pub account_for_fan_heat: bool,

    pub modifier: CapacityModifier,

    /// Scale applied to zone-derived capacities.
    pub fraction_of_autosized: f64,
}

impl CoolingInputs {
    /// Inputs with no fans, overrides, or modifier.
    #[must_use]
    pub fn new(technology: CoilTechnology, design_flow: VolumeRate) -> Self {
        Self {
            technology,
            design_flow,
            air_flow_override: None,
            inlet_override: StateOverride::default(),
            outlet_override: StateOverride::default(),
            supply_fan: None,
            return_fan: None,
            account_for_fan_heat: true,
            modifier: CapacityModifier::None,
            fraction_of_autosized: 1.0,
        }
    }
}

/// Heating coil UA inputs at the design point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UaInputs {
    /// Load the coil must deliver at the design point.
    pub design_load: Power,

    pub water_mass_flow: MassRate,
    pub air_mass_flow: MassRate,
    pub air_inlet: AirCondition,

    /// Entering water temperature, normally the plant design exit temperature.
    pub water_inlet_temperature: ThermodynamicTemperature,

    pub plant_loop: Option<PlantLoopId>,

    /// Whether the coil capacity was entered as a nominal value rather than
    /// derived from UA and water flow.
    pub nominal_capacity_input: bool,

    /// Design leaving air state, if known.
    pub design_outlet: Option<AirCondition>,
}
