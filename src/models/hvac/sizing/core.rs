//! Autosizing resolution for HVAC coils.
//!
//! A sizing call takes a [`SizingRequest`] and returns a [`SizingResult`]
//! holding a best-effort value, the [`Branch`] that produced it, an optional
//! [`SizingError`], and any diagnostics. The value comes from the first
//! applicable source in a fixed precedence (see [`resolve`]). Derived values
//! read design-day results through [`DesignDaySource`], moist-air properties
//! through [`Psychrometrics`](crate::support::psychrometrics::Psychrometrics),
//! and performance curves through
//! [`CurveEvaluator`](crate::support::curve::CurveEvaluator).

mod air;
mod capacity;
mod config;
mod context;
mod design_data;
mod diagnostics;
mod error;
mod fan;
pub mod guard;
mod ids;
mod report;
mod request;
mod resolution;
mod result;
mod scope;
mod ua;

#[cfg(test)]
mod test_support;

pub use air::{AirCondition, DesignAirState, StateOverride};
pub use config::{FlowPerCapacityEnvelope, SizingConfig, UaSolverConfig};
pub use design_data::{
    AirSystemDesign, CoolingCapacityMethod, DedicatedOutdoorAirDesign, DesignData,
    DesignDaySource, PlantSizing, ZoneDesign,
};
pub use diagnostics::{Diagnostic, Severity};
pub use error::{CoilModelError, DesignKey, SizingError};
pub use fan::{DesignFan, FanHeat, FanPlacement};
pub use guard::{Bound, GuardOutcome};
pub use ids::{AirLoopId, ComponentId, DoasId, PlantLoopId, ZoneId};
pub use report::{CapacityReport, CoilSelectionLog, SizingReport, UaReport};
pub use request::{
    CapacityModifier, CapacityRequest, CoilTechnology, ConstantBasis, CoolingInputs, DxClass,
    Overrides, SizingRequest, UaInputs, UaRequest,
};
pub use resolution::{Branch, Resolution, resolve};
pub use result::{
    CapacityDetails, CapacitySizing, RunState, SizingResult, UaDetails, UaSizing, UaSolveSummary,
};
pub use scope::{
    AirSystemScope, AirTerminalMixer, CoilHandoff, CoilLocation, InheritedScope,
    OutdoorAirSource, OutdoorAirSystemScope, Parent, SizingScope, ZoneEquipment, ZoneScope,
};
pub use ua::{CoilDesignPoint, CoilPerformance, SimpleHeatingCoil};

pub(crate) use capacity::size as size_capacity;
pub(crate) use context::Context;
pub(crate) use ua::size as size_ua;
