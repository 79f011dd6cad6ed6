//! Design-day autosizing of HVAC coils.
//!
//! This module provides [`twine_core::Model`] implementations that size
//! cooling coil capacities ([`CoolingCapacitySizer`]) and hot-water heating
//! coil conductances ([`HeatingCoilUaSizer`]) from design-day results.
//! [`SizingEngine`] runs both for a sizing pass, tracking run-level error
//! flags and forwarding every result to a [`SizingReport`] sink.
//!
//! The computational core is in the internal `core` module.

pub(crate) mod core;
mod cooling_capacity;
mod engine;
mod heating_coil_ua;

pub use cooling_capacity::CoolingCapacitySizer;
pub use engine::SizingEngine;
pub use heating_coil_ua::HeatingCoilUaSizer;

pub use self::core::{
    AirCondition, AirLoopId, AirSystemDesign, AirSystemScope, AirTerminalMixer, Bound, Branch,
    CapacityDetails, CapacityModifier, CapacityReport, CapacityRequest, CapacitySizing,
    CoilDesignPoint, CoilHandoff, CoilLocation, CoilModelError, CoilPerformance,
    CoilSelectionLog, CoilTechnology, ComponentId, ConstantBasis, CoolingCapacityMethod,
    CoolingInputs, DedicatedOutdoorAirDesign, DesignAirState, DesignData, DesignDaySource,
    DesignFan, DesignKey, Diagnostic, DoasId, DxClass, FanHeat, FanPlacement,
    FlowPerCapacityEnvelope, GuardOutcome, InheritedScope, OutdoorAirSource,
    OutdoorAirSystemScope, Overrides, Parent, PlantLoopId, PlantSizing, Resolution, RunState,
    Severity, SimpleHeatingCoil, SizingConfig, SizingError, SizingReport, SizingRequest,
    SizingResult, SizingScope, StateOverride, UaDetails, UaInputs, UaReport, UaRequest,
    UaSizing, UaSolveSummary, UaSolverConfig, ZoneDesign, ZoneEquipment, ZoneId, ZoneScope,
    guard, resolve,
};
