//! Where a sizing request gets its design data from.
//!
//! Exactly one [`SizingScope`] applies to a request. Each variant carries
//! only the fields its branch reads.

use uom::si::f64::{Power, VolumeRate};

use super::{AirCondition, AirLoopId, DoasId, ZoneId};

/// The authoritative design-data source for a request.
#[derive(Debug, Clone, PartialEq)]
pub enum SizingScope {
    /// Zone equipment or an air terminal, sized from zone design results.
    Zone(ZoneScope),

    /// A coil on a primary air system.
    AirSystem(AirSystemScope),

    /// A coil sized by its outdoor air system.
    OutdoorAirSystem(OutdoorAirSystemScope),

    /// A child whose parent already computed its design load.
    Inherited(InheritedScope),

    /// Outside any zone or air system.
    Standalone,
}

impl SizingScope {
    /// Whether a design run exists for the scope; `None` for standalone.
    #[must_use]
    pub fn design_run(&self) -> Option<bool> {
        match self {
            Self::Zone(zone) => Some(zone.design_run),
            Self::AirSystem(system) => Some(system.design_run),
            Self::OutdoorAirSystem(oa) => Some(oa.design_run),
            Self::Inherited(inherited) => Some(inherited.design_run),
            Self::Standalone => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneScope {
    pub zone: ZoneId,
    pub design_run: bool,
    pub equipment: ZoneEquipment,

    /// Outdoor air flow drawn by the equipment.
    pub outdoor_air_flow: VolumeRate,

    /// Air terminal mixer feeding the equipment inlet, if any.
    pub mixer: Option<AirTerminalMixer>,
}

/// The kind of zone equipment that owns the coil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoneEquipment {
    /// Packaged direct-expansion equipment.
    Dx,

    /// Four-pipe fan coil; its parent computes a design cooling load.
    FanCoil { design_load: Power },

    UnitVentilator,

    /// Induction terminal unit with a terminal design cooling load.
    InductionTerminal { design_load: Power },

    General,
}

/// Air terminal mixer supplying primary air to zone equipment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirTerminalMixer {
    pub volume_flow: VolumeRate,
    pub primary: AirCondition,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirSystemScope {
    pub air_loop: AirLoopId,
    pub design_run: bool,
    pub location: CoilLocation,
}

/// Coil position on a primary air system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoilLocation {
    /// After the outdoor air mixer.
    MainBranch,

    /// In the outdoor air stream, before mixing.
    OutdoorAirStream,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutdoorAirSystemScope {
    pub air_loop: AirLoopId,
    pub design_run: bool,
    pub source: OutdoorAirSource,
}

/// How an outdoor air system supplies its coil's design load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutdoorAirSource {
    /// The outdoor air system computed the load.
    ParentLoad(Power),

    /// A dedicated outdoor air system with its own sizing flow.
    Dedicated(DoasId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InheritedScope {
    pub design_run: bool,
    pub parent: Parent,

    /// Design load the parent computed for this child.
    pub design_load: Power,

    /// Design states produced by the parent's own sizing call, if any.
    ///
    /// Present when a zone parent computed the coil capacity, in which case
    /// the child's fraction of autosized capacity applies. Without it the
    /// load is a design size passed down unscaled.
    pub handoff: Option<CoilHandoff>,
}

/// The component that sized on behalf of the child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parent {
    ZoneEquipment(ZoneId),
    UnitarySystem(AirLoopId),
}

/// Design state produced by one sizing call for reuse by a related one.
///
/// Returned in a capacity result and passed into an [`InheritedScope`] of
/// a later request for the same coil and fan assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilHandoff {
    pub inlet: AirCondition,
    pub outlet: AirCondition,
    pub volume_flow: VolumeRate,
    pub fan_heat: Power,
    pub modifier_factor: f64,
}
