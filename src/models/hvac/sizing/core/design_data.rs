//! Design-day results consumed by the sizers.
//!
//! A host simulation runs the zone and system design days before sizing and
//! exposes the peak conditions through [`DesignDaySource`]. [`DesignData`]
//! is an in-memory implementation.

use std::collections::HashMap;

use uom::si::f64::{MassRate, Power, TemperatureInterval, ThermodynamicTemperature, VolumeRate};

use super::{AirCondition, AirLoopId, DesignFan, DoasId, PlantLoopId, ZoneId};

/// Zone design-day results at the cooling peak.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDesign {
    pub name: String,

    /// Design cooling supply mass flow.
    pub cooling_mass_flow: MassRate,

    /// Design cooling coil inlet state.
    pub coil_inlet: AirCondition,

    /// Zone air state at the cooling peak.
    pub zone_at_peak: AirCondition,

    /// Return air state at the cooling peak.
    pub return_at_peak: AirCondition,

    /// Outdoor air state at the cooling peak.
    pub outdoor_at_peak: AirCondition,

    /// Outdoor dry-bulb from the design-day weather at the peak time step,
    /// if a design day drove the peak.
    pub weather_dry_bulb_at_peak: Option<ThermodynamicTemperature>,

    /// Design cooling supply air state.
    pub cooling_supply: AirCondition,

    /// Design heating supply air state.
    pub heating_supply: AirCondition,
}

/// How a primary air system's cooling capacity is specified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingCapacityMethod {
    /// Derived from the design-day air states.
    DesignDay,

    /// Floor area times a capacity per area, already totaled.
    CapacityPerFloorArea(Power),

    /// A user capacity. Non-positive values fall back to the design day.
    DesignCapacity(Power),

    /// The design-day capacity scaled by a fraction.
    FractionOfAutosized(f64),
}

/// Primary air system design-day results at the cooling peak.
#[derive(Debug, Clone, PartialEq)]
pub struct AirSystemDesign {
    pub name: String,
    pub capacity_method: CoolingCapacityMethod,

    /// Design outdoor air volume flow.
    pub outdoor_air_flow: VolumeRate,

    pub mixed_at_peak: AirCondition,
    pub return_at_peak: AirCondition,
    pub outdoor_at_peak: AirCondition,

    /// Outdoor air state leaving the outdoor-air precooling coils.
    pub precool: AirCondition,

    /// Design cooling supply air state.
    pub cooling_supply: AirCondition,

    /// Whether the outdoor air stream has its own cooling coils.
    pub has_outdoor_air_precooling: bool,
}

/// Dedicated outdoor air system sizing inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct DedicatedOutdoorAirDesign {
    pub name: String,
    pub sizing_mass_flow: MassRate,
    pub outdoor: AirCondition,
    pub precool: AirCondition,
    pub fan: Option<DesignFan>,
}

/// Plant loop sizing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantSizing {
    pub name: String,
    pub exit_temperature: ThermodynamicTemperature,
    pub delta_t: TemperatureInterval,
}

/// Lookup of design-day results by identity.
pub trait DesignDaySource {
    fn zone(&self, id: ZoneId) -> Option<&ZoneDesign>;
    fn air_system(&self, id: AirLoopId) -> Option<&AirSystemDesign>;
    fn dedicated_outdoor_air(&self, id: DoasId) -> Option<&DedicatedOutdoorAirDesign>;
    fn plant(&self, id: PlantLoopId) -> Option<&PlantSizing>;
}

impl<T: DesignDaySource + ?Sized> DesignDaySource for &T {
    fn zone(&self, id: ZoneId) -> Option<&ZoneDesign> {
        (**self).zone(id)
    }

    fn air_system(&self, id: AirLoopId) -> Option<&AirSystemDesign> {
        (**self).air_system(id)
    }

    fn dedicated_outdoor_air(&self, id: DoasId) -> Option<&DedicatedOutdoorAirDesign> {
        (**self).dedicated_outdoor_air(id)
    }

    fn plant(&self, id: PlantLoopId) -> Option<&PlantSizing> {
        (**self).plant(id)
    }
}

/// In-memory design-day results.
#[derive(Debug, Clone, Default)]
pub struct DesignData {
    pub zones: HashMap<ZoneId, ZoneDesign>,
    pub air_systems: HashMap<AirLoopId, AirSystemDesign>,
    pub dedicated_outdoor_air: HashMap<DoasId, DedicatedOutdoorAirDesign>,
    pub plants: HashMap<PlantLoopId, PlantSizing>,
}

impl DesignData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_zone(mut self, id: ZoneId, zone: ZoneDesign) -> Self {
        self.zones.insert(id, zone);
        self
    }

    #[must_use]
    pub fn with_air_system(mut self, id: AirLoopId, system: AirSystemDesign) -> Self {
        self.air_systems.insert(id, system);
        self
    }

    #[must_use]
    pub fn with_dedicated_outdoor_air(mut self, id: DoasId, doas: DedicatedOutdoorAirDesign) -> Self {
        self.dedicated_outdoor_air.insert(id, doas);
        self
    }

    #[must_use]
    pub fn with_plant(mut self, id: PlantLoopId, plant: PlantSizing) -> Self {
        self.plants.insert(id, plant);
        self
    }
}

impl DesignDaySource for DesignData {
    fn zone(&self, id: ZoneId) -> Option<&ZoneDesign> {
        self.zones.get(&id)
    }

    fn air_system(&self, id: AirLoopId) -> Option<&AirSystemDesign> {
        self.air_systems.get(&id)
    }

    fn dedicated_outdoor_air(&self, id: DoasId) -> Option<&DedicatedOutdoorAirDesign> {
        self.dedicated_outdoor_air.get(&id)
    }

    fn plant(&self, id: PlantLoopId) -> Option<&PlantSizing> {
        self.plants.get(&id)
    }
}
