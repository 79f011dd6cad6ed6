use uom::si::{
    f64::{
        MassRate, Power, TemperatureInterval, ThermalConductance, ThermodynamicTemperature,
        VolumeRate,
    },
    mass_rate::kilogram_per_second,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_second,
};

use crate::support::{
    curve::CurveSet,
    psychrometrics::{HumidityRatio, StandardPsychrometrics},
};

use super::{
    AirCondition, AirLoopId, AirSystemDesign, CapacityRequest, CoilTechnology, ComponentId,
    Context, CoolingCapacityMethod, CoolingInputs, DedicatedOutdoorAirDesign, DesignData, DoasId,
    DxClass, Overrides, PlantLoopId, PlantSizing, SizingConfig, SizingRequest, SizingScope,
    UaInputs, UaRequest, ZoneDesign, ZoneEquipment, ZoneId, ZoneScope,
};

pub(super) const ZONE: ZoneId = ZoneId(1);
pub(super) const AIR_LOOP: AirLoopId = AirLoopId(1);
pub(super) const DOAS: DoasId = DoasId(1);
pub(super) const HOT_WATER_LOOP: PlantLoopId = PlantLoopId(1);

pub(super) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

pub(super) fn state(celsius_value: f64, w: f64) -> AirCondition {
    AirCondition::new(
        celsius(celsius_value),
        HumidityRatio::new(w).expect("test humidity ratios are non-negative"),
    )
}

pub(super) fn flow(m3_per_s: f64) -> VolumeRate {
    VolumeRate::new::<cubic_meter_per_second>(m3_per_s)
}

pub(super) fn mass_flow(kg_per_s: f64) -> MassRate {
    MassRate::new::<kilogram_per_second>(kg_per_s)
}

pub(super) fn watts(value: f64) -> Power {
    Power::new::<watt>(value)
}

pub(super) fn ua(value: f64) -> ThermalConductance {
    ThermalConductance::new::<watt_per_kelvin>(value)
}

/// A perimeter office zone at its cooling peak.
pub(super) fn zone() -> ZoneDesign {
    ZoneDesign {
        name: "Perimeter Office".to_string(),
        cooling_mass_flow: mass_flow(0.9),
        coil_inlet: state(26.0, 0.0105),
        zone_at_peak: state(24.0, 0.0093),
        return_at_peak: state(24.5, 0.0095),
        outdoor_at_peak: state(33.0, 0.0145),
        weather_dry_bulb_at_peak: Some(celsius(33.0)),
        cooling_supply: state(13.0, 0.0085),
        heating_supply: state(35.0, 0.0060),
    }
}

pub(super) fn air_system() -> AirSystemDesign {
    AirSystemDesign {
        name: "VAV System".to_string(),
        capacity_method: CoolingCapacityMethod::DesignDay,
        outdoor_air_flow: flow(0.3),
        mixed_at_peak: state(26.5, 0.0105),
        return_at_peak: state(24.0, 0.0093),
        outdoor_at_peak: state(33.0, 0.0145),
        precool: state(18.0, 0.0110),
        cooling_supply: state(12.8, 0.0085),
        has_outdoor_air_precooling: false,
    }
}

pub(super) fn doas() -> DedicatedOutdoorAirDesign {
    DedicatedOutdoorAirDesign {
        name: "Ventilation DOAS".to_string(),
        sizing_mass_flow: mass_flow(0.6),
        outdoor: state(33.0, 0.0145),
        precool: state(15.0, 0.0095),
        fan: None,
    }
}

pub(super) fn hot_water_plant() -> PlantSizing {
    PlantSizing {
        name: "Hot Water Loop Sizing".to_string(),
        exit_temperature: celsius(82.0),
        delta_t: TemperatureInterval::new::<delta_kelvin>(11.0),
    }
}

pub(super) fn design_data() -> DesignData {
    DesignData::new()
        .with_zone(ZONE, zone())
        .with_air_system(AIR_LOOP, air_system())
        .with_dedicated_outdoor_air(DOAS, doas())
        .with_plant(HOT_WATER_LOOP, hot_water_plant())
}

/// Collaborators shared by a test.
pub(super) struct Fixture {
    pub(super) design: DesignData,
    pub(super) psych: StandardPsychrometrics,
    pub(super) curves: CurveSet,
    pub(super) config: SizingConfig,
}

impl Fixture {
    pub(super) fn new() -> Self {
        Self {
            design: design_data(),
            psych: StandardPsychrometrics,
            curves: CurveSet::new(),
            config: SizingConfig::default(),
        }
    }

    pub(super) fn context(&self) -> Context<'_, DesignData, StandardPsychrometrics, CurveSet> {
        Context {
            design: &self.design,
            psych: &self.psych,
            curves: &self.curves,
            config: &self.config,
        }
    }
}

pub(super) fn zone_scope(equipment: ZoneEquipment) -> SizingScope {
    SizingScope::Zone(ZoneScope {
        zone: ZONE,
        design_run: true,
        equipment,
        outdoor_air_flow: flow(0.1),
        mixer: None,
    })
}

/// An auto-sized cooling coil request.
pub(super) fn capacity_request(scope: SizingScope, inputs: CoolingInputs) -> CapacityRequest {
    SizingRequest {
        component: ComponentId::new("Coil:Cooling:DX:SingleSpeed", "Main Cooling Coil"),
        original: Power::new::<watt>(0.0),
        auto_sized: true,
        overrides: Overrides::default(),
        scope,
        inputs,
    }
}

pub(super) fn dx_inputs(design_flow: f64) -> CoolingInputs {
    CoolingInputs::new(CoilTechnology::Dx(DxClass::Standard), flow(design_flow))
}

/// A hot-water reheat coil at a typical design point.
pub(super) fn ua_inputs(design_load: f64) -> UaInputs {
    UaInputs {
        design_load: watts(design_load),
        water_mass_flow: mass_flow(0.25),
        air_mass_flow: mass_flow(0.8),
        air_inlet: state(12.0, 0.0080),
        water_inlet_temperature: celsius(82.0),
        plant_loop: Some(HOT_WATER_LOOP),
        nominal_capacity_input: false,
        design_outlet: None,
    }
}

/// An auto-sized heating coil UA request.
pub(super) fn ua_request(scope: SizingScope, inputs: UaInputs) -> UaRequest {
    SizingRequest {
        component: ComponentId::new("Coil:Heating:Water", "Reheat Coil"),
        original: ThermalConductance::new::<watt_per_kelvin>(0.0),
        auto_sized: true,
        overrides: Overrides::default(),
        scope,
        inputs,
    }
}
