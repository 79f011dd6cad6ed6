use uom::{
    ConstZero,
    si::{
        f64::{MassDensity, MassRate, Power, ThermodynamicTemperature, VolumeRate},
        ratio::ratio,
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::{curve::CurveEvaluator, psychrometrics::Psychrometrics};

use crate::models::hvac::sizing::core::{
    AirCondition, CapacityDetails, CapacityRequest, DesignAirState, DesignDaySource, DesignKey,
    SizingError, ZoneDesign, ZoneEquipment, ZoneScope, context::Context, diagnostics::Diagnostics,
};

use super::{Derivation, fan_heat, modifier, non_negative, shift_for_fan_heat};

pub(super) fn derive<D, P, C>(
    ctx: &Context<'_, D, P, C>,
    request: &CapacityRequest,
    scope: &ZoneScope,
    diagnostics: &mut Diagnostics,
) -> Result<Derivation, SizingError>
where
    D: DesignDaySource,
    P: Psychrometrics,
    C: CurveEvaluator,
{
    let inputs = &request.inputs;
    let zone = ctx
        .design
        .zone(scope.zone)
        .ok_or_else(|| SizingError::MissingDesignData {
            component: request.component.clone(),
            key: DesignKey::Zone(scope.zone),
        })?;

    if inputs.technology.is_water() {
        return Ok(water_coil(ctx, request, scope, zone).scaled(inputs.fraction_of_autosized));
    }

    let flow = inputs.design_flow;
    if flow < ctx.config.small_air_volume_flow {
        return Ok(Derivation::unset(flow));
    }

    let inlet = coil_inlet(scope, zone, flow, ctx.config.standard_air_density);
    let outlet = zone.cooling_supply.no_warmer_than(inlet);

    let density = match scope.equipment {
        ZoneEquipment::FanCoil { .. } | ZoneEquipment::UnitVentilator => {
            ctx.config.standard_air_density
        }
        _ => ctx.density(inlet),
    };
    let coil_load: Power = density * flow * (ctx.enthalpy(inlet) - ctx.enthalpy(outlet));

    let fan = fan_heat(inputs.supply_fan.as_ref(), flow);
    let peak = non_negative(coil_load) + fan.heat;

    let (inlet, outlet) = if inputs.account_for_fan_heat {
        shift_for_fan_heat(ctx, fan, inlet, outlet, flow)
    } else {
        (inlet, outlet)
    };

    let outdoor = zone
        .weather_dry_bulb_at_peak
        .unwrap_or_else(|| ThermodynamicTemperature::new::<degree_celsius>(0.0));

    let mut details = CapacityDetails {
        design_air: Some(DesignAirState {
            inlet: Some(inlet),
            outlet: Some(outlet),
            volume_flow: flow,
            outdoor_air_fraction: None,
        }),
        fan_heat: fan,
        ..CapacityDetails::default()
    };
    let (capacity, error) = modifier::rated_capacity(
        ctx,
        request,
        peak,
        inlet,
        outdoor,
        &mut details,
        diagnostics,
    );

    Ok(Derivation {
        capacity,
        details,
        error,
    }
    .scaled(inputs.fraction_of_autosized))
}

/// Zone DX inlet state, by how the equipment takes in outdoor air.
///
/// A mixer's share is taken against the coil design flow. A fan coil's
/// outdoor air share is taken against the zone design cooling flow.
fn coil_inlet(
    scope: &ZoneScope,
    zone: &ZoneDesign,
    flow: VolumeRate,
    standard_density: MassDensity,
) -> AirCondition {
    if let Some(mixer) = scope.mixer {
        let fraction = (mixer.volume_flow / flow).get::<ratio>();
        return AirCondition::blend(fraction, mixer.primary, zone.zone_at_peak);
    }
    match scope.equipment {
        ZoneEquipment::Dx if scope.outdoor_air_flow > VolumeRate::ZERO => zone.coil_inlet,
        ZoneEquipment::Dx => zone.return_at_peak,
        ZoneEquipment::FanCoil { .. } => {
            let fraction = if zone.cooling_mass_flow > MassRate::ZERO {
                let outdoor_air: MassRate = standard_density * scope.outdoor_air_flow;
                (outdoor_air / zone.cooling_mass_flow).get::<ratio>().min(1.0)
            } else {
                0.0
            };
            AirCondition::blend(fraction, zone.outdoor_at_peak, zone.return_at_peak)
        }
        _ => zone.coil_inlet,
    }
}

/// Water coils and ideal loads size from the zone design mass flow.
fn water_coil<D, P: Psychrometrics, C>(
    ctx: &Context<'_, D, P, C>,
    request: &CapacityRequest,
    scope: &ZoneScope,
    zone: &ZoneDesign,
) -> Derivation {
    let inputs = &request.inputs;
    match scope.equipment {
        ZoneEquipment::InductionTerminal { design_load } | ZoneEquipment::FanCoil { design_load } => {
            return Derivation::passed_down(design_load, inputs.design_flow, None);
        }
        _ => {}
    }

    let mass_flow = zone.cooling_mass_flow;
    if mass_flow <= MassRate::ZERO {
        return Derivation::unset(inputs.design_flow);
    }

    let inlet = zone.coil_inlet;
    let outlet = zone.cooling_supply.no_warmer_than(inlet);
    let flow: VolumeRate = mass_flow / ctx.config.standard_air_density;
    let fan = fan_heat(inputs.supply_fan.as_ref(), flow);
    let coil_load: Power = mass_flow * (ctx.enthalpy(inlet) - ctx.enthalpy(outlet));

    Derivation {
        capacity: coil_load + fan.heat,
        details: CapacityDetails {
            design_air: Some(DesignAirState {
                inlet: Some(inlet),
                outlet: Some(outlet),
                volume_flow: flow,
                outdoor_air_fraction: None,
            }),
            fan_heat: fan,
            ..CapacityDetails::default()
        },
        error: None,
    }
}
