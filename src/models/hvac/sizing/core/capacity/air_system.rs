use uom::{
    ConstZero,
    si::{
        f64::{Power, VolumeRate},
        ratio::ratio,
    },
};

use crate::support::{curve::CurveEvaluator, psychrometrics::Psychrometrics};

use crate::models::hvac::sizing::core::{
    AirCondition, AirSystemScope, CapacityDetails, CapacityRequest, CoilLocation,
    CoilTechnology, CoolingCapacityMethod, DesignAirState, DesignDaySource, DesignKey, FanHeat,
    SizingError, context::Context, diagnostics::Diagnostics,
};

use super::{Derivation, fan_heat, modifier, non_negative, shift_for_fan_heat};

pub(super) fn derive<D, P, C>(
    ctx: &Context<'_, D, P, C>,
    request: &CapacityRequest,
    scope: &AirSystemScope,
    diagnostics: &mut Diagnostics,
) -> Result<Derivation, SizingError>
where
    D: DesignDaySource,
    P: Psychrometrics,
    C: CurveEvaluator,
{
    let inputs = &request.inputs;
    let system = ctx
        .design
        .air_system(scope.air_loop)
        .ok_or_else(|| SizingError::MissingDesignData {
            component: request.component.clone(),
            key: DesignKey::AirSystem(scope.air_loop),
        })?;

    let fraction = match system.capacity_method {
        CoolingCapacityMethod::CapacityPerFloorArea(capacity) => {
            return Ok(Derivation::passed_down(capacity, inputs.design_flow, None));
        }
        CoolingCapacityMethod::DesignCapacity(capacity) if capacity > Power::ZERO => {
            return Ok(Derivation::passed_down(capacity, inputs.design_flow, None));
        }
        CoolingCapacityMethod::FractionOfAutosized(fraction) => fraction,
        CoolingCapacityMethod::DesignDay | CoolingCapacityMethod::DesignCapacity(_) => 1.0,
    };

    let flow = inputs.design_flow;
    if flow < ctx.config.small_air_volume_flow {
        return Ok(Derivation::unset(flow));
    }
    let mut oa_fraction = outdoor_air_fraction(system.outdoor_air_flow, flow);

    let (inlet, outlet, flow) = match scope.location {
        CoilLocation::OutdoorAirStream => (system.outdoor_at_peak, system.precool, flow),
        CoilLocation::MainBranch => {
            let flow = inputs
                .air_flow_override
                .filter(|flow| *flow > VolumeRate::ZERO)
                .unwrap_or(flow);
            // With precooling the mixed state is rebuilt at the sizing flow,
            // and that outdoor air share carries through to the return fan.
            let mixed = if system.has_outdoor_air_precooling {
                oa_fraction = outdoor_air_fraction(system.outdoor_air_flow, flow);
                AirCondition::blend(oa_fraction, system.precool, system.return_at_peak)
            } else {
                system.mixed_at_peak
            };
            (
                inputs.inlet_override.apply(mixed),
                inputs.outlet_override.apply(system.cooling_supply),
                flow,
            )
        }
    };
    let outlet = outlet.no_warmer_than(inlet);

    let density = if inputs.technology == CoilTechnology::ChilledWater {
        ctx.config.standard_air_density
    } else {
        ctx.density(inlet)
    };
    let coil_load: Power = density * flow * (ctx.enthalpy(inlet) - ctx.enthalpy(outlet));

    // Only the supply fan sits next to the coil, so only it shifts coil temperatures.
    let (fan, (inlet, outlet)) = if inputs.account_for_fan_heat {
        let supply = fan_heat(inputs.supply_fan.as_ref(), flow);
        let returned = fan_heat(inputs.return_fan.as_ref(), flow);
        let fan = FanHeat {
            heat: supply.heat + returned.heat * (1.0 - oa_fraction),
            placement: supply.placement,
        };
        (fan, shift_for_fan_heat(ctx, supply, inlet, outlet, flow))
    } else {
        (FanHeat::none(), (inlet, outlet))
    };
    let peak = non_negative(coil_load) + fan.heat;

    let mut details = CapacityDetails {
        design_air: Some(DesignAirState {
            inlet: Some(inlet),
            outlet: Some(outlet),
            volume_flow: flow,
            outdoor_air_fraction: Some(oa_fraction),
        }),
        fan_heat: fan,
        ..CapacityDetails::default()
    };
    let (capacity, error) = modifier::rated_capacity(
        ctx,
        request,
        peak,
        inlet,
        system.outdoor_at_peak.dry_bulb,
        &mut details,
        diagnostics,
    );

    Ok(Derivation {
        capacity,
        details,
        error,
    }
    .scaled(fraction))
}

/// Outdoor air share of `flow`, clamped to `[0, 1]`.
fn outdoor_air_fraction(outdoor_air_flow: VolumeRate, flow: VolumeRate) -> f64 {
    (outdoor_air_flow / flow).get::<ratio>().clamp(0.0, 1.0)
}
