use uom::si::{
    f64::{Power, VolumeRate},
    power::watt,
    volume_rate::cubic_meter_per_second,
};

use crate::support::psychrometrics::Psychrometrics;

use crate::models::hvac::sizing::core::{
    CapacityDetails, CapacityRequest, DesignAirState, DesignDaySource, DesignKey, DoasId,
    FanPlacement, SizingError, context::Context,
};

use super::{Derivation, fan_heat, shift_for_fan_heat};

/// Capacity of a coil in a dedicated outdoor air system.
///
/// DX coils take a fixed flow per capacity. Other coils cool the outdoor
/// sizing state, warmed by a blow-through fan, down to the precool state.
pub(super) fn derive<D, P, C>(
    ctx: &Context<'_, D, P, C>,
    request: &CapacityRequest,
    id: DoasId,
) -> Result<Derivation, SizingError>
where
    D: DesignDaySource,
    P: Psychrometrics,
{
    let doas = ctx
        .design
        .dedicated_outdoor_air(id)
        .ok_or_else(|| SizingError::MissingDesignData {
            component: request.component.clone(),
            key: DesignKey::DedicatedOutdoorAir(id),
        })?;

    let mass_flow = doas.sizing_mass_flow;
    let flow: VolumeRate = mass_flow / ctx.config.standard_air_density;

    if request.inputs.technology.is_dx() {
        let capacity = flow.get::<cubic_meter_per_second>()
            / ctx.config.dedicated_outdoor_air_dx_flow_per_capacity;
        let mut derivation = Derivation::unset(flow);
        derivation.capacity = Power::new::<watt>(capacity);
        return Ok(derivation);
    }

    let fan = fan_heat(doas.fan.as_ref(), flow);
    let inlet = if fan.placement == Some(FanPlacement::BlowThrough) {
        shift_for_fan_heat(ctx, fan, doas.outdoor, doas.outdoor, flow).0
    } else {
        doas.outdoor
    };
    let outlet = doas.precool.no_warmer_than(inlet);
    let capacity: Power = mass_flow * (ctx.enthalpy(inlet) - ctx.enthalpy(outlet));

    Ok(Derivation {
        capacity,
        details: CapacityDetails {
            design_air: Some(DesignAirState {
                inlet: Some(inlet),
                outlet: Some(outlet),
                volume_flow: flow,
                outdoor_air_fraction: Some(1.0),
            }),
            fan_heat: fan,
            ..CapacityDetails::default()
        },
        error: None,
    })
}
