//! Cooling capacity sizing.
//!
//! A derived capacity is the peak coil load at the design air states, plus
//! fan heat, divided by the rated-capacity modifier at the coil entering
//! wet-bulb and outdoor dry-bulb. Each scope picks its own states:
//!
//! - zone equipment uses zone design results ([`zone`])
//! - primary air system coils use system design results ([`air_system`])
//! - dedicated outdoor air coils use the DOAS sizing flow ([`outdoor_air`])
//! - inherited coils take the parent's design load

mod air_system;
mod modifier;
mod outdoor_air;
mod zone;

use uom::{
    ConstZero,
    si::{
        f64::{Power, TemperatureInterval, ThermalConductance, VolumeRate},
        power::watt,
        thermodynamic_temperature::degree_celsius,
        volume_rate::cubic_meter_per_second,
    },
};

use crate::support::{curve::CurveEvaluator, psychrometrics::Psychrometrics};

use super::{
    AirCondition, Branch, CapacityDetails, CapacityRequest, CapacitySizing, CoilHandoff,
    DesignAirState, DesignDaySource, DesignFan, Diagnostic, FanHeat, InheritedScope,
    OutdoorAirSource, Parent, SizingError, SizingScope,
    context::Context,
    diagnostics::Diagnostics,
    guard::{self, Bound},
    resolution::{direct_value, resolve},
};

/// A capacity derived from design data, before scaling and bounds.
#[derive(Debug)]
struct Derivation {
    capacity: Power,
    details: CapacityDetails,
    error: Option<SizingError>,
}

impl Derivation {
    /// Zero capacity with no derived air states.
    fn unset(volume_flow: VolumeRate) -> Self {
        Self {
            capacity: Power::ZERO,
            details: CapacityDetails {
                design_air: Some(DesignAirState::unset(volume_flow)),
                ..CapacityDetails::default()
            },
            error: None,
        }
    }

    fn passed_down(load: Power, volume_flow: VolumeRate, handoff: Option<CoilHandoff>) -> Self {
        let mut details = CapacityDetails {
            design_air: Some(DesignAirState::unset(volume_flow)),
            ..CapacityDetails::default()
        };
        if let Some(handoff) = handoff {
            details.design_air = Some(DesignAirState {
                inlet: Some(handoff.inlet),
                outlet: Some(handoff.outlet),
                volume_flow: handoff.volume_flow,
                outdoor_air_fraction: None,
            });
            details.fan_heat = FanHeat {
                heat: handoff.fan_heat,
                placement: None,
            };
            details.modifier_factor = handoff.modifier_factor;
        }
        Self {
            capacity: load,
            details,
            error: None,
        }
    }

    fn scaled(mut self, fraction: f64) -> Self {
        self.capacity = self.capacity * fraction;
        self
    }
}

/// Sizes a cooling capacity.
pub(crate) fn size<D, P, C>(ctx: &Context<'_, D, P, C>, request: &CapacityRequest) -> CapacitySizing
where
    D: DesignDaySource,
    P: Psychrometrics,
    C: CurveEvaluator,
{
    let branch = resolve(request);
    let mut diagnostics = Diagnostics::default();

    if let Some(value) = direct_value(request, branch) {
        return CapacitySizing {
            value,
            autosized: None,
            branch,
            error: None,
            details: CapacityDetails::default(),
            diagnostics: diagnostics.into_vec(),
        };
    }

    if branch == Branch::Unresolved {
        return unresolved(request, branch, diagnostics);
    }

    let derivation = match derive(ctx, request, &mut diagnostics) {
        Ok(derivation) => derivation,
        Err(error) => {
            diagnostics.push(
                Diagnostic::severe(format!("{}: cooling capacity sizing failed", request.component))
                    .line(error.to_string()),
            );
            return CapacitySizing {
                value: if request.auto_sized {
                    Power::ZERO
                } else {
                    request.original
                },
                autosized: None,
                branch,
                error: Some(error),
                details: CapacityDetails::default(),
                diagnostics: diagnostics.into_vec(),
            };
        }
    };

    let Derivation {
        capacity,
        mut details,
        error,
    } = derivation;
    let mut capacity = non_negative(capacity);

    if ctx.config.verbose && capacity <= Power::ZERO {
        diagnostics.push(zero_capacity_warning(request, branch, capacity, &details));
    }

    if request.auto_sized {
        if let Some(envelope) = request.inputs.technology.envelope(ctx.config) {
            let flow = details
                .design_air
                .map_or(request.inputs.design_flow, |air| air.volume_flow);
            let outcome = guard::apply(flow, capacity, &envelope);
            if let (Some(bound), true) = (outcome.bound, ctx.config.verbose) {
                diagnostics.push(bound_warning(request, bound, flow, capacity, &envelope, outcome.capacity));
            }
            capacity = outcome.capacity;
            details.guard = Some(outcome);
        }
    }

    if matches!(branch, Branch::ZoneDesign | Branch::AirSystemDesign) {
        details.handoff = handoff(&details);
    }

    CapacitySizing {
        value: if request.auto_sized {
            capacity
        } else {
            request.original
        },
        autosized: Some(capacity),
        branch,
        error,
        details,
        diagnostics: diagnostics.into_vec(),
    }
}

fn derive<D, P, C>(
    ctx: &Context<'_, D, P, C>,
    request: &CapacityRequest,
    diagnostics: &mut Diagnostics,
) -> Result<Derivation, SizingError>
where
    D: DesignDaySource,
    P: Psychrometrics,
    C: CurveEvaluator,
{
    let inputs = &request.inputs;
    match &request.scope {
        SizingScope::Zone(scope) => zone::derive(ctx, request, scope, diagnostics),
        SizingScope::AirSystem(scope) => air_system::derive(ctx, request, scope, diagnostics),
        SizingScope::OutdoorAirSystem(scope) => match scope.source {
            OutdoorAirSource::ParentLoad(load) => {
                Ok(Derivation::passed_down(load, inputs.design_flow, None))
            }
            OutdoorAirSource::Dedicated(id) => outdoor_air::derive(ctx, request, id),
        },
        SizingScope::Inherited(InheritedScope {
            parent,
            design_load,
            handoff,
            ..
        }) => {
            let derivation = Derivation::passed_down(*design_load, inputs.design_flow, *handoff);
            // A zone parent that sized the coil capacity itself hands off its
            // states; only that capacity takes the child's fraction.
            Ok(match (parent, handoff) {
                (Parent::ZoneEquipment(_), Some(_)) => {
                    derivation.scaled(inputs.fraction_of_autosized)
                }
                _ => derivation,
            })
        }
        SizingScope::Standalone => Err(SizingError::Unresolved {
            component: request.component.clone(),
        }),
    }
}

fn unresolved(
    request: &CapacityRequest,
    branch: Branch,
    mut diagnostics: Diagnostics,
) -> CapacitySizing {
    let error = SizingError::Unresolved {
        component: request.component.clone(),
    };
    diagnostics.push(
        Diagnostic::severe(format!(
            "{}, Developer Error: Component sizing incomplete.",
            request.component
        ))
        .line("SizingString = Design Size Nominal Total Capacity [W], SizingResult = 0.0"),
    );
    CapacitySizing {
        value: Power::ZERO,
        autosized: None,
        branch,
        error: Some(error),
        details: CapacityDetails::default(),
        diagnostics: diagnostics.into_vec(),
    }
}

/// Design state a related sizer can reuse later in the pass.
fn handoff(details: &CapacityDetails) -> Option<CoilHandoff> {
    let air = details.design_air?;
    Some(CoilHandoff {
        inlet: air.inlet?,
        outlet: air.outlet?,
        volume_flow: air.volume_flow,
        fan_heat: details.fan_heat.heat,
        modifier_factor: details.modifier_factor,
    })
}

/// Heat from an optional fan at `flow`.
fn fan_heat(fan: Option<&DesignFan>, flow: VolumeRate) -> FanHeat {
    fan.map_or_else(FanHeat::none, |fan| FanHeat {
        heat: fan.heat_gain(flow),
        placement: Some(fan.placement()),
    })
}

/// Moves coil temperatures by the fan temperature rise.
///
/// A blow-through fan warms the coil inlet; a draw-through fan warms the
/// air after the coil, so the coil must leave it cooler.
fn shift_for_fan_heat<D, P: Psychrometrics, C>(
    ctx: &Context<'_, D, P, C>,
    fan: FanHeat,
    inlet: AirCondition,
    outlet: AirCondition,
    flow: VolumeRate,
) -> (AirCondition, AirCondition) {
    let Some(placement) = fan.placement else {
        return (inlet, outlet);
    };
    if flow <= VolumeRate::ZERO {
        return (inlet, outlet);
    }

    let conductance: ThermalConductance =
        ctx.psych.specific_heat(inlet.humidity_ratio) * ctx.config.standard_air_density * flow;
    let rise: TemperatureInterval = fan.heat / conductance;

    match placement {
        super::FanPlacement::BlowThrough => (
            AirCondition {
                dry_bulb: inlet.dry_bulb + rise,
                ..inlet
            },
            outlet,
        ),
        super::FanPlacement::DrawThrough => (
            inlet,
            AirCondition {
                dry_bulb: outlet.dry_bulb - rise,
                ..outlet
            },
        ),
    }
}

fn non_negative(power: Power) -> Power {
    if power > Power::ZERO {
        power
    } else {
        Power::ZERO
    }
}

fn zero_capacity_warning(
    request: &CapacityRequest,
    branch: Branch,
    capacity: Power,
    details: &CapacityDetails,
) -> Diagnostic {
    let mut diagnostic = Diagnostic::warning(format!(
        "Potential issue with equipment sizing for {}",
        request.component
    ))
    .line(format!(
        "...Rated Total Cooling Capacity = {:.2} [W]",
        capacity.get::<watt>()
    ));

    let states = details
        .design_air
        .and_then(|air| Some((air, air.inlet?, air.outlet?)));

    if branch == Branch::Inherited {
        diagnostic = diagnostic.line(format!(
            "...Capacity passed by parent object to size child component = {:.2} [W]",
            capacity.get::<watt>()
        ));
    } else if let Some((air, inlet, outlet)) = states {
        diagnostic = diagnostic.line(format!(
            "...Air flow rate used for sizing = {:.5} [m3/s]",
            air.volume_flow.get::<cubic_meter_per_second>()
        ));
        if let Some(fraction) = air.outdoor_air_fraction {
            diagnostic =
                diagnostic.line(format!("...Outdoor air fraction used for sizing = {fraction:.2}"));
        }
        diagnostic = diagnostic
            .line(format!(
                "...Coil inlet air temperature used for sizing = {:.2} [C]",
                inlet.dry_bulb.get::<degree_celsius>()
            ))
            .line(format!(
                "...Coil outlet air temperature used for sizing = {:.2} [C]",
                outlet.dry_bulb.get::<degree_celsius>()
            ));
    } else {
        diagnostic = diagnostic.line("...Capacity used to size child component set to 0 [W]");
    }
    diagnostic
}

fn bound_warning(
    request: &CapacityRequest,
    bound: Bound,
    flow: VolumeRate,
    requested: Power,
    envelope: &super::FlowPerCapacityEnvelope,
    adjusted: Power,
) -> Diagnostic {
    let (which, limit) = match bound {
        Bound::Minimum => ("minimum", envelope.min),
        Bound::Maximum => ("maximum", envelope.max),
    };
    let flow = flow.get::<cubic_meter_per_second>();
    let requested = requested.get::<watt>();
    Diagnostic::warning(request.component.to_string())
        .line(format!(
            "...Design Size Nominal Total Capacity will be limited by the {which} rated volume flow per rated total capacity ratio."
        ))
        .line(format!("...DX coil volume flow rate (m3/s) = {flow:.6}"))
        .line(format!("...Requested capacity (W) = {requested:.3}"))
        .line(format!(
            "...Requested flow/capacity ratio (m3/s/W) = {:.3e}",
            flow / requested
        ))
        .line(format!("...{which} flow/capacity ratio (m3/s/W) = {limit:.3e}"))
        .line(format!(
            "...Adjusted capacity (W) = {:.3}",
            adjusted.get::<watt>()
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{available_energy::joule_per_kilogram, f64::Pressure, pressure::pascal};

    use crate::{
        models::hvac::sizing::core::{
            AirSystemScope, CapacityModifier, CoilLocation, CoilTechnology, CoolingCapacityMethod,
            CoolingInputs, DxClass, FanPlacement, OutdoorAirSystemScope, Severity, ZoneEquipment,
            ZoneId, ZoneScope,
            test_support::*,
        },
        support::{
            curve::Biquadratic,
            psychrometrics::{Psychrometrics, StandardPsychrometrics},
        },
    };

    fn enthalpy_drop(inlet: AirCondition, outlet: AirCondition) -> f64 {
        let psych = StandardPsychrometrics;
        (psych.enthalpy(inlet.dry_bulb, inlet.humidity_ratio)
            - psych.enthalpy(outlet.dry_bulb, outlet.humidity_ratio))
        .get::<joule_per_kilogram>()
    }

    fn local_density(state: AirCondition) -> f64 {
        StandardPsychrometrics
            .density(
                Pressure::new::<pascal>(101_325.0),
                state.dry_bulb,
                state.humidity_ratio,
            )
            .value
    }

    /// Zone DX capacity at 0.5 m³/s with no fans or modifier.
    fn zone_dx_base() -> f64 {
        let zone = zone();
        let inlet = zone.coil_inlet;
        local_density(inlet) * 0.5 * enthalpy_drop(inlet, zone.cooling_supply)
    }

    fn inherited(design_load: f64) -> SizingScope {
        SizingScope::Inherited(InheritedScope {
            design_run: true,
            parent: Parent::ZoneEquipment(ZONE),
            design_load: watts(design_load),
            handoff: None,
        })
    }

    #[test]
    fn user_value_passes_through_without_design_run() {
        let fixture = Fixture::new();
        let mut request = capacity_request(
            SizingScope::Zone(ZoneScope {
                zone: ZONE,
                design_run: false,
                equipment: ZoneEquipment::Dx,
                outdoor_air_flow: flow(0.1),
                mixer: None,
            }),
            dx_inputs(0.5),
        );
        request.auto_sized = false;
        request.original = watts(500.0);

        let result = size(&fixture.context(), &request);

        assert_eq!(result.branch, Branch::UserValue);
        assert_relative_eq!(result.value.get::<watt>(), 500.0);
        assert!(result.autosized.is_none());
        assert!(result.details.design_air.is_none());
        assert!(result.is_ok());
    }

    #[test]
    fn inherited_load_skips_the_modifier_curve() {
        let mut fixture = Fixture::new();
        let curve = fixture.curves.insert(Biquadratic::new([0.5, 0.0, 0.0, 0.0, 0.0, 0.0]));
        let mut inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(0.5));
        inputs.modifier = CapacityModifier::Curve(curve);

        let result = size(&fixture.context(), &capacity_request(inherited(1200.0), inputs));

        assert_eq!(result.branch, Branch::Inherited);
        assert_relative_eq!(result.value.get::<watt>(), 1200.0);
        assert!(!result.details.modifier_evaluated);
        assert!(result.details.entering_wet_bulb.is_none());
    }

    #[test]
    fn small_flow_sizes_to_zero_with_unset_states() {
        let fixture = Fixture::new();
        let request = capacity_request(zone_scope(ZoneEquipment::Dx), dx_inputs(0.0005));

        let result = size(&fixture.context(), &request);

        assert_eq!(result.branch, Branch::ZoneDesign);
        assert_relative_eq!(result.value.get::<watt>(), 0.0);
        let air = result.details.design_air.expect("design air is reported");
        assert!(air.outlet.is_none());
        assert!(air.inlet.is_none());
        assert!(result.details.handoff.is_none());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn verbose_zero_capacity_is_reported() {
        let mut fixture = Fixture::new();
        fixture.config.verbose = true;
        let request = capacity_request(zone_scope(ZoneEquipment::Dx), dx_inputs(0.0005));

        let result = size(&fixture.context(), &request);

        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].severity, Severity::Warning);
        assert!(result.diagnostics[0].mentions("Potential issue with equipment sizing"));
    }

    #[test]
    fn zone_dx_capacity_is_density_flow_and_enthalpy_drop() {
        let fixture = Fixture::new();
        let request = capacity_request(zone_scope(ZoneEquipment::Dx), dx_inputs(0.5));

        let result = size(&fixture.context(), &request);

        assert_eq!(result.branch, Branch::ZoneDesign);
        assert_relative_eq!(result.value.get::<watt>(), zone_dx_base(), max_relative = 1e-9);
        assert_relative_eq!(result.details.min_ratio(), 1.0);
        assert_relative_eq!(result.details.max_ratio(), 1.0);

        let handoff = result.details.handoff.expect("zone derivation hands off");
        assert_eq!(handoff.inlet, zone().coil_inlet);
        assert_relative_eq!(handoff.modifier_factor, 1.0);
    }

    #[test]
    fn zone_dx_without_outdoor_air_uses_return_condition() {
        let fixture = Fixture::new();
        let scope = SizingScope::Zone(ZoneScope {
            zone: ZONE,
            design_run: true,
            equipment: ZoneEquipment::Dx,
            outdoor_air_flow: flow(0.0),
            mixer: None,
        });

        let result = size(&fixture.context(), &capacity_request(scope, dx_inputs(0.5)));

        let air = result.details.design_air.expect("design air is reported");
        assert_eq!(air.inlet, Some(zone().return_at_peak));
    }

    #[test]
    fn blow_through_fan_adds_heat_and_warms_inlet() {
        let fixture = Fixture::new();
        let mut inputs = dx_inputs(0.5);
        let fan = DesignFan::new(
            FanPlacement::BlowThrough,
            Pressure::new::<pascal>(600.0),
            0.6,
            0.9,
            1.0,
        )
        .expect("valid fan");
        inputs.supply_fan = Some(fan);

        let result = size(
            &fixture.context(),
            &capacity_request(zone_scope(ZoneEquipment::Dx), inputs),
        );

        assert_relative_eq!(
            result.value.get::<watt>(),
            zone_dx_base() + 500.0,
            max_relative = 1e-9
        );
        let inlet = result
            .details
            .design_air
            .and_then(|air| air.inlet)
            .expect("inlet is derived");
        assert!(inlet.dry_bulb > zone().coil_inlet.dry_bulb);
        assert_relative_eq!(result.details.fan_heat.heat.get::<watt>(), 500.0, max_relative = 1e-12);
    }

    #[test]
    fn draw_through_fan_cools_outlet_only_when_accounted() {
        let fixture = Fixture::new();
        let fan = DesignFan::new(
            FanPlacement::DrawThrough,
            Pressure::new::<pascal>(600.0),
            0.6,
            0.9,
            1.0,
        )
        .expect("valid fan");

        let mut inputs = dx_inputs(0.5);
        inputs.supply_fan = Some(fan);
        let shifted = size(
            &fixture.context(),
            &capacity_request(zone_scope(ZoneEquipment::Dx), inputs),
        );

        inputs.account_for_fan_heat = false;
        let unshifted = size(
            &fixture.context(),
            &capacity_request(zone_scope(ZoneEquipment::Dx), inputs),
        );

        let outlet = |result: &CapacitySizing| {
            result
                .details
                .design_air
                .and_then(|air| air.outlet)
                .expect("outlet is derived")
        };
        assert!(outlet(&shifted).dry_bulb < outlet(&unshifted).dry_bulb);
        assert_relative_eq!(
            shifted.value.get::<watt>(),
            unshifted.value.get::<watt>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn curve_modifier_divides_the_peak_load() {
        let mut fixture = Fixture::new();
        let curve = fixture.curves.insert(Biquadratic::new([0.9, 0.0, 0.0, 0.0, 0.0, 0.0]));
        let mut inputs = dx_inputs(0.5);
        inputs.modifier = CapacityModifier::Curve(curve);

        let result = size(
            &fixture.context(),
            &capacity_request(zone_scope(ZoneEquipment::Dx), inputs),
        );

        assert!(result.details.modifier_evaluated);
        assert!(result.details.entering_wet_bulb.is_some());
        assert_relative_eq!(result.details.modifier_factor, 0.9);
        assert_relative_eq!(
            result.value.get::<watt>(),
            zone_dx_base() / 0.9,
            max_relative = 1e-9
        );
    }

    #[test]
    fn missing_curve_falls_back_to_peak_load() {
        let fixture = Fixture::new();
        let mut inputs = dx_inputs(0.5);
        inputs.modifier = CapacityModifier::Curve(crate::support::curve::CurveId::new(7));

        let result = size(
            &fixture.context(),
            &capacity_request(zone_scope(ZoneEquipment::Dx), inputs),
        );

        assert!(!result.details.modifier_evaluated);
        assert_relative_eq!(result.value.get::<watt>(), zone_dx_base(), max_relative = 1e-9);
        assert!(result.diagnostics.iter().any(|d| d.mentions("not available")));
    }

    #[test]
    fn undersized_flow_per_capacity_is_corrected_to_minimum() {
        let fixture = Fixture::new();
        let mut inputs = dx_inputs(0.5);
        inputs.modifier = CapacityModifier::Fixed(0.25);

        let result = size(
            &fixture.context(),
            &capacity_request(zone_scope(ZoneEquipment::Dx), inputs),
        );

        let requested = zone_dx_base() / 0.25;
        let corrected = 0.5 / fixture.config.dx_envelope.min;
        assert!(corrected < requested);
        assert_relative_eq!(result.value.get::<watt>(), corrected, max_relative = 1e-12);
        assert_relative_eq!(result.details.min_ratio(), corrected / requested, max_relative = 1e-9);
        assert_eq!(
            result.details.guard.and_then(|guard| guard.bound),
            Some(Bound::Minimum)
        );
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn verbose_reports_the_plausibility_correction() {
        let mut fixture = Fixture::new();
        fixture.config.verbose = true;
        let mut inputs = dx_inputs(0.5);
        inputs.modifier = CapacityModifier::Fixed(0.25);

        let result = size(
            &fixture.context(),
            &capacity_request(zone_scope(ZoneEquipment::Dx), inputs),
        );

        assert_eq!(result.diagnostics.len(), 1);
        let diagnostic = &result.diagnostics[0];
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert!(diagnostic.mentions("Main Cooling Coil"));
        assert!(diagnostic.mentions("limited by the minimum rated volume flow"));
        assert!(diagnostic.mentions("DX coil volume flow rate (m3/s) = 0.500000"));
    }

    #[test]
    fn user_sized_coil_keeps_its_value_and_reports_design_size() {
        let fixture = Fixture::new();
        let mut request = capacity_request(zone_scope(ZoneEquipment::Dx), dx_inputs(0.5));
        request.auto_sized = false;
        request.original = watts(9000.0);

        let result = size(&fixture.context(), &request);

        assert_relative_eq!(result.value.get::<watt>(), 9000.0);
        let design = result.autosized.expect("design size is reported");
        assert_relative_eq!(design.get::<watt>(), zone_dx_base(), max_relative = 1e-9);
        assert!(result.details.guard.is_none());
    }

    #[test]
    fn missing_zone_data_is_fatal() {
        let fixture = Fixture::new();
        let scope = SizingScope::Zone(ZoneScope {
            zone: ZoneId(99),
            design_run: true,
            equipment: ZoneEquipment::Dx,
            outdoor_air_flow: flow(0.1),
            mixer: None,
        });

        let result = size(&fixture.context(), &capacity_request(scope, dx_inputs(0.5)));

        assert_relative_eq!(result.value.get::<watt>(), 0.0);
        assert!(matches!(
            result.error,
            Some(SizingError::MissingDesignData { .. })
        ));
        assert!(result.error.as_ref().is_some_and(SizingError::is_fatal));
        assert_eq!(result.diagnostics[0].severity, Severity::Severe);
    }

    #[test]
    fn autosized_standalone_coil_is_unresolved() {
        let fixture = Fixture::new();
        let request = capacity_request(SizingScope::Standalone, dx_inputs(0.5));

        let result = size(&fixture.context(), &request);

        assert_eq!(result.branch, Branch::Unresolved);
        assert_relative_eq!(result.value.get::<watt>(), 0.0);
        assert!(matches!(result.error, Some(SizingError::Unresolved { .. })));
        assert!(result.diagnostics[0].mentions("Component sizing incomplete"));
    }

    #[test]
    fn external_override_wins_over_design_data() {
        let fixture = Fixture::new();
        let mut request = capacity_request(zone_scope(ZoneEquipment::Dx), dx_inputs(0.5));
        request.overrides.external = Some(watts(750.0));

        let result = size(&fixture.context(), &request);

        assert_eq!(result.branch, Branch::ExternalOverride);
        assert_relative_eq!(result.value.get::<watt>(), 750.0);
        assert!(result.details.guard.is_none());
    }

    #[test]
    fn negative_inherited_load_clamps_to_zero() {
        let fixture = Fixture::new();
        let inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(0.5));

        let result = size(&fixture.context(), &capacity_request(inherited(-300.0), inputs));

        assert_relative_eq!(result.value.get::<watt>(), 0.0);
    }

    #[test]
    fn handoff_carries_design_state_to_child() {
        let fixture = Fixture::new();
        let parent = size(
            &fixture.context(),
            &capacity_request(zone_scope(ZoneEquipment::Dx), dx_inputs(0.5)),
        );
        let handoff = parent.details.handoff.expect("parent hands off");

        let scope = SizingScope::Inherited(InheritedScope {
            design_run: true,
            parent: Parent::ZoneEquipment(ZONE),
            design_load: parent.value,
            handoff: Some(handoff),
        });
        let child = size(&fixture.context(), &capacity_request(scope, dx_inputs(0.5)));

        assert_relative_eq!(
            child.value.get::<watt>(),
            parent.value.get::<watt>(),
            max_relative = 1e-12
        );
        let air = child.details.design_air.expect("state is inherited");
        assert_eq!(air.inlet, Some(handoff.inlet));
        assert_eq!(air.outlet, Some(handoff.outlet));
    }

    #[test]
    fn zone_parent_capacity_takes_the_child_fraction() {
        let fixture = Fixture::new();
        let parent = size(
            &fixture.context(),
            &capacity_request(zone_scope(ZoneEquipment::Dx), dx_inputs(0.5)),
        );
        let mut inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(0.5));
        inputs.fraction_of_autosized = 0.5;

        let from_capacity = SizingScope::Inherited(InheritedScope {
            design_run: true,
            parent: Parent::ZoneEquipment(ZONE),
            design_load: parent.value,
            handoff: parent.details.handoff,
        });
        let scaled = size(&fixture.context(), &capacity_request(from_capacity, inputs));
        let design_size = size(&fixture.context(), &capacity_request(inherited(1200.0), inputs));

        assert_relative_eq!(
            scaled.value.get::<watt>(),
            0.5 * parent.value.get::<watt>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(design_size.value.get::<watt>(), 1200.0);
    }

    #[test]
    fn unitary_parent_load_is_not_scaled() {
        let fixture = Fixture::new();
        let scope = SizingScope::Inherited(InheritedScope {
            design_run: true,
            parent: Parent::UnitarySystem(AIR_LOOP),
            design_load: watts(3000.0),
            handoff: None,
        });
        let mut inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(0.5));
        inputs.fraction_of_autosized = 0.5;

        let result = size(&fixture.context(), &capacity_request(scope, inputs));

        assert_eq!(result.branch, Branch::Inherited);
        assert_relative_eq!(result.value.get::<watt>(), 3000.0);
    }

    #[test]
    fn outdoor_air_system_passes_its_load_down() {
        let fixture = Fixture::new();
        let scope = SizingScope::OutdoorAirSystem(OutdoorAirSystemScope {
            air_loop: AIR_LOOP,
            design_run: true,
            source: OutdoorAirSource::ParentLoad(watts(3000.0)),
        });
        let inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(0.3));

        let result = size(&fixture.context(), &capacity_request(scope, inputs));

        assert_eq!(result.branch, Branch::Inherited);
        assert_relative_eq!(result.value.get::<watt>(), 3000.0);
        assert!(result.details.handoff.is_none());
        let air = result.details.design_air.expect("design air is reported");
        assert!(air.inlet.is_none());
        assert_relative_eq!(air.volume_flow.get::<cubic_meter_per_second>(), 0.3);
    }

    #[test]
    fn fan_coil_outdoor_air_share_follows_zone_design_flow() {
        let fixture = Fixture::new();
        let scope = SizingScope::Zone(ZoneScope {
            zone: ZONE,
            design_run: true,
            equipment: ZoneEquipment::FanCoil {
                design_load: watts(0.0),
            },
            outdoor_air_flow: flow(0.2),
            mixer: None,
        });
        let inputs = CoolingInputs::new(CoilTechnology::Other, flow(0.5));

        let result = size(&fixture.context(), &capacity_request(scope, inputs));

        // 1.2 kg/m³ · 0.2 m³/s of outdoor air in the 0.9 kg/s zone flow, not
        // 0.2 / 0.5 of the coil flow.
        let zone = zone();
        let mixed = AirCondition::blend(0.24 / 0.9, zone.outdoor_at_peak, zone.return_at_peak);
        let inlet = result
            .details
            .design_air
            .and_then(|air| air.inlet)
            .expect("inlet is derived");
        assert_relative_eq!(
            inlet.dry_bulb.get::<degree_celsius>(),
            mixed.dry_bulb.get::<degree_celsius>(),
            max_relative = 1e-12
        );
        let expected = 1.2 * 0.5 * enthalpy_drop(mixed, zone.cooling_supply);
        assert_relative_eq!(result.value.get::<watt>(), expected, max_relative = 1e-9);
    }

    #[test]
    fn water_zone_coil_uses_design_mass_flow() {
        let fixture = Fixture::new();
        let inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(0.75));

        let result = size(
            &fixture.context(),
            &capacity_request(zone_scope(ZoneEquipment::General), inputs),
        );

        let zone = zone();
        let expected = 0.9 * enthalpy_drop(zone.coil_inlet, zone.cooling_supply);
        assert_relative_eq!(result.value.get::<watt>(), expected, max_relative = 1e-9);
        let air = result.details.design_air.expect("design air is reported");
        assert_relative_eq!(air.volume_flow.get::<cubic_meter_per_second>(), 0.75, max_relative = 1e-12);
    }

    #[test]
    fn fan_coil_water_coil_inherits_parent_load() {
        let fixture = Fixture::new();
        let inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(0.75));
        let scope = zone_scope(ZoneEquipment::FanCoil {
            design_load: watts(4321.0),
        });

        let result = size(&fixture.context(), &capacity_request(scope, inputs));

        assert_relative_eq!(result.value.get::<watt>(), 4321.0);
    }

    fn main_branch() -> SizingScope {
        SizingScope::AirSystem(AirSystemScope {
            air_loop: AIR_LOOP,
            design_run: true,
            location: CoilLocation::MainBranch,
        })
    }

    #[test]
    fn air_system_main_branch_cools_mixed_air_to_supply() {
        let fixture = Fixture::new();
        let inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(2.0));

        let result = size(&fixture.context(), &capacity_request(main_branch(), inputs));

        let system = air_system();
        let expected = 1.2 * 2.0 * enthalpy_drop(system.mixed_at_peak, system.cooling_supply);
        assert_eq!(result.branch, Branch::AirSystemDesign);
        assert_relative_eq!(result.value.get::<watt>(), expected, max_relative = 1e-9);

        let air = result.details.design_air.expect("design air is reported");
        assert_relative_eq!(air.outdoor_air_fraction.unwrap_or_default(), 0.15, max_relative = 1e-12);
        assert!(result.details.handoff.is_some());
    }

    #[test]
    fn air_system_overrides_replace_derived_states() {
        let fixture = Fixture::new();
        let mut inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(2.0));
        inputs.air_flow_override = Some(flow(1.5));
        inputs.inlet_override.dry_bulb = Some(celsius(28.0));
        inputs.outlet_override.dry_bulb = Some(celsius(14.0));

        let result = size(&fixture.context(), &capacity_request(main_branch(), inputs));

        let system = air_system();
        let inlet = AirCondition {
            dry_bulb: celsius(28.0),
            ..system.mixed_at_peak
        };
        let outlet = AirCondition {
            dry_bulb: celsius(14.0),
            ..system.cooling_supply
        };
        let expected = 1.2 * 1.5 * enthalpy_drop(inlet, outlet);
        assert_relative_eq!(result.value.get::<watt>(), expected, max_relative = 1e-9);
    }

    #[test]
    fn air_system_precooling_blends_precool_and_return() {
        let mut fixture = Fixture::new();
        let mut system = air_system();
        system.has_outdoor_air_precooling = true;
        fixture.design = fixture.design.with_air_system(AIR_LOOP, system.clone());
        let inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(2.0));

        let result = size(&fixture.context(), &capacity_request(main_branch(), inputs));

        let inlet = AirCondition::blend(0.15, system.precool, system.return_at_peak);
        let air = result.details.design_air.expect("design air is reported");
        assert_eq!(air.inlet, Some(inlet));
    }

    fn return_fan() -> DesignFan {
        DesignFan::new(
            FanPlacement::DrawThrough,
            Pressure::new::<pascal>(400.0),
            0.6,
            0.9,
            1.0,
        )
        .expect("valid fan")
    }

    #[test]
    fn return_fan_heat_counts_the_recirculated_share() {
        let fixture = Fixture::new();
        let mut inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(2.0));
        inputs.return_fan = Some(return_fan());

        let result = size(&fixture.context(), &capacity_request(main_branch(), inputs));

        let system = air_system();
        let fan_heat = 0.85 * return_fan().heat_gain(flow(2.0)).get::<watt>();
        let expected =
            1.2 * 2.0 * enthalpy_drop(system.mixed_at_peak, system.cooling_supply) + fan_heat;
        assert_relative_eq!(result.details.fan_heat.heat.get::<watt>(), fan_heat, max_relative = 1e-12);
        assert_relative_eq!(result.value.get::<watt>(), expected, max_relative = 1e-9);

        inputs.account_for_fan_heat = false;
        let without = size(&fixture.context(), &capacity_request(main_branch(), inputs));
        assert_relative_eq!(
            result.value.get::<watt>() - without.value.get::<watt>(),
            fan_heat,
            max_relative = 1e-9
        );
    }

    #[test]
    fn flow_override_with_precooling_sets_the_outdoor_air_share() {
        let mut fixture = Fixture::new();
        let mut system = air_system();
        system.has_outdoor_air_precooling = true;
        fixture.design = fixture.design.with_air_system(AIR_LOOP, system.clone());
        let mut inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(2.0));
        inputs.air_flow_override = Some(flow(1.5));
        inputs.return_fan = Some(return_fan());

        let result = size(&fixture.context(), &capacity_request(main_branch(), inputs));

        // 0.3 m³/s of outdoor air in the 1.5 m³/s sizing flow.
        let inlet = AirCondition::blend(0.2, system.precool, system.return_at_peak);
        let fan_heat = 0.8 * return_fan().heat_gain(flow(1.5)).get::<watt>();
        let expected = 1.2 * 1.5 * enthalpy_drop(inlet, system.cooling_supply) + fan_heat;

        let air = result.details.design_air.expect("design air is reported");
        assert_relative_eq!(air.outdoor_air_fraction.unwrap_or_default(), 0.2, max_relative = 1e-12);
        assert_relative_eq!(air.volume_flow.get::<cubic_meter_per_second>(), 1.5);
        assert_relative_eq!(result.details.fan_heat.heat.get::<watt>(), fan_heat, max_relative = 1e-12);
        assert_relative_eq!(result.value.get::<watt>(), expected, max_relative = 1e-9);
    }

    #[test]
    fn non_positive_flow_override_is_ignored() {
        let fixture = Fixture::new();
        let mut inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(2.0));
        inputs.air_flow_override = Some(flow(0.0));

        let result = size(&fixture.context(), &capacity_request(main_branch(), inputs));

        let system = air_system();
        let expected = 1.2 * 2.0 * enthalpy_drop(system.mixed_at_peak, system.cooling_supply);
        assert_relative_eq!(result.value.get::<watt>(), expected, max_relative = 1e-9);
        let air = result.details.design_air.expect("design air is reported");
        assert_relative_eq!(air.volume_flow.get::<cubic_meter_per_second>(), 2.0);
    }

    #[test]
    fn air_system_capacity_methods() {
        let mut fixture = Fixture::new();
        let inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(2.0));
        let design_day = size(&fixture.context(), &capacity_request(main_branch(), inputs));

        let mut system = air_system();
        system.capacity_method = CoolingCapacityMethod::FractionOfAutosized(0.5);
        fixture.design = fixture.design.with_air_system(AIR_LOOP, system.clone());
        let half = size(&fixture.context(), &capacity_request(main_branch(), inputs));
        assert_relative_eq!(
            half.value.get::<watt>(),
            0.5 * design_day.value.get::<watt>(),
            max_relative = 1e-12
        );

        system.capacity_method = CoolingCapacityMethod::CapacityPerFloorArea(watts(25_000.0));
        fixture.design = fixture.design.with_air_system(AIR_LOOP, system);
        let per_area = size(&fixture.context(), &capacity_request(main_branch(), inputs));
        assert_relative_eq!(per_area.value.get::<watt>(), 25_000.0);
    }

    #[test]
    fn outdoor_air_stream_coil_runs_outdoor_to_precool() {
        let fixture = Fixture::new();
        let scope = SizingScope::AirSystem(AirSystemScope {
            air_loop: AIR_LOOP,
            design_run: true,
            location: CoilLocation::OutdoorAirStream,
        });
        let inputs = CoolingInputs::new(CoilTechnology::Other, flow(0.3));

        let result = size(&fixture.context(), &capacity_request(scope, inputs));

        let system = air_system();
        let expected = local_density(system.outdoor_at_peak)
            * 0.3
            * enthalpy_drop(system.outdoor_at_peak, system.precool);
        assert_relative_eq!(result.value.get::<watt>(), expected, max_relative = 1e-9);
    }

    fn dedicated() -> SizingScope {
        SizingScope::OutdoorAirSystem(OutdoorAirSystemScope {
            air_loop: AIR_LOOP,
            design_run: true,
            source: OutdoorAirSource::Dedicated(DOAS),
        })
    }

    #[test]
    fn dedicated_outdoor_air_dx_uses_fixed_flow_per_capacity() {
        let fixture = Fixture::new();
        let inputs = CoolingInputs::new(CoilTechnology::Dx(DxClass::DedicatedOutdoorAir), flow(0.5));

        let result = size(&fixture.context(), &capacity_request(dedicated(), inputs));

        // 0.5 m³/s at 5e-5 m³/s/W is above the 100 % outdoor air maximum.
        let corrected = 0.5 / fixture.config.dedicated_outdoor_air_dx_envelope.max;
        assert_eq!(result.branch, Branch::DedicatedOutdoorAir);
        assert_relative_eq!(result.value.get::<watt>(), corrected, max_relative = 1e-9);
        assert_eq!(
            result.details.guard.and_then(|guard| guard.bound),
            Some(Bound::Maximum)
        );
    }

    #[test]
    fn dedicated_outdoor_air_water_coil_cools_to_precool() {
        let fixture = Fixture::new();
        let inputs = CoolingInputs::new(CoilTechnology::ChilledWater, flow(0.5));

        let result = size(&fixture.context(), &capacity_request(dedicated(), inputs));

        let doas = doas();
        let expected = 0.6 * enthalpy_drop(doas.outdoor, doas.precool);
        assert_relative_eq!(result.value.get::<watt>(), expected, max_relative = 1e-9);
        assert!(result.details.handoff.is_none());
    }

    #[test]
    fn capacity_is_never_negative() {
        let fixture = Fixture::new();
        for modifier in [-1.0, 0.0, 0.3, 1.0, 2.5] {
            for design_flow in [0.0, 0.0005, 0.2, 0.5, 3.0] {
                let mut inputs = dx_inputs(design_flow);
                inputs.modifier = CapacityModifier::Fixed(modifier);
                let result = size(
                    &fixture.context(),
                    &capacity_request(zone_scope(ZoneEquipment::Dx), inputs),
                );
                assert!(result.value >= Power::ZERO);
            }
        }
    }
}
