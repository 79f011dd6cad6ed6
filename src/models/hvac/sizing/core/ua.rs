//! Heating coil UA sizing.
//!
//! The UA is found by inverting a forward coil model: the root of
//! `heating_rate(UA) - design_load` on a bracket spanning 0.1 % to 100 % of
//! the design load (read as W/K). Degenerate design points get the nominal
//! placeholder UA instead of a solve.

mod coil;

pub use coil::{CoilDesignPoint, CoilPerformance, SimpleHeatingCoil};

use uom::{
    ConstZero,
    si::{
        f64::{MassRate, Power, ThermalConductance},
        mass_rate::kilogram_per_second,
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
        thermal_conductance::watt_per_kelvin,
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::{
    hx::{CapacitanceRate, StreamInlet},
    psychrometrics::Psychrometrics,
    regula_falsi::{self, Status},
};

use super::{
    AirCondition, AirLoopId, Branch, CoilModelError, DesignDaySource, Diagnostic, InheritedScope,
    Parent, SizingError, SizingScope, UaDetails, UaRequest, UaSizing, UaSolveSummary, ZoneId,
    context::Context,
    diagnostics::Diagnostics,
    resolution::{direct_value, resolve},
};

/// Sizes a heating coil UA against `model`.
pub(crate) fn size<D, P, C, M>(
    ctx: &Context<'_, D, P, C>,
    model: &M,
    request: &UaRequest,
) -> UaSizing
where
    D: DesignDaySource,
    P: Psychrometrics,
    M: CoilPerformance,
{
    let branch = resolve(request);
    let mut diagnostics = Diagnostics::default();

    if let Some(value) = direct_value(request, branch) {
        return UaSizing {
            value,
            autosized: None,
            branch,
            error: None,
            details: UaDetails::default(),
            diagnostics: diagnostics.into_vec(),
        };
    }

    if branch == Branch::Unresolved {
        diagnostics.push(
            Diagnostic::severe(format!(
                "{}, Developer Error: Component sizing incomplete.",
                request.component
            ))
            .line("SizingString = U-Factor Times Area Value [W/K], SizingResult = 0.0"),
        );
        return UaSizing {
            value: ThermalConductance::ZERO,
            autosized: None,
            branch,
            error: Some(SizingError::Unresolved {
                component: request.component.clone(),
            }),
            details: UaDetails::default(),
            diagnostics: diagnostics.into_vec(),
        };
    }

    let (ua, details, error) = if is_solvable(ctx, request) {
        solve(ctx, model, request, &mut diagnostics)
    } else {
        let details = UaDetails {
            solve: None,
            placeholder: true,
        };
        (placeholder(ctx, request, &mut diagnostics), details, None)
    };

    UaSizing {
        value: if request.auto_sized { ua } else { request.original },
        autosized: Some(ua),
        branch,
        error,
        details,
        diagnostics: diagnostics.into_vec(),
    }
}

/// Zone equipment solves for any positive load; system coils need at
/// least the small-load threshold. Both need flow on each side.
fn is_solvable<D, P, C>(ctx: &Context<'_, D, P, C>, request: &UaRequest) -> bool {
    let inputs = &request.inputs;
    has_design_load(ctx, request)
        && inputs.water_mass_flow > MassRate::ZERO
        && inputs.air_mass_flow > MassRate::ZERO
}

fn has_design_load<D, P, C>(ctx: &Context<'_, D, P, C>, request: &UaRequest) -> bool {
    let load = request.inputs.design_load;
    if is_zone_equipment(&request.scope) {
        load > Power::ZERO
    } else {
        load >= ctx.config.small_load
    }
}

fn is_zone_equipment(scope: &SizingScope) -> bool {
    matches!(
        scope,
        SizingScope::Zone(_)
            | SizingScope::Inherited(InheritedScope {
                parent: Parent::ZoneEquipment(_),
                ..
            })
    )
}

fn placeholder<D, P, C>(
    ctx: &Context<'_, D, P, C>,
    request: &UaRequest,
    diagnostics: &mut Diagnostics,
) -> ThermalConductance {
    if request.inputs.water_mass_flow > MassRate::ZERO && !has_design_load(ctx, request) {
        diagnostics.push(
            Diagnostic::warning(format!(
                "The design coil load used for UA sizing is zero for {}",
                request.component
            ))
            .line("An autosize value for UA cannot be calculated")
            .line("Input a value for UA, change the heating design day, or raise")
            .line("the system heating design supply air temperature. Also check to make sure the Preheat")
            .line("Design Temperature is not the same as the outdoor air design temperature")
            .line(format!(
                "UA is set to {:.1} [W/K]",
                ctx.config.nominal_ua.get::<watt_per_kelvin>()
            )),
        );
    }
    ctx.config.nominal_ua
}

fn solve<D, P, C, M>(
    ctx: &Context<'_, D, P, C>,
    model: &M,
    request: &UaRequest,
    diagnostics: &mut Diagnostics,
) -> (ThermalConductance, UaDetails, Option<SizingError>)
where
    D: DesignDaySource,
    P: Psychrometrics,
    M: CoilPerformance,
{
    let target = request.inputs.design_load.get::<watt>();
    let bracket = ctx.config.ua_solver.bracket(target);
    let lower = ThermalConductance::new::<watt_per_kelvin>(bracket[0]);
    let bracket_ua = bracket.map(ThermalConductance::new::<watt_per_kelvin>);

    let point = match design_point(ctx, request) {
        Ok(point) => point,
        Err(error) => {
            diagnostics.push(failure(request).line(error.to_string()));
            return (lower, UaDetails::default(), Some(error));
        }
    };

    let config = ctx.config.ua_solver.regula_falsi(target);
    let outcome = regula_falsi::solve(
        |ua| {
            model
                .heating_rate(ThermalConductance::new::<watt_per_kelvin>(ua), &point)
                .map(|q| q.get::<watt>() - target)
        },
        bracket,
        &config,
    );

    match outcome {
        Ok(solution) => {
            let ua = ThermalConductance::new::<watt_per_kelvin>(solution.x);
            let converged = solution.status == Status::Converged;
            let details = UaDetails {
                solve: Some(UaSolveSummary {
                    bracket: bracket_ua,
                    iterations: solution.iters,
                    residual: Power::new::<watt>(solution.residual),
                    converged,
                }),
                placeholder: false,
            };
            if converged {
                return (ua, details, None);
            }

            let mut diagnostic = failure(request)
                .line("Iteration limit exceeded in calculating coil UA")
                .line(format!("Lower UA estimate = {:.6e} W/K", bracket[0]))
                .line(format!("Upper UA estimate = {:.6e} W/K", bracket[1]))
                .line(format!(
                    "Final UA estimate when iterations exceeded limit = {:.6e} W/K",
                    solution.x
                ));
            let capacity = Power::new::<watt>(solution.residual + target);
            for line in context_lines(ctx, request, capacity) {
                diagnostic = diagnostic.line(line);
            }
            diagnostics.push(diagnostic);

            (
                ua,
                details,
                Some(SizingError::NonConvergence {
                    iterations: solution.iters,
                    final_estimate: ua,
                }),
            )
        }
        Err(regula_falsi::Error::InvalidBracket { residuals, .. }) => {
            let mut diagnostic = failure(request)
                .line("Bad starting values for UA")
                .line(format!("Lower UA estimate = {:.6e} W/K", bracket[0]))
                .line(format!("Upper UA estimate = {:.6e} W/K", bracket[1]));
            // The most the coil delivers anywhere on the bracket.
            let capacity = Power::new::<watt>(residuals[0].max(residuals[1]) + target);
            for line in context_lines(ctx, request, capacity) {
                diagnostic = diagnostic.line(line);
            }
            for line in plant_lines(ctx, request, capacity) {
                diagnostic = diagnostic.line(line);
            }
            diagnostics.push(diagnostic);

            (
                lower,
                UaDetails::default(),
                Some(SizingError::InvalidBracket {
                    bracket: bracket_ua,
                    residuals: residuals.map(Power::new::<watt>),
                }),
            )
        }
        Err(regula_falsi::Error::NonFinite { x, .. }) => {
            let ua = ThermalConductance::new::<watt_per_kelvin>(x);
            diagnostics.push(failure(request).line(format!(
                "Coil model returned a non-finite heating rate at UA = {x:.6e} W/K"
            )));
            (lower, UaDetails::default(), Some(SizingError::NonFiniteResidual { ua }))
        }
        Err(regula_falsi::Error::Residual(error)) => {
            diagnostics.push(failure(request).line(error.to_string()));
            (lower, UaDetails::default(), Some(error.into()))
        }
    }
}

fn failure(request: &UaRequest) -> Diagnostic {
    Diagnostic::severe(format!(
        "Autosizing of heating coil UA failed for {}",
        request.component
    ))
}

/// Streams entering the coil at the design point.
fn design_point<D, P: Psychrometrics, C>(
    ctx: &Context<'_, D, P, C>,
    request: &UaRequest,
) -> Result<CoilDesignPoint, SizingError> {
    let inputs = &request.inputs;
    let air_rate = CapacitanceRate::from_mass_rate_and_specific_heat(
        inputs.air_mass_flow,
        ctx.psych.specific_heat(inputs.air_inlet.humidity_ratio),
    )
    .map_err(CoilModelError::from)?;
    let water_rate = CapacitanceRate::from_mass_rate_and_specific_heat(
        inputs.water_mass_flow,
        ctx.config.water_specific_heat,
    )
    .map_err(CoilModelError::from)?;

    Ok(CoilDesignPoint {
        air: StreamInlet::new(air_rate, inputs.air_inlet.dry_bulb),
        water: StreamInlet::new(water_rate, inputs.water_inlet_temperature),
    })
}

/// Where the coil sits and the design point it was sized at.
///
/// `capacity` is what the coil model delivered at the reported estimate.
fn context_lines<D: DesignDaySource, P, C>(
    ctx: &Context<'_, D, P, C>,
    request: &UaRequest,
    capacity: Power,
) -> Vec<String> {
    let inputs = &request.inputs;
    let mut lines = Vec::new();

    match &request.scope {
        SizingScope::Zone(zone) => lines.push(format!("Zone: {}", zone_name(ctx, zone.zone))),
        SizingScope::Inherited(InheritedScope {
            parent: Parent::ZoneEquipment(zone),
            ..
        }) => lines.push(format!("Zone: {}", zone_name(ctx, *zone))),
        SizingScope::AirSystem(system) => {
            lines.push(format!("Air Loop: {}", air_loop_name(ctx, system.air_loop)));
        }
        SizingScope::OutdoorAirSystem(system) => {
            lines.push(format!("Air Loop: {}", air_loop_name(ctx, system.air_loop)));
        }
        SizingScope::Inherited(InheritedScope {
            parent: Parent::UnitarySystem(air_loop),
            ..
        }) => lines.push(format!("Air Loop: {}", air_loop_name(ctx, *air_loop))),
        SizingScope::Standalone => {}
    }

    lines.push(format!(
        "Coil inlet air temperature = {:.3} C",
        inputs.air_inlet.dry_bulb.get::<degree_celsius>()
    ));
    lines.push(format!(
        "Coil inlet air humidity ratio = {:.3} kgWater/kgDryAir",
        inputs.air_inlet.humidity_ratio.value()
    ));
    lines.push(format!(
        "Coil design air mass flow rate = {:.3} kg/s",
        inputs.air_mass_flow.get::<kilogram_per_second>()
    ));
    lines.push(format!(
        "Coil design water mass flow rate = {:.3} kg/s",
        inputs.water_mass_flow.get::<kilogram_per_second>()
    ));
    lines.push(format!(
        "Coil inlet water temperature = {:.3} C",
        inputs.water_inlet_temperature.get::<degree_celsius>()
    ));
    lines.push(format!("Design Coil Capacity = {:.3} W", capacity.get::<watt>()));
    lines.push(format!(
        "Design coil load used for UA sizing = {:.3} W",
        inputs.design_load.get::<watt>()
    ));

    if let Some(outlet) = design_outlet(ctx, request) {
        lines.push(format!(
            "Coil outlet air temperature = {:.3} C",
            outlet.dry_bulb.get::<degree_celsius>()
        ));
        lines.push(format!(
            "Coil outlet air humidity ratio = {:.3} kgWater/kgDryAir",
            outlet.humidity_ratio.value()
        ));
    }
    lines
}

/// The known leaving air state, if any.
fn design_outlet<D: DesignDaySource, P, C>(
    ctx: &Context<'_, D, P, C>,
    request: &UaRequest,
) -> Option<AirCondition> {
    let inputs = &request.inputs;
    if inputs.design_outlet.is_some() {
        return inputs.design_outlet;
    }
    match &request.scope {
        SizingScope::Zone(zone) if !inputs.nominal_capacity_input => {
            ctx.design.zone(zone.zone).map(|design| design.heating_supply)
        }
        _ => None,
    }
}

/// Plant loop hints when the coil falls short of the design load.
///
/// System coils with a nominal capacity input are exempt, since their load
/// was not derived from the plant design.
fn plant_lines<D: DesignDaySource, P, C>(
    ctx: &Context<'_, D, P, C>,
    request: &UaRequest,
    capacity: Power,
) -> Vec<String> {
    let inputs = &request.inputs;
    if capacity >= inputs.design_load
        || (inputs.nominal_capacity_input && !is_zone_equipment(&request.scope))
    {
        return Vec::new();
    }
    let Some(plant) = inputs.plant_loop.and_then(|id| ctx.design.plant(id)) else {
        return Vec::new();
    };

    vec![
        "Inadequate water side capacity: in Plant Sizing for this hot water loop".to_string(),
        "increase design loop exit temperature and/or decrease design loop delta T".to_string(),
        format!("Plant Sizing object = {}", plant.name),
        format!(
            "Plant design loop exit temperature = {:.3} C",
            plant.exit_temperature.get::<degree_celsius>()
        ),
        format!(
            "Plant design loop delta T = {:.3} C",
            plant.delta_t.get::<delta_kelvin>()
        ),
    ]
}

fn zone_name<D: DesignDaySource, P, C>(ctx: &Context<'_, D, P, C>, id: ZoneId) -> String {
    ctx.design
        .zone(id)
        .map_or_else(|| id.to_string(), |zone| zone.name.clone())
}

fn air_loop_name<D: DesignDaySource, P, C>(
    ctx: &Context<'_, D, P, C>,
    id: AirLoopId,
) -> String {
    ctx.design
        .air_system(id)
        .map_or_else(|| id.to_string(), |system| system.name.clone())
}
