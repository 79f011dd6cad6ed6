//! Rated-capacity modifier.
//!
//! Rated capacity is the peak load divided by the modifier factor. A curve
//! modifier is evaluated at the coil entering wet-bulb and the outdoor
//! dry-bulb at the cooling peak.

use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{curve::CurveEvaluator, psychrometrics::Psychrometrics};

use crate::models::hvac::sizing::core::{
    AirCondition, CapacityDetails, CapacityModifier, CapacityRequest, Diagnostic, SizingError,
    context::Context, diagnostics::Diagnostics,
};

/// Divides `peak` by the modifier factor, recording the factor in `details`.
///
/// Falls back to `peak` with a warning when the factor cannot be evaluated
/// or is not positive. A psychrometric failure is also returned.
pub(super) fn rated_capacity<D, P, C>(
    ctx: &Context<'_, D, P, C>,
    request: &CapacityRequest,
    peak: Power,
    inlet: AirCondition,
    outdoor: ThermodynamicTemperature,
    details: &mut CapacityDetails,
    diagnostics: &mut Diagnostics,
) -> (Power, Option<SizingError>)
where
    P: Psychrometrics,
    C: CurveEvaluator,
{
    let curve = match request.inputs.modifier {
        CapacityModifier::None => return (peak, None),
        CapacityModifier::Fixed(factor) if factor > 0.0 => {
            details.modifier_factor = factor;
            return (peak / factor, None);
        }
        CapacityModifier::Fixed(_) => return (peak, None),
        CapacityModifier::Curve(curve) => curve,
    };

    let wet_bulb = match ctx.wet_bulb(inlet) {
        Ok(wet_bulb) => wet_bulb,
        Err(error) => {
            diagnostics.push(
                Diagnostic::warning(format!(
                    "{}: coil entering wet-bulb could not be computed",
                    request.component
                ))
                .line(error.to_string())
                .line("...Rated capacity set to the peak load without the modifier curve."),
            );
            return (peak, Some(error.into()));
        }
    };
    details.entering_wet_bulb = Some(wet_bulb);

    let Some(factor) = ctx.curves.evaluate(
        curve,
        wet_bulb.get::<degree_celsius>(),
        outdoor.get::<degree_celsius>(),
    ) else {
        diagnostics.push(
            Diagnostic::warning(format!(
                "{}: capacity modifier curve {curve:?} is not available",
                request.component
            ))
            .line("...Rated capacity set to the peak load."),
        );
        return (peak, None);
    };
    details.modifier_evaluated = true;
    details.modifier_factor = factor;

    if factor > 0.0 {
        (peak / factor, None)
    } else {
        diagnostics.push(
            Diagnostic::warning(format!(
                "{}: capacity modifier curve output is not positive",
                request.component
            ))
            .line(format!("...Curve output = {factor:.4}"))
            .line(format!(
                "...Entering wet-bulb = {:.2} [C], outdoor dry-bulb = {:.2} [C]",
                wet_bulb.get::<degree_celsius>(),
                outdoor.get::<degree_celsius>()
            ))
            .line("...Rated capacity set to the peak load."),
        );
        (peak, None)
    }
}
