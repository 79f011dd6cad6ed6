use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, UnitInterval};
use uom::si::{
    f64::{Ratio, ThermalConductance},
    ratio::ratio,
};

use super::CapacitanceRate;

/// Effectiveness as a function of NTU for one flow arrangement.
pub trait EffectivenessRelation {
    /// Effectiveness for the given [NTU](Ntu) and stream capacitance rates.
    fn effectiveness(&self, ntu: Ntu, capacitance_rates: [CapacitanceRate; 2]) -> Effectiveness;
}

/// Heat exchanger effectiveness, in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Effectiveness(Constrained<Ratio, UnitInterval>);

impl Effectiveness {
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside `[0, 1]`.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(Ratio::new::<ratio>(value))?))
    }
}

impl Deref for Effectiveness {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Number of transfer units, `UA / C_min`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ntu(Constrained<Ratio, NonNegative>);

impl Ntu {
    /// # Errors
    ///
    /// Returns `Err` if the value is negative.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(Ratio::new::<ratio>(value))?))
    }

    /// NTU from a conductance and both stream rates.
    ///
    /// # Errors
    ///
    /// Returns `Err` for a negative conductance.
    pub fn from_conductance(
        ua: ThermalConductance,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Self> {
        let c_min = capacitance_rates[0].min(capacitance_rates[1]);
        Ok(Self(NonNegative::new(ua / *c_min)?))
    }
}

impl Deref for Ntu {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Applies a raw `(ntu, c_r) -> effectiveness` correlation.
///
/// `c_r == 0` collapses every arrangement to `1 - exp(-NTU)`. Correlations
/// that overshoot `[0, 1]` by rounding are clamped.
pub(super) fn effectiveness_via(
    ntu: Ntu,
    capacitance_rates: [CapacitanceRate; 2],
    correlation: impl Fn(f64, f64) -> f64,
) -> Effectiveness {
    let [first, second] = capacitance_rates;
    let c_r = (*first.min(second) / *first.max(second)).get::<ratio>();
    let ntu = ntu.get::<ratio>();

    let raw = if c_r == 0.0 {
        1.0 - (-ntu).exp()
    } else {
        correlation(ntu, c_r)
    };

    let clamped = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) };
    Effectiveness::new(clamped).expect("clamped effectiveness should lie in the unit interval")
}
