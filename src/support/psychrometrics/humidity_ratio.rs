use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};
use uom::si::{f64::Ratio, ratio::ratio};

/// Mass of water vapor per unit mass of dry air.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HumidityRatio(Constrained<Ratio, NonNegative>);

impl HumidityRatio {
    /// Humidity ratio in kg water / kg dry air.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative or `NaN`.
    pub fn new(kg_per_kg: f64) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(Ratio::new::<ratio>(kg_per_kg))?))
    }

    /// Perfectly dry air.
    #[must_use]
    pub fn dry() -> Self {
        Self(NonNegative::zero())
    }

    /// The raw kg/kg value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0.as_ref().get::<ratio>()
    }

    /// The smaller of two humidity ratios.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.value() <= other.value() {
            self
        } else {
            other
        }
    }

    /// Linear blend `fraction * first + (1 - fraction) * second`.
    ///
    /// `fraction` is clamped to `[0, 1]`, so the blend of two valid humidity
    /// ratios is always valid.
    #[must_use]
    pub fn blend(fraction: f64, first: Self, second: Self) -> Self {
        let f = fraction.clamp(0.0, 1.0);
        let mixed = f * first.value() + (1.0 - f) * second.value();
        Self::new(mixed).unwrap_or(first)
    }
}

impl Deref for HumidityRatio {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
