use std::convert::Infallible;

use twine_core::Model;

use crate::support::{curve::CurveEvaluator, psychrometrics::Psychrometrics};

use super::core::{
    CapacityRequest, CapacitySizing, Context, DesignDaySource, SizingConfig, size_capacity,
};

/// Sizes cooling coil capacities.
///
/// Owns its collaborators: a design-day source, moist-air property
/// functions, and a curve evaluator. Any of them can be a reference, since
/// each trait is implemented for `&T`.
#[derive(Debug, Clone)]
pub struct CoolingCapacitySizer<D, P, C> {
    design: D,
    psych: P,
    curves: C,
    config: SizingConfig,
}

impl<D, P, C> CoolingCapacitySizer<D, P, C> {
    #[must_use]
    pub fn new(design: D, psych: P, curves: C, config: SizingConfig) -> Self {
        Self {
            design,
            psych,
            curves,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SizingConfig {
        &self.config
    }

    #[must_use]
    pub fn design(&self) -> &D {
        &self.design
    }
}

impl<D, P, C> CoolingCapacitySizer<D, P, C>
where
    D: DesignDaySource,
    P: Psychrometrics,
    C: CurveEvaluator,
{
    /// Resolves the capacity for `request`.
    ///
    /// Never fails outright; problems are reported through the result's
    /// `error` and diagnostics.
    #[must_use]
    pub fn size(&self, request: &CapacityRequest) -> CapacitySizing {
        let ctx = Context {
            design: &self.design,
            psych: &self.psych,
            curves: &self.curves,
            config: &self.config,
        };
        size_capacity(&ctx, request)
    }
}

impl<D, P, C> Model for CoolingCapacitySizer<D, P, C>
where
    D: DesignDaySource,
    P: Psychrometrics,
    C: CurveEvaluator,
{
    type Input = CapacityRequest;
    type Output = CapacitySizing;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.size(input))
    }
}
