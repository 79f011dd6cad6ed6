use std::convert::Infallible;

use twine_core::Model;

use crate::support::psychrometrics::Psychrometrics;

use super::core::{
    CoilPerformance, Context, DesignDaySource, SimpleHeatingCoil, SizingConfig, UaRequest,
    UaSizing, size_ua,
};

/// Sizes heating coil UA by inverting a forward coil model.
///
/// The default model is [`SimpleHeatingCoil`].
#[derive(Debug, Clone)]
pub struct HeatingCoilUaSizer<D, P, M = SimpleHeatingCoil> {
    design: D,
    psych: P,
    model: M,
    config: SizingConfig,
}

impl<D, P> HeatingCoilUaSizer<D, P> {
    /// A sizer for simple hot-water coils.
    #[must_use]
    pub fn new(design: D, psych: P, config: SizingConfig) -> Self {
        Self::with_model(design, psych, SimpleHeatingCoil, config)
    }
}

impl<D, P, M> HeatingCoilUaSizer<D, P, M> {
    #[must_use]
    pub fn with_model(design: D, psych: P, model: M, config: SizingConfig) -> Self {
        Self {
            design,
            psych,
            model,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SizingConfig {
        &self.config
    }
}

impl<D, P, M> HeatingCoilUaSizer<D, P, M>
where
    D: DesignDaySource,
    P: Psychrometrics,
    M: CoilPerformance,
{
    /// Resolves the UA for `request`.
    #[must_use]
    pub fn size(&self, request: &UaRequest) -> UaSizing {
        let ctx = Context {
            design: &self.design,
            psych: &self.psych,
            curves: &(),
            config: &self.config,
        };
        size_ua(&ctx, &self.model, request)
    }
}

impl<D, P, M> Model for HeatingCoilUaSizer<D, P, M>
where
    D: DesignDaySource,
    P: Psychrometrics,
    M: CoilPerformance,
{
    type Input = UaRequest;
    type Output = UaSizing;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.size(input))
    }
}
