use thiserror::Error;

/// Errors that stop the root finder without a usable iterate.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// Residuals at both bracket ends share a sign.
    #[error("residuals {residuals:?} at bracket {bracket:?} do not change sign")]
    InvalidBracket {
        bracket: [f64; 2],
        residuals: [f64; 2],
    },

    /// The residual was not finite.
    #[error("non-finite residual {residual} at x = {x}")]
    NonFinite { x: f64, residual: f64 },

    /// The residual closure failed.
    #[error("residual evaluation failed")]
    Residual(#[source] E),
}
