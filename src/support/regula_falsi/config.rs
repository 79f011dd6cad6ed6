/// Regula falsi termination settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of interior residual evaluations.
    pub max_iters: usize,

    /// Converged when `|residual| <= residual_tol`.
    pub residual_tol: f64,

    /// Converged when the bracket width is within this fraction of its
    /// larger endpoint magnitude.
    pub x_rel_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1e-12,
            x_rel_tol: 1e-12,
        }
    }
}
