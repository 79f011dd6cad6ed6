/// How the root finder stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Converged,
    MaxIters,
}

/// The final iterate and how it was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub x: f64,
    pub residual: f64,
    pub iters: usize,
    pub status: Status,
}

impl Solution {
    pub(super) fn converged(x: f64, residual: f64, iters: usize) -> Self {
        Self {
            x,
            residual,
            iters,
            status: Status::Converged,
        }
    }

    pub(super) fn max_iters(x: f64, residual: f64, iters: usize) -> Self {
        Self {
            x,
            residual,
            iters,
            status: Status::MaxIters,
        }
    }
}
