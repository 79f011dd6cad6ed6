//! Bracketing root finder.
//!
//! Regula falsi with the Illinois modification: when the same endpoint is
//! retained on consecutive steps its residual is halved, which restores
//! superlinear convergence on curved residuals. A secant estimate that is
//! not finite or falls outside the bracket is replaced by the midpoint.
//!
//! The solver knows nothing about what it solves. It calls a residual
//! closure at most `max_iters + 2` times and returns the last iterate when
//! the iteration ceiling is reached.

mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Retained {
    None,
    Lower,
    Upper,
}

/// Finds `x` in `bracket` with `residual(x) = 0`.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if the residuals at the bracket ends
/// share a sign, [`Error::NonFinite`] if any residual is not finite,
/// and [`Error::Residual`] if the closure fails.
pub fn solve<E, F>(mut residual: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error<E>>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let [mut lo, mut hi] = if bracket[0] <= bracket[1] {
        bracket
    } else {
        [bracket[1], bracket[0]]
    };

    let mut f_lo = residual(lo).map_err(Error::Residual)?;
    let mut f_hi = residual(hi).map_err(Error::Residual)?;

    for (x, f) in [(lo, f_lo), (hi, f_hi)] {
        if !f.is_finite() {
            return Err(Error::NonFinite { x, residual: f });
        }
    }

    if f_lo.abs() <= config.residual_tol {
        return Ok(Solution::converged(lo, f_lo, 0));
    }
    if f_hi.abs() <= config.residual_tol {
        return Ok(Solution::converged(hi, f_hi, 0));
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(Error::InvalidBracket {
            bracket: [lo, hi],
            residuals: [f_lo, f_hi],
        });
    }

    let mut retained = Retained::None;
    let mut x = lo;
    let mut f_x = f_lo;

    for iter in 1..=config.max_iters {
        let secant = (lo * f_hi - hi * f_lo) / (f_hi - f_lo);
        x = if secant.is_finite() && secant > lo && secant < hi {
            secant
        } else {
            0.5 * (lo + hi)
        };

        f_x = residual(x).map_err(Error::Residual)?;

        if !f_x.is_finite() {
            return Err(Error::NonFinite { x, residual: f_x });
        }
        if f_x.abs() <= config.residual_tol {
            return Ok(Solution::converged(x, f_x, iter));
        }

        if f_x.signum() == f_lo.signum() {
            lo = x;
            f_lo = f_x;
            if retained == Retained::Upper {
                f_hi *= 0.5;
            }
            retained = Retained::Upper;
        } else {
            hi = x;
            f_hi = f_x;
            if retained == Retained::Lower {
                f_lo *= 0.5;
            }
            retained = Retained::Lower;
        }

        if (hi - lo).abs() <= config.x_rel_tol * lo.abs().max(hi.abs()) {
            return Ok(Solution::converged(x, f_x, iter));
        }
    }

    Ok(Solution::max_iters(x, f_x, config.max_iters))
}
