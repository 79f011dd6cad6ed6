use std::fmt;

use thiserror::Error;
use uom::si::f64::{Power, ThermalConductance};

use crate::support::{constraint::ConstraintError, psychrometrics::PsychrometricError};

use super::{AirLoopId, ComponentId, DoasId, ZoneId};

/// Out-of-band error indicator of a sizing call.
///
/// A result carrying one of these still has a best-effort value.
#[derive(Debug, Error)]
pub enum SizingError {
    /// No scope could produce the value.
    #[error("{component}: component sizing incomplete, no sizing scope applies")]
    Unresolved { component: ComponentId },

    /// The scope references design data the source does not have.
    #[error("{component}: no design data for {key}")]
    MissingDesignData { component: ComponentId, key: DesignKey },

    /// The UA solve reached its iteration limit.
    #[error("UA iteration limit of {iterations} reached, final estimate {final_estimate:?}")]
    NonConvergence {
        iterations: usize,
        final_estimate: ThermalConductance,
    },

    /// The UA residual has the same sign at both bracket ends.
    #[error("UA bracket {bracket:?} does not straddle the design load (residuals {residuals:?})")]
    InvalidBracket {
        bracket: [ThermalConductance; 2],
        residuals: [Power; 2],
    },

    /// The UA residual was not finite.
    #[error("non-finite UA residual at {ua:?}")]
    NonFiniteResidual { ua: ThermalConductance },

    #[error("coil model failed")]
    CoilModel(#[from] CoilModelError),

    #[error("psychrometric evaluation failed")]
    Psychrometric(#[from] PsychrometricError),
}

impl SizingError {
    /// Configuration errors that should halt the sizing pass.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Unresolved { .. } | Self::MissingDesignData { .. })
    }
}

/// A design-data lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignKey {
    Zone(ZoneId),
    AirSystem(AirLoopId),
    DedicatedOutdoorAir(DoasId),
}

impl fmt::Display for DesignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zone(id) => write!(f, "zone {id}"),
            Self::AirSystem(id) => write!(f, "air system {id}"),
            Self::DedicatedOutdoorAir(id) => write!(f, "dedicated outdoor air system {id}"),
        }
    }
}

/// Failure of a forward coil model.
#[derive(Debug, Error)]
pub enum CoilModelError {
    #[error("invalid coil operating point")]
    Constraint(#[from] ConstraintError),
}
