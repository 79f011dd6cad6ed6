//! Selection of the branch that determines a sizing result.
//!
//! Precedence, first match wins:
//!
//! 1. an external override
//! 2. a usable constant basis
//! 3. a scoped request that is user-sized with no design run passes
//!    the original value through
//! 4. the scope's own derivation
//! 5. a standalone override
//! 6. a standalone value that is not auto-sized passes through
//! 7. otherwise the request is unresolved

use std::ops::Mul;

use num_traits::Zero;

use super::{OutdoorAirSource, SizingRequest, SizingScope};

/// The single branch that determines a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    ExternalOverride,
    ConstantBasis,

    /// User value passed through; no design data consulted.
    UserValue,

    /// Parent-computed design load.
    Inherited,

    /// Derived from zone design results.
    ZoneDesign,

    /// Derived from primary air system design results.
    AirSystemDesign,

    /// Derived from a dedicated outdoor air system.
    DedicatedOutdoorAir,

    Standalone,
    Unresolved,
}

impl Branch {
    /// Whether the branch derives a value from design data, so that the
    /// user-size versus design-size selection applies.
    #[must_use]
    pub fn is_derived(self) -> bool {
        matches!(
            self,
            Self::Inherited | Self::ZoneDesign | Self::AirSystemDesign | Self::DedicatedOutdoorAir
        )
    }
}

/// Alias used where the branch is the whole answer.
pub type Resolution = Branch;

/// Picks the branch for `request` without consulting any design data.
pub fn resolve<Q, I>(request: &SizingRequest<Q, I>) -> Resolution
where
    Q: Copy + PartialOrd + Zero + Mul<f64, Output = Q>,
{
    let overrides = &request.overrides;
    if overrides.external.is_some() {
        return Branch::ExternalOverride;
    }
    if overrides
        .constant_basis
        .as_ref()
        .is_some_and(|basis| basis.is_usable())
    {
        return Branch::ConstantBasis;
    }

    if request.scope.design_run() == Some(false) && !request.auto_sized {
        return Branch::UserValue;
    }

    match &request.scope {
        SizingScope::Zone(_) => Branch::ZoneDesign,
        SizingScope::AirSystem(_) => Branch::AirSystemDesign,
        SizingScope::Inherited(_) => Branch::Inherited,
        SizingScope::OutdoorAirSystem(oa) => match oa.source {
            OutdoorAirSource::ParentLoad(_) => Branch::Inherited,
            OutdoorAirSource::Dedicated(_) => Branch::DedicatedOutdoorAir,
        },
        SizingScope::Standalone => {
            if overrides.standalone.is_some() {
                Branch::Standalone
            } else if !request.auto_sized {
                Branch::UserValue
            } else {
                Branch::Unresolved
            }
        }
    }
}

/// The value of a branch that takes it straight from the request.
///
/// Returns `None` for branches that derive a value or cannot produce one.
pub(crate) fn direct_value<Q, I>(request: &SizingRequest<Q, I>, branch: Branch) -> Option<Q>
where
    Q: Copy + PartialOrd + Zero + Mul<f64, Output = Q>,
{
    match branch {
        Branch::ExternalOverride => request.overrides.external,
        Branch::ConstantBasis => request.overrides.constant_basis.map(|basis| basis.value()),
        Branch::Standalone => request.overrides.standalone,
        Branch::UserValue => Some(request.original),
        _ => None,
    }
}
