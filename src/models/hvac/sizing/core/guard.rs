//! Flow-per-capacity plausibility bounds.
//!
//! Direct-expansion coils only perform as rated within a band of rated air
//! flow per rated capacity. A capacity that puts the design flow outside
//! the band is moved to the nearest bound.

use uom::{
    ConstZero,
    si::{
        f64::{Power, VolumeRate},
        power::watt,
        volume_rate::cubic_meter_per_second,
    },
};

use super::FlowPerCapacityEnvelope;

/// Ratios within this relative distance of a bound count as on the bound.
const BOUND_TOLERANCE: f64 = 1e-9;

/// Which bound moved the capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Flow per capacity was too low; capacity lowered.
    Minimum,

    /// Flow per capacity was too high; capacity raised.
    Maximum,
}

/// A capacity after the plausibility bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardOutcome {
    pub capacity: Power,

    /// Corrected over requested capacity from the minimum bound, else 1.
    pub min_ratio: f64,

    /// Corrected over requested capacity from the maximum bound, else 1.
    pub max_ratio: f64,

    pub bound: Option<Bound>,

    /// Requested flow per capacity, m³/s per W.
    pub requested_ratio: f64,
}

impl GuardOutcome {
    fn unchanged(capacity: Power, requested_ratio: f64) -> Self {
        Self {
            capacity,
            min_ratio: 1.0,
            max_ratio: 1.0,
            bound: None,
            requested_ratio,
        }
    }
}

/// Moves `capacity` into `envelope` for the design `flow`.
///
/// Non-positive capacities are returned unchanged. Applying the guard to its
/// own output changes nothing.
#[must_use]
pub fn apply(flow: VolumeRate, capacity: Power, envelope: &FlowPerCapacityEnvelope) -> GuardOutcome {
    if capacity <= Power::ZERO {
        return GuardOutcome::unchanged(capacity, 0.0);
    }

    let flow = flow.get::<cubic_meter_per_second>();
    let requested = capacity.get::<watt>();
    let ratio = flow / requested;

    if ratio < envelope.min * (1.0 - BOUND_TOLERANCE) {
        let corrected = flow / envelope.min;
        GuardOutcome {
            capacity: Power::new::<watt>(corrected),
            min_ratio: corrected / requested,
            max_ratio: 1.0,
            bound: Some(Bound::Minimum),
            requested_ratio: ratio,
        }
    } else if ratio > envelope.max * (1.0 + BOUND_TOLERANCE) {
        let corrected = flow / envelope.max;
        GuardOutcome {
            capacity: Power::new::<watt>(corrected),
            min_ratio: 1.0,
            max_ratio: corrected / requested,
            bound: Some(Bound::Maximum),
            requested_ratio: ratio,
        }
    } else {
        GuardOutcome::unchanged(capacity, ratio)
    }
}
