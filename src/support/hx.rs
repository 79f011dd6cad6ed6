//! Effectiveness-NTU relations for coil heat transfer.
//!
//! Water coils are sized by inverting a forward coil model, and the forward
//! model is an effectiveness-NTU exchanger between the water and air streams.
//! This module holds the pieces of that model that do not know anything
//! about coils:
//!
//! - [`CapacitanceRate`]: `m_dot * c_p` of a stream, strictly positive
//! - [`Ntu`] and [`Effectiveness`]: dimensionless size and performance
//! - [`CrossFlowUnmixed`]: the arrangement used for finned water coils
//! - [`exchange`]: heat transfer for a known conductance and inlet pair

mod arrangement;
mod capacitance_rate;
mod effectiveness_ntu;
mod exchange;

pub use arrangement::CrossFlowUnmixed;
pub use capacitance_rate::CapacitanceRate;
pub use effectiveness_ntu::{Effectiveness, EffectivenessRelation, Ntu};
pub use exchange::{Exchange, StreamInlet, exchange};
