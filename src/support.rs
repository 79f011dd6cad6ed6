//! Supporting utilities used by the sizing models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not stable.

pub mod constraint;
pub mod curve;
pub mod hx;
pub mod psychrometrics;
pub mod regula_falsi;
pub mod units;
