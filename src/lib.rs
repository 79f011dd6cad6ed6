//! # Twine Sizing
//!
//! Design-day autosizing of HVAC coils for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a component's sizing request, the crate decides which source of
//! truth determines its design value (an override, a user value, a parent
//! component, or zone, air system, and dedicated outdoor air design results)
//! and computes it. Cooling capacities come from design air states, fan heat,
//! and a rated-capacity modifier curve, then pass a flow-per-capacity
//! plausibility check. Heating coil UA values come from inverting a forward
//! coil model with a bracketing root finder.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models, as the psychrometric
//! functions and the regula falsi root finder have.

pub mod models;
pub mod support;
