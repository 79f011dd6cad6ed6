//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; its public types are re-exported by the model module.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the core API. A single `core` may back several adapters, as the
//! capacity and UA sizers in [`hvac::sizing`] do.

pub mod hvac;
