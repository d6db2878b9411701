//! Shared types for the storefront onboarding wizard
//!
//! Domain models and draft state used across crates: the draft entity
//! shapes for each wizard step, the draft root state, the action
//! vocabulary consumed by the engine's reducers, and small utilities.

pub mod draft;
pub mod models;
pub mod util;

// Re-exports
pub use draft::{DraftAction, DraftPatch, OnboardingDraft};
pub use serde::{Deserialize, Serialize};
