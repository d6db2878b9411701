//! Storefront onboarding engine
//!
//! Core of the guided five-step setup wizard: an in-memory draft state
//! machine plus the load/save synchronizers that reconcile the draft
//! against a relational store without multi-table transactions.
//!
//! # Module structure
//!
//! ```text
//! onboard-engine/src/
//! ├── draft/         # Draft store, pure reducers, step navigator
//! ├── store/         # Store client trait, row shapes, in-memory impl
//! └── sync/          # Load/save synchronizers, offer resolver, money
//! ```
//!
//! Editing flows one way (dispatch -> draft); storage is touched only at
//! load time and at save time. Save stages run in strict dependency
//! order and are individually idempotent, so a failed save is safe to
//! retry from the top.

pub mod draft;
pub mod store;
pub mod sync;

// Re-export public types
pub use draft::{DraftStore, StepNavigator};
pub use store::{MemoryStore, OnboardingStore, StoreError, StoreResult};
pub use sync::{LoadSynchronizer, SaveError, SaveOutcome, SaveSynchronizer};
