//! Load/save synchronization
//!
//! The draft is reconciled with durable storage only at two points: on
//! wizard entry ([`load::LoadSynchronizer`]) and on wizard completion
//! ([`save::SaveSynchronizer`]). There is no continuous two-way sync
//! while the operator edits.

pub mod load;
pub mod money;
pub mod resolver;
pub mod save;

pub use load::LoadSynchronizer;
pub use save::{SaveError, SaveOutcome, SaveSynchronizer};

/// Terminal `onboarding_step` marker on the business record: one past the
/// last wizard step. Writing it is what flips the business to "live".
pub const ONBOARDING_COMPLETE_STEP: u32 = shared::draft::STEP_COUNT + 1;
