//! Draft store and reducers

pub mod apply;
pub mod navigator;

pub use navigator::StepNavigator;

use shared::draft::{DraftAction, OnboardingDraft};

/// Single state container holding the entire wizard draft.
///
/// All mutation goes through [`DraftStore::dispatch`]; reducers are pure
/// and synchronous, so there is nothing to race against.
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    state: OnboardingDraft,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously captured draft
    pub fn with_state(state: OnboardingDraft) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &OnboardingDraft {
        &self.state
    }

    /// Apply one action to the draft
    pub fn dispatch(&mut self, action: DraftAction) {
        apply::apply(&mut self.state, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_is_deterministic() {
        let mut a = DraftStore::new();
        let mut b = DraftStore::new();
        for store in [&mut a, &mut b] {
            store.dispatch(DraftAction::SetStep(3));
            store.dispatch(DraftAction::CompleteStep(1));
            store.dispatch(DraftAction::CompleteStep(2));
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_reset_returns_pristine_draft() {
        let mut store = DraftStore::new();
        store.dispatch(DraftAction::SetStep(4));
        store.dispatch(DraftAction::CompleteStep(1));
        store.dispatch(DraftAction::Reset);
        assert_eq!(store.state(), &OnboardingDraft::default());
    }
}
