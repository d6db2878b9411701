//! Step navigation
//!
//! Thin convenience layer over the draft store. Jumping ahead with
//! [`StepNavigator::go_to`] is allowed by design; validating readiness
//! is the UI's concern.

use super::DraftStore;
use shared::draft::DraftAction;

/// Forward/back/jump semantics plus completed-step bookkeeping
pub struct StepNavigator<'a> {
    store: &'a mut DraftStore,
}

impl<'a> StepNavigator<'a> {
    pub fn new(store: &'a mut DraftStore) -> Self {
        Self { store }
    }

    /// Mark the current step complete, then advance by one
    pub fn next(&mut self) {
        let current = self.store.state().current_step;
        self.store.dispatch(DraftAction::CompleteStep(current));
        self.store.dispatch(DraftAction::SetStep(current + 1));
    }

    /// Go back one step, never below step 1
    pub fn previous(&mut self) {
        let current = self.store.state().current_step;
        self.store
            .dispatch(DraftAction::SetStep(current.saturating_sub(1).max(1)));
    }

    /// Jump to an absolute step without touching completion state
    pub fn go_to(&mut self, step: u32) {
        self.store.dispatch(DraftAction::SetStep(step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_completes_steps_in_order() {
        let mut store = DraftStore::new();
        let mut nav = StepNavigator::new(&mut store);
        for _ in 0..3 {
            nav.next();
        }
        assert_eq!(store.state().current_step, 4);
        assert_eq!(store.state().completed_steps, vec![1, 2, 3]);
    }

    #[test]
    fn test_next_after_revisit_adds_no_duplicates() {
        let mut store = DraftStore::new();
        let mut nav = StepNavigator::new(&mut store);
        nav.next();
        nav.next();
        nav.previous();
        nav.next(); // step 2 completed a second time
        assert_eq!(store.state().completed_steps, vec![1, 2]);
        assert_eq!(store.state().current_step, 3);
    }

    #[test]
    fn test_previous_floors_at_step_one() {
        let mut store = DraftStore::new();
        let mut nav = StepNavigator::new(&mut store);
        nav.previous();
        nav.previous();
        assert_eq!(store.state().current_step, 1);
    }

    #[test]
    fn test_go_to_jumps_without_completing() {
        let mut store = DraftStore::new();
        let mut nav = StepNavigator::new(&mut store);
        nav.go_to(4);
        assert_eq!(store.state().current_step, 4);
        assert!(store.state().completed_steps.is_empty());
    }
}
