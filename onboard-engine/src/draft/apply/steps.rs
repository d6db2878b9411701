//! Step control reducers

use shared::draft::OnboardingDraft;

pub(super) fn set_step(draft: &mut OnboardingDraft, step: u32) {
    draft.current_step = step.max(1);
}

pub(super) fn set_sub_step(draft: &mut OnboardingDraft, sub_step: u32) {
    draft.current_sub_step = sub_step;
}

/// Idempotent: completing an already-completed step adds no duplicate
pub(super) fn complete_step(draft: &mut OnboardingDraft, step: u32) {
    if !draft.completed_steps.contains(&step) {
        draft.completed_steps.push(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_step_floors_at_one() {
        let mut draft = OnboardingDraft::default();
        set_step(&mut draft, 0);
        assert_eq!(draft.current_step, 1);
        set_step(&mut draft, 4);
        assert_eq!(draft.current_step, 4);
    }

    #[test]
    fn test_complete_step_is_idempotent() {
        let mut draft = OnboardingDraft::default();
        complete_step(&mut draft, 2);
        complete_step(&mut draft, 2);
        complete_step(&mut draft, 1);
        complete_step(&mut draft, 2);
        assert_eq!(draft.completed_steps, vec![2, 1]);
    }
}
