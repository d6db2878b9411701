//! Schedule reducers

use shared::draft::OnboardingDraft;
use shared::models::ScheduleEntry;
use std::collections::BTreeSet;

/// Set the selected weekday set: out-of-range days dropped, sorted,
/// duplicate-free
pub(super) fn set_selected_days(draft: &mut OnboardingDraft, days: Vec<u8>) {
    let mut days: Vec<u8> = days.into_iter().filter(|d| *d <= 6).collect();
    days.sort_unstable();
    days.dedup();
    draft.schedule.selected_days = days;
}

/// Append entries. Any day present in the batch is reconfigured: its
/// existing entries are dropped first, so entries replace rather than
/// accumulate per day.
pub(super) fn add_entries(draft: &mut OnboardingDraft, entries: Vec<ScheduleEntry>) {
    let reconfigured: BTreeSet<u8> = entries.iter().map(|e| e.day_of_week).collect();
    draft
        .schedule
        .entries
        .retain(|e| !reconfigured.contains(&e.day_of_week));
    draft.schedule.entries.extend(entries);
}

pub(super) fn replace_entries(draft: &mut OnboardingDraft, entries: Vec<ScheduleEntry>) {
    draft.schedule.entries = entries;
}

pub(super) fn set_current_day_index(draft: &mut OnboardingDraft, index: usize) {
    draft.schedule.current_day_index = index;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u8, start: &str, end: &str) -> ScheduleEntry {
        ScheduleEntry {
            day_of_week: day,
            location_ref: "Downtown".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    #[test]
    fn test_set_selected_days_sorts_and_dedups() {
        let mut draft = OnboardingDraft::default();
        set_selected_days(&mut draft, vec![5, 1, 5, 3, 9]);
        assert_eq!(draft.schedule.selected_days, vec![1, 3, 5]);
    }

    #[test]
    fn test_add_entries_replaces_reconfigured_day() {
        let mut draft = OnboardingDraft::default();
        add_entries(&mut draft, vec![entry(1, "09:00", "17:00")]);
        add_entries(&mut draft, vec![entry(2, "10:00", "18:00")]);
        // reconfigure Monday
        add_entries(&mut draft, vec![entry(1, "08:00", "16:00")]);

        assert_eq!(draft.schedule.entries.len(), 2);
        let monday = draft
            .schedule
            .entries
            .iter()
            .find(|e| e.day_of_week == 1)
            .unwrap();
        assert_eq!(monday.start_time, "08:00");
    }

    #[test]
    fn test_add_entries_keeps_other_days() {
        let mut draft = OnboardingDraft::default();
        add_entries(&mut draft, vec![entry(0, "11:00", "15:00")]);
        add_entries(&mut draft, vec![entry(6, "12:00", "22:00")]);
        assert_eq!(draft.schedule.entries.len(), 2);
    }
}
