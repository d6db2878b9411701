//! Weekly Schedule Models

use serde::{Deserialize, Serialize};

/// One opening interval for one weekday at one location.
///
/// `location_ref` may hold a persisted id, a client-generated placeholder
/// id, or a plain location name: schedules can be drafted before their
/// locations are persisted, so resolution to a real id happens only at
/// save time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u8,
    pub location_ref: String,
    /// "HH:MM", zero-padded 24h; must sort before `end_time`
    pub start_time: String,
    pub end_time: String,
}

/// Step 2 slice of the draft
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleDraft {
    /// Weekdays the operator selected, sorted ascending, duplicate-free
    pub selected_days: Vec<u8>,
    pub entries: Vec<ScheduleEntry>,
    /// Cursor into `selected_days` while configuring one day at a time
    #[serde(default)]
    pub current_day_index: usize,
}
