/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a client-side id for a draft entity.
///
/// Draft entities get their id before they exist in storage (the save
/// pipeline upserts by id), so ids must be generated on the client and
/// collision-free without coordination.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
