use serde::Serialize;

/// Capacity used when the settings row is missing.
pub const DEFAULT_MAX_STUDENTS: i64 = 2;

/// Single global settings row (`settings.id = 1`).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Settings {
    pub id: i64,
    pub max_students: i64,
}
