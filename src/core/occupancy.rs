//! Occupancy policy: how many students are out, and how many may be.

use crate::db::queries;
use crate::errors::AppResult;
use rusqlite::Connection;

pub fn current_out_count(conn: &Connection) -> AppResult<i64> {
    queries::count_students_out(conn)
}

/// Configured capacity, falling back to the default when the settings row
/// is missing.
pub fn capacity(conn: &Connection) -> AppResult<i64> {
    queries::max_students(conn)
}

pub fn is_full(conn: &Connection) -> AppResult<bool> {
    Ok(current_out_count(conn)? >= capacity(conn)?)
}
