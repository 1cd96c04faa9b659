//! Roster and capacity administration.

use super::{Rejection, Transition};
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use rusqlite::Connection;
use tracing::{debug, info};

/// Add a student by display name. The name is trimmed; empty or duplicate
/// names are rejected no-ops (duplicate matching is exact and
/// case-sensitive).
pub fn add_student(conn: &Connection, name: &str, now: NaiveDateTime) -> AppResult<Transition> {
    let name = name.trim();

    if name.is_empty() {
        return Ok(Transition::Rejected(Rejection::EmptyName));
    }
    if queries::student_name_exists(conn, name)? {
        debug!("add of '{name}' refused: duplicate name");
        return Ok(Transition::Rejected(Rejection::DuplicateName));
    }

    queries::insert_student(conn, name, &now)?;
    info!("added student '{name}'");
    Ok(Transition::Applied)
}

/// Remove a student by id. History rows are retained; their name snapshot
/// keeps them displayable.
pub fn remove_student(conn: &Connection, id: i64) -> AppResult<()> {
    if queries::delete_student(conn, id)? == 0 {
        return Err(AppError::StudentNotFound(id));
    }
    info!("removed student {id}");
    Ok(())
}

/// Set the maximum number of students allowed out at once. Zero or negative
/// values are rejected and leave the prior capacity in place.
pub fn set_capacity(conn: &Connection, value: i64) -> AppResult<Transition> {
    if value <= 0 {
        debug!("capacity {value} refused: must be positive");
        return Ok(Transition::Rejected(Rejection::InvalidCapacity));
    }

    queries::set_max_students(conn, value)?;
    info!("capacity set to {value}");
    Ok(Transition::Applied)
}
