//! Sign-out / sign-in state transitions.
//!
//! The only permitted edges are IN → OUT (sign-out) and OUT → IN (sign-in).
//! Anything else is a rejected no-op; only an unknown student id is an
//! error. Each transition runs its paired student/history writes inside a
//! single SQLite transaction.

use super::{Rejection, Transition, occupancy};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::utils::time;
use chrono::NaiveDateTime;
use tracing::{debug, info};

/// Sign a student out and open a history record for the absence.
///
/// The capacity check runs before the student lookup, so signing out an
/// unknown id while the room is full is a redirect, not a 404.
pub fn sign_out(pool: &mut DbPool, student_id: i64, now: NaiveDateTime) -> AppResult<Transition> {
    if occupancy::is_full(&pool.conn)? {
        debug!("sign-out of student {student_id} refused: room full");
        return Ok(Transition::Rejected(Rejection::RoomFull));
    }

    let student = queries::get_student(&pool.conn, student_id)?
        .ok_or(AppError::StudentNotFound(student_id))?;

    if student.is_out {
        // Repeating the request must not open a second history record.
        debug!("sign-out of '{}' refused: already out", student.name);
        return Ok(Transition::Rejected(Rejection::AlreadyOut));
    }

    let tx = pool.conn.transaction()?;
    queries::mark_out(&tx, student.id, &now)?;
    queries::insert_history(&tx, student.id, &student.name, &now)?;
    tx.commit()?;

    info!("'{}' signed out at {}", student.name, time::to_display(&now));
    Ok(Transition::Applied)
}

/// Sign a student back in, closing their open history record.
///
/// If no open record exists (data inconsistency) the student's own state is
/// still cleared and the history is left unreconciled.
pub fn sign_in(pool: &mut DbPool, student_id: i64, now: NaiveDateTime) -> AppResult<Transition> {
    let student = queries::get_student(&pool.conn, student_id)?
        .ok_or(AppError::StudentNotFound(student_id))?;

    let time_out = match student.time_out {
        Some(t) if student.is_out => t,
        _ => {
            debug!("sign-in of '{}' refused: not out", student.name);
            return Ok(Transition::Rejected(Rejection::NotOut));
        }
    };

    let duration_minutes = time::minutes_between(&time_out, &now);

    let tx = pool.conn.transaction()?;
    if let Some(history_id) = queries::latest_open_history_id(&tx, student.id)? {
        queries::close_history(&tx, history_id, &now, duration_minutes)?;
    } else {
        debug!("no open history record for '{}'", student.name);
    }
    queries::mark_in(&tx, student.id)?;
    tx.commit()?;

    info!("'{}' signed in after {duration_minutes} min", student.name);
    Ok(Transition::Applied)
}
