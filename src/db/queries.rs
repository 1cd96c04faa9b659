use crate::errors::{AppError, AppResult};
use crate::models::history::HistoryRecord;
use crate::models::settings::{DEFAULT_MAX_STUDENTS, Settings};
use crate::models::student::Student;
use crate::utils::time;
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Students
// ---------------------------

pub fn map_student(row: &Row<'_>) -> Result<Student> {
    let time_out: Option<String> = row.get("time_out")?;
    let time_out = time_out
        .map(|s| {
            time::from_db(&s).map_err(|_| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(AppError::InvalidTimestamp(s.clone())),
                )
            })
        })
        .transpose()?;

    Ok(Student {
        id: row.get("id")?,
        name: row.get("name")?,
        is_out: row.get::<_, i64>("is_out")? == 1,
        time_out,
        created_at: row.get("created_at")?,
    })
}

pub fn list_students(conn: &Connection) -> AppResult<Vec<Student>> {
    let mut stmt = conn.prepare("SELECT * FROM students ORDER BY name")?;
    let rows = stmt.query_map([], map_student)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_student(conn: &Connection, id: i64) -> AppResult<Option<Student>> {
    let mut stmt = conn.prepare("SELECT * FROM students WHERE id = ?1")?;
    Ok(stmt.query_row(params![id], map_student).optional()?)
}

/// Exact, case-sensitive name match (SQLite `=` on TEXT).
pub fn student_name_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM students WHERE name = ?1 LIMIT 1")?;
    Ok(stmt.exists(params![name])?)
}

pub fn insert_student(conn: &Connection, name: &str, now: &NaiveDateTime) -> AppResult<()> {
    conn.execute(
        "INSERT INTO students (name, is_out, time_out, created_at)
         VALUES (?1, 0, NULL, ?2)",
        params![name, time::to_db(now)],
    )?;
    Ok(())
}

/// Delete by id, returning the number of rows removed.
pub fn delete_student(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM students WHERE id = ?1", params![id])?)
}

pub fn count_students_out(conn: &Connection) -> AppResult<i64> {
    let mut stmt = conn.prepare("SELECT COUNT(*) FROM students WHERE is_out = 1")?;
    Ok(stmt.query_row([], |row| row.get(0))?)
}

pub fn mark_out(conn: &Connection, id: i64, now: &NaiveDateTime) -> AppResult<()> {
    conn.execute(
        "UPDATE students SET is_out = 1, time_out = ?2 WHERE id = ?1",
        params![id, time::to_db(now)],
    )?;
    Ok(())
}

pub fn mark_in(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE students SET is_out = 0, time_out = NULL WHERE id = ?1",
        params![id],
    )?;
    Ok(())
}

// ---------------------------
// Settings
// ---------------------------

pub fn get_settings(conn: &Connection) -> AppResult<Option<Settings>> {
    let mut stmt = conn.prepare("SELECT id, max_students FROM settings LIMIT 1")?;
    let settings = stmt
        .query_row([], |row| {
            Ok(Settings {
                id: row.get(0)?,
                max_students: row.get(1)?,
            })
        })
        .optional()?;
    Ok(settings)
}

pub fn max_students(conn: &Connection) -> AppResult<i64> {
    Ok(get_settings(conn)?
        .map(|s| s.max_students)
        .unwrap_or(DEFAULT_MAX_STUDENTS))
}

/// Overwrite the single settings row, creating it if absent.
pub fn set_max_students(conn: &Connection, value: i64) -> AppResult<()> {
    conn.execute(
        "INSERT INTO settings (id, max_students) VALUES (1, ?1)
         ON CONFLICT(id) DO UPDATE SET max_students = excluded.max_students",
        params![value],
    )?;
    Ok(())
}

// ---------------------------
// History
// ---------------------------

pub fn map_history(row: &Row<'_>) -> Result<HistoryRecord> {
    let parse = |s: String| {
        time::from_db(&s).map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(s.clone())),
            )
        })
    };

    let sign_out_time: String = row.get("sign_out_time")?;
    let sign_in_time: Option<String> = row.get("sign_in_time")?;

    Ok(HistoryRecord {
        id: row.get("id")?,
        student_id: row.get("student_id")?,
        student_name: row.get("student_name")?,
        sign_out_time: parse(sign_out_time)?,
        sign_in_time: sign_in_time.map(parse).transpose()?,
        duration_minutes: row.get("duration_minutes")?,
        created_at: row.get("created_at")?,
    })
}

/// Open a new history record at sign-out. `student_name` is snapshotted so
/// the row survives renames and roster removal.
pub fn insert_history(
    conn: &Connection,
    student_id: i64,
    student_name: &str,
    sign_out: &NaiveDateTime,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO history (student_id, student_name, sign_out_time, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            student_id,
            student_name,
            time::to_db(sign_out),
            time::to_db(sign_out)
        ],
    )?;
    Ok(())
}

/// Most recent open record for a student, if any.
pub fn latest_open_history_id(conn: &Connection, student_id: i64) -> AppResult<Option<i64>> {
    let mut stmt = conn.prepare(
        "SELECT id FROM history
         WHERE student_id = ?1 AND sign_in_time IS NULL
         ORDER BY sign_out_time DESC
         LIMIT 1",
    )?;
    Ok(stmt.query_row(params![student_id], |row| row.get(0)).optional()?)
}

pub fn close_history(
    conn: &Connection,
    history_id: i64,
    sign_in: &NaiveDateTime,
    duration_minutes: i64,
) -> AppResult<()> {
    conn.execute(
        "UPDATE history SET sign_in_time = ?2, duration_minutes = ?3 WHERE id = ?1",
        params![history_id, time::to_db(sign_in), duration_minutes],
    )?;
    Ok(())
}

/// All records, optionally filtered by a substring of the name snapshot,
/// most recent sign-out first.
pub fn search_history(conn: &Connection, search: &str) -> AppResult<Vec<HistoryRecord>> {
    let mut out = Vec::new();

    if search.is_empty() {
        let mut stmt = conn.prepare("SELECT * FROM history ORDER BY sign_out_time DESC")?;
        let rows = stmt.query_map([], map_history)?;
        for r in rows {
            out.push(r?);
        }
    } else {
        let mut stmt = conn.prepare(
            "SELECT * FROM history
             WHERE student_name LIKE ?1
             ORDER BY sign_out_time DESC",
        )?;
        let pattern = format!("%{}%", search);
        let rows = stmt.query_map(params![pattern], map_history)?;
        for r in rows {
            out.push(r?);
        }
    }

    Ok(out)
}
