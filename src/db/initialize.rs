use crate::errors::AppResult;
use crate::models::settings::DEFAULT_MAX_STUDENTS;
use rusqlite::{Connection, params};

/// Initialize the database: create the schema if needed and seed the single
/// settings row with the default capacity.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL UNIQUE,
            is_out     INTEGER NOT NULL DEFAULT 0 CHECK(is_out IN (0,1)),
            time_out   TEXT,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS settings (
            id           INTEGER PRIMARY KEY,
            max_students INTEGER NOT NULL CHECK(max_students > 0)
        );

        CREATE TABLE IF NOT EXISTS history (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id       INTEGER,
            student_name     TEXT NOT NULL,
            sign_out_time    TEXT NOT NULL,
            sign_in_time     TEXT,
            duration_minutes INTEGER,
            created_at       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_history_sign_out ON history(sign_out_time);
        CREATE INDEX IF NOT EXISTS idx_history_open ON history(student_id, sign_in_time);
        "#,
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO settings (id, max_students) VALUES (1, ?1)",
        params![DEFAULT_MAX_STUDENTS],
    )?;

    Ok(())
}
