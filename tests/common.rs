#![allow(dead_code)]
use chrono::NaiveDateTime;
use hallpass::core::roster;
use hallpass::db::pool::DbPool;
use hallpass::db::{initialize::init_db, queries};
use hallpass::models::history::HistoryRecord;
use hallpass::models::student::Student;

/// Fresh in-memory database with the schema and default settings seeded.
pub fn test_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init schema");
    pool
}

/// Parse a fixed test timestamp ("YYYY-MM-DD HH:MM:SS").
pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("timestamp")
}

/// Add a student and return their id.
pub fn add(pool: &DbPool, name: &str) -> i64 {
    let outcome =
        roster::add_student(&pool.conn, name, ts("2025-09-01 07:30:00")).expect("add student");
    assert!(outcome.is_applied(), "student '{name}' not added");
    student(pool, name).id
}

/// Look a student up by name, panicking if missing.
pub fn student(pool: &DbPool, name: &str) -> Student {
    queries::list_students(&pool.conn)
        .expect("list students")
        .into_iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("student '{name}' missing"))
}

/// All history records, most recent sign-out first.
pub fn all_history(pool: &DbPool) -> Vec<HistoryRecord> {
    queries::search_history(&pool.conn, "").expect("load history")
}

/// `is_out` iff `time_out` set, for every student; and `sign_in_time` iff
/// `duration_minutes`, for every history record.
pub fn assert_invariants(pool: &DbPool) {
    for s in queries::list_students(&pool.conn).expect("list students") {
        assert!(
            s.state_is_consistent(),
            "student '{}' has is_out={} but time_out={:?}",
            s.name,
            s.is_out,
            s.time_out
        );
    }
    for r in all_history(pool) {
        assert_eq!(
            r.sign_in_time.is_none(),
            r.duration_minutes.is_none(),
            "history record {} has mismatched sign_in_time/duration_minutes",
            r.id
        );
    }
}
