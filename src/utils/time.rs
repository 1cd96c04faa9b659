//! Timestamp formats shared by the DB layer and the views.

use chrono::NaiveDateTime;

/// Storage format for all timestamp columns (TEXT).
pub const DB_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display format used on the history page.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn to_db(dt: &NaiveDateTime) -> String {
    dt.format(DB_FORMAT).to_string()
}

pub fn from_db(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, DB_FORMAT)
}

pub fn to_display(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

/// Whole minutes elapsed between two timestamps, floored.
pub fn minutes_between(start: &NaiveDateTime, end: &NaiveDateTime) -> i64 {
    (*end - *start).num_seconds().div_euclid(60)
}
