use crate::utils::time;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One absence. Open while `sign_in_time` is null; closed records carry the
/// computed duration. `student_name` is a snapshot taken at sign-out, so the
/// row stays displayable after renames or roster removal.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub student_id: Option<i64>,
    pub student_name: String,
    pub sign_out_time: NaiveDateTime,
    pub sign_in_time: Option<NaiveDateTime>,
    pub duration_minutes: Option<i64>,
    pub created_at: String,
}

impl HistoryRecord {
    pub fn is_open(&self) -> bool {
        self.sign_in_time.is_none()
    }

    pub fn sign_out_display(&self) -> String {
        time::to_display(&self.sign_out_time)
    }

    pub fn sign_in_display(&self) -> String {
        match &self.sign_in_time {
            Some(t) => time::to_display(t),
            None => "Still out".to_string(),
        }
    }

    pub fn duration_display(&self) -> String {
        match self.duration_minutes {
            Some(m) => format!("{m} min"),
            None => String::new(),
        }
    }
}
