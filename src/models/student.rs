use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,               // ⇔ students.name (TEXT, UNIQUE)
    pub is_out: bool,               // ⇔ students.is_out (INT 0/1)
    pub time_out: Option<NaiveDateTime>, // ⇔ students.time_out (TEXT, set iff is_out)
    pub created_at: String,         // ⇔ students.created_at (TEXT)
}

impl Student {
    /// Kiosk display of the moment the student left, empty while in.
    pub fn time_out_display(&self) -> String {
        self.time_out
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    /// `time_out` must be set exactly when the student is out.
    pub fn state_is_consistent(&self) -> bool {
        self.is_out == self.time_out.is_some()
    }
}
