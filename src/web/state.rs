use crate::db::pool::DbPool;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared server state. The single SQLite connection sits behind an async
/// mutex, which also serializes the capacity check against the writes it
/// guards.
pub struct AppState {
    pub db: Mutex<DbPool>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Arc<Self> {
        Arc::new(Self {
            db: Mutex::new(pool),
        })
    }
}
