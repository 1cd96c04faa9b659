pub mod handlers;
pub mod state;
pub mod views;

use axum::Router;
use axum::routing::{get, post};
use state::AppState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::kiosk))
        .route("/sign_out/{student_id}", get(handlers::sign_out))
        .route("/sign_in/{student_id}", get(handlers::sign_in))
        .route("/admin", get(handlers::admin))
        .route("/admin/add_student", post(handlers::add_student))
        .route("/admin/remove_student/{student_id}", get(handlers::remove_student))
        .route("/admin/set_max_students", post(handlers::set_max_students))
        .route("/admin/history", get(handlers::history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
