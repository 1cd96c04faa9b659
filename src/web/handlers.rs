//! HTTP handlers. Mutations redirect back to the page they came from;
//! rejected transitions redirect all the same (kiosk leniency), only an
//! unknown student id surfaces as 404.

use crate::core::{occupancy, roster, transitions};
use crate::db::queries;
use crate::errors::AppResult;
use crate::web::state::AppState;
use crate::web::views;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, Redirect};
use chrono::Local;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct AddStudentForm {
    pub name: String,
}

#[derive(Deserialize)]
pub struct CapacityForm {
    pub max_students: i64,
}

#[derive(Deserialize, Default)]
pub struct HistoryParams {
    #[serde(default)]
    pub search: String,
}

pub async fn kiosk(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let pool = state.db.lock().await;
    let students = queries::list_students(&pool.conn)?;
    let out_count = occupancy::current_out_count(&pool.conn)?;
    let max_students = occupancy::capacity(&pool.conn)?;

    Ok(Html(views::kiosk_page(&students, out_count, max_students)))
}

pub async fn sign_out(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i64>,
) -> AppResult<Redirect> {
    let mut pool = state.db.lock().await;
    transitions::sign_out(&mut pool, student_id, Local::now().naive_local())?;
    Ok(Redirect::to("/"))
}

pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i64>,
) -> AppResult<Redirect> {
    let mut pool = state.db.lock().await;
    transitions::sign_in(&mut pool, student_id, Local::now().naive_local())?;
    Ok(Redirect::to("/"))
}

pub async fn admin(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let pool = state.db.lock().await;
    let students = queries::list_students(&pool.conn)?;
    let max_students = occupancy::capacity(&pool.conn)?;

    Ok(Html(views::admin_page(&students, max_students)))
}

pub async fn add_student(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddStudentForm>,
) -> AppResult<Redirect> {
    let pool = state.db.lock().await;
    roster::add_student(&pool.conn, &form.name, Local::now().naive_local())?;
    Ok(Redirect::to("/admin"))
}

pub async fn remove_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i64>,
) -> AppResult<Redirect> {
    let pool = state.db.lock().await;
    roster::remove_student(&pool.conn, student_id)?;
    Ok(Redirect::to("/admin"))
}

pub async fn set_max_students(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CapacityForm>,
) -> AppResult<Redirect> {
    let pool = state.db.lock().await;
    roster::set_capacity(&pool.conn, form.max_students)?;
    Ok(Redirect::to("/admin"))
}

pub async fn history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> AppResult<Html<String>> {
    let pool = state.db.lock().await;
    let records = queries::search_history(&pool.conn, params.search.trim())?;

    Ok(Html(views::history_page(&records, &params.search)))
}
