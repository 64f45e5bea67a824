//! Student CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{NewStudent, StudentPatch};
use crate::response::{success_data, success_rows};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// A path id that is not an `i64` cannot match any row; callers treat `None` as "no such student".
fn parse_id(id_str: &str) -> Option<i64> {
    id_str.trim().parse().ok()
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewStudent>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate_new(&body)?;
    let rows = state.repo.insert(&body.name, &body.address).await?;
    tracing::info!(rows, "student created");
    Ok(success_rows(StatusCode::CREATED, "success create student", rows))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = state.repo.get_all().await?;
    Ok(success_data("success get students", students))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str).ok_or_else(|| AppError::NotFound("student not found".into()))?;
    let student = state.repo.get_by_id(id).await?;
    Ok(success_data("success get student", student))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<StudentPatch>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate_patch(&body)?;
    let rows = match parse_id(&id_str) {
        Some(id) => state.repo.update(id, &body).await?,
        None => 0,
    };
    tracing::info!(id = %id_str, rows, "student updated");
    Ok(success_rows(StatusCode::OK, "success update student", rows))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let rows = match parse_id(&id_str) {
        Some(id) => state.repo.delete(id).await?,
        None => 0,
    };
    tracing::info!(id = %id_str, rows, "student deleted");
    Ok(success_rows(StatusCode::OK, "success delete student", rows))
}
