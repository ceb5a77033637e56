//! Todo endpoints
//!
//! Reads return the raw payload (a list or a record); writes and every
//! failure return an [`Envelope`]. The calendar UI depends on this split.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::http::error::{ApiError, Envelope};
use crate::http::extractors::Input;
use crate::http::server::AppState;
use crate::models::{parse_due_date, CalendarEvent, DateQuery, IdParams, Todo, TodoSubmission};

/// GET /Todo/GetEvents - every todo as a calendar event
#[instrument(skip(state))]
async fn get_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let todos = state.store.get_all().await.map_err(|e| {
        tracing::error!(error = %e, "error getting all events");
        ApiError::store("Failed to retrieve events.", e)
    })?;

    tracing::info!(count = todos.len(), "retrieved calendar events");
    Ok(Json(todos.into_iter().map(CalendarEvent::from).collect()))
}

/// GET /Todo/GetByDate?date= - todos due on one day
#[instrument(skip(state, params), fields(date = ?params.date))]
async fn get_by_date(
    State(state): State<Arc<AppState>>,
    Input(params): Input<DateQuery>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    const FAILED: &str = "Failed to retrieve tasks for the selected date.";

    let raw = params.date.unwrap_or_default();
    let date = parse_due_date(&raw).ok_or_else(|| {
        tracing::warn!(date = %raw, "unparseable date for GetByDate");
        ApiError::BadInput {
            message: FAILED,
            detail: format!("invalid date: '{}'", raw),
        }
    })?;

    let todos = state.store.get_by_date(date).await.map_err(|e| {
        tracing::error!(date = %date, error = %e, "error getting todos for date");
        ApiError::store(FAILED, e)
    })?;

    tracing::info!(date = %date, count = todos.len(), "retrieved todos for date");
    Ok(Json(todos))
}

/// GET /Todo/GetById?id= - a single todo
#[instrument(skip(state, params))]
async fn get_by_id(
    State(state): State<Arc<AppState>>,
    Input(params): Input<IdParams>,
) -> Result<Json<Todo>, ApiError> {
    let id = params.id();
    if id <= 0 {
        return Err(ApiError::Rejected {
            message: "Invalid task ID provided.",
        });
    }

    let todo = state.store.get_by_id(id).await.map_err(|e| {
        tracing::error!(id, error = %e, "error retrieving todo");
        ApiError::store("Failed to retrieve task.", e)
    })?;

    match todo {
        Some(todo) => {
            tracing::info!(id, "retrieved todo");
            Ok(Json(todo))
        }
        None => {
            tracing::warn!(id, "todo not found");
            Err(ApiError::NotFound)
        }
    }
}

/// GET /Todo/GetById/{id} - path form of [`get_by_id`]
async fn get_by_id_path(
    state: State<Arc<AppState>>,
    Path(segment): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    get_by_id(state, Input(IdParams::from_path(segment))).await
}

/// POST /Todo/AddEdit - create (`id` 0 or absent) or update a todo
#[instrument(skip(state, submission))]
async fn add_edit(
    State(state): State<Arc<AppState>>,
    Input(submission): Input<TodoSubmission>,
) -> Result<Envelope, ApiError> {
    let draft = submission.validate().map_err(|errors| {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!(errors = %joined, "invalid todo submission");
        ApiError::Validation(errors)
    })?;

    if draft.is_new() {
        let id = state.store.create(&draft).await.map_err(|e| {
            tracing::error!(title = %draft.title, error = %e, "error creating todo");
            ApiError::store("Failed to save task.", e)
        })?;

        tracing::info!(id, "created todo");
        Ok(Envelope::success("Task added successfully.").with_todo(draft.with_id(id)))
    } else {
        state.store.update(&draft).await.map_err(|e| {
            tracing::error!(id = draft.id, error = %e, "error updating todo");
            ApiError::store("Failed to save task.", e)
        })?;

        tracing::info!(id = draft.id, "updated todo");
        Ok(Envelope::success("Task updated successfully.").with_todo(draft))
    }
}

/// POST /Todo/Delete - hard delete; succeeds even if the row was absent
#[instrument(skip(state, params))]
async fn delete(
    State(state): State<Arc<AppState>>,
    Input(params): Input<IdParams>,
) -> Result<Envelope, ApiError> {
    let id = params.id();
    if id <= 0 {
        return Err(ApiError::Rejected {
            message: "Invalid task ID provided for deletion.",
        });
    }

    state.store.delete(id).await.map_err(|e| {
        tracing::error!(id, error = %e, "error deleting todo");
        ApiError::store("Failed to delete task.", e)
    })?;

    tracing::info!(id, "deleted todo");
    Ok(Envelope::success("Task deleted successfully."))
}

/// POST /Todo/Delete/{id} - path form of [`delete`]
async fn delete_path(
    state: State<Arc<AppState>>,
    Path(segment): Path<String>,
) -> Result<Envelope, ApiError> {
    delete(state, Input(IdParams::from_path(segment))).await
}

/// Todo routes. `GetById` and `Delete` also take the id as a trailing
/// path segment (`/Todo/GetById/5`).
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/Todo/GetEvents", get(get_events))
        .route("/Todo/GetByDate", get(get_by_date))
        .route("/Todo/GetById", get(get_by_id))
        .route("/Todo/GetById/{id}", get(get_by_id_path))
        .route("/Todo/AddEdit", post(add_edit))
        .route("/Todo/Delete", post(delete))
        .route("/Todo/Delete/{id}", post(delete_path))
}
