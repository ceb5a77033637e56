//! Response envelope and API error type
//!
//! Domain outcomes are never signalled through HTTP status codes: every
//! response is `200 OK` with a JSON body. Failures always carry
//! `success: false` and a human-readable `message`.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::StoreError;
use crate::models::{TodoDraft, ValidationError};

/// `{ success, todo?, message, error?, errors? }` wrapper for write and
/// failure responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<TodoDraft>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl Envelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            todo: None,
            message: message.into(),
            error: None,
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::success(message)
        }
    }

    pub fn with_todo(mut self, todo: TodoDraft) -> Self {
        self.todo = Some(todo);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Every way a request can fail, rendered as a failure [`Envelope`]
#[derive(Debug)]
pub enum ApiError {
    /// Rejected before reaching the store (e.g. `id <= 0`)
    Rejected { message: &'static str },

    /// Field-level validation failed
    Validation(Vec<ValidationError>),

    /// Request body or query could not be decoded at all
    Malformed { detail: String },

    /// Requested todo does not exist
    NotFound,

    /// Input was well-formed but unusable, with diagnostic text
    BadInput { message: &'static str, detail: String },

    /// Store failure, with diagnostic text
    Store { message: &'static str, source: StoreError },
}

/// Message shared by validation and decoding failures
pub const INVALID_DATA: &str = "Invalid data provided.";

/// Message for a missing todo
pub const NOT_FOUND: &str = "Task not found.";

impl ApiError {
    pub fn store(message: &'static str, source: StoreError) -> Self {
        Self::Store { message, source }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed {
            detail: detail.into(),
        }
    }

    /// Convert into the failure envelope sent to the caller.
    pub fn into_envelope(self) -> Envelope {
        match self {
            Self::Rejected { message } => Envelope::failure(message),
            Self::Validation(errors) => Envelope::failure(INVALID_DATA)
                .with_errors(errors.iter().map(ToString::to_string).collect()),
            Self::Malformed { detail } => {
                Envelope::failure(INVALID_DATA).with_errors(vec![detail])
            }
            Self::NotFound => Envelope::failure(NOT_FOUND),
            Self::BadInput { message, detail } => Envelope::failure(message).with_error(detail),
            Self::Store { message, source } => {
                Envelope::failure(message).with_error(source.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.into_envelope().into_response()
    }
}

impl From<Vec<ValidationError>> for ApiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}
