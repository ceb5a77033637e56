//! Store trait for todo persistence (testable)

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Todo, TodoDraft};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Typed todo operations against a backing store.
///
/// Absence is a value (`Ok(None)`, empty vec), never an error.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Short backend name reported by the health check.
    fn backend(&self) -> &'static str;

    /// Insert a new row and return its generated id. `todo.id` is ignored.
    async fn create(&self, todo: &TodoDraft) -> Result<i64, StoreError>;

    /// Every row. Callers must not rely on ordering.
    async fn get_all(&self) -> Result<Vec<Todo>, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError>;

    /// Rows due on `date`.
    async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<Todo>, StoreError>;

    /// Replace title, description, due date and done flag of `todo.id`.
    /// No-op if the row does not exist.
    async fn update(&self, todo: &TodoDraft) -> Result<(), StoreError>;

    /// Hard delete. No-op if the row does not exist.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
