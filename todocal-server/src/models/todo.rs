//! Todo record and its projections

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::due_date::format_due_date;

/// Suffix appended to the calendar title of completed todos
pub const DONE_MARK: &str = " ✔";

/// Persisted todo record.
///
/// `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated todo input, not yet persisted.
///
/// `id == 0` means "create"; any positive id targets an existing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDate,
    pub is_done: bool,
}

impl TodoDraft {
    /// Whether this draft should be inserted rather than updated.
    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    /// Same draft with the store-assigned id.
    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}

/// Calendar feed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    /// Due date as `YYYY-MM-DD`
    pub start: String,
    pub description: Option<String>,
    pub is_done: bool,
}

impl From<Todo> for CalendarEvent {
    fn from(t: Todo) -> Self {
        let title = if t.is_done {
            format!("{}{}", t.title, DONE_MARK)
        } else {
            t.title
        };

        Self {
            id: t.id,
            title,
            start: format_due_date(t.due_date),
            description: t.description,
            is_done: t.is_done,
        }
    }
}
