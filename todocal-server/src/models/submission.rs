//! Raw request input and its validation
//!
//! The calendar UI posts form-encoded fields while API clients send JSON,
//! so every incoming field is read as a loose [`Scalar`] and converted here.

use serde::Deserialize;

use super::due_date::parse_due_date;
use super::todo::TodoDraft;
use super::ValidationError;

/// Blank-to-absent conversion. Non-blank text is kept exactly as sent,
/// surrounding whitespace included.
fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// A loosely typed input value (JSON scalar or form string)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Scalar {
    /// Read as an integer id. Blank text reads as 0.
    pub fn as_id(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(s) if s.trim().is_empty() => Some(0),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Bool(_) => None,
        }
    }

    /// Read as a flag. Accepts checkbox-style `on`/`off` as well.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(0) => Some(false),
            Self::Int(1) => Some(true),
            Self::Int(_) => None,
            Self::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "1" | "yes" => Some(true),
                "false" | "off" | "0" | "no" | "" => Some(false),
                _ => None,
            },
        }
    }

    /// Read as text.
    pub fn to_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Lenient id lookup: missing or unparseable ids read as 0.
pub fn id_or_zero(id: Option<&Scalar>) -> i64 {
    id.and_then(Scalar::as_id).unwrap_or(0)
}

/// `?id=` / `{ "id": .. }` parameter for single-item operations
#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    #[serde(default, alias = "todoId", alias = "TodoId")]
    pub id: Option<Scalar>,
}

impl IdParams {
    /// Id taken from a `/{id}` path segment.
    pub fn from_path(segment: String) -> Self {
        Self {
            id: Some(Scalar::Text(segment)),
        }
    }

    pub fn id(&self) -> i64 {
        id_or_zero(self.id.as_ref())
    }
}

/// `?date=` parameter for the date-filtered listing
#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

/// Create/update payload as submitted by the caller
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoSubmission {
    #[serde(default, alias = "todoId", alias = "TodoId")]
    pub id: Option<Scalar>,
    #[serde(default, alias = "Title")]
    pub title: Option<Scalar>,
    #[serde(default, alias = "Description")]
    pub description: Option<Scalar>,
    #[serde(default, alias = "DueDate")]
    pub due_date: Option<Scalar>,
    #[serde(default, alias = "IsDone")]
    pub is_done: Option<Scalar>,
}

impl TodoSubmission {
    /// Validate every field, collecting all errors rather than stopping
    /// at the first one.
    pub fn validate(&self) -> Result<TodoDraft, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let id = match &self.id {
            None => Some(0),
            Some(raw) => match raw.as_id() {
                Some(id) if id < 0 => {
                    errors.push(ValidationError::OutOfRange {
                        field: "id",
                        reason: "must not be negative",
                    });
                    None
                }
                Some(id) => Some(id),
                None => {
                    errors.push(ValidationError::InvalidFormat {
                        field: "id",
                        reason: "must be an integer",
                    });
                    None
                }
            },
        };

        let title = match self.title.as_ref().map(Scalar::to_text) {
            None => {
                errors.push(ValidationError::Missing { field: "title" });
                None
            }
            Some(text) => {
                let title = non_blank(text);
                if title.is_none() {
                    errors.push(ValidationError::Empty { field: "title" });
                }
                title
            }
        };

        let description = self
            .description
            .as_ref()
            .map(Scalar::to_text)
            .and_then(non_blank);

        let due_date = match self.due_date.as_ref().map(Scalar::to_text) {
            None => {
                errors.push(ValidationError::Missing { field: "dueDate" });
                None
            }
            Some(text) if text.trim().is_empty() => {
                errors.push(ValidationError::Missing { field: "dueDate" });
                None
            }
            Some(text) => {
                let parsed = parse_due_date(&text);
                if parsed.is_none() {
                    errors.push(ValidationError::InvalidFormat {
                        field: "dueDate",
                        reason: "expected a date such as 2024-03-01",
                    });
                }
                parsed
            }
        };

        let is_done = match &self.is_done {
            None => Some(false),
            Some(raw) => {
                let flag = raw.as_bool();
                if flag.is_none() {
                    errors.push(ValidationError::InvalidFormat {
                        field: "isDone",
                        reason: "expected true or false",
                    });
                }
                flag
            }
        };

        match (id, title, due_date, is_done) {
            (Some(id), Some(title), Some(due_date), Some(is_done)) if errors.is_empty() => {
                Ok(TodoDraft {
                    id,
                    title,
                    description,
                    due_date,
                    is_done,
                })
            }
            _ => Err(errors),
        }
    }
}
