//! Domain models with validation at construction
//!
//! All user input is validated when converting a submission into a
//! [`TodoDraft`]. Invalid input returns [`ValidationError`]s, not panics.

pub mod validation;
pub mod due_date;
pub mod todo;
pub mod submission;

pub use validation::ValidationError;
pub use due_date::{format_due_date, parse_due_date};
pub use todo::{CalendarEvent, Todo, TodoDraft};
pub use submission::{DateQuery, IdParams, Scalar, TodoSubmission};
