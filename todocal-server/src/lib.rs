//! todocal-server: task tracking with a calendar feed
//!
//! Exposes CRUD operations over todo records stored in PostgreSQL (or in
//! memory) and a JSON event feed for a calendar UI.

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryTodoStore, PgTodoStore, StoreError, TodoStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use models::{CalendarEvent, Todo, TodoDraft};
