//! Data-access layer - store trait, backends, pool and schema bootstrap
//!
//! # Design Principles
//!
//! - The store is injected at construction; no global connection state
//! - One pooled connection per operation, released on every exit path
//! - Failures are logged with operation context and returned unmodified
//! - Update/delete on a missing id is a silent no-op

pub mod store;
pub mod postgres;
pub mod memory;
pub mod pool;
pub mod migrations;

pub use store::{StoreError, TodoStore};
pub use postgres::PgTodoStore;
pub use memory::MemoryTodoStore;
pub use pool::{create_pool, create_pool_with_options};
