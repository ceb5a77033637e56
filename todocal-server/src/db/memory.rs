//! In-process todo store
//!
//! Backs `serve --in-memory` and the router tests. Ids are assigned
//! monotonically starting at 1 and never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use super::store::{StoreError, TodoStore};
use crate::models::{Todo, TodoDraft};

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Todo>,
}

/// Todo store held in memory
#[derive(Default)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, todo: &TodoDraft) -> Result<i64, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;

        inner.rows.insert(
            id,
            Todo {
                id,
                title: todo.title.clone(),
                description: todo.description.clone(),
                due_date: todo.due_date,
                is_done: todo.is_done,
                created_at: Utc::now(),
            },
        );
        tracing::debug!(id, "memory store: inserted todo");
        Ok(id)
    }

    async fn get_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<Todo>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .rows
            .values()
            .filter(|t| t.due_date == date)
            .cloned()
            .collect())
    }

    async fn update(&self, todo: &TodoDraft) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(row) = inner.rows.get_mut(&todo.id) {
            row.title = todo.title.clone();
            row.description = todo.description.clone();
            row.due_date = todo.due_date;
            row.is_done = todo.is_done;
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }
}
