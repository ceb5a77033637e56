//! PostgreSQL todo store
//!
//! Every operation acquires one connection from the pool for its own
//! duration. The connection guard is dropped on success, on an empty
//! result and on error alike, returning it to the pool.

use std::fmt::Display;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row};

use super::store::{StoreError, TodoStore};
use crate::models::{Todo, TodoDraft};

const SELECT_ALL: &str = r#"
    SELECT id, title, description, due_date, is_done, created_at
    FROM todos
    ORDER BY id
"#;

const SELECT_BY_ID: &str = r#"
    SELECT id, title, description, due_date, is_done, created_at
    FROM todos
    WHERE id = $1
"#;

const SELECT_BY_DATE: &str = r#"
    SELECT id, title, description, due_date, is_done, created_at
    FROM todos
    WHERE due_date = $1
    ORDER BY id
"#;

/// Todo store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn conn(&self) -> Result<PoolConnection<Postgres>, sqlx::Error> {
        self.pool.acquire().await
    }

    async fn insert(&self, todo: &TodoDraft) -> Result<i64, sqlx::Error> {
        let mut conn = self.conn().await?;
        let row = sqlx::query(
            r#"
            INSERT INTO todos (title, description, due_date, is_done)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&todo.title)
        .bind(todo.description.as_deref())
        .bind(todo.due_date)
        .bind(todo.is_done)
        .fetch_one(&mut *conn)
        .await?;

        row.try_get("id")
    }

    async fn select_all(&self) -> Result<Vec<Todo>, sqlx::Error> {
        let mut conn = self.conn().await?;
        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(&mut *conn)
            .await?;

        rows.iter().map(map_row).collect()
    }

    async fn select_by_id(&self, id: i64) -> Result<Option<Todo>, sqlx::Error> {
        let mut conn = self.conn().await?;
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        row.as_ref().map(map_row).transpose()
    }

    async fn select_by_date(&self, date: NaiveDate) -> Result<Vec<Todo>, sqlx::Error> {
        let mut conn = self.conn().await?;
        let rows = sqlx::query(SELECT_BY_DATE)
            .bind(date)
            .fetch_all(&mut *conn)
            .await?;

        rows.iter().map(map_row).collect()
    }

    async fn update_row(&self, todo: &TodoDraft) -> Result<(), sqlx::Error> {
        let mut conn = self.conn().await?;
        // Affected-row count is deliberately not checked: a missing id is a no-op.
        sqlx::query(
            r#"
            UPDATE todos
            SET title = $2, description = $3, due_date = $4, is_done = $5
            WHERE id = $1
            "#,
        )
        .bind(todo.id)
        .bind(&todo.title)
        .bind(todo.description.as_deref())
        .bind(todo.due_date)
        .bind(todo.is_done)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    async fn delete_row(&self, id: i64) -> Result<(), sqlx::Error> {
        let mut conn = self.conn().await?;
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }
}

/// Map a `todos` row to a record, column by column.
fn map_row(row: &PgRow) -> Result<Todo, sqlx::Error> {
    Ok(Todo {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        due_date: row.try_get("due_date")?,
        is_done: row.try_get("is_done")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Log a store failure with its operation context and pass it on.
fn logged(op: &'static str, key: &dyn Display, error: sqlx::Error) -> StoreError {
    tracing::error!(op, key = %key, error = %error, "todo store operation failed");
    StoreError::from(error)
}

#[async_trait]
impl TodoStore for PgTodoStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn create(&self, todo: &TodoDraft) -> Result<i64, StoreError> {
        self.insert(todo)
            .await
            .map_err(|e| logged("create", &todo.title, e))
    }

    async fn get_all(&self) -> Result<Vec<Todo>, StoreError> {
        self.select_all().await.map_err(|e| logged("get_all", &"*", e))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        self.select_by_id(id)
            .await
            .map_err(|e| logged("get_by_id", &id, e))
    }

    async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<Todo>, StoreError> {
        self.select_by_date(date)
            .await
            .map_err(|e| logged("get_by_date", &date, e))
    }

    async fn update(&self, todo: &TodoDraft) -> Result<(), StoreError> {
        self.update_row(todo)
            .await
            .map_err(|e| logged("update", &todo.id, e))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.delete_row(id)
            .await
            .map_err(|e| logged("delete", &id, e))
    }
}
