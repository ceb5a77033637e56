//! Schema bootstrap for the todos table
//!
//! Idempotent; safe to run on every start.

use sqlx::PgPool;

/// Create the `todos` table and its due-date index if missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running todo schema bootstrap...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL CHECK (length(btrim(title)) > 0),
            description TEXT,
            due_date DATE NOT NULL,
            is_done BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_todos_due_date ON todos (due_date)")
        .execute(pool)
        .await?;

    tracing::info!("Todo schema ready");
    Ok(())
}
