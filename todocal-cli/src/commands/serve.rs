//! HTTP server command
//!
//! Runs the todocal HTTP server against PostgreSQL, or against an
//! in-memory store with `--in-memory`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use todocal_server::db::{create_pool_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};
use todocal_server::{run_server, MemoryTodoStore, PgTodoStore, ServerConfig, TodoStore};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TODOCAL_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "TODOCAL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Directory with the calendar UI (index.html and assets)
    #[arg(long, env = "TODOCAL_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Keep todos in memory instead of PostgreSQL (lost on exit).
    /// Any database URL is ignored.
    #[arg(long)]
    pub in_memory: bool,

    /// Do not create the todos table on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    if let Some(dir) = &args.static_dir {
        anyhow::ensure!(dir.is_dir(), "static dir {} does not exist", dir.display());
    }

    let store: Arc<dyn TodoStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; todos are lost on exit");
        Arc::new(MemoryTodoStore::new())
    } else {
        let database_url = args
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env or .env, or pass --in-memory")?;

        let pool = create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;

        if !args.skip_migrations {
            migrations::run(&pool)
                .await
                .context("Failed to bootstrap database schema")?;
        }

        Arc::new(PgTodoStore::new(pool))
    };

    tracing::info!("Starting todocal server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        static_dir: args.static_dir,
    };

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
