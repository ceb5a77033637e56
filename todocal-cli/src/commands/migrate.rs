//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use todocal_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

/// Create the todos table if it does not exist
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to bootstrap database schema")?;

    println!("todos schema is up to date");
    Ok(())
}
