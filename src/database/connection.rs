use std::time::Duration;

use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::settings::StoreSettings;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(settings: &StoreSettings) -> Result<DbPool> {
    let manager = build_manager(settings);
    build_pool(manager, settings)
}

fn build_manager(settings: &StoreSettings) -> SqliteConnectionManager {
    let manager = if settings.is_in_memory() {
        SqliteConnectionManager::memory()
    } else {
        SqliteConnectionManager::file(&settings.database_path)
    };

    let busy_timeout = Duration::from_millis(settings.busy_timeout_ms);
    manager.with_init(move |conn| {
        conn.busy_timeout(busy_timeout)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    })
}

fn build_pool(manager: SqliteConnectionManager, settings: &StoreSettings) -> Result<DbPool> {
    let mut builder = r2d2::Pool::builder().max_size(settings.max_connections.max(1));

    // Recycling the only in-memory connection would drop the whole database
    if settings.is_in_memory() {
        builder = builder.max_lifetime(None).idle_timeout(None);
    }

    builder
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
