use std::time::Duration;

use log::error;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::StoreSettings;
use crate::errors::{TournamentError, TournamentResult};

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(settings: &StoreSettings) -> TournamentResult<DbPool> {
    let manager = build_manager(SqliteConnectionManager::file(&settings.database_path), settings);
    build_pool(manager, settings)
}

/// Single-connection pool over a private in-memory database. The pool keeps
/// its one connection alive, so every checkout sees the same data.
pub fn create_memory_pool() -> TournamentResult<DbPool> {
    let settings = StoreSettings::default();
    let manager = build_manager(SqliteConnectionManager::memory(), &settings);
    r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .map_err(|e| TournamentError::connection(format!("Failed to create memory pool: {e}")))
}

fn build_manager(
    manager: SqliteConnectionManager,
    settings: &StoreSettings,
) -> SqliteConnectionManager {
    let busy_timeout = Duration::from_millis(settings.busy_timeout_ms);
    manager.with_init(move |conn| {
        conn.busy_timeout(busy_timeout)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    })
}

fn build_pool(
    manager: SqliteConnectionManager,
    settings: &StoreSettings,
) -> TournamentResult<DbPool> {
    r2d2::Pool::builder()
        .max_size(settings.pool_max_size.max(1))
        .connection_timeout(Duration::from_secs(settings.connection_timeout_secs.max(1)))
        .build(manager)
        .map_err(|e| {
            error!("Failed to create database connection pool: {e}");
            TournamentError::connection(format!("Failed to create connection pool: {e}"))
        })
}

pub fn get_connection(pool: &DbPool) -> TournamentResult<DbConn> {
    pool.get().map_err(|e| {
        error!("Failed to get database connection from pool: {e}");
        TournamentError::connection(format!("Failed to get connection from pool: {e}"))
    })
}
