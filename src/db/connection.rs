use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::error::MobihwError;

use super::migrations;

/// Open the database at `path`, creating parent directories and the schema
/// on first use.
pub fn open_db(path: &Path) -> Result<Connection, MobihwError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            MobihwError::storage(format!("cannot create {}: {e}", parent.display()))
        })?;
    }
    let conn = Connection::open(path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// A throwaway database, used by tests and embedders that persist elsewhere.
pub fn open_in_memory() -> Result<Connection, MobihwError> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

fn configure_connection(conn: &Connection) -> Result<(), MobihwError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}
