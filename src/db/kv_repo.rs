use rusqlite::{params, Connection};

use crate::error::MobihwError;

pub fn get(conn: &Connection, key: &str) -> Result<Option<String>, MobihwError> {
    let mut stmt = conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
    let mut rows = stmt.query(params![key])?;
    match rows.next()? {
        Some(row) => Ok(Some(row.get(0)?)),
        None => Ok(None),
    }
}

pub fn set(conn: &Connection, key: &str, value: &str) -> Result<(), MobihwError> {
    conn.execute(
        "INSERT INTO kv (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

/// Returns whether a row was deleted.
pub fn remove(conn: &Connection, key: &str) -> Result<bool, MobihwError> {
    let changed = conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
    Ok(changed > 0)
}
