use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tracing::warn;

use crate::error::MobihwError;
use crate::models::{Cadence, TaskState};

use super::kv_repo;

pub const STATE_KEY: &str = "tasks_state";
pub const DAILY_RESET_KEY: &str = "daily_reset_at";
pub const WEEKLY_RESET_KEY: &str = "weekly_reset_at";
pub const BARRIER_ALARM_KEY: &str = "barrier_alarm_enabled";

fn marker_key(cadence: Cadence) -> &'static str {
    match cadence {
        Cadence::Daily => DAILY_RESET_KEY,
        Cadence::Weekly => WEEKLY_RESET_KEY,
    }
}

/// Load the character blob. A missing or unreadable blob yields empty state.
pub fn load_state(conn: &Connection) -> Result<TaskState, MobihwError> {
    let Some(blob) = kv_repo::get(conn, STATE_KEY)? else {
        return Ok(TaskState::default());
    };
    match serde_json::from_str(&blob) {
        Ok(state) => Ok(state),
        Err(e) => {
            warn!(error = %e, "stored task state is unreadable, starting empty");
            Ok(TaskState::default())
        }
    }
}

pub fn save_state(conn: &Connection, state: &TaskState) -> Result<(), MobihwError> {
    let blob = serde_json::to_string(state)?;
    kv_repo::set(conn, STATE_KEY, &blob)
}

/// A marker that does not parse is treated as never reset.
pub fn load_marker(conn: &Connection, cadence: Cadence) -> Result<Option<DateTime<Utc>>, MobihwError> {
    let Some(raw) = kv_repo::get(conn, marker_key(cadence))? else {
        return Ok(None);
    };
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(at) => Ok(Some(at.with_timezone(&Utc))),
        Err(e) => {
            warn!(%cadence, value = %raw, error = %e, "ignoring malformed reset marker");
            Ok(None)
        }
    }
}

pub fn save_marker(conn: &Connection, cadence: Cadence, at: DateTime<Utc>) -> Result<(), MobihwError> {
    kv_repo::set(conn, marker_key(cadence), &at.to_rfc3339())
}

pub fn barrier_alarm_enabled(conn: &Connection) -> Result<bool, MobihwError> {
    Ok(kv_repo::get(conn, BARRIER_ALARM_KEY)?.as_deref() == Some("true"))
}

pub fn set_barrier_alarm(conn: &Connection, enabled: bool) -> Result<(), MobihwError> {
    kv_repo::set(conn, BARRIER_ALARM_KEY, if enabled { "true" } else { "false" })
}

/// Delete every persisted key. Returns how many were present.
pub fn wipe(conn: &Connection) -> Result<usize, MobihwError> {
    let mut removed = 0;
    for key in [STATE_KEY, DAILY_RESET_KEY, WEEKLY_RESET_KEY, BARRIER_ALARM_KEY] {
        if kv_repo::remove(conn, key)? {
            removed += 1;
        }
    }
    Ok(removed)
}
