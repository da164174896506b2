use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::error::MobihwError;
use crate::models::{Cadence, TaskState};
use crate::schedule::MarkerStore;

use super::{connection, state_repo};

/// Owns the SQLite handle behind the key-value blob store.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open(path: &Path) -> Result<Self, MobihwError> {
        Ok(Self {
            conn: connection::open_db(path)?,
        })
    }

    pub fn in_memory() -> Result<Self, MobihwError> {
        Ok(Self {
            conn: connection::open_in_memory()?,
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn load_state(&self) -> Result<TaskState, MobihwError> {
        state_repo::load_state(&self.conn)
    }

    pub fn save_state(&self, state: &TaskState) -> Result<(), MobihwError> {
        state_repo::save_state(&self.conn, state)
    }

    pub fn barrier_alarm_enabled(&self) -> Result<bool, MobihwError> {
        state_repo::barrier_alarm_enabled(&self.conn)
    }

    pub fn set_barrier_alarm(&self, enabled: bool) -> Result<(), MobihwError> {
        state_repo::set_barrier_alarm(&self.conn, enabled)
    }

    pub fn wipe(&self) -> Result<usize, MobihwError> {
        state_repo::wipe(&self.conn)
    }
}

impl MarkerStore for Storage {
    fn last_reset(&self, cadence: Cadence) -> Result<Option<DateTime<Utc>>, MobihwError> {
        state_repo::load_marker(&self.conn, cadence)
    }

    fn record_reset(&self, cadence: Cadence, at: DateTime<Utc>) -> Result<(), MobihwError> {
        state_repo::save_marker(&self.conn, cadence, at)
    }
}
