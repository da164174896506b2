use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::error::MobihwError;
use crate::models::Cadence;

/// Durable "last reset" timestamps, one per cadence.
pub trait MarkerStore {
    fn last_reset(&self, cadence: Cadence) -> Result<Option<DateTime<Utc>>, MobihwError>;
    fn record_reset(&self, cadence: Cadence, at: DateTime<Utc>) -> Result<(), MobihwError>;
}

impl<T: MarkerStore + ?Sized> MarkerStore for Rc<T> {
    fn last_reset(&self, cadence: Cadence) -> Result<Option<DateTime<Utc>>, MobihwError> {
        (**self).last_reset(cadence)
    }

    fn record_reset(&self, cadence: Cadence, at: DateTime<Utc>) -> Result<(), MobihwError> {
        (**self).record_reset(cadence, at)
    }
}

/// Markers kept only for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryMarkers {
    daily: Cell<Option<DateTime<Utc>>>,
    weekly: Cell<Option<DateTime<Utc>>>,
}

impl MemoryMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markers(daily: Option<DateTime<Utc>>, weekly: Option<DateTime<Utc>>) -> Self {
        Self {
            daily: Cell::new(daily),
            weekly: Cell::new(weekly),
        }
    }

    fn slot(&self, cadence: Cadence) -> &Cell<Option<DateTime<Utc>>> {
        match cadence {
            Cadence::Daily => &self.daily,
            Cadence::Weekly => &self.weekly,
        }
    }
}

impl MarkerStore for MemoryMarkers {
    fn last_reset(&self, cadence: Cadence) -> Result<Option<DateTime<Utc>>, MobihwError> {
        Ok(self.slot(cadence).get())
    }

    fn record_reset(&self, cadence: Cadence, at: DateTime<Utc>) -> Result<(), MobihwError> {
        self.slot(cadence).set(Some(at));
        Ok(())
    }
}
