use std::time::Duration as StdDuration;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::MobihwError;
use crate::models::Cadence;
use crate::store::TaskStore;

use super::cutover::{most_recent_daily_cutover, most_recent_weekly_cutover};
use super::markers::MarkerStore;

pub const POLL_INTERVAL: StdDuration = StdDuration::from_secs(1);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResetDecision {
    pub daily: bool,
    pub weekly: bool,
}

impl ResetDecision {
    pub fn any(&self) -> bool {
        self.daily || self.weekly
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResetOutcome {
    pub daily_reset: bool,
    pub weekly_reset: bool,
    pub characters: usize,
}

impl ResetOutcome {
    pub fn any(&self) -> bool {
        self.daily_reset || self.weekly_reset
    }
}

/// A cadence is due when its marker is missing or older than the most recent
/// cutover. Several missed cutovers collapse into one reset.
pub fn decide_resets<Tz: TimeZone>(
    now: &DateTime<Tz>,
    last_daily: Option<DateTime<Utc>>,
    last_weekly: Option<DateTime<Utc>>,
) -> ResetDecision {
    let due = |last: Option<DateTime<Utc>>, cutover: DateTime<Tz>| {
        last.map_or(true, |at| at < cutover.with_timezone(&Utc))
    };
    ResetDecision {
        daily: due(last_daily, most_recent_daily_cutover(now)),
        weekly: due(last_weekly, most_recent_weekly_cutover(now)),
    }
}

/// Clears every character's progress for each due cadence and advances the
/// matching marker to `now`. Does nothing while there are no characters.
pub fn check_and_reset<Tz, M>(
    store: &mut TaskStore,
    markers: &M,
    now: &DateTime<Tz>,
) -> Result<ResetOutcome, MobihwError>
where
    Tz: TimeZone,
    M: MarkerStore + ?Sized,
{
    if store.characters().is_empty() {
        return Ok(ResetOutcome::default());
    }

    let decision = decide_resets(
        now,
        markers.last_reset(Cadence::Daily)?,
        markers.last_reset(Cadence::Weekly)?,
    );
    if !decision.any() {
        return Ok(ResetOutcome::default());
    }

    let ids: Vec<String> = store.characters().iter().map(|c| c.id.clone()).collect();
    let stamp = now.with_timezone(&Utc);

    if decision.daily {
        for id in &ids {
            store.reset_daily_tasks(Some(id));
        }
        markers.record_reset(Cadence::Daily, stamp)?;
        info!(characters = ids.len(), at = %stamp, "daily progress reset");
    }
    if decision.weekly {
        for id in &ids {
            store.reset_weekly_tasks(Some(id));
        }
        markers.record_reset(Cadence::Weekly, stamp)?;
        info!(characters = ids.len(), at = %stamp, "weekly progress reset");
    }

    Ok(ResetOutcome {
        daily_reset: decision.daily,
        weekly_reset: decision.weekly,
        characters: ids.len(),
    })
}

/// Drives `check_and_reset` from a polling loop.
pub struct ResetScheduler<M> {
    markers: M,
    interval: StdDuration,
}

impl<M: MarkerStore> ResetScheduler<M> {
    pub fn new(markers: M) -> Self {
        Self {
            markers,
            interval: POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: StdDuration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> StdDuration {
        self.interval
    }

    pub fn tick<Tz: TimeZone>(
        &self,
        store: &mut TaskStore,
        now: &DateTime<Tz>,
    ) -> Result<ResetOutcome, MobihwError> {
        store.check_and_reset_tasks(now, &self.markers)
    }
}
