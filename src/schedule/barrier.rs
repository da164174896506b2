//! Fixed barrier windows. Display only; never touches task state.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Timelike};

use super::cutover::resolve_local;

pub const BARRIER_HOURS: [u32; 8] = [0, 3, 6, 9, 12, 15, 18, 21];
pub const BARRIER_WINDOW_MINUTES: u32 = 15;

#[derive(Debug, Clone)]
pub struct BarrierStatus<Tz: TimeZone> {
    /// Hour of the window `now` falls in, if any.
    pub active_hour: Option<u32>,
    pub next_start: DateTime<Tz>,
    pub until_next: Duration,
}

impl<Tz: TimeZone> BarrierStatus<Tz> {
    pub fn is_active(&self) -> bool {
        self.active_hour.is_some()
    }
}

pub fn barrier_status<Tz: TimeZone>(now: &DateTime<Tz>) -> BarrierStatus<Tz> {
    let active_hour = Some(now.hour())
        .filter(|h| BARRIER_HOURS.contains(h) && now.minute() < BARRIER_WINDOW_MINUTES);

    let tz = now.timezone();
    let today = now.date_naive();
    let next_start = BARRIER_HOURS
        .iter()
        .map(|&h| resolve_local(&tz, today.and_time(NaiveTime::MIN + Duration::hours(h.into()))))
        .find(|start| start > now)
        .unwrap_or_else(|| resolve_local(&tz, (today + Duration::days(1)).and_time(NaiveTime::MIN)));
    let until_next = next_start.clone().signed_duration_since(now.clone());

    BarrierStatus {
        active_hour,
        next_start,
        until_next,
    }
}

/// Emits each barrier window at most once per process while enabled.
#[derive(Debug, Default)]
pub struct BarrierNotifier {
    enabled: bool,
    notified: HashSet<String>,
}

impl BarrierNotifier {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            notified: HashSet::new(),
        }
    }

    /// Returns the barrier hour when a not-yet-announced window is active.
    pub fn poll<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Option<u32> {
        if !self.enabled {
            return None;
        }
        let hour = barrier_status(now).active_hour?;
        let key = format!("barrier-{}-{}", now.date_naive(), hour);
        self.notified.insert(key).then_some(hour)
    }
}
