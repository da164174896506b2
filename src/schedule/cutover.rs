//! Wall-clock helpers for the daily and weekly cutovers.
//!
//! Everything here is pure and generic over the time zone; production code
//! passes `chrono::Local`, tests pin a `FixedOffset`.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};

pub const RESET_HOUR: u32 = 6;
pub const WEEKLY_RESET_DAY: Weekday = Weekday::Mon;

/// Maps a local wall-clock time to an instant. Times inside a DST gap are
/// nudged forward until they exist; ambiguous times take the earlier one.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    let mut probe = naive;
    for _ in 0..8 {
        if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
            return dt;
        }
        probe += Duration::minutes(30);
    }
    tz.from_utc_datetime(&naive)
}

fn reset_time() -> NaiveTime {
    NaiveTime::MIN + Duration::hours(RESET_HOUR.into())
}

fn cutover_on<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    resolve_local(tz, date.and_time(reset_time()))
}

/// Today's 06:00 if it has passed, otherwise yesterday's.
pub fn most_recent_daily_cutover<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let today = now.date_naive();
    let cutover = cutover_on(&tz, today);
    if *now >= cutover {
        cutover
    } else {
        cutover_on(&tz, today - Duration::days(1))
    }
}

pub fn next_daily_cutover<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let today = now.date_naive();
    let cutover = cutover_on(&tz, today);
    if cutover > *now {
        cutover
    } else {
        cutover_on(&tz, today + Duration::days(1))
    }
}

/// Date of the Monday whose 06:00 is the latest weekly cutover at or before `now`.
fn weekly_anchor<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    let tz = now.timezone();
    let today = now.date_naive();
    let days_since = i64::from(
        (7 + today.weekday().num_days_from_monday() - WEEKLY_RESET_DAY.num_days_from_monday()) % 7,
    );
    let monday = today - Duration::days(days_since);
    if *now >= cutover_on(&tz, monday) {
        monday
    } else {
        monday - Duration::days(7)
    }
}

/// The latest Monday 06:00 at or before `now`. On a Monday before 06:00 this
/// is the previous week's Monday.
pub fn most_recent_weekly_cutover<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    cutover_on(&now.timezone(), weekly_anchor(now))
}

pub fn next_weekly_cutover<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    cutover_on(&now.timezone(), weekly_anchor(now) + Duration::days(7))
}

pub fn time_until_daily_reset<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    next_daily_cutover(now).signed_duration_since(now.clone())
}

pub fn time_until_weekly_reset<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    next_weekly_cutover(now).signed_duration_since(now.clone())
}

/// `1d 02h 03m 04s`, dropping the day part when it is zero.
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let (days, rest) = (total / 86_400, total % 86_400);
    let (hours, minutes, seconds) = (rest / 3_600, (rest % 3_600) / 60, rest % 60);
    if days > 0 {
        format!("{days}d {hours:02}h {minutes:02}m {seconds:02}s")
    } else {
        format!("{hours:02}h {minutes:02}m {seconds:02}s")
    }
}
