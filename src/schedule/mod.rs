//! Cutover clock math and the reset check built on it.

pub mod barrier;
pub mod cutover;
pub mod markers;
pub mod scheduler;

pub use barrier::{barrier_status, BarrierNotifier, BarrierStatus};
pub use cutover::{
    format_countdown, most_recent_daily_cutover, most_recent_weekly_cutover, next_daily_cutover,
    next_weekly_cutover, time_until_daily_reset, time_until_weekly_reset,
};
pub use markers::{MarkerStore, MemoryMarkers};
pub use scheduler::{
    check_and_reset, decide_resets, ResetDecision, ResetOutcome, ResetScheduler, POLL_INTERVAL,
};
