use std::rc::Rc;
use std::thread;
use std::time::Duration;

use chrono::Local;
use serde_json::json;

use crate::cli::finish;
use crate::cli::session::Session;
use crate::config::Config;
use crate::error::MobihwError;
use crate::output;
use crate::schedule::{
    barrier_status, format_countdown, time_until_daily_reset, time_until_weekly_reset, BarrierNotifier,
    ResetScheduler,
};

pub fn run(interval_secs: u64, ticks: Option<u64>, config: &Config, json_output: bool) -> i32 {
    finish(run_inner(interval_secs, ticks, config, json_output), json_output)
}

fn run_inner(interval_secs: u64, ticks: Option<u64>, config: &Config, json_output: bool) -> Result<i32, MobihwError> {
    if interval_secs == 0 {
        return Err(MobihwError::validation("--interval-secs must be at least 1"));
    }
    let mut session = Session::open(config)?;
    let scheduler = ResetScheduler::new(Rc::clone(&session.storage))
        .with_interval(Duration::from_secs(interval_secs));
    let alarm = session.storage.barrier_alarm_enabled()?;
    let mut notifier = BarrierNotifier::new(alarm);

    if !json_output {
        output::text::print_reset(&session.startup_reset);
    }

    let mut tick: u64 = 0;
    loop {
        let now = Local::now();
        let outcome = scheduler.tick(&mut session.store, &now)?;
        let barrier = barrier_status(&now);
        let announce = notifier.poll(&now);

        if json_output {
            let line = json!({
                "at": now.to_rfc3339(),
                "reset": output::json::reset_json(&outcome),
                "countdown": output::json::countdown_json(&now),
                "barrier": output::json::barrier_json(&barrier, alarm),
                "barrier_notification": announce
            });
            println!("{line}");
        } else {
            output::text::print_reset(&outcome);
            if let Some(hour) = announce {
                println!("Barrier alarm: the {hour:02}:00 barrier is open. Enter within 15 minutes!");
            }
            println!(
                "[{}] daily reset in {} | weekly reset in {}",
                now.format("%H:%M:%S"),
                format_countdown(time_until_daily_reset(&now)),
                format_countdown(time_until_weekly_reset(&now))
            );
        }

        tick += 1;
        if ticks.is_some_and(|limit| tick >= limit) {
            break;
        }
        thread::sleep(scheduler.interval());
    }
    Ok(0)
}
