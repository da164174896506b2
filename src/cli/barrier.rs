use chrono::Local;
use serde_json::json;

use crate::cli::finish;
use crate::config::Config;
use crate::db::Storage;
use crate::error::MobihwError;
use crate::output;
use crate::schedule::barrier_status;

pub fn run(alarm: Option<&str>, config: &Config, json_output: bool) -> i32 {
    finish(run_inner(alarm, config, json_output), json_output)
}

fn run_inner(alarm: Option<&str>, config: &Config, json_output: bool) -> Result<i32, MobihwError> {
    let storage = Storage::open(&config.db_path)?;
    match alarm {
        Some("on") => storage.set_barrier_alarm(true)?,
        Some("off") => storage.set_barrier_alarm(false)?,
        Some(other) => return Err(MobihwError::validation(format!("--alarm must be on or off, got {other}"))),
        None => {}
    }
    let enabled = storage.barrier_alarm_enabled()?;
    let status = barrier_status(&Local::now());

    if json_output {
        output::json::print(&output::json::success(json!({
            "barrier": output::json::barrier_json(&status, enabled)
        })));
    } else {
        output::text::print_barrier(&status, enabled);
    }
    Ok(0)
}
