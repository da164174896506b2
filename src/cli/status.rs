use chrono::Local;
use serde_json::json;

use crate::cli::finish;
use crate::cli::session::Session;
use crate::config::Config;
use crate::error::MobihwError;
use crate::models::Cadence;
use crate::output;
use crate::schedule::barrier_status;

pub fn run(config: &Config, json_output: bool) -> i32 {
    finish(run_inner(config, json_output), json_output)
}

fn run_inner(config: &Config, json_output: bool) -> Result<i32, MobihwError> {
    let session = Session::open(config)?;
    let alarm = session.storage.barrier_alarm_enabled()?;
    let now = Local::now();
    let barrier = barrier_status(&now);
    let selected = session.store.selected_character();

    if json_output {
        let character = selected.map(|c| output::json::character_json(c, true));
        output::json::print(&output::json::success(json!({
            "character": character,
            "characters": session.store.characters().len(),
            "startup_reset": output::json::reset_json(&session.startup_reset),
            "countdown": output::json::countdown_json(&now),
            "barrier": output::json::barrier_json(&barrier, alarm)
        })));
    } else {
        output::text::print_reset(&session.startup_reset);
        match selected {
            Some(c) => {
                println!("Character: {} ({})", c.name, c.id);
                output::text::print_progress("  Daily", &c.progress(Cadence::Daily));
                output::text::print_progress("  Weekly", &c.progress(Cadence::Weekly));
            }
            None => println!("No character selected."),
        }
        println!();
        output::text::print_countdowns(&now);
        output::text::print_barrier(&barrier, alarm);
    }
    Ok(0)
}
