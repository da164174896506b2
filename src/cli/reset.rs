use serde_json::json;

use crate::cli::finish;
use crate::cli::session::Session;
use crate::config::Config;
use crate::error::MobihwError;
use crate::models::Cadence;
use crate::output;

pub fn run(cadence: &str, character: Option<&str>, config: &Config, json_output: bool) -> i32 {
    finish(run_inner(cadence, character, config, json_output), json_output)
}

fn run_inner(cadence: &str, character: Option<&str>, config: &Config, json_output: bool) -> Result<i32, MobihwError> {
    let cadence = Cadence::from_str(cadence)
        .ok_or_else(|| MobihwError::validation(format!("Unknown cadence: {cadence}")))?;
    let mut session = Session::open(config)?;
    let target = match character {
        Some(reference) => session.resolve_character(reference)?,
        None => session.selected()?,
    };
    let (id, name) = (target.id.clone(), target.name.clone());

    match cadence {
        Cadence::Daily => session.store.reset_daily_tasks(Some(&id)),
        Cadence::Weekly => session.store.reset_weekly_tasks(Some(&id)),
    }

    if json_output {
        output::json::print(&output::json::success(json!({
            "reset": { "id": id, "name": name, "cadence": cadence.as_str() }
        })));
    } else {
        println!("Cleared {cadence} progress for {name} ({id})");
    }
    Ok(0)
}
