use serde_json::json;

use crate::cli::finish;
use crate::config::Config;
use crate::db::Storage;
use crate::error::MobihwError;
use crate::output;

pub fn run(yes: bool, config: &Config, json_output: bool) -> i32 {
    finish(run_inner(yes, config, json_output), json_output)
}

fn run_inner(yes: bool, config: &Config, json_output: bool) -> Result<i32, MobihwError> {
    if !yes {
        return Err(MobihwError::validation(
            "This deletes every character and all progress. Re-run with --yes to confirm.",
        ));
    }
    let storage = Storage::open(&config.db_path)?;
    let removed = storage.wipe()?;

    if json_output {
        output::json::print(&output::json::success(json!({ "removed_keys": removed })));
    } else {
        println!("All data deleted.");
    }
    Ok(0)
}
