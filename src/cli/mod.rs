pub mod barrier;
pub mod character;
pub mod commands;
pub mod reset;
pub mod session;
pub mod status;
pub mod task;
pub mod watch;
pub mod wipe;

pub use commands::*;

use crate::error::MobihwError;
use crate::output;

/// Turn a command result into an exit code, reporting errors on the way.
pub(crate) fn finish(result: Result<i32, MobihwError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            if json_output {
                output::json::print(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}
