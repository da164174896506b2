//! Daily and weekly checklist tracking for game characters.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod schedule;
pub mod store;

pub use error::{ErrorCode, MobihwError};
pub use models::{Cadence, Character, Task, TaskState};
pub use store::TaskStore;
