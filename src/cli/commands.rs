use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DB_ENV;

#[derive(Parser)]
#[command(
    name = "mobihw",
    version,
    about = "Daily and weekly homework checklist per character",
    after_help = "\
NOTE:
  State lives in a SQLite file (default: <data dir>/mobihw/mobihw.db).
  Override with --db or MOBIHW_DB.

RESETS:
  Daily progress clears at 06:00 local time, weekly progress at 06:00 on Monday.
  Every command checks the cutovers first, so missed resets catch up on the next run.

COUNTER TASKS:
  Tasks created with --count need that many `task inc` calls to complete.
  `task toggle` on a counter task sets the count to its maximum (or back to 0).

EXIT CODES:
  0  Success
  1  Error (validation, unknown character/task, storage)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Database file
    #[arg(long, global = true, env = DB_ENV)]
    pub db: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Character management
    #[command(subcommand)]
    Char(CharCommands),

    /// Tasks of the selected character
    #[command(subcommand)]
    Task(TaskCommands),

    /// Clear progress now, without waiting for the cutover
    Reset {
        /// Which cadence to clear
        #[arg(value_parser = ["daily", "weekly"])]
        cadence: String,
        /// Character name or ID (defaults to the selected one)
        #[arg(long)]
        character: Option<String>,
    },

    /// Show progress, reset countdowns and barrier timing
    Status,

    /// Show barrier windows or switch the barrier alarm
    Barrier {
        #[arg(long, value_parser = ["on", "off"])]
        alarm: Option<String>,
    },

    /// Poll the clock: apply resets, print countdowns, announce barriers
    #[command(after_help = "\
NOTE:
  Runs until interrupted unless --ticks is given.
  With --json every tick prints one JSON object per line.")]
    Watch {
        /// Seconds between ticks
        #[arg(long, default_value = "1")]
        interval_secs: u64,
        /// Stop after this many ticks
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Delete all characters, tasks and reset markers
    Wipe {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum CharCommands {
    /// Add a character seeded with the default tasks
    Add { name: String },
    /// List characters
    List,
    /// Make a character the active one
    Select {
        /// Character name or ID
        reference: String,
    },
    /// Rename a character
    Rename {
        /// Character name or ID
        reference: String,
        name: String,
    },
    /// Delete a character and all of its progress
    Delete {
        /// Character name or ID
        reference: String,
    },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks grouped by category
    List {
        #[arg(long)]
        weekly: bool,
    },
    /// Add a task
    Add {
        name: String,
        #[arg(long)]
        weekly: bool,
        #[arg(long)]
        category: Option<String>,
        /// Repetitions required to complete (daily tasks only)
        #[arg(long, conflicts_with = "weekly")]
        count: Option<u32>,
    },
    /// Rename (and recategorise) a task
    Edit {
        /// Task ID, ID prefix or name
        id: String,
        name: String,
        #[arg(long)]
        weekly: bool,
        /// New category (daily tasks only)
        #[arg(long, conflicts_with = "weekly")]
        category: Option<String>,
    },
    /// Delete a task
    Delete {
        id: String,
        #[arg(long)]
        weekly: bool,
    },
    /// Flip a task between done and not done
    Toggle {
        id: String,
        #[arg(long)]
        weekly: bool,
    },
    /// Count one repetition
    Inc {
        id: String,
        #[arg(long)]
        weekly: bool,
    },
    /// Take back one repetition
    Dec {
        id: String,
        #[arg(long)]
        weekly: bool,
    },
    /// Zero a task's counter
    ResetCount {
        id: String,
        #[arg(long)]
        weekly: bool,
    },
}
