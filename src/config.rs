use std::path::PathBuf;

use tracing::warn;

pub const DB_ENV: &str = "MOBIHW_DB";
const APP_DIR: &str = "mobihw";
const DB_FILE: &str = "mobihw.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// `--db` (or `MOBIHW_DB`, merged in by clap) wins over the platform default.
    pub fn resolve(db_flag: Option<PathBuf>) -> Self {
        Self {
            db_path: db_flag.unwrap_or_else(default_db_path),
        }
    }
}

/// `<data dir>/mobihw/mobihw.db`, or the working directory when the platform
/// has no data dir.
pub fn default_db_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join(APP_DIR).join(DB_FILE),
        None => {
            warn!("no platform data directory, using ./{DB_FILE}");
            PathBuf::from(DB_FILE)
        }
    }
}
