use std::rc::Rc;

use chrono::Local;
use tracing::warn;

use crate::config::Config;
use crate::db::Storage;
use crate::error::MobihwError;
use crate::models::{Cadence, Character, Task};
use crate::schedule::ResetOutcome;
use crate::store::TaskStore;

/// Loaded state for one command: storage, the store wired to persist itself,
/// and the outcome of the startup reset check.
pub struct Session {
    pub storage: Rc<Storage>,
    pub store: TaskStore,
    pub startup_reset: ResetOutcome,
}

impl Session {
    pub fn open(config: &Config) -> Result<Self, MobihwError> {
        let storage = Rc::new(Storage::open(&config.db_path)?);
        let mut store = TaskStore::from_state(storage.load_state()?);

        let writer = Rc::clone(&storage);
        store.subscribe(move |state| {
            if let Err(e) = writer.save_state(state) {
                warn!(error = %e, "failed to persist task state");
            }
        });

        let startup_reset = store.check_and_reset_tasks(&Local::now(), storage.as_ref())?;
        Ok(Self {
            storage,
            store,
            startup_reset,
        })
    }

    pub fn selected(&self) -> Result<&Character, MobihwError> {
        self.store
            .selected_character()
            .ok_or_else(MobihwError::no_selected_character)
    }

    /// Resolve a character: exact ID → exact name → ID prefix.
    pub fn resolve_character(&self, reference: &str) -> Result<&Character, MobihwError> {
        let characters = self.store.characters();
        if let Some(c) = characters.iter().find(|c| c.id == reference) {
            return Ok(c);
        }

        let by_name: Vec<&Character> = characters.iter().filter(|c| c.name == reference).collect();
        match by_name.len() {
            0 => {}
            1 => return Ok(by_name[0]),
            _ => return Err(ambiguous_characters(reference, &by_name)),
        }

        let prefix = reference.to_ascii_uppercase();
        let by_prefix: Vec<&Character> = characters
            .iter()
            .filter(|c| c.id.starts_with(&prefix))
            .collect();
        match by_prefix.len() {
            0 => Err(MobihwError::character_not_found(reference)),
            1 => Ok(by_prefix[0]),
            _ => Err(ambiguous_characters(reference, &by_prefix)),
        }
    }

    /// Resolve a task on the selected character: exact ID → exact name → ID prefix.
    pub fn resolve_task(&self, cadence: Cadence, reference: &str) -> Result<&Task, MobihwError> {
        let tasks = self.selected()?.tasks(cadence);
        if let Some(t) = tasks.iter().find(|t| t.id() == reference) {
            return Ok(t);
        }

        let by_name: Vec<&Task> = tasks.iter().filter(|t| t.name() == reference).collect();
        match by_name.len() {
            0 => {}
            1 => return Ok(by_name[0]),
            _ => return Err(ambiguous_tasks(reference, &by_name)),
        }

        let lowered = reference.to_ascii_lowercase();
        let by_prefix: Vec<&Task> = tasks
            .iter()
            .filter(|t| t.id().to_ascii_lowercase().starts_with(&lowered))
            .collect();
        match by_prefix.len() {
            0 => Err(MobihwError::task_not_found(reference)),
            1 => Ok(by_prefix[0]),
            _ => Err(ambiguous_tasks(reference, &by_prefix)),
        }
    }
}

fn ambiguous_characters(reference: &str, found: &[&Character]) -> MobihwError {
    let candidates: Vec<String> = found.iter().map(|c| format!("{} ({})", c.name, c.id)).collect();
    MobihwError::ambiguous_ref(reference, &candidates)
}

fn ambiguous_tasks(reference: &str, found: &[&Task]) -> MobihwError {
    let candidates: Vec<String> = found.iter().map(|t| format!("{} ({})", t.name(), t.id())).collect();
    MobihwError::ambiguous_ref(reference, &candidates)
}

pub fn validate_name(name: &str, what: &str) -> Result<(), MobihwError> {
    if name.trim().is_empty() {
        return Err(MobihwError::validation(format!("{what} name must not be empty")));
    }
    Ok(())
}
