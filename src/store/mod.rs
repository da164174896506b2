//! In-memory task state and every operation that mutates it.
//!
//! All operations are total: invalid preconditions (no selection, unknown
//! ids, empty names, counters at their bounds) leave the state untouched.
//! Subscribers are notified synchronously after each operation that changed
//! something.

pub mod defaults;

use chrono::{DateTime, TimeZone};
use tracing::debug;

use crate::error::MobihwError;
use crate::models::{Cadence, Character, TaskState, Task};
use crate::schedule::{self, MarkerStore, ResetOutcome};

type Listener = Box<dyn FnMut(&TaskState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct TaskStore {
    state: TaskState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

fn new_id() -> String {
    ulid::Ulid::new().to_string()
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps previously persisted state, repairing a dangling selection.
    pub fn from_state(mut state: TaskState) -> Self {
        let dangling = state
            .selected_character_id
            .as_deref()
            .is_some_and(|id| !state.characters.iter().any(|c| c.id == id));
        if dangling {
            state.selected_character_id = state.characters.first().map(|c| c.id.clone());
        }
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &TaskState {
        &self.state
    }

    pub fn characters(&self) -> &[Character] {
        &self.state.characters
    }

    pub fn character(&self, id: &str) -> Option<&Character> {
        self.state.characters.iter().find(|c| c.id == id)
    }

    pub fn selected_character_id(&self) -> Option<&str> {
        self.state.selected_character_id.as_deref()
    }

    pub fn selected_character(&self) -> Option<&Character> {
        self.selected_character_id().and_then(|id| self.character(id))
    }

    // ─── subscriptions ─────────────────────────────────────────────

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TaskState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn commit(&mut self, changed: bool) {
        if !changed {
            return;
        }
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    fn with_selected<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut Character) -> bool,
    {
        let Some(selected) = self.state.selected_character_id.as_deref() else {
            return false;
        };
        match self.state.characters.iter_mut().find(|c| c.id == selected) {
            Some(character) => f(character),
            None => false,
        }
    }

    // ─── characters ────────────────────────────────────────────────

    /// Appends a character seeded with the default tasks. The first character
    /// added while nothing is selected becomes the selection.
    pub fn add_character(&mut self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = new_id();
        self.state.characters.push(Character::new(
            id.clone(),
            name,
            defaults::default_daily_tasks(),
            defaults::default_weekly_tasks(),
        ));
        if self.state.selected_character_id.is_none() {
            self.state.selected_character_id = Some(id.clone());
        }
        debug!(character_id = %id, "character added");
        self.commit(true);
        Some(id)
    }

    pub fn select_character(&mut self, id: &str) {
        let changed = self.state.selected_character_id.as_deref() != Some(id);
        self.state.selected_character_id = Some(id.to_string());
        self.commit(changed);
    }

    pub fn edit_character(&mut self, id: &str, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let changed = match self.state.characters.iter_mut().find(|c| c.id == id) {
            Some(character) if character.name != name => {
                character.name = name.to_string();
                true
            }
            _ => false,
        };
        self.commit(changed);
    }

    pub fn delete_character(&mut self, id: &str) {
        let before = self.state.characters.len();
        self.state.characters.retain(|c| c.id != id);
        if self.state.characters.len() == before {
            return;
        }
        if self.state.selected_character_id.as_deref() == Some(id) {
            self.state.selected_character_id =
                self.state.characters.first().map(|c| c.id.clone());
        }
        debug!(character_id = %id, "character deleted");
        self.commit(true);
    }

    // ─── task list edits ───────────────────────────────────────────

    pub fn add_daily_task(
        &mut self,
        name: &str,
        category: Option<&str>,
        count: Option<u32>,
    ) -> Option<String> {
        self.add_task(Cadence::Daily, name, category, count)
    }

    pub fn add_weekly_task(&mut self, name: &str, category: Option<&str>) -> Option<String> {
        self.add_task(Cadence::Weekly, name, category, None)
    }

    fn add_task(
        &mut self,
        cadence: Cadence,
        name: &str,
        category: Option<&str>,
        count: Option<u32>,
    ) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(cadence.default_category());
        let id = new_id();
        let task = Task::new(id.clone(), name, category, count);

        let added = self.with_selected(|character| {
            let book = character.book_mut(cadence);
            if task.is_counter() {
                book.counts.insert(task.id().to_string(), 0);
            }
            book.items.push(task);
            true
        });
        if !added {
            return None;
        }
        debug!(task_id = %id, %cadence, "task added");
        self.commit(true);
        Some(id)
    }

    pub fn edit_daily_task(&mut self, id: &str, name: &str, category: Option<&str>) {
        self.edit_task(Cadence::Daily, id, name, category);
    }

    pub fn edit_weekly_task(&mut self, id: &str, name: &str) {
        self.edit_task(Cadence::Weekly, id, name, None);
    }

    fn edit_task(&mut self, cadence: Cadence, id: &str, name: &str, category: Option<&str>) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        let changed = self.with_selected(|character| {
            let book = character.book_mut(cadence);
            let Some(task) = book.items.iter_mut().find(|t| t.id() == id) else {
                return false;
            };
            let before = task.clone();
            task.set_name(name);
            if let Some(category) = category {
                task.set_category(category);
            }
            *task != before
        });
        self.commit(changed);
    }

    pub fn delete_daily_task(&mut self, id: &str) {
        self.delete_task(Cadence::Daily, id);
    }

    pub fn delete_weekly_task(&mut self, id: &str) {
        self.delete_task(Cadence::Weekly, id);
    }

    fn delete_task(&mut self, cadence: Cadence, id: &str) {
        let changed = self.with_selected(|character| {
            let book = character.book_mut(cadence);
            let Some(index) = book.items.iter().position(|t| t.id() == id) else {
                return false;
            };
            book.items.remove(index);
            book.status.remove(id);
            book.counts.remove(id);
            true
        });
        if changed {
            debug!(task_id = %id, %cadence, "task deleted");
        }
        self.commit(changed);
    }

    // ─── completion state ──────────────────────────────────────────

    pub fn toggle_daily_task(&mut self, task_id: &str) {
        self.toggle_task(Cadence::Daily, task_id);
    }

    pub fn toggle_weekly_task(&mut self, task_id: &str) {
        self.toggle_task(Cadence::Weekly, task_id);
    }

    /// Flips completion. Counter tasks snap their count to the matching
    /// bound so `status == (count >= required)` keeps holding.
    fn toggle_task(&mut self, cadence: Cadence, task_id: &str) {
        let changed = self.with_selected(|character| {
            let book = character.book_mut(cadence);
            let Some(task) = book.items.iter().find(|t| t.id() == task_id) else {
                return false;
            };
            let done = !book.status.get(task_id).copied().unwrap_or(false);
            if let Some(required) = task.required_count() {
                book.counts
                    .insert(task_id.to_string(), if done { required } else { 0 });
            }
            book.status.insert(task_id.to_string(), done);
            true
        });
        self.commit(changed);
    }

    pub fn increment_task_count(&mut self, task_id: &str, cadence: Cadence) {
        let changed = self.with_selected(|character| {
            let book = character.book_mut(cadence);
            let Some(task) = book.items.iter().find(|t| t.id() == task_id) else {
                return false;
            };
            let required = task.effective_required_count();
            let current = book.counts.get(task_id).copied().unwrap_or(0);
            if current >= required {
                return false;
            }
            let next = current + 1;
            book.counts.insert(task_id.to_string(), next);
            book.status.insert(task_id.to_string(), next >= required);
            true
        });
        self.commit(changed);
    }

    pub fn decrement_task_count(&mut self, task_id: &str, cadence: Cadence) {
        let changed = self.with_selected(|character| {
            let book = character.book_mut(cadence);
            let Some(task) = book.items.iter().find(|t| t.id() == task_id) else {
                return false;
            };
            let required = task.effective_required_count();
            let current = book.counts.get(task_id).copied().unwrap_or(0);
            if current == 0 {
                return false;
            }
            let next = current - 1;
            book.counts.insert(task_id.to_string(), next);
            book.status.insert(task_id.to_string(), next >= required);
            true
        });
        self.commit(changed);
    }

    pub fn reset_task_count(&mut self, task_id: &str, cadence: Cadence) {
        let changed = self.with_selected(|character| {
            let book = character.book_mut(cadence);
            if !book.items.iter().any(|t| t.id() == task_id) {
                return false;
            }
            let previous_count = book.counts.insert(task_id.to_string(), 0);
            let previous_status = book.status.insert(task_id.to_string(), false);
            previous_count != Some(0) || previous_status != Some(false)
        });
        self.commit(changed);
    }

    // ─── resets ────────────────────────────────────────────────────

    pub fn reset_daily_tasks(&mut self, character_id: Option<&str>) {
        self.reset_cadence(Cadence::Daily, character_id);
    }

    pub fn reset_weekly_tasks(&mut self, character_id: Option<&str>) {
        self.reset_cadence(Cadence::Weekly, character_id);
    }

    /// Clears status and counts for the target character; task lists stay.
    fn reset_cadence(&mut self, cadence: Cadence, character_id: Option<&str>) {
        let Some(target) = character_id
            .map(str::to_string)
            .or_else(|| self.state.selected_character_id.clone())
        else {
            return;
        };
        let changed = match self.state.characters.iter_mut().find(|c| c.id == target) {
            Some(character) => {
                let book = character.book_mut(cadence);
                let had_state = !book.status.is_empty() || !book.counts.is_empty();
                book.status.clear();
                book.counts.clear();
                had_state
            }
            None => false,
        };
        if changed {
            debug!(character_id = %target, %cadence, "progress cleared");
        }
        self.commit(changed);
    }

    /// Runs the cutover check against the given markers.
    pub fn check_and_reset_tasks<Tz, M>(
        &mut self,
        now: &DateTime<Tz>,
        markers: &M,
    ) -> Result<ResetOutcome, MobihwError>
    where
        Tz: TimeZone,
        M: MarkerStore + ?Sized,
    {
        schedule::check_and_reset(self, markers, now)
    }
}
