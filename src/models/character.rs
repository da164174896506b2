use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Cadence, Task};

/// An owner of task progress. Daily and weekly lists are independent id spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub daily_task_items: Vec<Task>,
    pub weekly_task_items: Vec<Task>,
    #[serde(default)]
    pub daily_task_status: BTreeMap<String, bool>,
    #[serde(default)]
    pub weekly_task_status: BTreeMap<String, bool>,
    #[serde(default)]
    pub daily_task_counts: BTreeMap<String, u32>,
    #[serde(default)]
    pub weekly_task_counts: BTreeMap<String, u32>,
}

/// Mutable view over one cadence of a character.
pub struct CadenceBook<'a> {
    pub items: &'a mut Vec<Task>,
    pub status: &'a mut BTreeMap<String, bool>,
    pub counts: &'a mut BTreeMap<String, u32>,
}

impl Character {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        daily_task_items: Vec<Task>,
        weekly_task_items: Vec<Task>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            daily_task_items,
            weekly_task_items,
            daily_task_status: BTreeMap::new(),
            weekly_task_status: BTreeMap::new(),
            daily_task_counts: BTreeMap::new(),
            weekly_task_counts: BTreeMap::new(),
        }
    }

    pub fn tasks(&self, cadence: Cadence) -> &[Task] {
        match cadence {
            Cadence::Daily => &self.daily_task_items,
            Cadence::Weekly => &self.weekly_task_items,
        }
    }

    pub fn status_map(&self, cadence: Cadence) -> &BTreeMap<String, bool> {
        match cadence {
            Cadence::Daily => &self.daily_task_status,
            Cadence::Weekly => &self.weekly_task_status,
        }
    }

    pub fn count_map(&self, cadence: Cadence) -> &BTreeMap<String, u32> {
        match cadence {
            Cadence::Daily => &self.daily_task_counts,
            Cadence::Weekly => &self.weekly_task_counts,
        }
    }

    pub fn book_mut(&mut self, cadence: Cadence) -> CadenceBook<'_> {
        match cadence {
            Cadence::Daily => CadenceBook {
                items: &mut self.daily_task_items,
                status: &mut self.daily_task_status,
                counts: &mut self.daily_task_counts,
            },
            Cadence::Weekly => CadenceBook {
                items: &mut self.weekly_task_items,
                status: &mut self.weekly_task_status,
                counts: &mut self.weekly_task_counts,
            },
        }
    }

    pub fn find_task(&self, cadence: Cadence, task_id: &str) -> Option<&Task> {
        self.tasks(cadence).iter().find(|t| t.id() == task_id)
    }

    /// Absent status entries read as incomplete.
    pub fn is_done(&self, cadence: Cadence, task_id: &str) -> bool {
        self.status_map(cadence).get(task_id).copied().unwrap_or(false)
    }

    /// Absent count entries read as zero.
    pub fn count(&self, cadence: Cadence, task_id: &str) -> u32 {
        self.count_map(cadence).get(task_id).copied().unwrap_or(0)
    }
}
