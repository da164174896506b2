use serde::Serialize;

use super::{Cadence, Character, Task};

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub total: usize,
    pub done: usize,
    pub percentage: f64,
}

/// A task joined with its completion state on one character.
#[derive(Debug, Clone, Serialize)]
pub struct TaskView<'a> {
    pub task: &'a Task,
    pub done: bool,
    pub count: u32,
}

/// Tasks sharing a category, in list order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub tasks: Vec<TaskView<'a>>,
}

impl Character {
    pub fn progress(&self, cadence: Cadence) -> Progress {
        let tasks = self.tasks(cadence);
        let total = tasks.len();
        let done = tasks.iter().filter(|t| self.is_done(cadence, t.id())).count();
        let percentage = if total > 0 {
            (done as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        Progress {
            total,
            done,
            percentage,
        }
    }

    pub fn task_views(&self, cadence: Cadence) -> Vec<TaskView<'_>> {
        self.tasks(cadence)
            .iter()
            .map(|task| TaskView {
                task,
                done: self.is_done(cadence, task.id()),
                count: self.count(cadence, task.id()),
            })
            .collect()
    }

    /// Groups ordered by the first appearance of each category.
    pub fn category_groups(&self, cadence: Cadence) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for view in self.task_views(cadence) {
            let category = view.task.category();
            match groups.iter_mut().find(|g| g.category == category) {
                Some(group) => group.tasks.push(view),
                None => groups.push(CategoryGroup {
                    category,
                    tasks: vec![view],
                }),
            }
        }
        groups
    }
}
