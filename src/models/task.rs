use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A unit of recurring work.
///
/// `Simple` tasks are plain checkboxes. `Counted` tasks need `required_count`
/// repetitions before they count as done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Task {
    Simple {
        id: String,
        name: String,
        category: String,
    },
    Counted {
        id: String,
        name: String,
        category: String,
        #[serde(rename = "requiredCount")]
        required_count: NonZeroU32,
    },
}

impl Task {
    /// Builds a task, treating a missing or zero count as a simple task.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        count: Option<u32>,
    ) -> Self {
        let (id, name, category) = (id.into(), name.into(), category.into());
        match count.and_then(NonZeroU32::new) {
            Some(required_count) => Self::Counted {
                id,
                name,
                category,
                required_count,
            },
            None => Self::Simple { id, name, category },
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Simple { id, .. } | Self::Counted { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Simple { name, .. } | Self::Counted { name, .. } => name,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            Self::Simple { category, .. } | Self::Counted { category, .. } => category,
        }
    }

    pub fn required_count(&self) -> Option<u32> {
        match self {
            Self::Simple { .. } => None,
            Self::Counted { required_count, .. } => Some(required_count.get()),
        }
    }

    /// Repetitions needed for completion; simple tasks complete after one.
    pub fn effective_required_count(&self) -> u32 {
        self.required_count().unwrap_or(1)
    }

    pub fn is_counter(&self) -> bool {
        matches!(self, Self::Counted { .. })
    }

    pub fn set_name(&mut self, new_name: impl Into<String>) {
        match self {
            Self::Simple { name, .. } | Self::Counted { name, .. } => *name = new_name.into(),
        }
    }

    pub fn set_category(&mut self, new_category: impl Into<String>) {
        match self {
            Self::Simple { category, .. } | Self::Counted { category, .. } => {
                *category = new_category.into()
            }
        }
    }
}
