use serde::{Deserialize, Serialize};

use super::Character;

/// The persisted entity graph: every character plus the active selection.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskState {
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub selected_character_id: Option<String>,
}
