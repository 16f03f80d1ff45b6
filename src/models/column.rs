use serde::{Deserialize, Serialize};
use super::Id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub id: Id,
    pub title: String,
}

impl Column {
    pub fn new(id: Id, title: impl Into<String>) -> Self {
        Self { id, title: title.into() }
    }

    /// Title given to the column appended after `existing` others.
    pub fn default_title(existing: usize) -> String {
        format!("Column {}", existing + 1)
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
    }
}
