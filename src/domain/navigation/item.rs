//! Navigation state shapes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// One lesson section in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: String,
    pub title: String,
    pub path: String,
    pub completed: bool,
    pub current: bool,
    pub stage: String,
    pub description: String,
}

impl NavigationItem {
    /// A not-yet-visited section routed at `/module/{id}`.
    pub fn new(id: &str, title: &str, stage: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            path: format!("/module/{}", id),
            completed: false,
            current: false,
            stage: stage.to_string(),
            description: description.to_string(),
        }
    }
}

/// Completion of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: Percentage,
}

impl StageProgress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed,
            total,
            percentage: Percentage::of(completed, total),
        }
    }
}

/// Snapshot of the learner's overall progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressData {
    /// Empty until a section has been opened.
    pub current_section: String,
    pub completed_sections: Vec<String>,
    pub total_sections: usize,
    /// Not clamped: completing more sections than the fixed total reports
    /// more than 100.
    pub completion_percentage: u32,
}
