//! Learner progress: the current section and the set of completed sections.

use crate::domain::foundation::{rounded_percent, Percentage};

use super::ProgressData;

/// Section total used for the overall completion percentage.
///
/// This is a fixed constant and is NOT derived from the navigation list,
/// which currently holds ten sections. Completing every section therefore
/// reports 125%. [`super::NavigationStore::new`] logs a warning when the two
/// disagree.
pub const TOTAL_SECTIONS: usize = 8;

/// Tracks which sections the learner has opened and finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressStore {
    current_section: Option<String>,
    completed_sections: Vec<String>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    /// Completed section ids in completion order.
    pub fn completed_sections(&self) -> &[String] {
        &self.completed_sections
    }

    pub fn total_sections(&self) -> usize {
        TOTAL_SECTIONS
    }

    pub fn set_current_section(&mut self, section_id: &str) {
        self.current_section = Some(section_id.to_string());
    }

    /// Adds `section_id` to the completed set. Repeated calls are no-ops.
    pub fn mark_section_completed(&mut self, section_id: &str) {
        if !self.is_section_completed(section_id) {
            self.completed_sections.push(section_id.to_string());
        }
    }

    pub fn reset_progress(&mut self) {
        self.current_section = None;
        self.completed_sections.clear();
    }

    pub fn is_section_completed(&self, section_id: &str) -> bool {
        self.completed_sections.iter().any(|id| id == section_id)
    }

    /// Completed share of [`TOTAL_SECTIONS`], rounded half up.
    pub fn completion_percentage(&self) -> u32 {
        rounded_percent(self.completed_sections.len(), TOTAL_SECTIONS)
    }

    /// Share of `stage_section_ids` that is completed.
    pub fn stage_completion_percentage<S: AsRef<str>>(&self, stage_section_ids: &[S]) -> Percentage {
        let completed = stage_section_ids
            .iter()
            .filter(|id| self.is_section_completed(id.as_ref()))
            .count();
        Percentage::of(completed, stage_section_ids.len())
    }

    pub fn progress_data(&self) -> ProgressData {
        ProgressData {
            current_section: self.current_section.clone().unwrap_or_default(),
            completed_sections: self.completed_sections.clone(),
            total_sections: TOTAL_SECTIONS,
            completion_percentage: self.completion_percentage(),
        }
    }
}
