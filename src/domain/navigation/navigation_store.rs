//! Lesson navigation: which section is open and how far each stage has got.

use tracing::{debug, warn};

use super::{default_sections, NavigationItem, ProgressStore, Route, StageProgress, TOTAL_SECTIONS};

/// Sections sharing a stage label, in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageGroup<'a> {
    pub stage: &'a str,
    pub sections: Vec<&'a NavigationItem>,
}

/// Owns the section list and the learner's progress.
///
/// Derived values are recomputed from the section list on every call;
/// nothing is cached.
#[derive(Debug, Clone)]
pub struct NavigationStore {
    sections: Vec<NavigationItem>,
    progress: ProgressStore,
}

impl NavigationStore {
    /// A store over the built-in curriculum.
    pub fn new() -> Self {
        Self::with_sections(default_sections())
    }

    /// A store over an explicit section list.
    pub fn with_sections(sections: Vec<NavigationItem>) -> Self {
        if sections.len() != TOTAL_SECTIONS {
            warn!(
                sections = sections.len(),
                progress_total = TOTAL_SECTIONS,
                "Navigation section count differs from the progress total"
            );
        }
        Self {
            sections,
            progress: ProgressStore::new(),
        }
    }

    pub fn sections(&self) -> &[NavigationItem] {
        &self.sections
    }

    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    pub fn section(&self, section_id: &str) -> Option<&NavigationItem> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Makes `section_id` the only current section.
    ///
    /// An unknown id leaves no section current. The id is recorded in the
    /// progress store either way.
    pub fn set_current_section(&mut self, section_id: &str) {
        for section in &mut self.sections {
            section.current = section.id == section_id;
        }
        self.progress.set_current_section(section_id);
        debug!(section_id, "Current section changed");
    }

    /// Opens the section a viewer route points at.
    pub fn navigate(&mut self, route: &Route) -> Option<&NavigationItem> {
        let section_id = route.section_id()?;
        self.set_current_section(section_id);
        self.current_section()
    }

    /// Marks a known section as completed. Unknown ids are ignored.
    pub fn mark_section_completed(&mut self, section_id: &str) {
        let Some(section) = self.sections.iter_mut().find(|s| s.id == section_id) else {
            debug!(section_id, "Ignoring completion of unknown section");
            return;
        };
        section.completed = true;
        self.progress.mark_section_completed(section_id);
    }

    /// Clears completion flags, the current section and recorded progress.
    pub fn reset(&mut self) {
        for section in &mut self.sections {
            section.completed = false;
            section.current = false;
        }
        self.progress.reset_progress();
    }

    pub fn current_section(&self) -> Option<&NavigationItem> {
        self.sections.iter().find(|s| s.current)
    }

    pub fn current_section_index(&self) -> Option<usize> {
        self.sections.iter().position(|s| s.current)
    }

    /// True unless the last section is current. With nothing current, the
    /// first section counts as next.
    pub fn has_next_section(&self) -> bool {
        match self.current_section_index() {
            Some(index) => index + 1 < self.sections.len(),
            None => !self.sections.is_empty(),
        }
    }

    pub fn has_previous_section(&self) -> bool {
        matches!(self.current_section_index(), Some(index) if index > 0)
    }

    pub fn next_section(&self) -> Option<&NavigationItem> {
        match self.current_section_index() {
            Some(index) => self.sections.get(index + 1),
            None => self.sections.first(),
        }
    }

    pub fn previous_section(&self) -> Option<&NavigationItem> {
        let index = self.current_section_index()?;
        index.checked_sub(1).and_then(|i| self.sections.get(i))
    }

    pub fn sections_by_stage(&self, stage: &str) -> Vec<&NavigationItem> {
        self.sections.iter().filter(|s| s.stage == stage).collect()
    }

    pub fn current_stage(&self) -> Option<&str> {
        self.current_section().map(|s| s.stage.as_str())
    }

    /// Sections grouped by stage, stages in order of first appearance.
    pub fn stage_groups(&self) -> Vec<StageGroup<'_>> {
        let mut groups: Vec<StageGroup<'_>> = Vec::new();
        for section in &self.sections {
            match groups.iter_mut().find(|g| g.stage == section.stage) {
                Some(group) => group.sections.push(section),
                None => groups.push(StageGroup {
                    stage: &section.stage,
                    sections: vec![section],
                }),
            }
        }
        groups
    }

    /// Completion per stage, from the sections' own completion flags.
    pub fn stage_progress(&self) -> Vec<(&str, StageProgress)> {
        self.stage_groups()
            .into_iter()
            .map(|group| {
                let completed = group.sections.iter().filter(|s| s.completed).count();
                (group.stage, StageProgress::new(completed, group.sections.len()))
            })
            .collect()
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}
