//! Navigation module - lesson navigation and learner progress.
//!
//! The course is a fixed, ordered list of sections grouped into stages.
//! [`NavigationStore`] owns that list together with a [`ProgressStore`] and
//! derives everything else (stage grouping, per-stage progress, next and
//! previous section) on demand from the list itself.
//!
//! # Invariants
//!
//! 1. At most one section is current at any time
//! 2. Completing a section is idempotent
//! 3. The progress store's section total is the constant [`TOTAL_SECTIONS`],
//!    which does not track the navigation list's length

mod curriculum;
mod item;
mod navigation_store;
mod progress_store;
mod route;

pub use curriculum::{default_sections, STAGE_ADVANCED, STAGE_FOUNDATIONS, STAGE_INTEGRATION, STAGE_TOOLING};
pub use item::{NavigationItem, ProgressData, StageProgress};
pub use navigation_store::{NavigationStore, StageGroup};
pub use progress_store::{ProgressStore, TOTAL_SECTIONS};
pub use route::Route;
