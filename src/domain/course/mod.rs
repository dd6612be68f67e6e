//! Course module - lesson content shown by the course viewer.
//!
//! - `content` - modules, sections, content blocks, exercises
//! - `catalog` - the built-in HTTP client module

mod catalog;
mod content;

pub use catalog::{fetch_axios_comparison, http_client_module};
pub use content::{
    CodeExample, CodeLanguage, ComparisonItem, ComparisonWinner, ContentType, CourseModule,
    CourseSection, Difficulty, Exercise, ExerciseDifficulty, ExerciseType, SectionContent,
    TestCase,
};
