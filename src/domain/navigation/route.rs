//! Viewer routes.

use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A page of the course viewer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/module/:sectionId`
    CourseModule { section_id: String },
}

impl Route {
    /// Parses a path, ignoring any query string, fragment or trailing slash.
    pub fn parse(path: &str) -> Result<Self, DomainError> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        if path.is_empty() {
            return Ok(Route::Home);
        }

        match path.strip_prefix("/module/") {
            Some(section_id) if !section_id.is_empty() && !section_id.contains('/') => {
                Ok(Route::CourseModule {
                    section_id: section_id.to_string(),
                })
            }
            _ => Err(DomainError::new(
                ErrorCode::RouteNotFound,
                format!("No route matches {}", path),
            )),
        }
    }

    pub fn section_id(&self) -> Option<&str> {
        match self {
            Route::Home => None,
            Route::CourseModule { section_id } => Some(section_id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::CourseModule { section_id } => write!(f, "/module/{}", section_id),
        }
    }
}
