//! Course API - typed HTTP client patterns for the HTTP client course.
//!
//! The crate bundles everything the course viewer talks to: a generic REST
//! resource client with interceptors, a user service built on it, the mock
//! API handler sets the lessons run against, and the navigation/progress
//! stores that track where a learner is in the curriculum.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
