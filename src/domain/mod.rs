//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `api` - Envelopes, pagination and the lightweight demo user
//! - `user` - Managed users, validation, search and statistics
//! - `course` - Course content and the built-in catalog
//! - `navigation` - Lesson navigation and learner progress

pub mod api;
pub mod course;
pub mod foundation;
pub mod navigation;
pub mod user;
