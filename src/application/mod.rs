//! Application layer - services composed over the ports.
//!
//! Services hold a port implementation by value and stay generic over it,
//! so tests swap in an in-memory fake without boxing.

mod user_service;

pub use user_service::{UserService, UserServiceError};
