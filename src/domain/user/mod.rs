//! User module - managed users of the course's demo backend.
//!
//! Holds the user shape served by the resource backend, the request types
//! used to create and update users, and the pure rules the user service
//! applies on top of a full list fetch:
//!
//! - **Validation** - name length, email format, department whitelist
//! - **Search** - substring and exact-match filtering followed by pagination
//! - **Statistics** - counts by activity, role and department
//!
//! Everything here is synchronous and free of I/O so it can be exercised
//! without a running backend.

mod search;
mod stats;
mod user;
mod validation;

pub use search::{
    filter_users, paginate_users, search_users, sort_users, UserSearchParams, UserSearchResult,
};
pub use stats::{user_stats, UserStats};
pub use user::{
    CreatableRole, CreateUserRequest, UpdateUserRequest, User, UserFields, UserRole,
};
pub use validation::{
    validate_department, validate_email, validate_emails, validate_name, validate_user,
    EmailValidationResult, UserValidationResult, DEPARTMENTS, EMAIL_MAX_LEN, NAME_MAX_LEN,
    NAME_MIN_LEN,
};
