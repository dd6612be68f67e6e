//! API module - wire shapes shared by the mock handlers and the clients.
//!
//! - `envelope` - the `{data, message, success, timestamp}` wrapper
//! - `api_user` - the lightweight user served under `/api` and `/api/msw`
//! - `pagination` - page/limit windows and paginated responses
//! - `error` - the structured error body

mod api_user;
mod envelope;
mod error;
mod pagination;

pub use api_user::{ApiUser, CreateApiUserRequest, UpdateApiUserRequest};
pub use envelope::ApiResponse;
pub use error::ApiError;
pub use pagination::{
    PageWindow, PaginatedResponse, PaginationMeta, PaginationParams, SortOrder, DEFAULT_LIMIT,
    DEFAULT_PAGE,
};
