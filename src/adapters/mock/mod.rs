//! Mock API Adapters
//!
//! Three independent handler sets served from one axum router:
//!
//! - **basic** - `/api/users`, `/api/protected`, `/api/slow`
//! - **msw** - the `/api/msw/*` namespace with simulated latency and failures
//! - **json_server** - raw `/users` resources for the resource clients
//!
//! All mutable data lives in a [`MockDatabase`] owned by [`MockState`], so
//! every router instance starts from seed data and can be reset.

mod basic;
mod error;
mod json_server;
mod latency;
mod msw;
mod store;

pub use error::MockApiError;
pub use latency::{Latency, MAX_LATENCY_SCALE};
pub use msw::{HandlerInfo, MSW_HANDLERS, VALID_TOKEN};
pub use store::{MockDatabase, MockState};

use axum::Router;

/// Router serving every mock handler set.
pub fn mock_router(state: MockState) -> Router {
    Router::new()
        .merge(basic::basic_routes())
        .merge(msw::msw_routes())
        .merge(json_server::json_server_routes())
        .with_state(state)
}
