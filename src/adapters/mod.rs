//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `client` - reqwest-backed resource and envelope clients
//! - `mock` - axum handler sets simulating the course backends
//! - `token` - Token store implementations (in-memory, JSON file)

pub mod client;
pub mod mock;
pub mod token;

pub use client::{ApiEndpoint, EnvelopeClient, HttpClient, ResourceClient};
pub use mock::{mock_router, Latency, MockDatabase, MockState};
pub use token::{FileTokenStore, InMemoryTokenStore};
