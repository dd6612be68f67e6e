//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ResourceApi` - CRUD verbs against a REST resource collection
//! - `TokenStore` - Key/value storage for the bearer token

mod resource_api;
mod token_store;

pub use resource_api::{ClientError, QueryParams, ResourceApi};
pub use token_store::{TokenStore, TokenStoreError, AUTH_TOKEN_KEY};
