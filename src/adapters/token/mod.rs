//! Token Store Adapters
//!
//! Implementations of the TokenStore port for keeping the bearer token.
//!
//! ## Available Adapters
//!
//! - **FileTokenStore** - Stores tokens as a JSON object on disk
//! - **InMemoryTokenStore** - Stores tokens in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::token::{FileTokenStore, InMemoryTokenStore};
//!
//! // Survives restarts
//! let store = FileTokenStore::new("./data/tokens.json");
//!
//! // Testing
//! let store = InMemoryTokenStore::with_token("valid-token");
//! ```

mod file_token_store;
mod in_memory_token_store;

pub use file_token_store::FileTokenStore;
pub use in_memory_token_store::InMemoryTokenStore;
