//! HTTP Client Adapters
//!
//! reqwest-backed implementations of the resource port plus the envelope
//! client for the `/api/msw` namespace.
//!
//! Every request passes through the request interceptor chain before it is
//! sent and every outcome passes through the response interceptor chain:
//!
//! ```text
//! RequestBuilder ─► [RequestIdInterceptor, AuthHeaderInterceptor] ─► send
//!                                                                     │
//!        Ok(Response) / Err(ClientError) ◄── [LoggingInterceptor] ◄───┘
//! ```

mod endpoint;
mod envelope_client;
mod http_client;
mod interceptor;
mod resource_client;

pub use endpoint::ApiEndpoint;
pub use envelope_client::EnvelopeClient;
pub use http_client::{HttpClient, HttpClientBuilder, DEFAULT_TIMEOUT};
pub use interceptor::{
    generate_request_id, AuthHeaderInterceptor, LoggingInterceptor, RequestIdInterceptor,
    RequestInterceptor, ResponseInterceptor, REQUEST_ID_HEADER,
};
pub use resource_client::ResourceClient;
