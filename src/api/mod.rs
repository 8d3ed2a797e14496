//! Typed bindings for the platform's REST API.
//!
//! Resource APIs are generic over a [`Transport`] so tests can swap the
//! real HTTP client for an in-memory fake. Each binding builds a request,
//! hands it to the transport, and decodes the resource-named envelope the
//! server wraps its payloads in.

mod auth;
mod error;
mod orders;
mod suppliers;
mod transport;

pub use auth::{AuthApi, AuthResponse};
pub use error::ApiError;
pub use orders::CustomOrderApi;
pub use suppliers::SupplierApi;
pub use transport::{ApiRequest, HttpTransport, Transport};
