//! Synchronous client core for the backend cats service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `CatService` closes the loop
//! by executing each request through a `Transport`, one call per operation.
//!
//! # Design
//! - `CatClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Status handling is an ordered rule list (`status`): 404 maps to
//!   `ApiError::NotFound` for item operations, every other error status to
//!   `ApiError::UnknownError`.
//! - The request-logging observer (`transport::Logged`) is composed once
//!   around the transport inside `CatService::new`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod service;
pub mod status;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

pub use client::CatClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::CatService;
pub use transport::{Logged, Transport, TransportError, UreqTransport};
pub use types::{CatRequest, CatResponse};
