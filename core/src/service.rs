//! Outbound client adapter: one backend call per cats operation.
//!
//! `CatService` wires a `CatClient` to a `Transport` wrapped once in the
//! `Logged` observer. Every operation builds its request, sends it, and
//! hands the response to the matching `parse_*` method. There are no
//! retries; a transport failure is logged and surfaced as
//! `ApiError::UnknownError`.

use crate::client::CatClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Logged, Transport, UreqTransport};
use crate::types::{CatRequest, CatResponse};

/// Blocking adapter over the backend cats API. Shareable across threads.
pub struct CatService {
    client: CatClient,
    transport: Logged<Box<dyn Transport>>,
}

impl CatService {
    /// Fails with `ApiError::InvalidBaseUrl` when `base_url` cannot address
    /// the backend.
    pub fn new(base_url: &str, transport: impl Transport + 'static) -> Result<Self, ApiError> {
        Ok(Self {
            client: CatClient::new(base_url)?,
            transport: Logged::new(Box::new(transport)),
        })
    }

    /// Adapter backed by a fresh `UreqTransport`.
    pub fn with_ureq(base_url: &str) -> Result<Self, ApiError> {
        Self::new(base_url, UreqTransport::new())
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn create_cat(&self, input: &CatRequest) -> Result<CatResponse, ApiError> {
        let request = self.client.build_create_cat(input)?;
        let response = self.send(&request)?;
        self.client.parse_create_cat(&request, response)
    }

    pub fn get_cat(&self, id: &str) -> Result<CatResponse, ApiError> {
        let request = self.client.build_get_cat(id);
        let response = self.send(&request)?;
        self.client.parse_get_cat(&request, response)
    }

    pub fn update_cat(&self, id: &str, input: &CatRequest) -> Result<(), ApiError> {
        let request = self.client.build_update_cat(id, input)?;
        let response = self.send(&request)?;
        self.client.parse_update_cat(&request, response)
    }

    pub fn delete_cat(&self, id: &str) -> Result<(), ApiError> {
        let request = self.client.build_delete_cat(id);
        let response = self.send(&request)?;
        self.client.parse_delete_cat(&request, response)
    }

    pub fn list_cats(&self) -> Result<Vec<CatResponse>, ApiError> {
        let request = self.client.build_list_cats();
        let response = self.send(&request)?;
        self.client.parse_list_cats(&request, response)
    }

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport.execute(request).map_err(|error| {
            tracing::error!(
                method = %request.method,
                uri = %request.path,
                %error,
                "An unknown error occurred while processing the cat request"
            );
            ApiError::UnknownError
        })
    }
}
