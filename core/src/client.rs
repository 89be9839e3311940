//! Stateless HTTP request builder and response parser for the cats API.
//!
//! # Design
//! `CatClient` holds only a parsed `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Identifiers are pushed as a single percent-encoded path
//! segment, so `?`, `#`, `/` or spaces in an id never change which resource
//! is addressed. Parsing runs the status rules from `status` first; the
//! originating request is passed along so a failure can be logged with its
//! method and URI.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::status::{classify, COLLECTION_RULES, ITEM_RULES};
use crate::types::{CatRequest, CatResponse};

/// Synchronous, stateless client for the cats API.
#[derive(Debug, Clone)]
pub struct CatClient {
    base_url: Url,
}

impl CatClient {
    /// Fails when `base_url` is not an absolute URL that can carry a path.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(format!("{base_url}: cannot carry a path")));
        }
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn build_list_cats(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.cats_url(None),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_cat(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.cats_url(Some(id)),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_cat(&self, input: &CatRequest) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.cats_url(None),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_cat(&self, id: &str, input: &CatRequest) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.cats_url(Some(id)),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_cat(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.cats_url(Some(id)),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `{base}/cats`, or `{base}/cats/{id}` with `id` encoded as one segment.
    fn cats_url(&self, id: Option<&str>) -> String {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("cats");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url.into()
    }

    pub fn parse_list_cats(
        &self,
        request: &HttpRequest,
        response: HttpResponse,
    ) -> Result<Vec<CatResponse>, ApiError> {
        classify(COLLECTION_RULES, request, response.status)?;
        let cats: Vec<CatResponse> = from_json(&response.body)?;
        for cat in &cats {
            require_id(cat)?;
        }
        Ok(cats)
    }

    pub fn parse_get_cat(
        &self,
        request: &HttpRequest,
        response: HttpResponse,
    ) -> Result<CatResponse, ApiError> {
        classify(ITEM_RULES, request, response.status)?;
        let cat = from_json(&response.body)?;
        require_id(&cat)?;
        Ok(cat)
    }

    pub fn parse_create_cat(
        &self,
        request: &HttpRequest,
        response: HttpResponse,
    ) -> Result<CatResponse, ApiError> {
        classify(COLLECTION_RULES, request, response.status)?;
        let cat = from_json(&response.body)?;
        require_id(&cat)?;
        Ok(cat)
    }

    /// The backend's update body, if any, is ignored.
    pub fn parse_update_cat(&self, request: &HttpRequest, response: HttpResponse) -> Result<(), ApiError> {
        classify(ITEM_RULES, request, response.status)
    }

    pub fn parse_delete_cat(&self, request: &HttpRequest, response: HttpResponse) -> Result<(), ApiError> {
        classify(ITEM_RULES, request, response.status)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(input: &CatRequest) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn require_id(cat: &CatResponse) -> Result<(), ApiError> {
    if cat.id.is_empty() {
        return Err(ApiError::Deserialization("backend returned a cat with an empty _id".to_string()));
    }
    Ok(())
}
