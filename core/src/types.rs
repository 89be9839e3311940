//! Domain DTOs for the cats API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently of
//! the mock-server crate. Integration tests catch any schema drift between
//! the two. The backend names its identifier `_id`; the serde rename keeps
//! that on the wire in both directions.

use serde::{Deserialize, Serialize};

/// A cat as returned by the backend. The `id` is assigned by the backend and
/// is never produced locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub color: String,
    pub weight: f64,
}

/// Request payload for creating or replacing a cat. Carries no identity;
/// the id travels separately as a path segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatRequest {
    pub name: String,
    pub color: String,
    pub weight: f64,
}

impl CatRequest {
    pub fn new(name: impl Into<String>, color: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            weight,
        }
    }

    /// Returns a copy of this request with `weight` replaced.
    #[must_use]
    pub fn with_weight(&self, weight: f64) -> Self {
        Self {
            weight,
            ..self.clone()
        }
    }
}
