//! Error types for the cats API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the inbound boundary renders
//! it as 404. Every other error status, and any transport failure, collapses
//! into `UnknownError` so backend-specific error detail never reaches the
//! caller. Codec failures keep their own variants and surface as generic
//! failures.

use thiserror::Error;

/// Errors returned by `CatClient` parse methods and `CatService` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend returned 404 for an item operation.
    #[error("Cat not found.")]
    NotFound,

    /// The backend returned any other error status, or the transport failed.
    #[error("An unknown error occurred while processing the cat request.")]
    UnknownError,

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The configured backend base URL cannot be used to build request URLs.
    #[error("invalid backend base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Stable name of the failure kind, rendered in inbound error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound => "CatNotFoundError",
            ApiError::UnknownError => "CatUnknownError",
            ApiError::Deserialization(_) => "DeserializationError",
            ApiError::Serialization(_) => "SerializationError",
            ApiError::InvalidBaseUrl(_) => "InvalidBaseUrlError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_backend_wording() {
        assert_eq!(ApiError::NotFound.to_string(), "Cat not found.");
        assert_eq!(
            ApiError::UnknownError.to_string(),
            "An unknown error occurred while processing the cat request."
        );
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            ApiError::NotFound.kind(),
            ApiError::UnknownError.kind(),
            ApiError::Deserialization(String::new()).kind(),
            ApiError::Serialization(String::new()).kind(),
            ApiError::InvalidBaseUrl(String::new()).kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
