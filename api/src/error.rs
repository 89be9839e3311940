//! Rendering failures as inbound HTTP error responses.
//!
//! The mapping is a pure function of the failure kind: `NotFound` becomes
//! 404, everything else becomes 500. No failure-specific recovery happens
//! here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cat_core::ApiError;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Body of every inbound error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub path: String,
    pub exception_kind: String,
    pub status_code: u16,
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A failure raised while handling an inbound request, tagged with the
/// request path it occurred on.
#[derive(Debug)]
pub struct RouteError {
    status: StatusCode,
    kind: String,
    message: String,
    path: String,
}

impl RouteError {
    pub fn from_api(error: ApiError, path: &str) -> Self {
        let status = match error {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::UnknownError
            | ApiError::Deserialization(_)
            | ApiError::Serialization(_)
            | ApiError::InvalidBaseUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            kind: error.kind().to_string(),
            message: error.to_string(),
            path: path.to_string(),
        }
    }

    /// Any failure outside the cats taxonomy; always a 500.
    pub fn uncaught(kind: &str, error: impl ToString, path: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            kind: kind.to_string(),
            message: error.to_string(),
            path: path.to_string(),
        }
    }

    /// No route matched `path`.
    pub fn no_resource(path: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            kind: "NoResourceFound".to_string(),
            message: format!("No resource {path}."),
            path: path.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn to_body(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.message.clone(),
            path: self.path.clone(),
            exception_kind: self.kind.clone(),
            status_code: self.status.as_u16(),
            timestamp: Local::now().naive_local(),
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        (self.status, Json(self.to_body())).into_response()
    }
}
