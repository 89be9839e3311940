//! Response classification by status code.
//!
//! # Design
//! Classification is an ordered list of `(predicate, failure)` rules checked
//! top to bottom; the first match wins and anything unmatched is a success.
//! Item operations check 404 ahead of the generic error rule, collection
//! operations only carry the generic rule, so a 404 on `/cats` is an
//! unknown error rather than a missing cat.

use crate::error::ApiError;
use crate::http::HttpRequest;

/// Typed failure selected by a matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    NotFound,
    UnknownError,
}

impl From<Failure> for ApiError {
    fn from(failure: Failure) -> Self {
        match failure {
            Failure::NotFound => ApiError::NotFound,
            Failure::UnknownError => ApiError::UnknownError,
        }
    }
}

/// One step of the classification chain.
#[derive(Debug, Clone, Copy)]
pub struct StatusRule {
    pub matches: fn(u16) -> bool,
    pub failure: Failure,
}

pub const NOT_FOUND_RULE: StatusRule = StatusRule {
    matches: is_not_found,
    failure: Failure::NotFound,
};

pub const ERROR_RULE: StatusRule = StatusRule {
    matches: is_error,
    failure: Failure::UnknownError,
};

/// Rules for `/cats/{id}` operations.
pub const ITEM_RULES: &[StatusRule] = &[NOT_FOUND_RULE, ERROR_RULE];

/// Rules for `/cats` operations.
pub const COLLECTION_RULES: &[StatusRule] = &[ERROR_RULE];

pub fn is_not_found(status: u16) -> bool {
    status == 404
}

/// Client (4xx) or server (5xx) error.
pub fn is_error(status: u16) -> bool {
    (400..600).contains(&status)
}

/// Run `rules` against `status`. A matching rule is logged once with the
/// request's method and URI and returned as the corresponding `ApiError`.
pub fn classify(rules: &[StatusRule], request: &HttpRequest, status: u16) -> Result<(), ApiError> {
    let Some(rule) = rules.iter().find(|rule| (rule.matches)(status)) else {
        return Ok(());
    };

    match rule.failure {
        Failure::NotFound => tracing::error!(
            method = %request.method,
            uri = %request.path,
            status,
            "Cat not found"
        ),
        Failure::UnknownError => tracing::error!(
            method = %request.method,
            uri = %request.path,
            status,
            "An unknown error occurred while processing the cat request"
        ),
    }
    Err(rule.failure.into())
}
