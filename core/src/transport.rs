//! Executing `HttpRequest` values against the network.
//!
//! # Design
//! `Transport` is the seam between the deterministic `CatClient` and real
//! I/O. `UreqTransport` is the blocking production implementation; tests
//! substitute scripted transports. `Logged` is the request-logging observer:
//! it wraps any transport and reports each outbound call before sending it,
//! without touching the request or the response.

use thiserror::Error;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Failure to complete an HTTP round-trip. Error statuses are not transport
/// failures; they come back as an `HttpResponse`.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP transport failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Executes one HTTP round-trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a shared `ureq::Agent`.
///
/// The agent reuses connections across calls. Status codes are never turned
/// into errors here; classifying them is the client's job.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let headers = &request.headers;
        let body = request.body.as_deref().unwrap_or_default().as_bytes();

        let mut response = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(&request.path), headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&request.path), headers).call(),
            HttpMethod::Post => with_headers(self.agent.post(&request.path), headers).send(body),
            HttpMethod::Put => with_headers(self.agent.put(&request.path), headers).send(body),
        }?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse { status, headers, body })
    }
}

fn with_headers<B>(
    builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    headers
        .iter()
        .fold(builder, |builder, (name, value)| builder.header(name.as_str(), value.as_str()))
}

/// Request-logging observer around another transport.
#[derive(Debug, Clone)]
pub struct Logged<T> {
    inner: T,
}

impl<T: Transport> Logged<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Transport> Transport for Logged<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        match request.body.as_deref().filter(|body| !body.is_empty()) {
            Some(body) => tracing::info!(
                method = %request.method,
                uri = %request.path,
                body,
                "outbound request"
            ),
            None => tracing::info!(method = %request.method, uri = %request.path, "outbound request"),
        }
        self.inner.execute(request)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tracing::Level;

    use super::*;
    use crate::test_support::capture;

    struct Recording {
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl Transport for Recording {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(HttpResponse::new(204, ""))
        }
    }

    #[test]
    fn logged_passes_request_and_response_through() {
        let logged = Logged::new(Recording {
            seen: Mutex::new(Vec::new()),
        });
        let request = HttpRequest {
            method: HttpMethod::Put,
            path: "http://localhost:3000/cats/1".to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(r#"{"name":"Smith"}"#.to_string()),
        };

        let response = logged.execute(&request).unwrap();
        assert_eq!(response.status, 204);

        let seen = logged.into_inner().seen.into_inner().unwrap();
        assert_eq!(seen, vec![request]);
    }

    fn request(method: HttpMethod, body: Option<&str>) -> HttpRequest {
        HttpRequest {
            method,
            path: "http://backend/cats/1".to_string(),
            headers: Vec::new(),
            body: body.map(str::to_string),
        }
    }

    fn logged_fields(request: &HttpRequest) -> Vec<crate::test_support::CapturedEvent> {
        let logged = Logged::new(Recording {
            seen: Mutex::new(Vec::new()),
        });
        let (result, logs) = capture(|| logged.execute(request));
        assert!(result.is_ok());
        logs.at(Level::INFO)
    }

    #[test]
    fn logged_reports_body_for_post_and_put() {
        for method in [HttpMethod::Post, HttpMethod::Put] {
            let events = logged_fields(&request(method, Some(r#"{"name":"Smith"}"#)));
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].field("method"), Some(method.as_str()));
            assert_eq!(events[0].field("uri"), Some("http://backend/cats/1"));
            assert_eq!(events[0].field("body"), Some(r#"{"name":"Smith"}"#));
        }
    }

    #[test]
    fn logged_omits_body_for_get_and_delete() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let events = logged_fields(&request(method, None));
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].field("method"), Some(method.as_str()));
            assert_eq!(events[0].field("uri"), Some("http://backend/cats/1"));
            assert_eq!(events[0].field("body"), None);
        }
    }

    #[test]
    fn logged_omits_empty_body() {
        let events = logged_fields(&request(HttpMethod::Put, Some("")));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].field("method"), Some("PUT"));
        assert_eq!(events[0].field("body"), None);
    }

    #[test]
    fn ureq_transport_reports_connection_failure() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        // Listener dropped: nothing accepts on `addr` any more.
        let transport = UreqTransport::new();
        let request = HttpRequest {
            method: HttpMethod::Get,
            path: format!("http://{addr}/cats"),
            headers: Vec::new(),
            body: None,
        };
        assert!(transport.execute(&request).is_err());
    }
}
