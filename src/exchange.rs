//! Wire-level capture of a single HTTP exchange.
//!
//! The core never performs HTTP itself; test drivers pass the exchange they
//! already executed so that schema-construction and validation errors can
//! carry the full request/response context into the final report.

use serde::{Deserialize, Serialize};

/// Snapshot of one request/response pair against the service provider.
///
/// All fields are plain strings as rendered by the external HTTP client;
/// the core only stores and surfaces them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpExchange {
    /// HTTP method of the request (GET, POST, ...)
    pub request_method: String,
    /// Full request URL
    pub request_uri: String,
    /// Request body, empty for body-less requests
    pub request_body: String,
    /// Rendered request headers
    pub request_headers: String,
    /// Response body as returned by the service provider
    pub response_body: String,
    /// Rendered response headers
    pub response_headers: String,
    /// Response status line, e.g. "200 OK"
    pub response_status: String,
}

impl HttpExchange {
    /// An exchange with no captured traffic, for callers that validate
    /// locally-constructed data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture a GET exchange, the shape used by schema discovery.
    pub fn get(uri: impl Into<String>) -> Self {
        Self {
            request_method: "GET".to_string(),
            request_uri: uri.into(),
            ..Self::default()
        }
    }

    /// Attach the response side of the exchange.
    pub fn with_response(
        mut self,
        body: impl Into<String>,
        headers: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        self.response_body = body.into();
        self.response_headers = headers.into();
        self.response_status = status.into();
        self
    }
}
