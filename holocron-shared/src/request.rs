//! # Request wrapper
//!
//! Issues one HTTP call and folds the outcome into a [`RequestResult`].
//! HTTP-level failures are values; only transport faults are errors.

use async_trait::async_trait;
use reqwest::{Client, Method, header::CONTENT_TYPE};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const JSON_CONTENT_TYPE: &str = "application/json";
const NOT_FOUND: u16 = 404;

/// Faults that escape the request wrapper.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The HTTP client could not complete the exchange.
    #[error("transport failure: {0}")]
    Http(#[from] reqwest::Error),

    /// A non-reqwest transport could not complete the exchange.
    #[error("transport unavailable: {message}")]
    Unavailable { message: String },

    /// A request body could not be encoded or a 2xx body was not JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for request operations.
pub type RequestOutcome = Result<RequestResult, RequestError>;

/// A response as seen on the wire, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// Moves bytes between the client and a server.
#[async_trait(?Send)]
pub trait Transport {
    /// Sends one request with a JSON content type.
    ///
    /// # Errors
    /// Returns an error only when no HTTP response was obtained.
    async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> Result<RawResponse, RequestError>;
}

/// Production transport on top of `reqwest`, usable in the browser and natively.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> Result<RawResponse, RequestError> {
        let mut builder = self
            .client
            .request(method, uri)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            body,
        })
    }
}

/// Per-call options for [`request`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// JSON body to send.
    pub body: Option<Value>,
    /// Human-readable text reported instead of the status text on a 404.
    pub not_found_text: Option<String>,
}

impl RequestOptions {
    /// Options carrying `body` serialized as JSON.
    ///
    /// # Errors
    /// Returns an error if `body` cannot be represented as JSON.
    pub fn json(body: &impl serde::Serialize) -> Result<Self, RequestError> {
        Ok(Self {
            body: Some(serde_json::to_value(body)?),
            not_found_text: None,
        })
    }

    /// Options carrying a 404 hint.
    pub fn not_found(text: impl Into<String>) -> Self {
        Self {
            body: None,
            not_found_text: Some(text.into()),
        }
    }
}

/// Details of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub status: u16,
    pub status_text: String,
    /// Only set for 404 responses, and only when the caller supplied one.
    pub not_found_text: Option<String>,
}

impl RequestFailure {
    /// Message for an error action: the 404 hint, else the status text, else `fallback`.
    #[must_use]
    pub fn message(&self, fallback: &str) -> String {
        self.not_found_text
            .as_deref()
            .or_else(|| Some(self.status_text.as_str()).filter(|text| !text.is_empty()))
            .unwrap_or(fallback)
            .to_owned()
    }
}

/// Normalized outcome of a network call.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestResult {
    /// A 2xx response; `data` is `None` for an empty body.
    Success { data: Option<Value> },
    /// Any other status.
    Failure(RequestFailure),
}

impl RequestResult {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Status of a failed call.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(failure) => Some(failure.status),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(NOT_FOUND))
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&RequestFailure> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

/// Issues `method uri` and normalizes the response.
///
/// # Errors
/// Returns an error on a transport fault, when the body cannot be encoded, or
/// when a 2xx body is not valid JSON. HTTP error statuses are never errors.
pub async fn request<T>(
    transport: &T,
    method: Method,
    uri: &str,
    options: RequestOptions,
) -> RequestOutcome
where
    T: Transport + ?Sized,
{
    let body = options
        .body
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    debug!(%method, uri, "sending request");
    let response = transport.send(method, uri, body).await?;
    debug!(uri, status = response.status, "received response");

    if (200..300).contains(&response.status) {
        let data = if response.body.is_empty() {
            None
        } else {
            Some(serde_json::from_str(&response.body)?)
        };
        return Ok(RequestResult::Success { data });
    }

    let not_found_text = if response.status == NOT_FOUND {
        options.not_found_text
    } else {
        None
    };
    Ok(RequestResult::Failure(RequestFailure {
        status: response.status,
        status_text: response.status_text,
        not_found_text,
    }))
}
