//! Plain-data HTTP types and the transport seam.
//!
//! # Design
//! Requests and responses are described as plain data so the normalizer in
//! [`crate::client`] never touches the network directly. The [`Transport`]
//! trait is the only I/O boundary: given a fully-resolved `HttpRequest` it
//! yields an `HttpResponse` (status + raw body) or a transport-level error.
//! Tests substitute a recording transport; production code uses
//! [`UreqTransport`](crate::transport::UreqTransport).
//!
//! All fields use owned types (`String`, `Vec`) so values can be captured
//! and inspected by test doubles without lifetime concerns.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Caller-supplied options for a single `request` call.
///
/// The default is a GET with no body and no extra headers.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

/// An outgoing HTTP call described as plain data.
///
/// Built by `ApiClient::request` with the URL already resolved against the
/// configured base and headers already merged.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// The transport reads the body eagerly; the normalizer decides whether it
/// gets parsed at all (204 responses never are).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx, the `ok` flag of the underlying response.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_no_content(&self) -> bool {
        self.status == 204
    }
}

/// Executes one HTTP round-trip.
///
/// Each call is a single fire-and-forget attempt: no retries, no timeout
/// handling, no caching. Implementations return `ApiError::Transport` when
/// the call itself fails (connection refused, DNS, ...); non-2xx statuses
/// are returned as data for the normalizer to classify.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}
