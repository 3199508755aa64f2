use std::collections::BTreeMap;

use crate::http::encoding::{self, EncodeError};
use crate::http::request::Request;

/// HTTP status codes the server answers with.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): File written
/// - `BadRequest` (400): Malformed or oversized request
/// - `NotFound` (404): No route, or a file that could not be read or written
/// - `InternalServerError` (500): Response could not be encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use framehttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the reason phrase written on the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use framehttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers, kept sorted by name so equal header sets serialize identically
    pub headers: BTreeMap<String, String>,
    /// Response body as sent, compressed if `Content-Encoding` is set
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body(b"abc".to_vec())
///     .build();
/// ```
#[derive(Debug)]
pub struct ResponseBuilder {
    status: StatusCode,
    headers: BTreeMap<String, String>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds or replaces a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn has_header(&self, key: &str) -> bool {
        self.headers.contains_key(key)
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// Adds a Content-Length header from the body size unless one was set.
    pub fn build(mut self) -> Response {
        self.headers
            .entry("Content-Length".to_string())
            .or_insert_with(|| self.body.len().to_string());

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Builds a content response for `request`, compressing when negotiated.
    ///
    /// `Content-Type` is set from `content_type` and `Content-Length` first
    /// from the raw content. If the request's `Accept-Encoding` mentions gzip,
    /// `Content-Encoding: gzip` is added, the content is compressed and
    /// `Content-Length` is overwritten with the compressed size.
    pub fn negotiated(
        status: StatusCode,
        content_type: &str,
        content: Vec<u8>,
        request: &Request,
    ) -> Result<Self, EncodeError> {
        let mut builder = ResponseBuilder::new(status)
            .header("Content-Type", content_type)
            .header("Content-Length", content.len().to_string());

        if request.accepts_gzip() {
            builder = builder.header("Content-Encoding", "gzip");
        }

        let body = if builder.has_header("Content-Encoding") {
            let compressed = encoding::gzip(&content)?;
            builder = builder.header("Content-Length", compressed.len().to_string());
            compressed
        } else {
            content
        };

        Ok(builder.body(body).build())
    }

    /// A response with no body; only `Content-Length: 0` is set.
    pub fn empty(status: StatusCode) -> Self {
        ResponseBuilder::new(status).build()
    }

    /// Creates an empty 200 OK response.
    pub fn ok() -> Self {
        Self::empty(StatusCode::Ok)
    }

    /// Creates an empty 201 Created response.
    pub fn created() -> Self {
        Self::empty(StatusCode::Created)
    }

    /// Creates an empty 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self::empty(StatusCode::BadRequest)
    }

    /// Creates an empty 404 Not Found response.
    pub fn not_found() -> Self {
        Self::empty(StatusCode::NotFound)
    }

    /// Creates an empty 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self::empty(StatusCode::InternalServerError)
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Marks the response as the last one on its connection.
    pub fn close_connection(&mut self) {
        self.headers.insert("Connection".to_string(), "close".to_string());
    }
}
