use std::collections::HashMap;
use std::fmt;

/// HTTP request methods.
///
/// The common tokens get their own variant; anything else is carried
/// verbatim in `Other`. Routing only ever compares against `POST`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other token, exactly as sent
    Other(String),
}

/// Represents a parsed HTTP request from a client.
///
/// Header names keep the case the client sent and lookups are
/// case-sensitive: `header("user-agent")` does not find `User-Agent`.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request target (e.g. "/echo/abc"), never percent-decoded
    pub target: String,
    /// HTTP version token (typically "HTTP/1.1"), not validated
    pub version: String,
    /// Request headers, name as received to trimmed value
    pub headers: HashMap<String, String>,
    /// Request body; empty unless `Content-Length` announced one
    pub body: Vec<u8>,
}

/// Builder for constructing Request objects.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl Method {
    /// Maps a start-line token to a method. Never fails; unknown tokens
    /// become `Method::Other`.
    ///
    /// # Example
    ///
    /// ```
    /// # use framehttp::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Other("get".to_string()));
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            target: self.target.ok_or("target missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Request {
    /// Retrieves a header value by its exact, case-sensitive name.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the trimmed header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// The announced body length.
    ///
    /// `None` when the header is missing or is not a non-negative integer;
    /// such a request simply has no body.
    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length").and_then(|v| v.parse().ok())
    }

    /// True when `Accept-Encoding` mentions `gzip` anywhere in its value.
    /// Quality values are not interpreted.
    pub fn accepts_gzip(&self) -> bool {
        self.header("Accept-Encoding").is_some_and(|v| v.contains("gzip"))
    }

    /// Whether the connection must be closed after answering this request.
    ///
    /// Any `Connection` header counts, whatever its value; without one the
    /// HTTP/1.1 keep-alive default applies.
    pub fn wants_close(&self) -> bool {
        self.headers.contains_key("Connection")
    }
}

/// Target split into `/`-separated segments after dropping one leading `/`.
///
/// `"/echo/abc"` yields `["echo", "abc"]`, `"/"` yields `[""]`.
pub(crate) fn path_segments(target: &str) -> Vec<&str> {
    target
        .strip_prefix('/')
        .unwrap_or(target)
        .split('/')
        .collect()
}
