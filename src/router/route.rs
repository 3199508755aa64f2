//! Route resolution

use crate::http::request::path_segments;

/// The handler a request target resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Target starts with `/files`; `name` is the second path segment.
    Files { name: Option<&'a str> },
    /// Target is exactly `/user-agent`.
    UserAgent,
    /// First path segment is `echo`; `text` is the second segment.
    Echo { text: Option<&'a str> },
    /// Target is exactly `/`.
    Root,
    NotFound,
}

impl<'a> Route<'a> {
    /// Picks the route for `target`. The arms are tried top to bottom and
    /// the first match wins, so `/files/echo` is a file request and
    /// `/echo/files` an echo.
    pub fn resolve(target: &'a str) -> Self {
        let segments = path_segments(target);
        let second = segments.get(1).copied();

        match target {
            t if t.starts_with("/files") => Route::Files { name: second },
            "/user-agent" => Route::UserAgent,
            _ if segments[0] == "echo" => Route::Echo { text: second },
            "/" => Route::Root,
            _ => Route::NotFound,
        }
    }
}
