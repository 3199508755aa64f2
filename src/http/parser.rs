use crate::http::request::{Method, Request};
use std::collections::HashMap;
use thiserror::Error;

const CRLF: &[u8] = b"\r\n";
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The header block is not terminated yet, or fewer body bytes than
    /// `Content-Length` announced have arrived.
    #[error("request is incomplete")]
    Incomplete,

    #[error("malformed start line: expected method, target and version, got {tokens} token(s)")]
    MalformedStartLine { tokens: usize },
}

/// Parses one request out of `buf`.
///
/// The header block ends at the LAST `\r\n\r\n` in the buffer, so a stray
/// terminator inside a header value does not cut the headers short. The body
/// starts right after it and is exactly `Content-Length` bytes long; a missing
/// or non-numeric `Content-Length` means no body.
///
/// Returns the request and the number of bytes it occupied.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;

    // A terminator exists, so there is at least one CRLF before it.
    let start_line_end = find(buf, CRLF).ok_or(ParseError::Incomplete)?;
    let start_line = String::from_utf8_lossy(&buf[..start_line_end]);

    // Request line
    let tokens: Vec<&str> = start_line.split(' ').collect();
    if tokens.len() < 3 {
        return Err(ParseError::MalformedStartLine {
            tokens: tokens.len(),
        });
    }
    let (method, target, version) = (tokens[0], tokens[1], tokens[2]);

    // Headers. With no header lines the start line's CRLF is the first half
    // of the terminator and the block is empty.
    let headers_start = start_line_end + CRLF.len();
    let header_block = if headers_start <= headers_end {
        String::from_utf8_lossy(&buf[headers_start..headers_end])
    } else {
        Default::default()
    };

    let mut headers = HashMap::new();
    for line in header_block.split("\r\n") {
        // Lines without a colon are skipped.
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        headers.insert(key.to_string(), value.trim().to_string());
    }

    let mut request = Request {
        method: Method::from_token(method),
        target: target.to_string(),
        version: version.to_string(),
        headers,
        body: Vec::new(),
    };

    // Body
    let body_start = headers_end + HEADER_TERMINATOR.len();
    if let Some(len) = request.content_length() {
        let body_end = body_start.checked_add(len).ok_or(ParseError::Incomplete)?;
        if buf.len() < body_end {
            return Err(ParseError::Incomplete);
        }
        request.body = buf[body_start..body_end].to_vec();
    }

    let consumed = body_start + request.body.len();
    Ok((request, consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_TERMINATOR.len())
        .rposition(|w| w == HEADER_TERMINATOR)
}

fn find(buf: &[u8], needle: &[u8]) -> Option<usize> {
    buf.windows(needle.len()).position(|w| w == needle)
}
