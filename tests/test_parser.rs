use framehttp::http::parser::{ParseError, parse_http_request};
use framehttp::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.target, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert!(parsed.body.is_empty());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_request_without_headers() {
    let req = b"GET /echo/abc HTTP/1.1\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.target, "/echo/abc");
    assert!(parsed.headers.is_empty());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /files/test.txt HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.target, "/files/test.txt");
    assert_eq!(parsed.body, b"hello".to_vec());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_body_length_ignores_trailing_padding() {
    let mut req = b"POST /files/a HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello".to_vec();
    req.extend_from_slice(&[0u8; 64]);

    let (parsed, consumed) = parse_http_request(&req).unwrap();

    assert_eq!(parsed.body, b"hello".to_vec());
    assert_eq!(consumed, req.len() - 64);
}

#[test]
fn test_missing_content_length_means_no_body() {
    let req = b"POST /files/a HTTP/1.1\r\nHost: x\r\n\r\nhello";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert!(parsed.body.is_empty());
    assert_eq!(consumed, req.len() - 5);
}

#[test]
fn test_invalid_content_length_means_no_body() {
    for value in ["abc", "-1", "5x", ""] {
        let req = format!("POST /files/a HTTP/1.1\r\nContent-Length: {}\r\n\r\nhello", value);
        let (parsed, _) = parse_http_request(req.as_bytes()).unwrap();
        assert!(parsed.body.is_empty(), "Content-Length {:?}", value);
    }
}

#[test]
fn test_content_length_value_is_trimmed() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length:   3  \r\n\r\nabcdef";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.content_length(), Some(3));
    assert_eq!(parsed.body, b"abc".to_vec());
    assert_eq!(consumed, req.len() - 3);
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\n\
                User-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("Accept").unwrap(), "*/*");
}

#[test]
fn test_header_value_split_on_first_colon_and_trimmed() {
    let req = b"GET / HTTP/1.1\r\nHost:   localhost:4221  \r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("Host"), Some("localhost:4221"));
}

#[test]
fn test_header_names_keep_their_case() {
    let req = b"GET / HTTP/1.1\r\nuser-agent: lower\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("user-agent"), Some("lower"));
    assert_eq!(parsed.header("User-Agent"), None);
}

#[test]
fn test_lines_without_colon_are_skipped() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: a\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.header("Host"), Some("a"));
}

#[test]
fn test_duplicate_header_last_wins() {
    let req = b"GET / HTTP/1.1\r\nX-Tag: one\r\nX-Tag: two\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("X-Tag"), Some("two"));
}

#[test]
fn test_target_is_not_percent_decoded() {
    let req = b"GET /echo/a%20b HTTP/1.1\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.target, "/echo/a%20b");
}

#[test]
fn test_unknown_method_is_kept() {
    let req = b"BREW /pot HTTP/1.1\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::Other("BREW".to_string()));
}

#[test]
fn test_parse_malformed_start_line() {
    let result = parse_http_request(b"GET /\r\nHost: a\r\n\r\n");
    assert_eq!(result.unwrap_err(), ParseError::MalformedStartLine { tokens: 2 });

    let result = parse_http_request(b"GARBAGE\r\n\r\n");
    assert_eq!(result.unwrap_err(), ParseError::MalformedStartLine { tokens: 1 });
}

#[test]
fn test_extra_start_line_tokens_are_ignored() {
    let (parsed, _) = parse_http_request(b"GET / HTTP/1.1 extra\r\n\r\n").unwrap();

    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_incomplete_request_partial_body() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_request_with_empty_body() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: 0\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body.len(), 0);
}

#[test]
fn test_parse_request_with_binary_body() {
    let req = b"POST /upload HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\xff\x02\x03";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, vec![0, 255, 2, 3]);
}
