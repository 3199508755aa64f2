use framehttp::http::response::{Response, ResponseBuilder, StatusCode};
use framehttp::http::writer::{ResponseWriter, serialize_response};

fn split_head(bytes: &[u8]) -> (String, Vec<u8>) {
    let end = bytes
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("header terminator");
    (
        String::from_utf8(bytes[..end].to_vec()).unwrap(),
        bytes[end + 4..].to_vec(),
    )
}

#[test]
fn test_serialize_status_line_and_empty_body() {
    let bytes = serialize_response(&Response::not_found());

    assert_eq!(bytes, b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n".to_vec());
}

#[test]
fn test_serialize_headers_and_body() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .body(b"abc".to_vec())
        .build();

    let (head, body) = split_head(&serialize_response(&response));
    let mut lines = head.split("\r\n");

    assert_eq!(lines.next(), Some("HTTP/1.1 200 OK"));
    let mut headers: Vec<&str> = lines.collect();
    headers.sort();
    assert_eq!(headers, vec!["Content-Length: 3", "Content-Type: text/plain"]);
    assert_eq!(body, b"abc".to_vec());
}

#[test]
fn test_serialize_headers_in_name_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("Content-Encoding", "gzip")
        .header("Connection", "close")
        .body(b"xyz".to_vec())
        .build();

    let (head, _) = split_head(&serialize_response(&response));

    assert_eq!(
        head,
        "HTTP/1.1 200 OK\r\n\
         Connection: close\r\n\
         Content-Encoding: gzip\r\n\
         Content-Length: 3\r\n\
         Content-Type: text/plain"
    );
}

#[test]
fn test_serialize_body_verbatim() {
    let raw = vec![0x1f, 0x8b, 0x00, b'\r', b'\n', 0xff];
    let response = ResponseBuilder::new(StatusCode::Ok).body(raw.clone()).build();

    let (_, body) = split_head(&serialize_response(&response));

    assert_eq!(body, raw);
}

#[tokio::test]
async fn test_writer_writes_serialized_bytes() {
    let response = Response::created();
    let writer = ResponseWriter::new(&response);

    let mut out: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(out, serialize_response(&response));
    assert_eq!(writer.as_bytes(), out.as_slice());
}
