use static_server::config::ServerConfig;
use static_server::http::response::{Headers, Response, ResponseBuilder, StatusCode};
use static_server::http::writer::serialize_response;

fn defaults() -> Headers {
    ServerConfig::default().default_headers()
}

/// Splits wire bytes into (head, body) at the first blank line.
fn split_response(wire: &[u8]) -> (String, Vec<u8>) {
    let pos = wire
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("header terminator");
    let head = String::from_utf8(wire[..pos].to_vec()).unwrap();
    (head, wire[pos + 4..].to_vec())
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
}

#[test]
fn test_headers_insert_replaces_in_place() {
    let mut headers = Headers::new();
    headers.insert("Server", "StaticServer");
    headers.insert("Content-Type", "text/html");
    headers.insert("content-type", "image/png");

    assert_eq!(headers.len(), 2);
    let order: Vec<_> = headers.iter().collect();
    assert_eq!(
        order,
        vec![("Server", "StaticServer"), ("Content-Type", "image/png")]
    );
}

#[test]
fn test_response_builder_starts_from_defaults() {
    let response = ResponseBuilder::new(StatusCode::Ok, &defaults())
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.headers.get("Server").unwrap(), "StaticServer");
    assert_eq!(response.headers.get("Content-Type").unwrap(), "text/html");
    assert_eq!(response.body, b"Hello, World!".to_vec());
}

#[test]
fn test_response_builder_override_keeps_defaults_untouched() {
    let defaults = defaults();
    let response = ResponseBuilder::new(StatusCode::Ok, &defaults)
        .header("Content-Type", "text/plain")
        .build();

    assert_eq!(response.headers.get("Content-Type").unwrap(), "text/plain");
    assert_eq!(defaults.get("Content-Type").unwrap(), "text/html");
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok, &defaults())
        .body(body.clone())
        .build();

    assert_eq!(
        response.headers.get("Content-Length").unwrap(),
        body.len().to_string()
    );
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok, &defaults())
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.headers.get("Content-Length").unwrap(), "999");
}

#[test]
fn test_response_not_found_helper() {
    let response = Response::not_found(&defaults());

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, b"<h1>404 Not Found</h1>".to_vec());
    assert_eq!(response.headers.get("Content-Type").unwrap(), "text/html");
}

#[test]
fn test_response_not_implemented_helper() {
    let response = Response::not_implemented(&defaults());

    assert_eq!(response.status, StatusCode::NotImplemented);
    assert_eq!(response.body, b"<h1>501 Not Implemented</h1>".to_vec());
}

#[test]
fn test_serialize_exact_wire_bytes() {
    let response = ResponseBuilder::new(StatusCode::Ok, &defaults())
        .header("Allow", "OPTIONS, GET")
        .build();

    let wire = serialize_response(&response);
    assert_eq!(
        &wire[..],
        &b"HTTP/1.1 200 OK\r\n\
           Server: StaticServer\r\n\
           Content-Type: text/html\r\n\
           Allow: OPTIONS, GET\r\n\
           Content-Length: 0\r\n\
           \r\n"[..]
    );
}

#[test]
fn test_serialize_single_terminator_before_body() {
    // Body itself contains a blank line; the header block must still end
    // at the first one and the body must come through untouched.
    let body = b"line one\r\n\r\nline two\x00\xff".to_vec();
    let response = ResponseBuilder::new(StatusCode::NotFound, &defaults())
        .body(body.clone())
        .build();

    let wire = serialize_response(&response);
    let (head, parsed_body) = split_response(&wire);

    assert!(head.starts_with("HTTP/1.1 404 Not Found"));
    assert!(!head.contains("\r\n\r\n"));
    assert_eq!(parsed_body, body);
}
