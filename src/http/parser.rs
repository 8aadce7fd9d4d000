use crate::http::request::{Method, Request};

/// Parses the request line out of a raw buffer.
///
/// The buffer is split on CRLF and the first segment is split on single
/// spaces: token 0 is the method, token 1 the target, token 2 the version.
/// Missing tokens leave the target unset and the version at `"1.1"`. An
/// empty buffer produces an empty method, which no handler matches.
pub fn parse_request(buf: &[u8]) -> Request {
    let request_line = first_line(buf);
    let mut words = request_line.split(|&b| b == b' ');

    // split always yields at least one (possibly empty) token
    let method = words.next().map(decode).unwrap_or_default();
    let mut request = Request::new(Method::from(method.as_str()), None);

    if let Some(uri) = words.next() {
        request.uri = Some(decode(uri));
    }

    if let Some(version) = words.next() {
        request.version = decode(version);
    }

    request
}

fn first_line(buf: &[u8]) -> &[u8] {
    match buf.windows(2).position(|w| w == b"\r\n") {
        Some(end) => &buf[..end],
        None => buf,
    }
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
