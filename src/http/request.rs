/// HTTP request methods.
///
/// The server implements GET and OPTIONS. Every other token, including an
/// empty one or a lowercase spelling of a supported verb, is kept verbatim in
/// `Other` and answered with 501 Not Implemented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// Any token without a handler
    Other(String),
}

/// Represents a parsed HTTP request line.
///
/// Only the request line is parsed. Headers and body are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, OPTIONS, ...)
    pub method: Method,
    /// The request target, `None` when the client omitted it
    pub uri: Option<String>,
    /// Protocol version as sent by the client, `"1.1"` when absent
    pub version: String,
}

impl Method {
    /// Returns the method token as it appeared on the request line.
    ///
    /// # Example
    ///
    /// ```
    /// # use static_server::http::request::Method;
    /// assert_eq!(Method::GET.as_str(), "GET");
    /// assert_eq!(Method::from("get").as_str(), "get");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::OPTIONS => "OPTIONS",
            Method::Other(token) => token,
        }
    }
}

impl From<&str> for Method {
    /// Case-sensitive: only the exact tokens `GET` and `OPTIONS` are recognised.
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "OPTIONS" => Method::OPTIONS,
            other => Method::Other(other.to_string()),
        }
    }
}

impl Request {
    pub const DEFAULT_VERSION: &'static str = "1.1";

    pub fn new(method: Method, uri: Option<String>) -> Self {
        Self {
            method,
            uri,
            version: Self::DEFAULT_VERSION.to_string(),
        }
    }

    /// The request target, or `""` if the client sent none.
    pub fn target(&self) -> &str {
        self.uri.as_deref().unwrap_or("")
    }
}
