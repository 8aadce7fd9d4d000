//! Request handling
//!
//! The accept loop is generic over [`Handler`]; [`Dispatcher`] is the
//! implementation the server runs with. It selects a handler by method:
//!
//! - `GET` → [`StaticFiles`]
//! - `OPTIONS` → 200 with `Allow: OPTIONS, GET`
//! - anything else → 501 Not Implemented

pub mod static_files;

use std::future::Future;

use crate::http::request::{Method, Request};
use crate::http::response::{Headers, Response, ResponseBuilder, StatusCode};

pub use static_files::StaticFiles;

/// Methods advertised in the `Allow` header of an OPTIONS response.
pub const ALLOWED_METHODS: &str = "OPTIONS, GET";

/// Turns a parsed request into a response.
///
/// An `Err` means an I/O failure while building the response. The connection
/// is dropped; protocol conditions (unknown method, missing file) are
/// responses, never errors.
pub trait Handler {
    fn handle(&self, request: &Request) -> impl Future<Output = anyhow::Result<Response>> + Send;
}

/// Method dispatch over the closed set GET / OPTIONS / other.
pub struct Dispatcher {
    static_files: StaticFiles,
    defaults: Headers,
}

impl Dispatcher {
    /// `defaults` is the header set every response starts from.
    pub fn new(static_files: StaticFiles, defaults: Headers) -> Self {
        Self {
            static_files,
            defaults,
        }
    }

    pub fn options(&self) -> Response {
        ResponseBuilder::new(StatusCode::Ok, &self.defaults)
            .header("Allow", ALLOWED_METHODS)
            .build()
    }

    pub fn not_implemented(&self) -> Response {
        Response::not_implemented(&self.defaults)
    }
}

impl Handler for Dispatcher {
    async fn handle(&self, request: &Request) -> anyhow::Result<Response> {
        match &request.method {
            Method::GET => self.static_files.get(request.target(), &self.defaults).await,
            Method::OPTIONS => Ok(self.options()),
            Method::Other(_) => Ok(self.not_implemented()),
        }
    }
}
