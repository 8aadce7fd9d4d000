//! StaticServer - a minimal HTTP/1.1 file server on raw TCP
//!
//! Parses the request line by hand, dispatches on the method and serves
//! files from a root directory, one connection at a time.

pub mod config;
pub mod handler;
pub mod http;
pub mod server;
