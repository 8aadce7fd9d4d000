//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 layer: one request per connection, only the
//! request line is parsed, and the connection closes after the response.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Extracts method, target and version from the request line
//! - **`request`**: Request representation and the `Method` set
//! - **`response`**: Status table, ordered headers and the response builder
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read of at most 4096 bytes
//!        └──────┬──────┘
//!               │ Request line parsed (nothing read → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Handler builds the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, shut down write half
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use static_server::handler::{Dispatcher, StaticFiles};
//! use static_server::http::connection::{Connection, DEFAULT_READ_LIMIT};
//! use static_server::http::response::Headers;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8000").await?;
//!     let dispatcher = Dispatcher::new(StaticFiles::new(".", "index.html"), Headers::new());
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let mut conn = Connection::new(socket, &dispatcher, DEFAULT_READ_LIMIT);
//!         if let Err(e) = conn.run().await {
//!             tracing::error!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
