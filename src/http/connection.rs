use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::handler::Handler;
use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// Upper bound on the bytes read from a client.
pub const DEFAULT_READ_LIMIT: usize = 4096;

/// One request/response exchange on an accepted stream.
///
/// The stream is read once, so a request line longer than the read limit is
/// truncated. The connection always closes after the response.
pub struct Connection<'h, S, H> {
    stream: S,
    handler: &'h H,
    buffer: BytesMut,
    read_limit: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<'h, S, H> Connection<'h, S, H>
where
    S: AsyncRead + AsyncWrite + Unpin,
    H: Handler,
{
    pub fn new(stream: S, handler: &'h H, read_limit: usize) -> Self {
        Self {
            stream,
            handler,
            buffer: BytesMut::with_capacity(read_limit),
            read_limit,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => match self.read_request().await? {
                    Some(req) => ConnectionState::Processing(req),
                    None => ConnectionState::Closed,
                },

                ConnectionState::Processing(req) => {
                    let response = self.handler.handle(&req).await?;
                    info!(
                        method = req.method.as_str(),
                        uri = req.target(),
                        status = response.status.as_u16(),
                        "Request handled"
                    );
                    ConnectionState::Writing(ResponseWriter::new(&response))
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Reads a single chunk and parses its request line.
    ///
    /// Returns `None` if the client closed without sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        self.buffer.clear();
        self.buffer.reserve(self.read_limit);

        let mut limited = (&mut self.stream).take(self.read_limit as u64);
        let n = limited.read_buf(&mut self.buffer).await?;

        if n == 0 {
            debug!("Client closed connection before sending a request");
            return Ok(None);
        }

        Ok(Some(parse_request(&self.buffer)))
    }
}
