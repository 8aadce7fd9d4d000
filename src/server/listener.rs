use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::Config;
use crate::handler::{Dispatcher, Handler, StaticFiles};
use crate::http::connection::Connection;
use crate::server::listing;

const BACKLOG: u32 = 5;

/// Binds, writes the directory page and serves until the process exits.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    let files = &cfg.static_files;
    if files.generate_listing {
        listing::write_listing_page(&files.root, &files.index_file).await?;
    }

    let dispatcher = Dispatcher::new(
        StaticFiles::new(files.root.clone(), files.index_file.clone()),
        cfg.server.default_headers(),
    );

    serve(listener, dispatcher, cfg.server.read_buffer_size).await
}

/// Binds a listening socket with SO_REUSEADDR set.
pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = tokio::net::lookup_host(addr)
        .await
        .with_context(|| format!("invalid listen address {addr}"))?
        .next()
        .with_context(|| format!("listen address {addr} resolved to nothing"))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {addr}"))?;

    Ok(socket.listen(BACKLOG)?)
}

/// Accept loop. Each connection is handled to completion before the next
/// accept, and its errors are logged without stopping the loop.
pub async fn serve<H>(listener: TcpListener, handler: H, read_limit: usize) -> anyhow::Result<()>
where
    H: Handler + Sync,
{
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, &handler, read_limit);
        if let Err(e) = conn.run().await {
            error!("Connection error from {}: {}", peer, e);
        }
    }
}
