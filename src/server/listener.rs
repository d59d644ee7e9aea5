use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::static_files::DocumentRoot;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let root = Arc::new(DocumentRoot::from_config(&cfg.static_files)?);

    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.server.listen_addr))?;
    info!(
        "Listening on {}, serving {}",
        cfg.server.listen_addr,
        root.path().display()
    );

    serve(listener, root).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve(listener: TcpListener, root: Arc<DocumentRoot>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let root = Arc::clone(&root);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, root);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
