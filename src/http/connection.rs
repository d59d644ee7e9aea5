use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::parse_request;
use crate::http::response::Response;
use crate::http::writer::{ResponseWriter, serialize_response};
use crate::static_files::DocumentRoot;

/// Largest request accepted; only a single read is performed.
pub const MAX_REQUEST_SIZE: usize = 1024;

pub struct Connection {
    stream: TcpStream,
    root: Arc<DocumentRoot>,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing,
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, root: Arc<DocumentRoot>) -> Self {
        Self {
            stream,
            root,
            buffer: BytesMut::with_capacity(MAX_REQUEST_SIZE),
            state: ConnectionState::Reading,
        }
    }

    /// Runs one request/response exchange, then closes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.read_request().await?;
                    self.state = ConnectionState::Processing;
                }

                ConnectionState::Processing => {
                    let response = self.handle_request().await;
                    self.state = ConnectionState::Writing(ResponseWriter::from_bytes(response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Single receive; requests spanning several reads are not reassembled.
    async fn read_request(&mut self) -> anyhow::Result<()> {
        let mut temp = [0u8; MAX_REQUEST_SIZE];
        let n = self.stream.read(&mut temp).await?;
        self.buffer.extend_from_slice(&temp[..n]);
        Ok(())
    }

    async fn handle_request(&self) -> Bytes {
        match parse_request(&self.buffer) {
            Ok(req) => {
                tracing::debug!(method = req.method.as_str(), path = %req.path, "Parsed request");
                self.root.resolve(&req.path).await
            }
            Err(e) => {
                tracing::debug!(status = e.status.as_u16(), reason = %e.description, "Rejected request");
                serialize_response(&Response::from(e))
            }
        }
    }
}
