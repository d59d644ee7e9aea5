//! HTTP protocol implementation.
//!
//! This module implements the small HTTP/1.1 subset the server speaks: one
//! request line in, one response out, then the connection is closed.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection handler implementing the request-response state machine
//! - **`parser`**: Validates the request line into a [`request::ParsedRequest`] or an [`error::HttpError`]
//! - **`request`**: Methods and the parsed request
//! - **`response`**: Status codes and the response builder
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`error`**: Per-request errors and the HTML error page
//! - **`mime`**: Content types for the servable file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Single read of up to 1024 bytes
//!        └──────┬──────┘
//!               │
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, then resolve against the document root
//!        └──────┬───────────┘
//!               │ Response bytes ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//! use wwwserve::http::connection::Connection;
//! use wwwserve::static_files::DocumentRoot;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let root = Arc::new(DocumentRoot::new("www", false)?);
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let root = Arc::clone(&root);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, root);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod error;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
