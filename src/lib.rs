//! wwwserve - static HTML/CSS server
//!
//! Core library for request parsing, path resolution and response synthesis.

pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
