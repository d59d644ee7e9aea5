//! Static file resolution.
//!
//! Maps a validated request path onto the document root and turns the result
//! into a complete response: the file itself, a redirect to the directory
//! form of the path, or an error page.
//!
//! The target is built by plain string concatenation of the document root and
//! the request path. A path such as `/../secret.html` therefore reaches
//! outside the root unless `confine_to_root` is enabled, in which case the
//! canonical target must lie inside the canonical root.

pub mod classify;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::{debug, warn};

use crate::config::StaticFilesConfig;
use crate::http::error::HttpError;
use crate::http::mime::ContentKind;
use crate::http::response::Response;
use crate::http::writer::serialize_response;

pub use classify::{Entry, INDEX_FILE, classify};

/// The directory all content is served from.
///
/// Read-only once built, so it can be shared between connections.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
    canonical_root: Option<PathBuf>,
    confine: bool,
}

impl DocumentRoot {
    /// Resolves `root` to an absolute path against the working directory.
    pub fn new(root: impl AsRef<Path>, confine: bool) -> anyhow::Result<Self> {
        let root = std::path::absolute(root.as_ref())?;

        let canonical_root = match std::fs::canonicalize(&root) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(root = %root.display(), error = %e, "Document root is not accessible");
                None
            }
        };

        Ok(Self {
            root,
            canonical_root,
            confine,
        })
    }

    pub fn from_config(cfg: &StaticFilesConfig) -> anyhow::Result<Self> {
        Self::new(&cfg.root, cfg.confine_to_root)
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Produces the wire bytes answering a GET of `path`. Never fails.
    pub async fn resolve(&self, path: &str) -> Bytes {
        serialize_response(&self.respond(path).await)
    }

    /// Like [`resolve`](Self::resolve) but stops before serialization.
    pub async fn respond(&self, path: &str) -> Response {
        match self.lookup(path).await {
            Ok(response) => {
                debug!(path, status = response.status.as_u16(), "Resolved path");
                response
            }
            Err(e) => {
                debug!(path, status = e.status.as_u16(), reason = %e.description, "Path rejected");
                Response::error(&e)
            }
        }
    }

    /// Root and path joined by concatenation, not by `Path::join`.
    pub fn target_for(&self, path: &str) -> PathBuf {
        let mut target = OsString::from(self.root.as_os_str());
        target.push(path);
        PathBuf::from(target)
    }

    async fn lookup(&self, path: &str) -> Result<Response, HttpError> {
        let target = self.target_for(path);

        if self.confine && !self.contains(&target).await {
            return Err(HttpError::not_found("path not found"));
        }

        match classify(&target).await {
            Entry::File { extension } => {
                let kind = ContentKind::from_extension(&extension)
                    .ok_or_else(|| HttpError::not_found("only serve css & html file"))?;
                let body = read_text(&target).await?;
                Ok(Response::file(kind, body))
            }
            Entry::Directory { has_index: true } if path.ends_with('/') => {
                let body = read_text(&target.join(INDEX_FILE)).await?;
                Ok(Response::file(ContentKind::Html, body))
            }
            Entry::Directory { has_index: true } => Ok(Response::redirect(format!("{path}/"))),
            Entry::Directory { has_index: false } => {
                Err(HttpError::not_found("directory has no index.html"))
            }
            Entry::Missing => Err(HttpError::not_found("path not found")),
        }
    }

    async fn contains(&self, target: &Path) -> bool {
        let Some(root) = &self.canonical_root else {
            return false;
        };

        match fs::canonicalize(target).await {
            Ok(resolved) => resolved.starts_with(root),
            Err(_) => false,
        }
    }
}

/// Reads a file as UTF-8, substituting U+FFFD for invalid sequences.
async fn read_text(path: &Path) -> Result<Vec<u8>, HttpError> {
    let bytes = fs::read(path).await.map_err(|e| {
        warn!(path = %path.display(), error = %e, "Failed to read file");
        HttpError::not_found("file could not be read")
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned().into_bytes())
}
