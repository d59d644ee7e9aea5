use std::path::Path;

use tokio::fs;

/// Name of the file served for directory targets.
pub const INDEX_FILE: &str = "index.html";

/// What a resolved target is on disk, computed once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A regular file; `extension` is the text after the last `.` in its
    /// name, or the whole name when there is no dot.
    File { extension: String },
    /// A directory; `has_index` is true when `index.html` inside it is a
    /// regular file.
    Directory { has_index: bool },
    /// Nothing servable: absent, unreadable metadata or a special file.
    Missing,
}

/// Classifies `target`, following symlinks.
pub async fn classify(target: &Path) -> Entry {
    match fs::metadata(target).await {
        Ok(meta) if meta.is_file() => Entry::File {
            extension: extension_of(target),
        },
        Ok(meta) if meta.is_dir() => Entry::Directory {
            has_index: is_file(&target.join(INDEX_FILE)).await,
        },
        _ => Entry::Missing,
    }
}

pub async fn is_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

fn extension_of(target: &Path) -> String {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    name.rsplit('.').next().unwrap_or_default().to_string()
}
