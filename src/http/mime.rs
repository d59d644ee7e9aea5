/// The file types the server will serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Css,
}

impl ContentKind {
    /// Maps a file extension (without the dot) to a servable kind.
    ///
    /// Matching is exact: `HTML` or `htm` are not served.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "html" => Some(ContentKind::Html),
            "css" => Some(ContentKind::Css),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ContentKind::Html => "text/html;charset=utf-8",
            ContentKind::Css => "text/css;charset=utf-8",
        }
    }
}
