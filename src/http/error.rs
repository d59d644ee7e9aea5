//! Per-request HTTP errors and the error page they render to.

use thiserror::Error;

use crate::http::response::StatusCode;

const ERROR_PAGE_HEAD: &str = "\
<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\"
        \"http://www.w3.org/TR/html4/strict.dtd\">
<html>
    <head>
        <meta http-equiv=\"Content-Type\" content=\"text/html;charset=utf-8\">
        <title>Error response</title>
    </head>
    <body>
        <h1>Error response</h1>
";

const ERROR_PAGE_TAIL: &str = "    </body>
</html>
";

/// A validation or lookup failure that is answered with an error page.
///
/// The description may carry text derived from the request, so it is
/// HTML-escaped whenever it is rendered into a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {description}")]
pub struct HttpError {
    pub status: StatusCode,
    pub description: String,
}

impl HttpError {
    pub fn new(status: StatusCode, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
        }
    }

    pub fn bad_request(description: impl Into<String>) -> Self {
        Self::new(StatusCode::BadRequest, description)
    }

    pub fn not_found(description: impl Into<String>) -> Self {
        Self::new(StatusCode::NotFound, description)
    }

    pub fn method_not_allowed(description: impl Into<String>) -> Self {
        Self::new(StatusCode::MethodNotAllowed, description)
    }

    /// Renders the HTML error page with the numeric code and escaped description.
    pub fn render_page(&self) -> String {
        let mut page = String::with_capacity(ERROR_PAGE_HEAD.len() + 128);
        page.push_str(ERROR_PAGE_HEAD);
        page.push_str(&format!(
            "        <p>Error code: {}</p>\n",
            self.status.as_u16()
        ));
        page.push_str(&format!(
            "        <p>Message: {}.</p>\n",
            escape_html(&self.description, false)
        ));
        page.push_str(ERROR_PAGE_TAIL);
        page
    }
}

/// Replaces `&`, `<` and `>` with entities. With `quote` set, `"` and `'`
/// are replaced as well.
pub fn escape_html(input: &str, quote: bool) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quote => out.push_str("&quot;"),
            '\'' if quote => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }

    out
}
