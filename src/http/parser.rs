use crate::http::error::HttpError;
use crate::http::request::{Method, ParsedRequest};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Validates the request line found at the start of `buf`.
///
/// The buffer is decoded as ISO-8859-1, so no byte sequence fails to decode.
/// Only the first three whitespace-separated tokens are examined; headers and
/// body, if present, are ignored. The version is checked before the method.
pub fn parse_request(buf: &[u8]) -> Result<ParsedRequest, HttpError> {
    let text = decode_latin1(buf);
    let text = text.trim_end_matches(['\r', '\n']);

    let mut tokens = text.split(is_separator).filter(|t| !t.is_empty());

    let (method, path, version) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(method), Some(path), Some(version)) => (method, path, version),
        _ => return Err(HttpError::bad_request("request line incomplete")),
    };

    if version != HTTP_VERSION {
        return Err(HttpError::bad_request("only HTTP/1.1 supported"));
    }

    match Method::from_str(method) {
        Some(Method::Get) => Ok(ParsedRequest::get(path)),
        Some(_) => Err(HttpError::method_not_allowed("only GET supported")),
        None => Err(HttpError::bad_request("unsupported method")),
    }
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn decode_latin1(buf: &[u8]) -> String {
    buf.iter().map(|&b| char::from(b)).collect()
}
