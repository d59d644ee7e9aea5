//! Tests for resolving request paths against a document root

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wwwserve::http::parser::parse_request;
use wwwserve::http::response::{StatusCode, parse_status_line};
use wwwserve::static_files::DocumentRoot;

/// Splits raw response bytes into status, header lines and body.
fn split_response(bytes: &[u8]) -> (StatusCode, Vec<String>, Vec<u8>) {
    let end = bytes
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("header terminator");
    let head = std::str::from_utf8(&bytes[..end]).unwrap();
    let mut lines = head.split("\r\n");
    let (status, _) = parse_status_line(lines.next().unwrap()).unwrap();
    let headers = lines.map(str::to_string).collect();
    (status, headers, bytes[end + 4..].to_vec())
}

/// A temp dir holding `www/` plus a sibling file outside of it.
fn site() -> (TempDir, DocumentRoot) {
    let dir = tempfile::tempdir().unwrap();
    let www = dir.path().join("www");

    fs::create_dir_all(www.join("deep")).unwrap();
    fs::create_dir_all(www.join("empty")).unwrap();
    fs::write(www.join("index.html"), "<h1>home</h1>\n").unwrap();
    fs::write(www.join("base.css"), "h1 { color: orange; }\n").unwrap();
    fs::write(www.join("notes.txt"), "plain").unwrap();
    fs::write(www.join("deep").join("index.html"), "<p>deep</p>").unwrap();
    fs::write(dir.path().join("secret.html"), "<p>outside</p>").unwrap();

    let root = DocumentRoot::new(&www, false).unwrap();
    (dir, root)
}

fn confined(dir: &Path) -> DocumentRoot {
    DocumentRoot::new(dir.join("www"), true).unwrap()
}

#[tokio::test]
async fn test_serves_html_file() {
    let (_dir, root) = site();
    let (status, headers, body) = split_response(&root.resolve("/index.html").await);

    assert_eq!(status, StatusCode::Ok);
    assert_eq!(
        headers,
        vec![
            "Content-Type: text/html;charset=utf-8".to_string(),
            "Content-Length: 14".to_string(),
        ]
    );
    assert_eq!(body, b"<h1>home</h1>\n".to_vec());
}

#[tokio::test]
async fn test_serves_css_file() {
    let (_dir, root) = site();
    let (status, headers, body) = split_response(&root.resolve("/base.css").await);

    assert_eq!(status, StatusCode::Ok);
    assert_eq!(headers[0], "Content-Type: text/css;charset=utf-8");
    assert_eq!(headers[1], format!("Content-Length: {}", body.len()));
    assert_eq!(body, b"h1 { color: orange; }\n".to_vec());
}

#[tokio::test]
async fn test_content_length_counts_bytes() {
    let (dir, root) = site();
    fs::write(dir.path().join("www").join("utf8.html"), "naïve café").unwrap();

    let (status, headers, body) = split_response(&root.resolve("/utf8.html").await);

    assert_eq!(status, StatusCode::Ok);
    assert_eq!(headers[1], "Content-Length: 12");
    assert_eq!(body, "naïve café".as_bytes().to_vec());
}

#[tokio::test]
async fn test_invalid_utf8_is_replaced() {
    let (dir, root) = site();
    fs::write(dir.path().join("www").join("bad.css"), b"a\xffb").unwrap();

    let (status, headers, body) = split_response(&root.resolve("/bad.css").await);

    assert_eq!(status, StatusCode::Ok);
    assert_eq!(body, "a\u{FFFD}b".as_bytes().to_vec());
    assert_eq!(headers[1], "Content-Length: 5");
}

#[tokio::test]
async fn test_other_extension_not_found() {
    let (_dir, root) = site();
    let (status, headers, body) = split_response(&root.resolve("/notes.txt").await);

    assert_eq!(status, StatusCode::NotFound);
    assert_eq!(headers[0], "Content-Type: text/html;charset=utf-8");
    let body = String::from_utf8(body).unwrap();
    assert!(body.contains("<p>Error code: 404</p>"));
    assert!(body.contains("only serve css &amp; html file"));
}

#[tokio::test]
async fn test_directory_with_slash_serves_index() {
    let (_dir, root) = site();

    let (status, headers, body) = split_response(&root.resolve("/deep/").await);
    assert_eq!(status, StatusCode::Ok);
    assert_eq!(headers[0], "Content-Type: text/html;charset=utf-8");
    assert_eq!(body, b"<p>deep</p>".to_vec());

    let (status, _, body) = split_response(&root.resolve("/").await);
    assert_eq!(status, StatusCode::Ok);
    assert_eq!(body, b"<h1>home</h1>\n".to_vec());
}

#[tokio::test]
async fn test_directory_without_slash_redirects() {
    let (_dir, root) = site();
    let bytes = root.resolve("/deep").await;

    assert_eq!(
        &bytes[..],
        b"HTTP/1.1 301 Moved Permanently\r\nLocation: /deep/\r\n\r\n"
    );
}

#[tokio::test]
async fn test_directory_without_index_not_found() {
    let (_dir, root) = site();

    for path in ["/empty", "/empty/"] {
        let (status, _, body) = split_response(&root.resolve(path).await);
        assert_eq!(status, StatusCode::NotFound);
        assert!(String::from_utf8(body).unwrap().contains("directory has no index.html"));
    }
}

#[tokio::test]
async fn test_missing_path_not_found() {
    let (_dir, root) = site();
    let (status, _, body) = split_response(&root.resolve("/nope.html").await);

    assert_eq!(status, StatusCode::NotFound);
    assert!(String::from_utf8(body).unwrap().contains("path not found"));
}

#[tokio::test]
async fn test_query_string_is_part_of_the_path() {
    let (_dir, root) = site();
    let (status, _, _) = split_response(&root.resolve("/index.html?v=2").await);

    assert_eq!(status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_dot_dot_escapes_root_by_default() {
    let (_dir, root) = site();
    let (status, _, body) = split_response(&root.resolve("/../secret.html").await);

    assert_eq!(status, StatusCode::Ok);
    assert_eq!(body, b"<p>outside</p>".to_vec());
}

#[tokio::test]
async fn test_confined_root_rejects_traversal() {
    let (dir, _) = site();
    let root = confined(dir.path());

    let (status, _, body) = split_response(&root.resolve("/../secret.html").await);
    assert_eq!(status, StatusCode::NotFound);
    assert!(String::from_utf8(body).unwrap().contains("path not found"));

    let (status, _, _) = split_response(&root.resolve("/deep/../index.html").await);
    assert_eq!(status, StatusCode::Ok);

    let (status, _, _) = split_response(&root.resolve("/deep").await);
    assert_eq!(status, StatusCode::MovedPermanently);
}

#[tokio::test]
async fn test_missing_document_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = DocumentRoot::new(dir.path().join("absent"), false).unwrap();

    let (status, _, _) = split_response(&root.resolve("/index.html").await);
    assert_eq!(status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_non_ascii_directory_redirect_can_be_followed() {
    let (dir, root) = site();
    let cafe = dir.path().join("www").join("caf\u{e9}");
    fs::create_dir_all(&cafe).unwrap();
    fs::write(cafe.join("index.html"), "<p>menu</p>").unwrap();

    let first = parse_request(b"GET /caf\xe9 HTTP/1.1\r\n\r\n").unwrap();
    let bytes = root.resolve(&first.path).await;
    assert_eq!(
        &bytes[..],
        b"HTTP/1.1 301 Moved Permanently\r\nLocation: /caf\xe9/\r\n\r\n"
    );

    // Replay the Location bytes exactly as a client would.
    let location = &bytes[bytes.len() - b"/caf\xe9/\r\n\r\n".len()..bytes.len() - 4];
    let mut request = b"GET ".to_vec();
    request.extend_from_slice(location);
    request.extend_from_slice(b" HTTP/1.1\r\n\r\n");

    let second = parse_request(&request).unwrap();
    let (status, _, body) = split_response(&root.resolve(&second.path).await);
    assert_eq!(status, StatusCode::Ok);
    assert_eq!(body, b"<p>menu</p>".to_vec());
}
