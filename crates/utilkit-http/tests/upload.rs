mod support;

use std::fs;

use support::TestServer;
use utilkit_http::{OAuth2, Session, Source, upload};

#[test]
fn upload_in_memory_data() {
    let server = TestServer::spawn();

    let response = upload(&server.url("/upload"), Source::Data(b"upload"), Some("test.txt")).unwrap();
    assert_eq!(response.status(), 200);
}

#[test]
fn in_memory_data_defaults_to_data_filename() {
    let server = TestServer::spawn();

    let response = upload(&server.url("/upload"), Source::Data(b"upload"), None).unwrap();
    assert_eq!(response.status(), 400);

    let body = String::from_utf8(server.requests()[0].body.clone()).unwrap();
    assert!(body.contains("filename=\"data\""));
}

#[test]
fn upload_file() {
    let server = TestServer::spawn();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.txt");
    fs::write(&path, "upload").unwrap();

    let response = upload(&server.url("/upload"), Source::Path(&path), None).unwrap();
    assert_eq!(response.status(), 200);

    let response = upload(&server.url("/upload"), Source::Path(&path), Some("test.txt")).unwrap();
    assert_eq!(response.status(), 200);

    let response = upload(&server.url("/upload"), Source::Path(&path), Some("other.txt")).unwrap();
    assert_eq!(response.status(), 400);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let result = upload("http://127.0.0.1:9/upload", Source::Path(&path), None);
    assert!(matches!(result, Err(utilkit_http::HttpError::Io(_))));
}

#[test]
fn session_upload_uses_prefix_and_auth() {
    let server = TestServer::spawn();
    let session = Session::with_prefix(&server.base_url).auth(OAuth2::new("token"));

    let response = session
        .upload("/upload", Source::Data(b"upload"), Some("test.txt"))
        .unwrap();
    assert_eq!(response.status(), 200);

    let request = &server.requests()[0];
    assert_eq!(request.path, "/upload");
    assert_eq!(request.headers["authorization"], "Bearer token");
    assert!(request.headers["content-type"].starts_with("multipart/form-data; boundary="));
}
