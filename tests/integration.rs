//! End-to-end tests for the guarded file-access handler.

use std::fs;

use tempfile::TempDir;

use admin_files::config::ServerConfig;
use admin_files::error::FileAccessError;
use admin_files::registry::file_contents;
use admin_files::{AdminFileHandler, FileRequest};

fn handler_for(dir: &TempDir, hidden: &[&str]) -> AdminFileHandler {
    let config = ServerConfig {
        bind_address: "127.0.0.1".to_string(),
        port: 8984,
        config_dir: dir.path().to_string_lossy().into_owned(),
        packaged_dir: None,
        hidden: hidden.iter().map(|s| s.to_string()).collect(),
        max_command_length: 8192,
    };
    AdminFileHandler::new(&config)
}

fn read_request(file: &str) -> FileRequest {
    FileRequest {
        file: Some(file.to_string()),
        contents: None,
    }
}

fn write_request(file: &str, contents: &str) -> FileRequest {
    FileRequest {
        file: Some(file.to_string()),
        contents: Some(contents.to_string()),
    }
}

#[test]
fn write_then_read_returns_payload_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app.toml"), "old contents").unwrap();
    let handler = handler_for(&dir, &[]);

    let payload = "timeout = 30\nretries = 2\n# trailing comment\n";
    let written = handler.handle(&write_request("app.toml", payload)).unwrap();
    assert_eq!(written.body, payload.as_bytes());

    let read = handler.handle(&read_request("app.toml")).unwrap();
    assert_eq!(read.body, payload.as_bytes());
    assert!(!read.cacheable);
}

#[test]
fn traversal_requests_are_forbidden_regardless_of_target() {
    let dir = TempDir::new().unwrap();
    let handler = handler_for(&dir, &[]);

    for requested in ["../../etc/passwd", "a/..b", "..\\outside.txt"] {
        let err = handler.handle(&read_request(requested)).unwrap_err();
        assert!(
            matches!(err, FileAccessError::InvalidPath(_)),
            "expected InvalidPath for {:?}, got {:?}",
            requested,
            err
        );
    }
}

#[test]
fn traversal_write_leaves_no_file_behind() {
    let dir = TempDir::new().unwrap();
    let handler = handler_for(&dir, &[]);

    let err = handler
        .handle(&write_request("../escaped.txt", "payload"))
        .unwrap_err();
    assert!(matches!(err, FileAccessError::InvalidPath(_)));
    assert!(!dir.path().join("../escaped.txt").exists());
}

#[test]
fn hidden_files_are_forbidden_in_any_case() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("secrets.txt"), "s3cret").unwrap();
    let handler = handler_for(&dir, &["secrets.txt"]);

    for requested in ["secrets.txt", "Secrets.txt", "SECRETS.TXT"] {
        let err = handler.handle(&read_request(requested)).unwrap_err();
        assert!(matches!(err, FileAccessError::HiddenFile(_)));
    }
}

#[test]
fn hidden_files_cannot_be_overwritten() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("secrets.txt"), "s3cret").unwrap();
    let handler = handler_for(&dir, &["secrets.txt"]);

    let err = handler
        .handle(&write_request("SECRETS.TXT", "overwritten"))
        .unwrap_err();
    assert!(matches!(err, FileAccessError::HiddenFile(_)));
    assert_eq!(
        fs::read_to_string(dir.path().join("secrets.txt")).unwrap(),
        "s3cret"
    );
}

#[test]
fn absent_file_lists_the_config_root() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app.toml"), "x").unwrap();
    fs::create_dir(dir.path().join("schemas")).unwrap();
    let handler = handler_for(&dir, &[]);

    let content = handler.handle(&FileRequest::default()).unwrap();
    let listing = String::from_utf8(content.body).unwrap();
    assert!(listing.contains("app.toml"));
    assert!(listing.contains("schemas/"));
}

#[test]
fn missing_file_is_bad_request_not_forbidden() {
    let dir = TempDir::new().unwrap();
    let handler = handler_for(&dir, &[]);

    let err = handler.handle(&read_request("missing.txt")).unwrap_err();
    match err {
        FileAccessError::NotFound { name, path } => {
            assert_eq!(name, "missing.txt");
            assert!(path.is_absolute());
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn unresolvable_config_root_refuses_all_requests() {
    let config = ServerConfig {
        bind_address: "127.0.0.1".to_string(),
        port: 8984,
        config_dir: "/nonexistent/admin-files-conf".to_string(),
        packaged_dir: None,
        hidden: vec![],
        max_command_length: 8192,
    };
    let handler = AdminFileHandler::new(&config);

    let err = handler.handle(&read_request("app.toml")).unwrap_err();
    assert!(matches!(err, FileAccessError::NoConfigRoot));
}

#[test]
fn packaged_fallback_serves_when_config_dir_is_absent() {
    let packaged = TempDir::new().unwrap();
    fs::write(packaged.path().join("defaults.toml"), "shipped").unwrap();

    let config = ServerConfig {
        bind_address: "127.0.0.1".to_string(),
        port: 8984,
        config_dir: "/nonexistent/admin-files-conf".to_string(),
        packaged_dir: Some(packaged.path().to_string_lossy().into_owned()),
        hidden: vec![],
        max_command_length: 8192,
    };
    let handler = AdminFileHandler::new(&config);

    let content = handler.handle(&read_request("defaults.toml")).unwrap();
    assert_eq!(content.body, b"shipped");
}

#[test]
fn companion_lookup_uses_the_handler_registry() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("banner.txt"), "welcome").unwrap();
    fs::write(dir.path().join("secrets.txt"), "s3cret").unwrap();
    let handler = handler_for(&dir, &["secrets.txt"]);

    let root = dir.path().canonicalize().unwrap();
    let visible = file_contents(handler.hidden_files(), &root, "banner.txt").unwrap();
    assert_eq!(visible.as_deref(), Some("welcome"));

    let hidden = file_contents(handler.hidden_files(), &root, "secrets.txt").unwrap();
    assert_eq!(hidden, None);
}
