//! Integration tests for `read_file`/`write_file`: whole-document JSON
//! persisted to and reloaded from disk.

use json::ErrorCode;

#[test]
fn write_file_then_read_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.json");

    let doc = json::read(br#"{"name":"widget","count":7,"tags":["a","b"]}"#, 0).unwrap();
    json::write_file(&path, &doc, 0).unwrap();

    let reloaded = json::read_file(&path, 0).unwrap();
    assert!(doc.root().equals(reloaded.root()));
}

#[test]
fn read_file_reports_file_open_error_for_missing_path() {
    let err = json::read_file("/nonexistent/path/does-not-exist.json", 0).unwrap_err();
    assert_eq!(err.code, ErrorCode::FileOpen);
}

#[test]
fn write_file_produces_readable_pretty_output() {
    use json::config::write_flag;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pretty.json");

    let doc = json::read(b"[1,2,3]", 0).unwrap();
    json::write_file(&path, &doc, write_flag::PRETTY).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains('\n'));
    let reloaded = json::read_file(&path, 0).unwrap();
    assert!(doc.root().equals(reloaded.root()));
}
