//! Tests for the output module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;

#[test]
fn test_resolve_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = resolve_output_path(dir.path(), DEFAULT_FILENAME).unwrap();

    assert_eq!(path, dir.path().join("corona.json"));
}

#[test]
fn test_resolve_output_path_missing_dir() {
    let err = resolve_output_path(Path::new("/no/such/directory"), "out.json").unwrap_err();
    assert!(matches!(err, Error::InvalidOutputDir { .. }));
    assert!(err.to_string().contains("/no/such/directory"));
}

#[test]
fn test_resolve_output_path_rejects_file_as_dir() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a-file");
    std::fs::write(&file, b"x").unwrap();

    let err = resolve_output_path(&file, "out.json").unwrap_err();
    assert!(matches!(err, Error::InvalidOutputDir { .. }));
}

#[test]
fn test_write_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let records = vec![json!({"sakId": 1}), json!({"sakId": 2})];

    write_records(&path, &records).unwrap();

    let written: Vec<serde_json::Value> =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(written, records);
}

#[test]
fn test_write_records_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");

    write_records(&path, &[]).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_write_records_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    // Target is inside a directory that does not exist.
    let path = dir.path().join("missing").join("out.json");

    let err = write_records(&path, &[json!({})]).unwrap_err();
    assert!(matches!(err, Error::Output { .. }));
}
