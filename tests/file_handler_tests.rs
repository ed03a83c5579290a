use std::fs;
use std::sync::Arc;
use std::thread;

use harness_logging::{FileHandler, HandlerError, LogLevel, Record};
use rstest::*;
use tempfile::{NamedTempFile, tempdir};

fn raw(path: &std::path::Path) -> FileHandler {
    FileHandler::open_with(path, false, LogLevel::NotSet).expect("open log file")
}

#[rstest]
fn file_handler_writes_to_file() {
    let tmp = NamedTempFile::new().expect("temp file");
    let handler = raw(tmp.path());
    handler
        .handle(&Record::new(LogLevel::Info, "core", "hello"))
        .expect("write");
    drop(handler);
    assert_eq!(fs::read_to_string(tmp.path()).expect("read"), "hello\n");
}

#[rstest]
fn file_handler_appends_to_existing_content() {
    let tmp = NamedTempFile::new().expect("temp file");
    fs::write(tmp.path(), "previous run\n").expect("seed file");

    let handler = raw(tmp.path());
    handler
        .handle(&Record::new(LogLevel::Info, "core", "first"))
        .expect("write");
    handler
        .handle(&Record::new(LogLevel::Warning, "core", "second"))
        .expect("write");
    drop(handler);

    let reopened = raw(tmp.path());
    reopened
        .handle(&Record::new(LogLevel::Error, "core", "third"))
        .expect("write");
    drop(reopened);

    assert_eq!(
        fs::read_to_string(tmp.path()).expect("read"),
        "previous run\nfirst\nsecond\nthird\n"
    );
}

#[rstest]
fn file_handler_creates_missing_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("fresh.log");
    let handler = FileHandler::open(&path).expect("open");
    assert!(handler.format_messages());
    drop(handler);
    assert_eq!(fs::read_to_string(&path).expect("read"), "");
}

#[rstest]
fn file_handler_open_failure_is_observable() {
    let dir = tempdir().expect("tempdir");
    let err = FileHandler::open(dir.path()).expect_err("a directory cannot be appended to");
    assert!(matches!(err, HandlerError::Open { .. }));
    assert!(err.to_string().contains(&dir.path().display().to_string()));
}

#[rstest]
fn file_handler_concurrent_usage() {
    let tmp = NamedTempFile::new().expect("temp file");
    let handler = Arc::new(raw(tmp.path()));
    let handles: Vec<_> = (0..10)
        .map(|i| {
            let h = Arc::clone(&handler);
            thread::spawn(move || {
                h.handle(&Record::new(LogLevel::Info, "core", &format!("msg{i}")))
                    .expect("write");
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker thread panicked");
    }
    drop(handler);

    let output = fs::read_to_string(tmp.path()).expect("read");
    assert_eq!(output.lines().count(), 10);
    for i in 0..10 {
        assert!(output.lines().any(|line| line == format!("msg{i}")));
    }
    assert!(output.ends_with('\n'));
}
