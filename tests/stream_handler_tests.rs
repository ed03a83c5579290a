use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, UNIX_EPOCH};

use harness_logging::{LogLevel, Record, StreamHandler};
use rstest::rstest;

mod test_utils;
use test_utils::SharedBuf;
use test_utils::fixtures::{leveled_handler, raw_handler};

#[rstest]
fn stream_handler_writes_to_buffer(raw_handler: (SharedBuf, StreamHandler<SharedBuf>)) {
    let (buffer, handler) = raw_handler;
    handler
        .handle(&Record::new(LogLevel::Info, "core", "hello"))
        .expect("write");
    assert_eq!(buffer.contents(), "hello\n");
}

#[rstest]
fn formatted_lines_carry_metadata(leveled_handler: (SharedBuf, StreamHandler<SharedBuf>)) {
    let (buffer, handler) = leveled_handler;
    let record = Record::new(LogLevel::Warning, "routing", "backend down")
        .with_timestamp(UNIX_EPOCH + Duration::from_secs(86_400))
        .with_process_id(99);
    handler.handle(&record).expect("write");
    assert_eq!(
        buffer.contents(),
        "1970-01-02 00:00:00 routing WARNING [pid 99] backend down\n"
    );
}

#[rstest]
fn records_below_level_write_nothing(
    #[with(LogLevel::Error)] leveled_handler: (SharedBuf, StreamHandler<SharedBuf>),
) {
    let (buffer, handler) = leveled_handler;
    for level in [LogLevel::NotSet, LogLevel::Debug, LogLevel::Info, LogLevel::Warning] {
        handler
            .handle(&Record::new(level, "core", "quiet"))
            .expect("filtered handle succeeds");
    }
    assert_eq!(buffer.contents(), "");
}

#[rstest]
#[case(1)]
#[case(8)]
#[case(64)]
fn concurrent_lines_are_never_interleaved(#[case] threads: usize) {
    let buffer = SharedBuf::default();
    let handler = Arc::new(StreamHandler::with_options(
        buffer.clone(),
        false,
        LogLevel::NotSet,
    ));
    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let h = Arc::clone(&handler);
            thread::spawn(move || {
                let message = format!("thread-{i}-{}", "x".repeat(256));
                h.handle(&Record::new(LogLevel::Info, "core", &message))
                    .expect("write");
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker thread panicked");
    }

    let output = buffer.contents();
    let lines: BTreeSet<&str> = output.lines().collect();
    let expected: BTreeSet<String> = (0..threads)
        .map(|i| format!("thread-{i}-{}", "x".repeat(256)))
        .collect();
    assert_eq!(output.lines().count(), threads);
    assert_eq!(
        lines,
        expected.iter().map(String::as_str).collect::<BTreeSet<_>>()
    );
}

#[test]
fn borrowed_stream_outlives_scoped_writers() {
    let mut sink = Vec::new();
    {
        let handler = StreamHandler::with_options(&mut sink, false, LogLevel::NotSet);
        thread::scope(|scope| {
            for i in 0..4 {
                let handler = &handler;
                scope.spawn(move || {
                    handler
                        .handle(&Record::new(LogLevel::Info, "core", &format!("scoped {i}")))
                        .expect("write");
                });
            }
        });
    }
    let output = String::from_utf8(sink).expect("utf-8");
    let mut lines: Vec<&str> = output.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, ["scoped 0", "scoped 1", "scoped 2", "scoped 3"]);
}

#[test]
fn into_writer_returns_stream_with_output() {
    let handler = StreamHandler::with_options(Vec::new(), false, LogLevel::NotSet);
    handler
        .handle(&Record::new(LogLevel::Fatal, "core", "last words"))
        .expect("write");
    assert_eq!(handler.into_writer(), b"last words\n");
}
