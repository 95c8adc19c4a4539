use log::Log;
use pinch_base::logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};
use std::fs;

fn record_args(args: std::fmt::Arguments<'_>, f: impl FnOnce(&log::Record)) {
    let record = log::RecordBuilder::new()
        .level(log::Level::Info)
        .target("pinch")
        .file(Some("mapper.rs"))
        .line(Some(42))
        .args(args)
        .build();
    f(&record);
}

#[test]
fn test_stdout_logger_accepts_records() {
    let logger = StdoutLogger;
    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Debug)
        .target("pinch")
        .build();
    assert!(logger.enabled(&metadata));

    record_args(format_args!("distance 105.0 -> 50%"), |r| logger.log(r));
    logger.flush();
}

#[test]
fn test_file_logger_writes_formatted_line() {
    let dir = std::env::temp_dir().join(format!("pinch-log-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let logger = FileLogger::new(&dir).expect("Failed to create FileLogger");
    record_args(format_args!("pinch engaged"), |r| logger.log(r));
    logger.flush();

    let entries: Vec<_> = fs::read_dir(&dir)
        .expect("log dir")
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(entries.len(), 1, "exactly one dated log file");

    let content = fs::read_to_string(entries[0].path()).unwrap();
    assert!(content.contains("[INFO]"));
    assert!(content.contains("thread:"));
    assert!(content.contains("mapper.rs:42"));
    assert!(content.contains("pinch engaged"));
    assert!(content.ends_with('\n'));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_init_stdout_logger_installs_global_logger() {
    init_stdout_logger();
    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Info)
        .target("pinch")
        .build();
    assert!(log::logger().enabled(&metadata));
    log::info!("logger installed");
}

#[test]
fn test_init_file_logger_rejects_unwritable_dir() {
    assert!(init_file_logger("/proc/nonexistent/pinch").is_err());
}
