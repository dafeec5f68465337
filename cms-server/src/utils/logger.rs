//! Logging Infrastructure
//!
//! Structured logging for development and production. `RUST_LOG` wins over
//! the configured level when set.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON format and daily rolling file output
///
/// The returned guard must be held for the lifetime of the process when a
/// file writer is active; dropping it flushes and stops the writer.
pub fn init_logger_with_file(log_level: &str, json: bool, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},surrealdb=warn,surrealkv=warn")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if std::fs::create_dir_all(log_path).is_ok() {
            let file_appender = tracing_appender::rolling::daily(log_path, "cms-server");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let result = if json {
                builder.json().with_writer(writer).try_init()
            } else {
                builder.with_ansi(false).with_writer(writer).try_init()
            };
            if let Err(e) = result {
                eprintln!("Logger already initialized: {e}");
            }
            return Some(guard);
        }
        eprintln!("Cannot create log directory {dir}, logging to stdout");
    }

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
    None
}
