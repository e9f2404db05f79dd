//! Timestamped console logger.

use chrono::Local;
use chrono::NaiveDateTime;
use console::Term;
use dzip_core::Log;

/// Timestamp layout of every log line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes `[<YYYY-MM-dd HH:mm:ss>] <message>` lines to a terminal.
///
/// One line per call, no levels.
pub struct TimestampLogger {
    term: Term,
}

impl TimestampLogger {
    pub fn new(term: Term) -> Self {
        Self { term }
    }

    fn format_line(at: NaiveDateTime, message: &str) -> String {
        format!("[{}] {message}", at.format(TIMESTAMP_FORMAT))
    }
}

impl Log for TimestampLogger {
    fn log(&self, message: &str) {
        let line = Self::format_line(Local::now().naive_local(), message);
        // Stdout is the only sink, so a failed write has nowhere to go.
        let _ = self.term.write_line(&line);
    }
}
