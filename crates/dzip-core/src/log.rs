//! Injected logging capability.
//!
//! The library never writes to the console on its own. Operations that
//! report non-fatal failures take a `&dyn Log` and hand it one message per
//! event; formatting (timestamps, destination) belongs to the caller.

/// A sink for human-readable log messages.
///
/// # Examples
///
/// ```
/// use dzip_core::Log;
/// use std::cell::RefCell;
///
/// let lines = RefCell::new(Vec::new());
/// let log = |message: &str| lines.borrow_mut().push(message.to_string());
///
/// log.log("hello");
/// assert_eq!(lines.borrow().as_slice(), ["hello"]);
/// ```
pub trait Log {
    /// Records one message.
    fn log(&self, message: &str);
}

impl<F> Log for F
where
    F: Fn(&str),
{
    fn log(&self, message: &str) {
        self(message);
    }
}

/// A logger that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _message: &str) {}
}
