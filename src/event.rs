//! Trace-line formatting shared by both adapter variants.
//!
//! The rendered shapes are fixed for compatibility with existing log
//! scrapers:
//!
//! - success: `[{elapsed_ms:.3}ms] [rows:{rows}] {sql}`
//! - failure: `[error = {err}] [{elapsed_ms:.3}ms] [rows:{rows}] {sql}`
//!
//! with the literal `-` in place of the row count when it is
//! [`ROWS_UNKNOWN`].

use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::logger::ROWS_UNKNOWN;
use crate::sink::LogSink;

/// Sink method chosen for one trace event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Forward through [`LogSink::tracef`].
    Trace,
    /// Forward through [`LogSink::errorf`].
    Error,
}

impl LogTarget {
    pub(crate) fn forward<S: LogSink + ?Sized>(self, sink: &S, msg: fmt::Arguments<'_>) {
        match self {
            LogTarget::Trace => sink.tracef(msg),
            LogTarget::Error => sink.errorf(msg),
        }
    }
}

/// One query-execution record, assembled just before emission and never
/// stored.
pub(crate) struct TraceEvent<'a> {
    pub elapsed: Duration,
    pub sql: &'a str,
    pub rows: i64,
    pub err: Option<&'a (dyn Error + 'static)>,
}

impl TraceEvent<'_> {
    /// Render the event as exactly one line on `sink`.
    ///
    /// The line shape is selected by error presence; `target` only picks
    /// the sink method, so a dispatch hook may route an error-shaped line
    /// through `tracef` or vice versa.
    pub(crate) fn emit<S: LogSink + ?Sized>(&self, sink: &S, target: LogTarget) {
        let ms = self.elapsed.as_nanos() as f64 / 1e6;
        let rows: &dyn fmt::Display = if self.rows == ROWS_UNKNOWN { &"-" } else { &self.rows };

        match self.err {
            Some(err) => target.forward(
                sink,
                format_args!("[error = {err}] [{ms:.3}ms] [rows:{rows}] {}", self.sql),
            ),
            None => target.forward(
                sink,
                format_args!("[{ms:.3}ms] [rows:{rows}] {}", self.sql),
            ),
        }
    }
}
