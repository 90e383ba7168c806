//! The logging hook contract a host ORM drives.

use std::error::Error;
use std::fmt;
use std::time::Instant;

/// Row count reported by a result provider when the statement has no
/// meaningful count (DDL, transaction control, prepared-only statements).
pub const ROWS_UNKNOWN: i64 = -1;

/// Verbosity levels of the host ORM's logging contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Log nothing.
    Silent,
    /// Errors only.
    Error,
    /// Errors and warnings.
    Warn,
    /// Errors, warnings, and informational messages.
    Info,
}

/// The logging hook invoked by a host ORM for every executed statement and
/// every informational message.
///
/// [`CallbackLogger`](crate::CallbackLogger) and
/// [`DispatchLogger`](crate::DispatchLogger) are the two implementations
/// shipped by this crate; both forward everything to a
/// [`LogSink`](crate::LogSink). The trait is object safe, so a host holding
/// `Box<dyn QueryLogger>` can swap implementations at runtime.
pub trait QueryLogger: Send + Sync {
    /// Change the requested verbosity.
    ///
    /// The adapters in this crate ignore the level: severity filtering is
    /// delegated entirely to the underlying sink.
    fn set_verbosity(&mut self, level: Verbosity);

    /// Record one executed statement.
    ///
    /// `begin` is the instant execution started; elapsed time is measured
    /// against it on entry. `result` is evaluated lazily and yields the SQL
    /// text plus the affected-row count ([`ROWS_UNKNOWN`] when not
    /// applicable). `err` carries the execution failure, if any.
    fn trace(
        &self,
        begin: Instant,
        result: &dyn Fn() -> (String, i64),
        err: Option<&(dyn Error + 'static)>,
    );

    /// Forward an informational message verbatim.
    fn info(&self, msg: fmt::Arguments<'_>);

    /// Forward a warning message verbatim.
    fn warn(&self, msg: fmt::Arguments<'_>);

    /// Forward an error message verbatim.
    fn error(&self, msg: fmt::Arguments<'_>);
}
