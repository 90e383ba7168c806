//! Formatted-message sinks.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// A formatted-message destination.
///
/// Anything that can render a `format_args!`-built line at trace, info,
/// warn, and error severity can back the adapters in this crate: a terminal
/// writer, a file appender, or one of the ready-made bridges below onto the
/// `tracing` and `log` ecosystems.
///
/// The adapters never filter by severity themselves; whatever verbosity
/// policy you want lives in the sink (or the subscriber behind it).
pub trait LogSink: Send + Sync {
    /// Render a query-trace line.
    fn tracef(&self, msg: fmt::Arguments<'_>);
    /// Render an informational line.
    fn infof(&self, msg: fmt::Arguments<'_>);
    /// Render a warning line.
    fn warnf(&self, msg: fmt::Arguments<'_>);
    /// Render an error line.
    fn errorf(&self, msg: fmt::Arguments<'_>);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn tracef(&self, msg: fmt::Arguments<'_>) {
        (**self).tracef(msg)
    }

    fn infof(&self, msg: fmt::Arguments<'_>) {
        (**self).infof(msg)
    }

    fn warnf(&self, msg: fmt::Arguments<'_>) {
        (**self).warnf(msg)
    }

    fn errorf(&self, msg: fmt::Arguments<'_>) {
        (**self).errorf(msg)
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn tracef(&self, msg: fmt::Arguments<'_>) {
        (**self).tracef(msg)
    }

    fn infof(&self, msg: fmt::Arguments<'_>) {
        (**self).infof(msg)
    }

    fn warnf(&self, msg: fmt::Arguments<'_>) {
        (**self).warnf(msg)
    }

    fn errorf(&self, msg: fmt::Arguments<'_>) {
        (**self).errorf(msg)
    }
}

/// [`LogSink`] backed by the [`tracing`] macros.
///
/// Trace lines go out at `TRACE` level under this crate's module target, so
/// a subscriber filter like `orm_log_bridge=trace` surfaces query logging
/// without touching the rest of your application.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn tracef(&self, msg: fmt::Arguments<'_>) {
        tracing::trace!("{}", msg);
    }

    fn infof(&self, msg: fmt::Arguments<'_>) {
        tracing::info!("{}", msg);
    }

    fn warnf(&self, msg: fmt::Arguments<'_>) {
        tracing::warn!("{}", msg);
    }

    fn errorf(&self, msg: fmt::Arguments<'_>) {
        tracing::error!("{}", msg);
    }
}

/// [`LogSink`] backed by the [`log`] facade, for applications on that stack
/// instead of `tracing`.
///
/// The `log` facade takes its target at record time, so this sink carries a
/// configurable one. `tracing` has no equivalent knob: event targets live in
/// per-callsite static metadata, which is why [`TracingSink`] always emits
/// under this crate's module path.
#[derive(Debug, Clone, Copy)]
pub struct LogFacadeSink {
    target: &'static str,
}

impl LogFacadeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target every line is recorded under.
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    /// The target lines are recorded under. Default: `"orm_log_bridge"`.
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogFacadeSink {
    fn default() -> Self {
        Self {
            target: "orm_log_bridge",
        }
    }
}

impl LogSink for LogFacadeSink {
    fn tracef(&self, msg: fmt::Arguments<'_>) {
        log::trace!(target: self.target, "{}", msg);
    }

    fn infof(&self, msg: fmt::Arguments<'_>) {
        log::info!(target: self.target, "{}", msg);
    }

    fn warnf(&self, msg: fmt::Arguments<'_>) {
        log::warn!(target: self.target, "{}", msg);
    }

    fn errorf(&self, msg: fmt::Arguments<'_>) {
        log::error!(target: self.target, "{}", msg);
    }
}

/// Sink method a [`CapturedLine`] arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Arrived through [`LogSink::tracef`].
    Trace,
    /// Arrived through [`LogSink::infof`].
    Info,
    /// Arrived through [`LogSink::warnf`].
    Warn,
    /// Arrived through [`LogSink::errorf`].
    Error,
}

/// One rendered line recorded by a [`CaptureSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub level: Level,
    pub message: String,
}

/// In-memory [`LogSink`] that records every line it receives.
///
/// Intended for tests: wrap it in an [`Arc`], hand a clone to the adapter
/// under test, then assert on [`lines`](CaptureSink::lines).
///
/// # Example
///
/// ```rust
/// use orm_log_bridge::{CaptureSink, Level, LogSink};
///
/// let sink = CaptureSink::new();
/// sink.infof(format_args!("user {} logged in", "alice"));
///
/// let lines = sink.lines();
/// assert_eq!(lines[0].level, Level::Info);
/// assert_eq!(lines[0].message, "user alice logged in");
/// ```
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<CapturedLine>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line captured so far, in arrival order.
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.guard().clone()
    }

    /// Discard all captured lines.
    pub fn clear(&self) {
        self.guard().clear();
    }

    fn guard(&self) -> MutexGuard<'_, Vec<CapturedLine>> {
        // A panicking assertion in one test thread must not wedge the sink
        // for the rest of the run.
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, level: Level, msg: fmt::Arguments<'_>) {
        self.guard().push(CapturedLine {
            level,
            message: msg.to_string(),
        });
    }
}

impl LogSink for CaptureSink {
    fn tracef(&self, msg: fmt::Arguments<'_>) {
        self.push(Level::Trace, msg);
    }

    fn infof(&self, msg: fmt::Arguments<'_>) {
        self.push(Level::Info, msg);
    }

    fn warnf(&self, msg: fmt::Arguments<'_>) {
        self.push(Level::Warn, msg);
    }

    fn errorf(&self, msg: fmt::Arguments<'_>) {
        self.push(Level::Error, msg);
    }
}
