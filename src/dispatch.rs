//! Dispatch-hook adapter.

use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use crate::event::{LogTarget, TraceEvent};
use crate::logger::{QueryLogger, Verbosity};
use crate::sink::LogSink;

/// Per-event logging decision.
///
/// Receives the elapsed time, the lazy (sql, rows) provider, and the
/// execution error, if any. Returns `None` to suppress the event entirely
/// or `Some(target)` to render it through the chosen sink method.
pub type DispatchFn = Box<
    dyn Fn(Duration, &dyn Fn() -> (String, i64), Option<&(dyn Error + 'static)>) -> Option<LogTarget>
        + Send
        + Sync,
>;

/// [`QueryLogger`] that delegates the whole "whether and how to log this
/// trace" decision to a single hook.
///
/// Unlike [`CallbackLogger`](crate::CallbackLogger) there are no side
/// channels: anything you would do in a per-concern callback (sampling,
/// slow-query promotion, error counting) folds into the hook itself. With
/// the hook removed via [`without_dispatch`](DispatchLogger::without_dispatch),
/// `trace` is a no-op; `info`/`warn`/`error` always pass through.
///
/// # Example
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use orm_log_bridge::prelude::*;
///
/// // Only log statements slower than 100ms, and log them as errors.
/// let logger = DispatchLogger::new(TracingSink).with_dispatch_fn(|elapsed, _, _| {
///     (elapsed > Duration::from_millis(100)).then_some(LogTarget::Error)
/// });
///
/// logger.trace(Instant::now(), &|| ("SELECT 1".to_string(), 1), None);
/// ```
pub struct DispatchLogger<S> {
    sink: S,
    dispatch: Option<DispatchFn>,
}

impl<S: LogSink> DispatchLogger<S> {
    /// Create an adapter with the default dispatch installed: every event
    /// is logged, failures through `errorf` and successes through `tracef`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            dispatch: Some(Box::new(default_dispatch)),
        }
    }

    /// Replace the dispatch hook.
    pub fn with_dispatch_fn(
        mut self,
        f: impl Fn(Duration, &dyn Fn() -> (String, i64), Option<&(dyn Error + 'static)>) -> Option<LogTarget>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.dispatch = Some(Box::new(f));
        self
    }

    /// Remove the dispatch hook entirely; `trace` becomes a no-op.
    pub fn without_dispatch(mut self) -> Self {
        self.dispatch = None;
        self
    }

    /// Get a reference to the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

fn default_dispatch(
    _elapsed: Duration,
    _result: &dyn Fn() -> (String, i64),
    err: Option<&(dyn Error + 'static)>,
) -> Option<LogTarget> {
    Some(if err.is_some() {
        LogTarget::Error
    } else {
        LogTarget::Trace
    })
}

impl<S: LogSink> QueryLogger for DispatchLogger<S> {
    fn set_verbosity(&mut self, _level: Verbosity) {}

    fn trace(
        &self,
        begin: Instant,
        result: &dyn Fn() -> (String, i64),
        err: Option<&(dyn Error + 'static)>,
    ) {
        let dispatch = match &self.dispatch {
            Some(f) => f,
            None => return,
        };

        let elapsed = begin.elapsed();
        let target = match dispatch(elapsed, result, err) {
            Some(target) => target,
            None => return,
        };

        let (sql, rows) = result();
        TraceEvent {
            elapsed,
            sql: &sql,
            rows,
            err,
        }
        .emit(&self.sink, target);
    }

    fn info(&self, msg: fmt::Arguments<'_>) {
        self.sink.infof(msg);
    }

    fn warn(&self, msg: fmt::Arguments<'_>) {
        self.sink.warnf(msg);
    }

    fn error(&self, msg: fmt::Arguments<'_>) {
        self.sink.errorf(msg);
    }
}
