//! Fixed-callback adapter.

use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use crate::event::{LogTarget, TraceEvent};
use crate::logger::{QueryLogger, Verbosity};
use crate::sink::LogSink;

/// Callback observing the elapsed time of every traced statement.
pub type ElapsedFn = Box<dyn Fn(Duration) + Send + Sync>;

/// Callback observing the SQL text and row count of every traced statement.
pub type SqlRowFn = Box<dyn Fn(&str, i64) + Send + Sync>;

/// Callback observing the error of every failed statement.
pub type ErrorFn = Box<dyn Fn(&(dyn Error + 'static)) + Send + Sync>;

/// [`QueryLogger`] that renders every trace event on its sink and feeds up
/// to three optional side channels: elapsed time, sql/row count, and error.
///
/// The side channels are independent of the rendered line — with none of
/// them set the adapter still emits the base `tracef`/`errorf` line for
/// every statement. Use this variant when you want per-concern hooks (a
/// latency histogram, a slow-query collector, an error counter) alongside
/// unconditional logging; use [`DispatchLogger`](crate::DispatchLogger)
/// when you need to decide per event whether and how to log at all.
///
/// # Example
///
/// ```rust
/// use std::time::Instant;
/// use orm_log_bridge::prelude::*;
///
/// let logger = CallbackLogger::new(TracingSink)
///     .with_elapsed_fn(|elapsed| println!("query took {elapsed:?}"));
///
/// // Driven by the host ORM in real use.
/// logger.trace(Instant::now(), &|| ("SELECT 1".to_string(), 1), None);
/// ```
pub struct CallbackLogger<S> {
    sink: S,
    elapsed_fn: Option<ElapsedFn>,
    sql_row_fn: Option<SqlRowFn>,
    error_fn: Option<ErrorFn>,
}

impl<S: LogSink> CallbackLogger<S> {
    /// Create an adapter with no side channels configured.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            elapsed_fn: None,
            sql_row_fn: None,
            error_fn: None,
        }
    }

    /// Register a callback receiving the elapsed time of every statement.
    pub fn with_elapsed_fn(mut self, f: impl Fn(Duration) + Send + Sync + 'static) -> Self {
        self.elapsed_fn = Some(Box::new(f));
        self
    }

    /// Register a callback receiving the SQL text and row count of every
    /// statement ([`ROWS_UNKNOWN`](crate::ROWS_UNKNOWN) when no count
    /// applies).
    pub fn with_sql_row_fn(mut self, f: impl Fn(&str, i64) + Send + Sync + 'static) -> Self {
        self.sql_row_fn = Some(Box::new(f));
        self
    }

    /// Register a callback receiving the error of every failed statement.
    /// Not invoked on success.
    pub fn with_error_fn(
        mut self,
        f: impl Fn(&(dyn Error + 'static)) + Send + Sync + 'static,
    ) -> Self {
        self.error_fn = Some(Box::new(f));
        self
    }

    /// Get a reference to the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: LogSink> QueryLogger for CallbackLogger<S> {
    fn set_verbosity(&mut self, _level: Verbosity) {}

    fn trace(
        &self,
        begin: Instant,
        result: &dyn Fn() -> (String, i64),
        err: Option<&(dyn Error + 'static)>,
    ) {
        let elapsed = begin.elapsed();
        if let Some(f) = &self.elapsed_fn {
            f(elapsed);
        }

        let (sql, rows) = result();
        let target = if err.is_some() {
            LogTarget::Error
        } else {
            LogTarget::Trace
        };
        TraceEvent {
            elapsed,
            sql: &sql,
            rows,
            err,
        }
        .emit(&self.sink, target);

        if let Some(f) = &self.sql_row_fn {
            f(&sql, rows);
        }
        if let (Some(f), Some(err)) = (&self.error_fn, err) {
            f(err);
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::ROWS_UNKNOWN;
    use crate::sink::{CaptureSink, Level};
    use std::sync::{Arc, Mutex};

    fn exec_err(msg: &str) -> std::io::Error {
        std::io::Error::other(msg.to_string())
    }

    #[test]
    fn test_trace_emits_base_line_without_callbacks() {
        let sink = Arc::new(CaptureSink::new());
        let logger = CallbackLogger::new(Arc::clone(&sink));

        logger.trace(Instant::now(), &|| ("SELECT 1".to_string(), 3), None);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, Level::Trace);
        assert!(lines[0].message.contains("[rows:3]"));
        assert!(lines[0].message.ends_with("] SELECT 1"));
    }

    #[test]
    fn test_trace_routes_error_to_errorf() {
        let sink = Arc::new(CaptureSink::new());
        let logger = CallbackLogger::new(Arc::clone(&sink));
        let err = exec_err("duplicate key");

        logger.trace(
            Instant::now(),
            &|| ("INSERT INTO t VALUES (1)".to_string(), ROWS_UNKNOWN),
            Some(&err),
        );

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, Level::Error);
        assert!(lines[0].message.starts_with("[error = duplicate key]"));
        assert!(lines[0].message.contains("[rows:-]"));
    }

    #[test]
    fn test_all_callbacks_fire_on_failure() {
        let sink = Arc::new(CaptureSink::new());
        let elapsed_seen = Arc::new(Mutex::new(None::<Duration>));
        let row_seen = Arc::new(Mutex::new(None::<(String, i64)>));
        let err_seen = Arc::new(Mutex::new(None::<String>));

        let logger = {
            let elapsed_seen = Arc::clone(&elapsed_seen);
            let row_seen = Arc::clone(&row_seen);
            let err_seen = Arc::clone(&err_seen);
            CallbackLogger::new(Arc::clone(&sink))
                .with_elapsed_fn(move |d| *elapsed_seen.lock().unwrap() = Some(d))
                .with_sql_row_fn(move |sql, rows| {
                    *row_seen.lock().unwrap() = Some((sql.to_string(), rows))
                })
                .with_error_fn(move |e| *err_seen.lock().unwrap() = Some(e.to_string()))
        };

        let err = exec_err("boom");
        logger.trace(Instant::now(), &|| ("DELETE FROM t".to_string(), 5), Some(&err));

        assert!(elapsed_seen.lock().unwrap().is_some());
        assert_eq!(
            *row_seen.lock().unwrap(),
            Some(("DELETE FROM t".to_string(), 5))
        );
        assert_eq!(*err_seen.lock().unwrap(), Some("boom".to_string()));
        // Side channels never replace the rendered line.
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_error_callback_skipped_on_success() {
        let sink = Arc::new(CaptureSink::new());
        let err_seen = Arc::new(Mutex::new(false));

        let logger = {
            let err_seen = Arc::clone(&err_seen);
            CallbackLogger::new(Arc::clone(&sink))
                .with_error_fn(move |_| *err_seen.lock().unwrap() = true)
        };

        logger.trace(Instant::now(), &|| ("SELECT 1".to_string(), 1), None);

        assert!(!*err_seen.lock().unwrap());
        assert_eq!(sink.lines()[0].level, Level::Trace);
    }

    #[test]
    fn test_info_warn_error_pass_through() {
        let sink = Arc::new(CaptureSink::new());
        let logger = CallbackLogger::new(Arc::clone(&sink));

        logger.info(format_args!("user {} logged in", "alice"));
        logger.warn(format_args!("pool at {}%", 90));
        logger.error(format_args!("connection lost"));

        let lines = sink.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].level, Level::Info);
        assert_eq!(lines[0].message, "user alice logged in");
        assert_eq!(lines[1].level, Level::Warn);
        assert_eq!(lines[1].message, "pool at 90%");
        assert_eq!(lines[2].level, Level::Error);
        assert_eq!(lines[2].message, "connection lost");
    }

    #[test]
    fn test_set_verbosity_does_not_filter() {
        let sink = Arc::new(CaptureSink::new());
        let mut logger = CallbackLogger::new(Arc::clone(&sink));

        logger.set_verbosity(Verbosity::Silent);
        logger.trace(Instant::now(), &|| ("SELECT 1".to_string(), 1), None);

        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_usable_as_trait_object() {
        let sink = Arc::new(CaptureSink::new());
        let logger: Box<dyn QueryLogger> = Box::new(CallbackLogger::new(Arc::clone(&sink)));

        logger.trace(Instant::now(), &|| ("SELECT 1".to_string(), 1), None);
        assert_eq!(sink.lines().len(), 1);
    }
}
