//! # orm-log-bridge
//!
//! Bridge an ORM's query-trace logging hook onto your application's logging
//! stack.
//!
//! A host ORM reports every executed statement through a polymorphic logging
//! hook: elapsed time, generated SQL, affected-row count, and the execution
//! error, if any. This crate implements that hook ([`QueryLogger`]) on top
//! of any formatted-message destination you supply ([`LogSink`]), so query
//! logging lands in the same place as the rest of your logs.
//!
//! ## Features
//!
//! - **Two adapter flavors**: [`CallbackLogger`] with fixed per-concern
//!   callbacks (elapsed time, rows, error), or [`DispatchLogger`] with a
//!   single per-event "whether and how to log" hook
//! - **Stable line format**: rendered lines are byte-compatible with
//!   existing scrapers (see the table below)
//! - **Bring your own backend**: ready-made sinks for [`tracing`]
//!   ([`TracingSink`]) and the [`log`] facade ([`LogFacadeSink`]), plus an
//!   in-memory [`CaptureSink`] for tests
//! - **No policy of its own**: no filtering, no buffering, no locking; the
//!   adapters forward synchronously and leave verbosity to the sink
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Instant;
//! use orm_log_bridge::prelude::*;
//!
//! let logger = CallbackLogger::new(TracingSink)
//!     .with_elapsed_fn(|elapsed| println!("query took {elapsed:?}"));
//!
//! // The host ORM drives these; shown by hand here.
//! let begin = Instant::now();
//! logger.trace(begin, &|| ("SELECT 1".to_string(), 1), None);
//! logger.info(format_args!("connected to {}", "postgres"));
//! ```
//!
//! ## Line Format
//!
//! | Line | When |
//! |------|------|
//! | `[1.500ms] [rows:3] SELECT 1` | success, row count known |
//! | `[0.250ms] [rows:-] INSERT INTO t VALUES (1)` | success, no row count |
//! | `[error = duplicate key] [2.000ms] [rows:7] UPDATE ...` | failure |
//!
//! Elapsed time is always milliseconds with three decimal places; a row
//! count of [`ROWS_UNKNOWN`] renders as the literal `-`.

mod callback;
mod dispatch;
mod event;
mod logger;
mod sink;

pub use callback::{CallbackLogger, ElapsedFn, ErrorFn, SqlRowFn};
pub use dispatch::{DispatchFn, DispatchLogger};
pub use event::LogTarget;
pub use logger::{QueryLogger, Verbosity, ROWS_UNKNOWN};
pub use sink::{CaptureSink, CapturedLine, Level, LogFacadeSink, LogSink, TracingSink};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CallbackLogger, DispatchLogger, LogSink, LogTarget, QueryLogger, TracingSink, Verbosity,
    };
}
