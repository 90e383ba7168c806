//! Basic example showing how to bridge query traces into `tracing`.
//!
//! Run with: cargo run --example basic

use std::time::{Duration, Instant};

use orm_log_bridge::prelude::*;
use orm_log_bridge::ROWS_UNKNOWN;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "trace".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Option 1: fixed callbacks — unconditional logging plus side channels.
    let logger = CallbackLogger::new(TracingSink)
        .with_elapsed_fn(|elapsed| tracing::debug!(?elapsed, "statement timing observed"))
        .with_sql_row_fn(|sql, rows| tracing::debug!(rows, sql, "statement rows observed"))
        .with_error_fn(|err| tracing::debug!(%err, "statement failure observed"));

    // Option 2: a single dispatch hook deciding per event.
    // let logger = DispatchLogger::new(TracingSink).with_dispatch_fn(|elapsed, _, err| {
    //     if err.is_some() || elapsed > Duration::from_millis(100) {
    //         Some(LogTarget::Error)
    //     } else {
    //         None
    //     }
    // });

    // In a real host the ORM invokes the hook; here we drive it by hand.
    let begin = Instant::now();
    std::thread::sleep(Duration::from_millis(2));
    logger.trace(
        begin,
        &|| ("SELECT * FROM users WHERE active = true".to_string(), 42),
        None,
    );

    logger.trace(
        Instant::now(),
        &|| ("PRAGMA journal_mode = WAL".to_string(), ROWS_UNKNOWN),
        None,
    );

    let err = std::io::Error::other("duplicate key");
    logger.trace(
        Instant::now(),
        &|| ("INSERT INTO users (email) VALUES ($1)".to_string(), ROWS_UNKNOWN),
        Some(&err),
    );

    logger.info(format_args!("user {} logged in", "alice"));
}
