//! Tracing configuration
//!
//! Installs the global `tracing-subscriber` used by every crate in the
//! workspace.

use std::io;

use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("kt_core={level}"),
        format!("kt_app={level}"),
        format!("kt_infra={level}"),
    ]
}

/// Initialize the tracing subscriber.
///
/// - **Development**: debug level
/// - **Production**: info level
/// - **Environment filter**: `RUST_LOG` overrides the defaults
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered (call once).
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stdout));

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}
