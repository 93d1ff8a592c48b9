//! Tracing configuration for clipview
//!
//! Installs the global tracing-subscriber. Logs go to stderr so stdout stays
//! reserved for shell output.
//!
//! ## Behavior / 行为
//!
//! - `RUST_LOG` wins when set
//! - otherwise `[log] level` from the config file
//! - otherwise debug in dev builds, info in release

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        "warn".to_string(),
        format!("clipview={level}"),
        format!("cv_app={level}"),
        format!("cv_infra={level}"),
    ]
}

fn build_env_filter(configured: &str) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    if !configured.trim().is_empty() {
        return Ok(EnvFilter::try_new(configured)?);
    }
    Ok(EnvFilter::try_new(
        build_filter_directives(is_development()).join(","),
    )?)
}

/// Initialize the tracing subscriber
///
/// ## Errors / 错误
///
/// Returns `Err` if:
/// - Subscriber is already registered (should only call once)
/// - `configured` is not a valid filter directive
pub fn init_tracing_subscriber(configured: &str) -> anyhow::Result<()> {
    let env_filter = build_env_filter(configured)?;

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;
    Ok(())
}
