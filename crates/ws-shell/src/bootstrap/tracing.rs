//! Tracing configuration for Wallet Shell
//!
//! Installs one global `tracing` subscriber and bridges the `log` facade used
//! by `ws-platform` into it.
//!
//! ## Layers / 层
//!
//! - `EnvFilter`: `RUST_LOG`, else the crate directives below
//! - stdout `fmt` layer with a UTC millisecond timer
//! - optional non-blocking file layer under the app logs dir
//! - optional Sentry layer when `SENTRY_DSN` is set

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static SENTRY_GUARD: OnceLock<sentry::ClientInitGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "wallet-shell.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is unset.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        if is_dev { "info" } else { "warn" }.to_string(),
        format!("wallet_shell={level}"),
        format!("ws_core={level}"),
        format!("ws_app={level}"),
        format!("ws_infra={level}"),
        format!("ws_platform={level}"),
        format!("ws_shell={level}"),
    ]
}

/// Initialize the global subscriber.
///
/// `log_dir` enables the file layer; failing to open it falls back to
/// stdout only.
///
/// # Errors / 错误
///
/// Fails if a global subscriber or `log` logger is already installed.
pub fn init_tracing_subscriber(log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_development()).join(",")));

    let sentry_layer = if let Ok(dsn) = std::env::var("SENTRY_DSN") {
        let guard = sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                traces_sample_rate: 1.0,
                ..Default::default()
            },
        ));

        if SENTRY_GUARD.set(guard).is_err() {
            eprintln!("Sentry guard already initialized");
        }

        Some(sentry_tracing::layer())
    } else {
        None
    };

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stdout));

    let file_layer = log_dir
        .and_then(|dir| match build_file_writer(dir) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
                None
            }
        })
        .map(|writer| {
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
        });

    let subscriber = registry()
        .with(env_filter)
        .with(sentry_layer)
        .with(stdout_layer)
        .with(file_layer);

    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
