//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Every workspace crate at info, dependencies at warn
const DEFAULT_FILTER: &str =
    "warn,cloudcmp=info,cloudcmp_core=info,cloudcmp_client=info,cloudcmp_app=info,cloudcmp_tui=info";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/cloudcmp/logs/`, never to stdout,
/// since the TUI owns the terminal and headless commands print JSON there.
/// Log level is controlled by the `CLOUDCMP_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CLOUDCMP_LOG=debug cloudcmp
/// CLOUDCMP_LOG=cloudcmp_client=trace cloudcmp services
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "cloudcmp.log");

    let env_filter =
        EnvFilter::try_from_env("CLOUDCMP_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("cloudcmp starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("cloudcmp").join("logs")
}
