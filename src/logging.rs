use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber for the API server.
///
/// - `file_logging: false`: ANSI stdout only, returns `None`.
/// - `file_logging: true`: rolling `log_dir/log_file` (JSON when `use_json`,
///   stdout mirror otherwise). The returned guard must outlive the server.
///
/// `RUST_LOG` overrides `log_level`.
pub fn init_logging(config: &AppConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let registry = tracing_subscriber::registry().with(filter);

    if !config.file_logging {
        registry
            .with(fmt::layer().with_target(false).with_ansi(true))
            .init();
        return None;
    }

    let (non_blocking, guard) = tracing_appender::non_blocking(rolling_appender(config));

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
        registry.with(file_layer).with(stdout_layer).init();
    }

    Some(guard)
}

/// `rotation` is `hourly`, `daily`, anything else means a single file
fn rolling_appender(config: &AppConfig) -> RollingFileAppender {
    match config.rotation.as_str() {
        "hourly" => rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => rolling::daily(&config.log_dir, &config.log_file),
        _ => rolling::never(&config.log_dir, &config.log_file),
    }
}
