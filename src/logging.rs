use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file prefix used for the rotating file appender.
pub const LOG_PREFIX: &str = "solution-stats";

/// Setup console logging with an optional rotating file appender.
///
/// Console output goes to stderr so it never mixes with anything piped from stdout.
///
/// # Arguments
/// * `debug_mode` - If true, use debug level; otherwise use info level
/// * `log_dir` - Directory for daily-rotated log files; console only when `None`
///
/// # Returns
/// A guard that must be held for the duration of the program when file logging is
/// enabled, otherwise buffered lines are lost on exit
pub fn setup_logging(debug_mode: bool, log_dir: Option<&str>) -> Result<Option<WorkerGuard>> {
    let env_filter = if debug_mode {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            create_log_dir(dir)?;
            let file_appender = rolling::daily(dir, LOG_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_file(true)
                .with_line_number(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(
        "Logging initialized: debug={}, log_dir={:?}",
        debug_mode,
        log_dir
    );

    Ok(guard)
}

fn create_log_dir(log_dir: &str) -> Result<()> {
    let log_path = Utf8PathBuf::from(log_dir);
    if !log_path.exists() {
        fs::create_dir_all(&log_path)
            .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_directory_created() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs");

        // Only the directory step; a global subscriber can be installed once per process
        create_log_dir(log_dir.to_str().unwrap()).unwrap();
        assert!(log_dir.exists());
    }

    #[test]
    fn test_existing_log_directory_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        create_log_dir(temp_dir.path().to_str().unwrap()).unwrap();
    }
}
