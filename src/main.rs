//! solution-stats - regenerate the solutions table in README.md
//!
//! Takes no arguments. Run it from the repository root:
//!
//! 1. Load `solution-stats.yaml` if present, otherwise built-in defaults
//! 2. Initialize logging (stderr, plus rotating files when `log_dir` is set)
//! 3. Scan `LeetCode`, `Baekjoon` and `AdventOfCode` in order
//! 4. Rewrite the table after the `|-|-|-|:-|` marker in `README.md`
//!
//! Any failure exits with status 1 and the error chain on stderr.

use anyhow::Result;
use solution_stats::{APP_NAME, ConfigManager, VERSION, update_summary};

fn main() -> Result<()> {
    let config_manager = ConfigManager::from_current_dir()?;
    let config = config_manager.load_config()?;

    let _guard = solution_stats::logging::setup_logging(config.debug_mode, config.log_dir.as_deref())?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let stats = update_summary(&config, config_manager.base_dir()).inspect_err(|e| {
        tracing::error!("Update failed: {:#}", e);
    })?;

    tracing::info!(
        "Updated {} with {} folders",
        config.document,
        stats.len()
    );

    Ok(())
}
