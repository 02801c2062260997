//! Logger setup. The terminal belongs to the game, so logs only go to a file.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "grid_snake=info";

/// Install a global logger that appends to `path`, creating it if needed
pub fn init_file_logger(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Failed to install logger")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_logs_reach_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snake.log");
        std::fs::write(&path, "previous run\n").unwrap();

        init_file_logger(&path).unwrap();
        log::warn!("apple out of reach");
        log::logger().flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("previous run\n"));
        assert!(contents.contains("apple out of reach"));
    }

    #[test]
    fn test_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("snake.log");
        assert!(init_file_logger(&path).is_err());
    }
}
