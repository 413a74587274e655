//! File logging. The terminal belongs to the UI, so tracing output goes to
//! `{log_dir}/docview.log`, truncated at startup.

use std::{
    fs::{create_dir_all, File},
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::Level;

pub const LOG_FILE: &str = "docview.log";

/// `DEBUG=true` enables debug-level output.
pub fn debug_enabled() -> bool {
    std::env::var("DEBUG").unwrap_or_default() == "true"
}

/// Install the global subscriber. Returns the log file path.
pub fn init(log_dir: &Path) -> std::io::Result<PathBuf> {
    create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE);
    let file = File::create(&path)?;

    let level = if debug_enabled() { Level::DEBUG } else { Level::INFO };

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = init(&dir.path().join("logs")).unwrap();
        assert!(path.exists());
        assert_eq!(path.file_name().unwrap(), LOG_FILE);
    }
}
