use std::path::{Path, PathBuf};

use super::ExternalViewer;

impl ExternalViewer {
    pub fn new(export_dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let export_dir = export_dir.into();
        std::fs::create_dir_all(&export_dir)?;

        Ok(Self { export_dir })
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}
