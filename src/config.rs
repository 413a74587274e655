//! `docview.yml` settings.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::loader::{ContentSource, DirectorySource, HttpSource};

pub const DEFAULT_CONFIG_FILE: &str = "docview.yml";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Extract per-page text. When off, pages are listed without content.
    pub extract_text: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { extract_text: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub server_url: String,
    /// Read documents from this directory instead of the server.
    pub files_dir: Option<PathBuf>,
    pub download_dir: PathBuf,
    pub export_dir: PathBuf,
    pub log_dir: PathBuf,
    pub request_timeout_secs: Option<u64>,
    pub pdf: PdfConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            files_dir: None,
            download_dir: PathBuf::from("."),
            export_dir: std::env::temp_dir().join("docview"),
            log_dir: PathBuf::from("./logs"),
            request_timeout_secs: None,
            pdf: PdfConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Load from `path`, or from `docview.yml` in the working directory when it
    /// exists. An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// A local directory when `files_dir` is set, the file server otherwise.
    pub fn content_source(&self) -> Result<Arc<dyn ContentSource>, ConfigError> {
        match &self.files_dir {
            Some(dir) => Ok(Arc::new(DirectorySource::new(dir.clone()))),
            None => Ok(Arc::new(HttpSource::new(&self.server_url, self.request_timeout())?)),
        }
    }
}
