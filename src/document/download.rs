use std::path::PathBuf;

use tracing::info;

use crate::error::DownloadError;

use super::DocumentState;

pub const DOWNLOAD_MIME_TYPE: &str = "application/octet-stream";

/// An opaque save action for the bytes that were fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Package the loaded content for saving. `None` when nothing is loaded.
pub fn prepare_download(state: &DocumentState) -> Result<Option<SaveRequest>, DownloadError> {
    let (Some(identifier), Some(content)) = (state.identifier(), state.content()) else {
        return Ok(None);
    };
    let file_name = identifier
        .file_name()
        .ok_or_else(|| DownloadError::NoFileName(identifier.to_string()))?;

    Ok(Some(SaveRequest {
        file_name: file_name.to_string(),
        mime_type: DOWNLOAD_MIME_TYPE,
        bytes: content.as_bytes().to_vec(),
    }))
}

pub trait DownloadSink {
    fn save(&self, request: &SaveRequest) -> Result<PathBuf, DownloadError>;
}

/// Writes downloads into a directory, overwriting files of the same name.
#[derive(Debug, Clone)]
pub struct FileSystemSink {
    dir: PathBuf,
}

impl FileSystemSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for FileSystemSink {
    fn save(&self, request: &SaveRequest) -> Result<PathBuf, DownloadError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&request.file_name);
        std::fs::write(&path, &request.bytes)?;
        info!(
            "Saved {} ({} bytes, {}) to {}",
            request.file_name,
            request.bytes.len(),
            request.mime_type,
            path.display()
        );
        Ok(path)
    }
}
