use thiserror::Error;

use crate::document::FormatCategory;

/// Failure to retrieve a document's content.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content of {0} is not valid UTF-8")]
    InvalidUtf8(String),

    #[error("Load task failed: {0}")]
    Task(String),
}

/// Failure to turn loaded content into a displayable document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Expected {expected} content")]
    WrongRepresentation { expected: &'static str },

    #[error("Render task failed: {0}")]
    Task(String),
}

/// The renderer table does not cover every category exactly once.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("No renderer registered for {0}")]
    Missing(FormatCategory),

    #[error("More than one renderer registered for {0}")]
    Duplicate(FormatCategory),

    #[error("{category} loads as {loads} but its renderer expects {expects}")]
    Mismatch {
        category: FormatCategory,
        loads: &'static str,
        expects: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid server url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Cannot derive a file name from {0}")]
    NoFileName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
