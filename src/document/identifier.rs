use std::fmt;
use std::path::Path;

use crate::error::LoadError;

/// Logical name of a file to view, extension included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentIdentifier(String);

impl DocumentIdentifier {
    pub fn new(name: impl Into<String>) -> Result<Self, LoadError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LoadError::InvalidIdentifier("identifier is empty".to_string()));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased text after the last `.`, if any.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.0.rsplit_once('.')?;
        if ext.is_empty() {
            None
        } else {
            Some(ext.to_lowercase())
        }
    }

    /// Final path component, used as the name of saved files.
    pub fn file_name(&self) -> Option<&str> {
        Path::new(&self.0)
            .file_name()
            .and_then(|name| name.to_str())
    }
}

impl fmt::Display for DocumentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
