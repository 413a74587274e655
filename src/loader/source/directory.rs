use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::document::{ContentRepresentation, DocumentIdentifier, RepresentationKind};
use crate::error::LoadError;

use super::ContentSource;

/// Reads documents from a local directory instead of a file server.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Only plain relative components are allowed so reads stay inside the root.
    fn path_for(&self, identifier: &DocumentIdentifier) -> Result<PathBuf, LoadError> {
        let relative = Path::new(identifier.as_str());
        let escapes = relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)));
        if escapes {
            return Err(LoadError::InvalidIdentifier(identifier.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ContentSource for DirectorySource {
    async fn fetch(
        &self,
        identifier: &DocumentIdentifier,
        kind: RepresentationKind,
    ) -> Result<ContentRepresentation, LoadError> {
        let path = self.path_for(identifier)?;
        let bytes = tokio::fs::read(&path).await?;
        match kind {
            RepresentationKind::Binary => Ok(ContentRepresentation::Binary(bytes)),
            RepresentationKind::Text => String::from_utf8(bytes)
                .map(ContentRepresentation::Text)
                .map_err(|_| LoadError::InvalidUtf8(identifier.to_string())),
        }
    }

    fn describe(&self, identifier: &DocumentIdentifier) -> String {
        self.root.join(identifier.as_str()).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_text_and_binary() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        std::fs::write(dir.path().join("blob.pdf"), [0u8, 1, 2]).unwrap();
        let source = DirectorySource::new(dir.path());

        let text = source
            .fetch(&DocumentIdentifier::new("notes.txt").unwrap(), RepresentationKind::Text)
            .await
            .unwrap();
        assert_eq!(text, ContentRepresentation::Text("hello".into()));

        let binary = source
            .fetch(&DocumentIdentifier::new("blob.pdf").unwrap(), RepresentationKind::Binary)
            .await
            .unwrap();
        assert_eq!(binary, ContentRepresentation::Binary(vec![0, 1, 2]));
    }

    #[tokio::test]
    async fn rejects_parent_components() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        let err = source
            .fetch(&DocumentIdentifier::new("../secret.txt").unwrap(), RepresentationKind::Text)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::InvalidIdentifier(_)));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        let err = source
            .fetch(&DocumentIdentifier::new("nope.txt").unwrap(), RepresentationKind::Text)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
