mod directory;
mod http;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::document::{ContentRepresentation, DocumentIdentifier, RepresentationKind};
use crate::error::LoadError;

pub use directory::DirectorySource;
pub use http::HttpSource;

/// Where document content comes from.
#[async_trait]
pub trait ContentSource: Debug + Send + Sync {
    async fn fetch(
        &self,
        identifier: &DocumentIdentifier,
        kind: RepresentationKind,
    ) -> Result<ContentRepresentation, LoadError>;

    /// Human readable location of `identifier`, for logs and status lines.
    fn describe(&self, identifier: &DocumentIdentifier) -> String;
}
