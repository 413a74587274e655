//! Document identity, classification and loaded content.
//!
//! A [`DocumentIdentifier`] is resolved into a [`FormatCategory`] and the
//! [`RepresentationKind`] the loader must fetch. The loaded
//! [`ContentRepresentation`] lives in a [`DocumentState`] until the next
//! identifier replaces it.

mod content;
mod download;
mod format;
mod identifier;
mod state;

pub use content::ContentRepresentation;
pub use download::{prepare_download, DownloadSink, FileSystemSink, SaveRequest, DOWNLOAD_MIME_TYPE};
pub use format::{resolve, FormatCategory, RepresentationKind};
pub use identifier::DocumentIdentifier;
pub use state::{DocumentState, LoadPhase, LoadedDocument, RenderPhase};
