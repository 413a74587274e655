use std::borrow::Cow;

use super::RepresentationKind;

/// In-memory form of a loaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRepresentation {
    Binary(Vec<u8>),
    Text(String),
}

impl ContentRepresentation {
    pub fn kind(&self) -> RepresentationKind {
        match self {
            ContentRepresentation::Binary(_) => RepresentationKind::Binary,
            ContentRepresentation::Text(_) => RepresentationKind::Text,
        }
    }

    /// The exact bytes that were fetched.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ContentRepresentation::Binary(bytes) => bytes,
            ContentRepresentation::Text(text) => text.as_bytes(),
        }
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            ContentRepresentation::Binary(bytes) => String::from_utf8_lossy(bytes),
            ContentRepresentation::Text(text) => Cow::Borrowed(text),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
