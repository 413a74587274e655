mod convert;
mod parse_content;

use crate::document::{ContentRepresentation, FormatCategory, RepresentationKind};
use crate::error::RenderError;
use crate::ui::document::{
    content::RenderedDocument,
    viewer::DocumentViewStrategy,
};

/// Converts `.docx` packages to markup.
#[derive(Debug)]
pub struct WordViewStrategy;

impl DocumentViewStrategy for WordViewStrategy {
    fn category(&self) -> FormatCategory {
        FormatCategory::WordProcessing
    }

    fn expects(&self) -> RepresentationKind {
        RepresentationKind::Binary
    }

    fn parse_content(&self, content: &ContentRepresentation) -> Result<RenderedDocument, RenderError> {
        self._parse_content(content)
    }
}
