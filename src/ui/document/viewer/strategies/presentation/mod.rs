mod parse_content;

use crate::document::{ContentRepresentation, FormatCategory, RepresentationKind};
use crate::error::RenderError;
use crate::ui::document::{
    content::RenderedDocument,
    viewer::DocumentViewStrategy,
};

/// Slide text of `.pptx` decks, one entry per slide in numeric order.
#[derive(Debug)]
pub struct PresentationViewStrategy;

impl DocumentViewStrategy for PresentationViewStrategy {
    fn category(&self) -> FormatCategory {
        FormatCategory::Presentation
    }

    fn expects(&self) -> RepresentationKind {
        RepresentationKind::Binary
    }

    fn parse_content(&self, content: &ContentRepresentation) -> Result<RenderedDocument, RenderError> {
        self._parse_content(content)
    }
}
