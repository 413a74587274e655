mod parse_content;

use crate::document::{ContentRepresentation, FormatCategory, RepresentationKind};
use crate::error::RenderError;
use crate::ui::document::{
    content::RenderedDocument,
    viewer::DocumentViewStrategy,
};

#[derive(Debug)]
pub struct TextViewStrategy;

impl DocumentViewStrategy for TextViewStrategy {
    fn category(&self) -> FormatCategory {
        FormatCategory::PlainText
    }

    fn expects(&self) -> RepresentationKind {
        RepresentationKind::Text
    }

    fn parse_content(&self, content: &ContentRepresentation) -> Result<RenderedDocument, RenderError> {
        self._parse_content(content)
    }
}
