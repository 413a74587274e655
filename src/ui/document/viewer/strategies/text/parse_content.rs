use crate::document::ContentRepresentation;
use crate::error::RenderError;
use crate::ui::document::{
    content::RenderedDocument,
    viewer::strategies::text::TextViewStrategy,
};

impl TextViewStrategy {
    pub(super) fn _parse_content(&self, content: &ContentRepresentation) -> Result<RenderedDocument, RenderError> {
        Ok(RenderedDocument::Preformatted(content.as_text().into_owned()))
    }
}
