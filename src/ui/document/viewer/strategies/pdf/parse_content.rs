use tracing::debug;

use crate::document::ContentRepresentation;
use crate::error::RenderError;
use crate::ui::document::{
    content::{PaginatedDocument, RenderedDocument},
    viewer::strategies::pdf::PdfViewStrategy,
};

impl PdfViewStrategy {
    pub(super) fn _parse_content(&self, content: &ContentRepresentation) -> Result<RenderedDocument, RenderError> {
        let bytes = content.as_bytes();
        let pages = self.engine.page_count(bytes)?;
        debug!("PDF has {} pages", pages);

        let texts = self.engine.page_texts(bytes, pages);
        Ok(RenderedDocument::Paginated(PaginatedDocument::new(texts)))
    }
}
