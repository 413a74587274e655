mod parse_content;

use crate::document::{ContentRepresentation, FormatCategory, RepresentationKind};
use crate::error::RenderError;
use crate::ui::document::{
    content::RenderedDocument,
    viewer::DocumentViewStrategy,
};

/// First worksheet of an `.xlsx` workbook as a table.
#[derive(Debug)]
pub struct SpreadsheetViewStrategy;

impl DocumentViewStrategy for SpreadsheetViewStrategy {
    fn category(&self) -> FormatCategory {
        FormatCategory::Spreadsheet
    }

    fn expects(&self) -> RepresentationKind {
        RepresentationKind::Binary
    }

    fn parse_content(&self, content: &ContentRepresentation) -> Result<RenderedDocument, RenderError> {
        self._parse_content(content)
    }
}
