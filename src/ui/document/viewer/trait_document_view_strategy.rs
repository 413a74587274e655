use std::fmt::Debug;

use crate::document::{ContentRepresentation, FormatCategory, RepresentationKind};
use crate::error::RenderError;
use crate::ui::document::content::RenderedDocument;

pub trait DocumentViewStrategy: Debug + Send + Sync {
    fn category(&self) -> FormatCategory;

    /// The representation this strategy can parse.
    fn expects(&self) -> RepresentationKind;

    fn parse_content(&self, content: &ContentRepresentation) -> Result<RenderedDocument, RenderError>;
}
