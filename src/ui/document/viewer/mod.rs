mod trait_document_view_strategy;
mod new;
pub(crate) mod strategies;
mod view_document;
pub mod external;

use std::collections::HashMap;

use crate::document::FormatCategory;

pub use strategies::{
    PdfEngine, PdfViewStrategy, PresentationViewStrategy, SpreadsheetViewStrategy,
    TextViewStrategy, WordViewStrategy,
};
pub use trait_document_view_strategy::DocumentViewStrategy;

/// Renderer dispatcher: exactly one strategy per [`FormatCategory`].
#[derive(Debug)]
pub struct DocumentViewer {
    strategies: HashMap<FormatCategory, Box<dyn DocumentViewStrategy>>,
}
