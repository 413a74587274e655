use std::collections::HashMap;

use crate::document::FormatCategory;
use crate::error::DispatchError;
use crate::ui::document::viewer::{
    DocumentViewer,
    DocumentViewStrategy,
    strategies::{
        PdfEngine,
        PdfViewStrategy,
        PresentationViewStrategy,
        SpreadsheetViewStrategy,
        TextViewStrategy,
        WordViewStrategy,
    }
};

impl DocumentViewer {
    pub fn new(pdf_engine: PdfEngine) -> Result<Self, DispatchError> {
        Self::from_strategies(vec![
            Box::new(PdfViewStrategy::new(pdf_engine)),
            Box::new(SpreadsheetViewStrategy),
            Box::new(PresentationViewStrategy),
            Box::new(WordViewStrategy),
            Box::new(TextViewStrategy),
        ])
    }

    /// Register strategies, checking that every category has exactly one and
    /// that it parses the representation the loader fetches for that category.
    pub fn from_strategies(
        list: Vec<Box<dyn DocumentViewStrategy>>,
    ) -> Result<Self, DispatchError> {
        let mut strategies: HashMap<FormatCategory, Box<dyn DocumentViewStrategy>> = HashMap::new();

        for strategy in list {
            let category = strategy.category();
            let loads = category.representation();
            if strategy.expects() != loads {
                return Err(DispatchError::Mismatch {
                    category,
                    loads: loads.as_str(),
                    expects: strategy.expects().as_str(),
                });
            }
            if strategies.insert(category, strategy).is_some() {
                return Err(DispatchError::Duplicate(category));
            }
        }

        if let Some(missing) = FormatCategory::ALL
            .iter()
            .find(|category| !strategies.contains_key(category))
        {
            return Err(DispatchError::Missing(*missing));
        }

        Ok(Self { strategies })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ContentRepresentation, RepresentationKind};
    use crate::error::RenderError;
    use crate::ui::document::content::RenderedDocument;

    /// Presentation content parsed as text, the fallthrough the table must refuse.
    #[derive(Debug)]
    struct TextForPresentation;

    impl DocumentViewStrategy for TextForPresentation {
        fn category(&self) -> FormatCategory {
            FormatCategory::Presentation
        }

        fn expects(&self) -> RepresentationKind {
            RepresentationKind::Text
        }

        fn parse_content(&self, content: &ContentRepresentation) -> Result<RenderedDocument, RenderError> {
            Ok(RenderedDocument::Preformatted(content.as_text().into_owned()))
        }
    }

    #[test]
    fn default_table_covers_every_category() {
        assert!(DocumentViewer::new(PdfEngine::default()).is_ok());
    }

    #[test]
    fn binary_category_with_text_renderer_is_rejected() {
        let err = DocumentViewer::from_strategies(vec![Box::new(TextForPresentation)]).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Mismatch { category: FormatCategory::Presentation, .. }
        ));
    }

    #[test]
    fn missing_category_is_rejected() {
        let err = DocumentViewer::from_strategies(vec![
            Box::new(SpreadsheetViewStrategy),
            Box::new(TextViewStrategy),
        ])
        .unwrap_err();
        assert!(matches!(err, DispatchError::Missing(_)));
    }

    #[test]
    fn duplicate_category_is_rejected() {
        let err = DocumentViewer::from_strategies(vec![
            Box::new(TextViewStrategy),
            Box::new(TextViewStrategy),
        ])
        .unwrap_err();
        assert!(matches!(err, DispatchError::Duplicate(FormatCategory::PlainText)));
    }
}
