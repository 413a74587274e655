use tracing::{debug, error};

use crate::document::{ContentRepresentation, FormatCategory};
use crate::error::RenderError;
use crate::ui::document::{
    content::RenderedDocument,
    viewer::DocumentViewer,
};

impl DocumentViewer {
    /// Run the strategy registered for `category`. Performs no I/O.
    pub fn view_document(
        &self,
        category: FormatCategory,
        content: &ContentRepresentation,
    ) -> Result<RenderedDocument, RenderError> {
        let strategy = self
            .strategies
            .get(&category)
            .ok_or_else(|| RenderError::Task(format!("no renderer for {}", category)))?;

        if content.kind() != strategy.expects() {
            return Err(RenderError::WrongRepresentation {
                expected: strategy.expects().as_str(),
            });
        }

        debug!("Rendering {} bytes as {}", content.len(), category);
        strategy.parse_content(content).inspect_err(|e| {
            error!("Error converting {} document: {}", category, e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::document::viewer::PdfEngine;

    #[test]
    fn plain_text_renders_preformatted() {
        let viewer = DocumentViewer::new(PdfEngine::default()).unwrap();
        let rendered = viewer
            .view_document(FormatCategory::PlainText, &ContentRepresentation::Text("hello".into()))
            .unwrap();
        assert_eq!(rendered, RenderedDocument::Preformatted("hello".into()));
    }

    #[test]
    fn wrong_representation_is_an_error() {
        let viewer = DocumentViewer::new(PdfEngine::default()).unwrap();
        let err = viewer
            .view_document(FormatCategory::Pdf, &ContentRepresentation::Text("%PDF".into()))
            .unwrap_err();
        assert!(matches!(err, RenderError::WrongRepresentation { expected: "binary" }));
    }

    #[test]
    fn broken_docx_is_a_conversion_failure() {
        let viewer = DocumentViewer::new(PdfEngine::default()).unwrap();
        let result = viewer.view_document(
            FormatCategory::WordProcessing,
            &ContentRepresentation::Binary(b"not a zip".to_vec()),
        );
        assert!(result.is_err());
    }
}
