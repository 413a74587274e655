use crate::document::ContentRepresentation;
use crate::error::RenderError;
use crate::ui::document::{
    content::{MarkupDocument, RenderedDocument},
    viewer::strategies::{
        ooxml::{open_package, read_part},
        wordprocessing::{convert::convert_document_xml, WordViewStrategy},
    },
};

const DOCUMENT_PART: &str = "word/document.xml";

impl WordViewStrategy {
    pub(super) fn _parse_content(&self, content: &ContentRepresentation) -> Result<RenderedDocument, RenderError> {
        let mut package = open_package(content.as_bytes())?;
        let xml = read_part(&mut package, DOCUMENT_PART)?;
        let blocks = convert_document_xml(&xml)?;
        Ok(RenderedDocument::Markup(MarkupDocument::from_blocks(blocks)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::document::viewer::strategies::ooxml::fixtures;

    #[test]
    fn converts_document_part_to_markup() {
        let bytes = fixtures::package(&[(
            DOCUMENT_PART,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>Hello</w:t></w:r></w:p></w:body></w:document>"#,
        )]);
        let rendered = WordViewStrategy
            ._parse_content(&ContentRepresentation::Binary(bytes))
            .unwrap();
        match rendered {
            RenderedDocument::Markup(doc) => assert_eq!(doc.html, "<p>Hello</p>"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn package_without_document_part_fails() {
        let bytes = fixtures::package(&[("word/styles.xml", "<w:styles/>")]);
        let err = WordViewStrategy
            ._parse_content(&ContentRepresentation::Binary(bytes))
            .unwrap_err();
        assert!(matches!(err, RenderError::Conversion(_)));
    }
}
