mod engine;
mod parse_content;

use crate::document::{ContentRepresentation, FormatCategory, RepresentationKind};
use crate::error::RenderError;
use crate::ui::document::{
    content::RenderedDocument,
    viewer::DocumentViewStrategy,
};

pub use engine::PdfEngine;

#[derive(Debug)]
pub struct PdfViewStrategy {
    engine: PdfEngine,
}

impl PdfViewStrategy {
    pub fn new(engine: PdfEngine) -> Self {
        Self { engine }
    }
}

impl DocumentViewStrategy for PdfViewStrategy {
    fn category(&self) -> FormatCategory {
        FormatCategory::Pdf
    }

    fn expects(&self) -> RepresentationKind {
        RepresentationKind::Binary
    }

    fn parse_content(&self, content: &ContentRepresentation) -> Result<RenderedDocument, RenderError> {
        self._parse_content(content)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Minimal PDF with `pages` empty US-Letter pages and a valid xref table.
    pub(crate) fn pdf(pages: usize) -> Vec<u8> {
        let kids = (0..pages)
            .map(|i| format!("{} 0 R", i + 3))
            .collect::<Vec<_>>()
            .join(" ");

        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids, pages),
        ];
        for _ in 0..pages {
            objects.push(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> >>".to_string(),
            );
        }

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_start = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_start
            )
            .as_bytes(),
        );
        out
    }
}
