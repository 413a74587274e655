use std::panic::{self, AssertUnwindSafe};

use pdf::file::FileOptions;
use tracing::{debug, warn};

use crate::config::PdfConfig;
use crate::error::RenderError;

/// PDF parsing settings, created once at startup and handed to the PDF renderer.
#[derive(Debug, Clone)]
pub struct PdfEngine {
    extract_text: bool,
}

impl Default for PdfEngine {
    fn default() -> Self {
        Self { extract_text: true }
    }
}

impl PdfEngine {
    pub fn new(config: &PdfConfig) -> Self {
        debug!("PDF engine ready (extract_text = {})", config.extract_text);
        Self {
            extract_text: config.extract_text,
        }
    }

    pub fn page_count(&self, bytes: &[u8]) -> Result<usize, RenderError> {
        let file = FileOptions::cached()
            .load(bytes.to_vec())
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok(file.num_pages() as usize)
    }

    /// Text of each page, exactly `pages` entries. Extraction is best-effort:
    /// anything that goes wrong leaves the pages blank.
    pub fn page_texts(&self, bytes: &[u8], pages: usize) -> Vec<String> {
        if !self.extract_text {
            return vec![String::new(); pages];
        }

        // pdf-extract panics on some malformed content streams
        let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }));

        let mut texts = match extracted {
            Ok(Ok(texts)) => texts,
            Ok(Err(e)) => {
                warn!("PDF text extraction failed: {}", e);
                Vec::new()
            }
            Err(_) => {
                warn!("PDF text extraction panicked");
                Vec::new()
            }
        };
        texts.resize(pages, String::new());
        texts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::document::viewer::strategies::pdf::fixtures;

    #[test]
    fn counts_pages() {
        let engine = PdfEngine::default();
        assert_eq!(engine.page_count(&fixtures::pdf(3)).unwrap(), 3);
    }

    #[test]
    fn garbage_is_a_pdf_error() {
        let engine = PdfEngine::default();
        assert!(matches!(engine.page_count(b"not a pdf"), Err(RenderError::Pdf(_))));
    }

    #[test]
    fn disabled_extraction_yields_blank_pages() {
        let engine = PdfEngine::new(&PdfConfig { extract_text: false });
        assert_eq!(engine.page_texts(b"whatever", 2), vec![String::new(), String::new()]);
    }

    #[test]
    fn extraction_always_matches_page_count() {
        let engine = PdfEngine::default();
        assert_eq!(engine.page_texts(b"not a pdf", 4).len(), 4);
    }
}
