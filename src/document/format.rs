use std::fmt;

use serde::Serialize;

use super::DocumentIdentifier;

/// Classification bucket driving loader and renderer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatCategory {
    Pdf,
    Spreadsheet,
    Presentation,
    WordProcessing,
    PlainText,
}

impl FormatCategory {
    pub const ALL: [FormatCategory; 5] = [
        FormatCategory::Pdf,
        FormatCategory::Spreadsheet,
        FormatCategory::Presentation,
        FormatCategory::WordProcessing,
        FormatCategory::PlainText,
    ];

    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            Some("pdf") => FormatCategory::Pdf,
            Some("xlsx") => FormatCategory::Spreadsheet,
            Some("pptx") => FormatCategory::Presentation,
            Some("docx") => FormatCategory::WordProcessing,
            _ => FormatCategory::PlainText,
        }
    }

    /// How content of this category has to be fetched.
    pub fn representation(self) -> RepresentationKind {
        match self {
            FormatCategory::Pdf
            | FormatCategory::Spreadsheet
            | FormatCategory::Presentation
            | FormatCategory::WordProcessing => RepresentationKind::Binary,
            FormatCategory::PlainText => RepresentationKind::Text,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormatCategory::Pdf => "pdf",
            FormatCategory::Spreadsheet => "spreadsheet",
            FormatCategory::Presentation => "presentation",
            FormatCategory::WordProcessing => "wordprocessing",
            FormatCategory::PlainText => "plain text",
        }
    }
}

impl fmt::Display for FormatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RepresentationKind {
    Binary,
    Text,
}

impl RepresentationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RepresentationKind::Binary => "binary",
            RepresentationKind::Text => "text",
        }
    }
}

/// Classify an identifier. Total: unknown or missing extensions are plain text.
pub fn resolve(identifier: &DocumentIdentifier) -> (FormatCategory, RepresentationKind) {
    let category = FormatCategory::from_extension(identifier.extension().as_deref());
    (category, category.representation())
}
