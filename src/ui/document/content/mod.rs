mod lines;
mod paginated;
mod to_html;

use serde::Serialize;

/// Displayable result of running a renderer over loaded content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "document", rename_all = "snake_case")]
pub enum RenderedDocument {
    Paginated(PaginatedDocument),
    Table(SheetTable),
    Markup(MarkupDocument),
    Slides(SlideDeck),
    Preformatted(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    /// 1-based
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedDocument {
    pub pages: Vec<PageView>,
    pub current_page: usize,
}

/// First sheet of a workbook, cells already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetTable {
    pub sheet_name: String,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarkupBlock {
    Heading { level: u8, runs: Vec<TextRun> },
    Paragraph { runs: Vec<TextRun> },
    Table { rows: Vec<Vec<String>> },
}

impl MarkupBlock {
    pub fn plain_text(&self) -> String {
        match self {
            MarkupBlock::Heading { runs, .. } | MarkupBlock::Paragraph { runs } => {
                runs.iter().map(|run| run.text.as_str()).collect()
            }
            MarkupBlock::Table { rows } => rows
                .iter()
                .map(|row| row.join("\t"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Converted word-processing document: the markup plus the blocks it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkupDocument {
    pub html: String,
    pub blocks: Vec<MarkupBlock>,
}

impl MarkupDocument {
    pub fn from_blocks(blocks: Vec<MarkupBlock>) -> Self {
        let html = blocks.iter().map(to_html::block_html).collect();
        Self { html, blocks }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub number: usize,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideDeck {
    pub slides: Vec<Slide>,
}
