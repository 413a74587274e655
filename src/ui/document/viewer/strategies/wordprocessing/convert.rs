//! `word/document.xml` to [`MarkupBlock`]s.
//!
//! Handles paragraphs, heading and title styles, bold/italic/underline runs,
//! breaks, tabs and tables (nested tables are flattened into their cell).
//! Everything else in the body is skipped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::RenderError;
use crate::ui::document::{
    content::{MarkupBlock, TextRun},
    viewer::strategies::ooxml::attr_value,
};

#[derive(Debug, Default)]
struct ParagraphBuilder {
    style: Option<String>,
    runs: Vec<TextRun>,
}

impl ParagraphBuilder {
    fn push_run(&mut self, run: TextRun) {
        if run.text.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last)
                if last.bold == run.bold
                    && last.italic == run.italic
                    && last.underline == run.underline =>
            {
                last.text.push_str(&run.text);
            }
            _ => self.runs.push(run),
        }
    }

    fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    fn into_block(self) -> Option<MarkupBlock> {
        if self.runs.iter().all(|run| run.text.trim().is_empty()) {
            return None;
        }
        match self.style.as_deref().and_then(heading_level) {
            Some(level) => Some(MarkupBlock::Heading { level, runs: self.runs }),
            None => Some(MarkupBlock::Paragraph { runs: self.runs }),
        }
    }
}

#[derive(Debug, Default)]
struct TableBuilder {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: Vec<String>,
}

/// `Title` and `Heading1`..`Heading6` style ids.
fn heading_level(style: &str) -> Option<u8> {
    if style.eq_ignore_ascii_case("title") {
        return Some(1);
    }
    let digits = style
        .strip_prefix("Heading")
        .or_else(|| style.strip_prefix("heading"))?
        .trim();
    match digits.parse::<u8>() {
        Ok(level @ 1..=6) => Some(level),
        _ => None,
    }
}

/// `<w:b/>`, `<w:b w:val="false"/>`, `<w:u w:val="none"/>`.
fn toggle_on(element: &BytesStart<'_>) -> bool {
    match attr_value(element, b"val").as_deref() {
        None => true,
        Some("false") | Some("0") | Some("off") | Some("none") => false,
        Some(_) => true,
    }
}

struct Converter {
    blocks: Vec<MarkupBlock>,
    tables: Vec<TableBuilder>,
    paragraph: Option<ParagraphBuilder>,
    run: Option<TextRun>,
    in_run_props: bool,
    in_text: bool,
}

impl Converter {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            tables: Vec::new(),
            paragraph: None,
            run: None,
            in_run_props: false,
            in_text: false,
        }
    }

    /// Elements that mean the same whether written `<x/>` or `<x></x>`.
    fn property(&mut self, element: &BytesStart<'_>) {
        match element.local_name().as_ref() {
            b"b" if self.in_run_props => {
                if let Some(run) = self.run.as_mut() {
                    run.bold = toggle_on(element);
                }
            }
            b"i" if self.in_run_props => {
                if let Some(run) = self.run.as_mut() {
                    run.italic = toggle_on(element);
                }
            }
            b"u" if self.in_run_props => {
                if let Some(run) = self.run.as_mut() {
                    run.underline = toggle_on(element);
                }
            }
            b"pStyle" => {
                if let Some(paragraph) = self.paragraph.as_mut() {
                    paragraph.style = attr_value(element, b"val");
                }
            }
            b"br" | b"cr" if !self.in_run_props => {
                if let Some(run) = self.run.as_mut() {
                    run.text.push('\n');
                }
            }
            b"tab" if !self.in_run_props => {
                if let Some(run) = self.run.as_mut() {
                    run.text.push('\t');
                }
            }
            _ => {}
        }
    }

    fn start(&mut self, element: &BytesStart<'_>) {
        match element.local_name().as_ref() {
            b"p" => self.paragraph = Some(ParagraphBuilder::default()),
            b"r" => self.run = Some(TextRun::default()),
            b"rPr" if self.run.is_some() => self.in_run_props = true,
            b"t" if self.run.is_some() => self.in_text = true,
            b"tbl" => self.tables.push(TableBuilder::default()),
            b"tr" => {
                if let Some(table) = self.tables.last_mut() {
                    table.row.clear();
                }
            }
            b"tc" => {
                if let Some(table) = self.tables.last_mut() {
                    table.cell.clear();
                }
            }
            _ => self.property(element),
        }
    }

    fn end(&mut self, local_name: &[u8]) {
        match local_name {
            b"t" => self.in_text = false,
            b"rPr" => self.in_run_props = false,
            b"r" => {
                if let (Some(run), Some(paragraph)) = (self.run.take(), self.paragraph.as_mut()) {
                    paragraph.push_run(run);
                }
            }
            b"p" => {
                if let Some(paragraph) = self.paragraph.take() {
                    self.finish_paragraph(paragraph);
                }
            }
            b"tc" => {
                if let Some(table) = self.tables.last_mut() {
                    let cell = std::mem::take(&mut table.cell).join("\n");
                    table.row.push(cell);
                }
            }
            b"tr" => {
                if let Some(table) = self.tables.last_mut() {
                    let row = std::mem::take(&mut table.row);
                    table.rows.push(row);
                }
            }
            b"tbl" => {
                if let Some(table) = self.tables.pop() {
                    self.finish_table(table);
                }
            }
            _ => {}
        }
    }

    fn finish_paragraph(&mut self, paragraph: ParagraphBuilder) {
        match self.tables.last_mut() {
            Some(table) => {
                let text = paragraph.plain_text();
                if !text.trim().is_empty() {
                    table.cell.push(text);
                }
            }
            None => {
                if let Some(block) = paragraph.into_block() {
                    self.blocks.push(block);
                }
            }
        }
    }

    fn finish_table(&mut self, table: TableBuilder) {
        if table.rows.is_empty() {
            return;
        }
        match self.tables.last_mut() {
            Some(parent) => {
                let text = table
                    .rows
                    .iter()
                    .map(|row| row.join("\t"))
                    .collect::<Vec<_>>()
                    .join("\n");
                parent.cell.push(text);
            }
            None => self.blocks.push(MarkupBlock::Table { rows: table.rows }),
        }
    }
}

pub(super) fn convert_document_xml(xml: &[u8]) -> Result<Vec<MarkupBlock>, RenderError> {
    let mut reader = Reader::from_reader(xml);
    let mut converter = Converter::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(element) => converter.start(&element),
            Event::Empty(element) => converter.property(&element),
            Event::Text(text) if converter.in_text => {
                let text = text.unescape()?;
                if let Some(run) = converter.run.as_mut() {
                    run.text.push_str(&text);
                }
            }
            Event::End(element) => converter.end(element.local_name().as_ref()),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(converter.blocks)
}
