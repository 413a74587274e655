use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
};

use super::{MarkupBlock, PageView, PaginatedDocument, RenderedDocument, TextRun};

impl RenderedDocument {
    /// Terminal lines for the scrolling document body.
    pub fn text_lines(&self) -> Vec<Line<'static>> {
        match self {
            RenderedDocument::Paginated(doc) => paginated_lines(doc),
            RenderedDocument::Table(table) => table
                .rows
                .iter()
                .map(|row| Line::from(row.join(" │ ")))
                .collect(),
            RenderedDocument::Markup(doc) => {
                let mut lines = Vec::new();
                for block in &doc.blocks {
                    lines.extend(block_lines(block));
                    lines.push(Line::default());
                }
                lines
            }
            RenderedDocument::Slides(deck) => {
                let mut lines = Vec::new();
                for slide in &deck.slides {
                    lines.push(section_header(&format!("Slide {}", slide.number)));
                    for paragraph in &slide.paragraphs {
                        lines.push(Line::from(format!("  • {}", paragraph)));
                    }
                    lines.push(Line::default());
                }
                lines
            }
            RenderedDocument::Preformatted(text) => text
                .lines()
                .map(|line| Line::from(line.to_string()))
                .collect(),
        }
    }

    /// [`Self::text_lines`] wrapped to `width` columns, one entry per
    /// terminal row. Scroll offsets index into this.
    pub fn body_rows(&self, width: usize) -> Vec<Line<'static>> {
        wrap_lines(self.text_lines(), width)
    }
}

impl PaginatedDocument {
    /// Index into [`RenderedDocument::body_rows`] at `width` where `page` begins.
    pub fn page_start_row(&self, page: usize, width: usize) -> usize {
        self.pages
            .iter()
            .take_while(|p| p.number < page)
            .map(|p| wrap_lines(page_lines(p), width).len())
            .sum()
    }
}

fn paginated_lines(doc: &PaginatedDocument) -> Vec<Line<'static>> {
    doc.pages.iter().flat_map(page_lines).collect()
}

fn page_lines(page: &PageView) -> Vec<Line<'static>> {
    let mut lines = vec![section_header(&format!("Page {}", page.number))];
    lines.extend(page.text.lines().map(|line| Line::from(line.to_string())));
    lines.push(Line::default());
    lines
}

fn char_width(ch: char) -> usize {
    if ch.is_ascii() {
        usize::from(!ch.is_ascii_control())
    } else {
        Span::raw(ch.to_string()).width()
    }
}

/// Breaks every line wider than `width` columns into rows that fit, keeping
/// span styles. A zero width leaves the lines alone.
fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return lines;
    }

    let mut rows = Vec::with_capacity(lines.len());
    for line in lines {
        if line.width() <= width {
            rows.push(line);
            continue;
        }

        let line_style = line.style;
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut row_width = 0;
        for span in line.spans {
            let mut piece = String::new();
            for ch in span.content.chars() {
                let ch_width = char_width(ch);
                if row_width > 0 && row_width + ch_width > width {
                    if !piece.is_empty() {
                        row.push(Span::styled(std::mem::take(&mut piece), span.style));
                    }
                    rows.push(Line::from(std::mem::take(&mut row)).style(line_style));
                    row_width = 0;
                }
                piece.push(ch);
                row_width += ch_width;
            }
            if !piece.is_empty() {
                row.push(Span::styled(piece, span.style));
            }
        }
        if !row.is_empty() {
            rows.push(Line::from(row).style(line_style));
        }
    }
    rows
}

fn section_header(title: &str) -> Line<'static> {
    Line::from(format!("── {} ──", title)).fg(Color::Cyan).bold()
}

fn run_style(run: &TextRun) -> Style {
    let mut style = Style::default();
    if run.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if run.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if run.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

/// Runs may carry line breaks; split them across terminal lines.
fn runs_to_lines(runs: &[TextRun], base: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    for run in runs {
        let style = base.patch(run_style(run));
        let mut parts = run.text.split('\n').peekable();
        while let Some(part) = parts.next() {
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), style));
            }
            if parts.peek().is_some() {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
        }
    }
    lines.push(Line::from(current));
    lines
}

fn block_lines(block: &MarkupBlock) -> Vec<Line<'static>> {
    match block {
        MarkupBlock::Heading { level, runs } => {
            let base = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
            let mut lines = runs_to_lines(runs, base);
            if *level <= 1 {
                lines.push(Line::from("═".repeat(24)).fg(Color::Yellow));
            }
            lines
        }
        MarkupBlock::Paragraph { runs } => runs_to_lines(runs, Style::default()),
        MarkupBlock::Table { rows } => rows
            .iter()
            .map(|row| Line::from(format!("│ {} │", row.join(" │ "))))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn preformatted_lines_are_verbatim() {
        let doc = RenderedDocument::Preformatted("hello\n  world".into());
        let lines: Vec<String> = doc.text_lines().iter().map(plain).collect();
        assert_eq!(lines, vec!["hello", "  world"]);
    }

    #[test]
    fn page_start_rows_follow_headers() {
        let doc = PaginatedDocument::new(vec!["one\ntwo".into(), "three".into(), String::new()]);
        let rendered = RenderedDocument::Paginated(doc.clone());
        let rows: Vec<String> = rendered.body_rows(80).iter().map(plain).collect();

        assert_eq!(rows[doc.page_start_row(1, 80)], "── Page 1 ──");
        assert_eq!(rows[doc.page_start_row(2, 80)], "── Page 2 ──");
        assert_eq!(rows[doc.page_start_row(3, 80)], "── Page 3 ──");
    }

    #[test]
    fn page_start_rows_count_wrapped_text() {
        let doc = PaginatedDocument::new(vec!["x".repeat(30), "second".into()]);
        let rendered = RenderedDocument::Paginated(doc.clone());
        let rows: Vec<String> = rendered.body_rows(12).iter().map(plain).collect();

        // header, three rows of text, blank
        assert_eq!(doc.page_start_row(2, 12), 5);
        assert_eq!(rows[5], "── Page 2 ──");
        assert_eq!(rows[6], "second");
    }

    #[test]
    fn long_lines_wrap_to_width() {
        let doc = RenderedDocument::Preformatted(format!("{}\nshort", "a".repeat(95)));
        let rows: Vec<String> = doc.body_rows(40).iter().map(plain).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].len(), 40);
        assert_eq!(rows[2], "a".repeat(15));
        assert_eq!(rows[3], "short");
    }

    #[test]
    fn wrapping_keeps_span_styles() {
        let line = Line::from(vec![Span::raw("abc"), Span::styled("defg", Style::default().bold())]);
        let rows = wrap_lines(vec![line], 5);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].spans[1].content, "de");
        assert!(rows[0].spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(plain(&rows[1]), "fg");
        assert!(rows[1].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn wide_characters_take_two_columns() {
        let rows = wrap_lines(vec![Line::from("日本語です")], 4);
        let rows: Vec<String> = rows.iter().map(plain).collect();
        assert_eq!(rows, vec!["日本", "語で", "す"]);
    }

    #[test]
    fn line_breaks_inside_runs_split_lines() {
        let runs = vec![TextRun::plain("a\nb"), TextRun::plain("c")];
        let lines: Vec<String> = runs_to_lines(&runs, Style::default()).iter().map(plain).collect();
        assert_eq!(lines, vec!["a", "bc"]);
    }
}
