use html_escape::encode_text;

use super::{MarkupBlock, RenderedDocument, TextRun};

impl RenderedDocument {
    /// HTML fragment for the document body.
    pub fn to_html(&self) -> String {
        match self {
            RenderedDocument::Paginated(doc) => {
                let mut html = String::from("<div class=\"pdf-document\">\n");
                for page in &doc.pages {
                    html.push_str(&format!(
                        "<section class=\"page\" data-page=\"{}\"><h2>Page {}</h2><pre>{}</pre></section>\n",
                        page.number,
                        page.number,
                        encode_text(&page.text)
                    ));
                }
                html.push_str("</div>\n");
                html.push_str(&format!("<p class=\"page-footer\">{}</p>\n", doc.footer()));
                html
            }
            RenderedDocument::Table(table) => table_html(&table.rows),
            RenderedDocument::Markup(doc) => doc.html.clone(),
            RenderedDocument::Slides(deck) => {
                let mut html = String::new();
                for slide in &deck.slides {
                    html.push_str(&format!(
                        "<section class=\"slide\" data-slide=\"{}\"><h2>Slide {}</h2>",
                        slide.number, slide.number
                    ));
                    for paragraph in &slide.paragraphs {
                        html.push_str(&format!("<p>{}</p>", encode_text(paragraph)));
                    }
                    html.push_str("</section>\n");
                }
                html
            }
            RenderedDocument::Preformatted(text) => format!("<pre>{}</pre>", encode_text(text)),
        }
    }
}

pub(super) fn table_html(rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", encode_text(cell)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

fn runs_html(runs: &[TextRun]) -> String {
    runs.iter()
        .map(|run| {
            let mut html = encode_text(&run.text).replace('\n', "<br />");
            if run.underline {
                html = format!("<u>{}</u>", html);
            }
            if run.italic {
                html = format!("<em>{}</em>", html);
            }
            if run.bold {
                html = format!("<strong>{}</strong>", html);
            }
            html
        })
        .collect()
}

pub(super) fn block_html(block: &MarkupBlock) -> String {
    match block {
        MarkupBlock::Heading { level, runs } => {
            let level = (*level).clamp(1, 6);
            format!("<h{}>{}</h{}>", level, runs_html(runs), level)
        }
        MarkupBlock::Paragraph { runs } => format!("<p>{}</p>", runs_html(runs)),
        MarkupBlock::Table { rows } => table_html(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::document::content::{MarkupDocument, SheetTable};

    #[test]
    fn preformatted_is_escaped() {
        let doc = RenderedDocument::Preformatted("a < b".into());
        assert_eq!(doc.to_html(), "<pre>a &lt; b</pre>");
    }

    #[test]
    fn table_has_one_row_per_line() {
        let doc = RenderedDocument::Table(SheetTable {
            sheet_name: "Sheet1".into(),
            rows: vec![vec!["1".into(), "2".into()], vec!["3".into(), "4".into()]],
        });
        assert_eq!(
            doc.to_html(),
            "<table><tr><td>1</td><td>2</td></tr><tr><td>3</td><td>4</td></tr></table>"
        );
    }

    #[test]
    fn runs_nest_formatting() {
        let doc = MarkupDocument::from_blocks(vec![
            MarkupBlock::Heading { level: 1, runs: vec![TextRun::plain("Title")] },
            MarkupBlock::Paragraph {
                runs: vec![
                    TextRun::plain("plain "),
                    TextRun { text: "bold".into(), bold: true, italic: true, underline: false },
                ],
            },
        ]);
        assert_eq!(
            doc.html,
            "<h1>Title</h1><p>plain <strong><em>bold</em></strong></p>"
        );
    }
}
