use html_escape::encode_text;

use crate::ui::document::content::RenderedDocument;

use super::ExternalViewer;

const PAGE_STYLE: &str = r#"
        body {
            font-family: sans-serif;
            margin: 20px;
            background: #1e1e1e;
            color: #ffffff;
            line-height: 1.6;
        }
        pre { white-space: pre-wrap; }
        table { border-collapse: collapse; }
        td { border: 1px solid #444; padding: 4px 8px; }
        section { border-bottom: 1px solid #444; margin-bottom: 16px; }
        .page-footer { color: #aaaaaa; }
"#;

impl ExternalViewer {
    /// Standalone page titled with `title`, the document as its body.
    pub fn create_document_html(&self, title: &str, document: &RenderedDocument) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{style}    </style>
</head>
<body>
    <h1>{title}</h1>
    <div id="content">
{body}
    </div>
</body>
</html>
"#,
            title = encode_text(title),
            style = PAGE_STYLE,
            body = document.to_html(),
        )
    }
}
