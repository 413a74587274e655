use std::fs;
use std::io::{Cursor, Write};
use std::sync::Arc;

use docview::config::ViewerConfig;
use docview::document::{
    DocumentIdentifier, DownloadSink, FileSystemSink, LoadPhase, RenderPhase, DOWNLOAD_MIME_TYPE,
};
use docview::loader::DirectorySource;
use docview::session::DocumentSession;
use docview::ui::document::content::RenderedDocument;
use docview::ui::document::viewer::{external::ExternalViewer, DocumentViewer, PdfEngine};
use serde_json::json;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn docx(body: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    write!(
        writer,
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    )
    .unwrap();
    writer.finish().unwrap().into_inner()
}

fn session_for(dir: &TempDir) -> DocumentSession {
    let viewer = Arc::new(DocumentViewer::new(PdfEngine::default()).unwrap());
    DocumentSession::new(Arc::new(DirectorySource::new(dir.path())), viewer)
}

fn id(name: &str) -> DocumentIdentifier {
    DocumentIdentifier::new(name).unwrap()
}

#[tokio::test]
async fn text_file_renders_and_exports_verbatim() {
    let files = TempDir::new().unwrap();
    fs::write(files.path().join("notes.txt"), "hello").unwrap();

    let mut session = session_for(&files);
    session.open(id("notes.txt"));
    let state = session.settle().await;

    let document = state.rendered().expect("rendered");
    assert_eq!(document, &RenderedDocument::Preformatted("hello".into()));
    assert_eq!(document.to_html(), "<pre>hello</pre>");
    assert_eq!(
        serde_json::to_value(document).unwrap(),
        json!({ "kind": "preformatted", "document": "hello" })
    );

    let export = TempDir::new().unwrap();
    let viewer = ExternalViewer::new(export.path()).unwrap();
    let page = export.path().join("notes.html");
    viewer.write_document_html(&page, "notes.txt", document).await.unwrap();
    let html = fs::read_to_string(page).unwrap();
    assert!(html.contains("<title>notes.txt</title>"));
    assert!(html.contains("<pre>hello</pre>"));
}

#[tokio::test]
async fn docx_converts_to_markup() {
    let files = TempDir::new().unwrap();
    fs::write(
        files.path().join("memo.docx"),
        docx(r#"<w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>Memo</w:t></w:r></w:p><w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Due</w:t></w:r><w:r><w:t xml:space="preserve"> Friday</w:t></w:r></w:p>"#),
    )
    .unwrap();

    let mut session = session_for(&files);
    session.open(id("memo.docx"));
    let state = session.settle().await;

    match state.rendered() {
        Some(RenderedDocument::Markup(markup)) => {
            assert_eq!(markup.html, "<h1>Memo</h1><p><strong>Due</strong> Friday</p>");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn broken_docx_shows_nothing() {
    let files = TempDir::new().unwrap();
    fs::write(files.path().join("broken.docx"), b"PK not really").unwrap();

    let mut session = session_for(&files);
    session.open(id("broken.docx"));
    let state = session.settle().await;

    assert!(matches!(state.render_phase(), RenderPhase::Failed(_)));
    assert!(state.rendered().is_none());
}

#[tokio::test]
async fn missing_file_is_a_load_failure() {
    let files = TempDir::new().unwrap();
    let mut session = session_for(&files);
    session.open(id("absent.pdf"));
    let state = session.settle().await;

    assert!(matches!(state.load_phase(), LoadPhase::Failed(_)));
    assert!(state.content().is_none());
}

#[tokio::test]
async fn download_saves_exact_fetched_bytes() {
    let files = TempDir::new().unwrap();
    let bytes = docx("<w:p><w:r><w:t>x</w:t></w:r></w:p>");
    fs::write(files.path().join("memo.docx"), &bytes).unwrap();

    let mut session = session_for(&files);
    assert!(session.prepare_download().unwrap().is_none());

    session.open(id("memo.docx"));
    session.settle().await;

    let request = session.prepare_download().unwrap().unwrap();
    assert_eq!(request.mime_type, DOWNLOAD_MIME_TYPE);
    assert_eq!(request.file_name, "memo.docx");

    let downloads = TempDir::new().unwrap();
    let saved = FileSystemSink::new(downloads.path()).save(&request).unwrap();
    assert_eq!(fs::read(saved).unwrap(), bytes);
}

#[tokio::test]
async fn config_file_selects_directory_source() {
    let files = TempDir::new().unwrap();
    fs::write(files.path().join("readme.md"), "# title").unwrap();

    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("docview.yml");
    fs::write(
        &config_path,
        format!("files_dir: {}\n", files.path().display()),
    )
    .unwrap();

    let config = ViewerConfig::load(Some(&config_path)).unwrap();
    let viewer = Arc::new(DocumentViewer::new(PdfEngine::new(&config.pdf)).unwrap());
    let mut session = DocumentSession::new(config.content_source().unwrap(), viewer);

    session.open(id("readme.md"));
    let state = session.settle().await;
    assert_eq!(state.rendered(), Some(&RenderedDocument::Preformatted("# title".into())));
}
