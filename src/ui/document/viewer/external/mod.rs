mod create_document_html;
mod launch_browser;
mod new;
mod show_document_external;

use std::path::PathBuf;

/// Hands rendered documents to a web browser as standalone HTML pages.
#[derive(Debug)]
pub struct ExternalViewer {
    export_dir: PathBuf,
}
