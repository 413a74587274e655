use std::path::{Path, PathBuf};

use tracing::info;
use uuid::Uuid;

use crate::ui::document::content::RenderedDocument;

use super::ExternalViewer;

impl ExternalViewer {
    /// Write the HTML page for `document` to `path`.
    pub async fn write_document_html(
        &self,
        path: &Path,
        title: &str,
        document: &RenderedDocument,
    ) -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, self.create_document_html(title, document)).await
    }

    /// Export `document` into the export directory and open it in a browser.
    pub async fn show_document_external(
        &self,
        title: &str,
        document: &RenderedDocument,
    ) -> color_eyre::Result<PathBuf> {
        let html_path = self.export_dir.join(format!("{}.html", Uuid::new_v4()));
        self.write_document_html(&html_path, title, document).await?;

        let browser = self.launch_browser(&html_path).await?;
        info!("Opened {} in {}", html_path.display(), browser);
        Ok(html_path)
    }
}
