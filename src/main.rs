use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use tracing::{error, info};

use docview::{
    app::App,
    config::ViewerConfig,
    document::{DocumentIdentifier, FileSystemSink, LoadPhase, RenderPhase},
    session::DocumentSession,
    ui::document::viewer::{external::ExternalViewer, DocumentViewer, PdfEngine},
    util::log,
};

/// View PDF, spreadsheet, word-processing, presentation and text documents in the terminal.
#[derive(Parser, Debug)]
#[command(name = "docview", version)]
struct Args {
    /// Document to open, e.g. `report.pdf`
    identifier: Option<String>,

    /// File server base url; documents are fetched from `{server}/files/{identifier}`
    #[arg(long, env = "DOCVIEW_SERVER")]
    server: Option<String>,

    /// Read documents from this directory instead of a server
    #[arg(long, env = "DOCVIEW_FILES_DIR")]
    files_dir: Option<PathBuf>,

    /// Where downloads are saved
    #[arg(long)]
    download_dir: Option<PathBuf>,

    /// Config file (default: ./docview.yml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render the document without the UI and write it to PATH
    /// (HTML page, or the rendered structure when PATH ends in `.json`)
    #[arg(long, value_name = "PATH", requires = "identifier")]
    export: Option<PathBuf>,
}

impl Args {
    fn apply(&self, config: &mut ViewerConfig) {
        if let Some(server) = &self.server {
            config.server_url = server.clone();
        }
        if let Some(dir) = &self.files_dir {
            config.files_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.download_dir {
            config.download_dir = dir.clone();
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let mut config = ViewerConfig::load(args.config.as_deref()).wrap_err("Failed to load config")?;
    args.apply(&mut config);

    let log_path = log::init(&config.log_dir)?;
    info!("docview starting, logging to {}", log_path.display());

    let viewer = Arc::new(DocumentViewer::new(PdfEngine::new(&config.pdf))?);
    let source = config.content_source()?;
    let mut session = DocumentSession::new(source, viewer);
    let external_viewer = Arc::new(ExternalViewer::new(&config.export_dir)?);

    let identifier = args
        .identifier
        .as_deref()
        .map(DocumentIdentifier::new)
        .transpose()?;

    if let Some(path) = &args.export {
        let identifier = identifier.ok_or_else(|| eyre!("--export needs a document identifier"))?;
        return export(&mut session, &external_viewer, identifier, path).await;
    }

    if let Some(identifier) = identifier {
        session.open(identifier);
    }

    let app = App::new(session, external_viewer, FileSystemSink::new(&config.download_dir));
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    if let Err(e) = &result {
        error!("docview exited with error: {}", e);
    }
    result
}

async fn export(
    session: &mut DocumentSession,
    external_viewer: &ExternalViewer,
    identifier: DocumentIdentifier,
    path: &Path,
) -> color_eyre::Result<()> {
    let title = identifier.to_string();
    session.open(identifier);
    let state = session.settle().await;

    match (state.load_phase(), state.render_phase()) {
        (LoadPhase::Failed(reason), _) => Err(eyre!("Failed to load {}: {}", title, reason)),
        (_, RenderPhase::Failed(reason)) => Err(eyre!("Could not render {}: {}", title, reason)),
        (_, RenderPhase::Ready(document)) => {
            if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
                let json = serde_json::to_string_pretty(document)?;
                tokio::fs::write(path, json).await?;
            } else {
                external_viewer.write_document_html(path, &title, document).await?;
            }
            info!("Exported {} to {}", title, path.display());
            println!("{}", path.display());
            Ok(())
        }
        _ => Err(eyre!("Loading {} did not finish", title)),
    }
}
