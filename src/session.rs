//! One viewing session: the document slot, the loader feeding it and the
//! renderer table that turns loaded content into something displayable.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::document::{
    prepare_download, DocumentIdentifier, DocumentState, LoadPhase, RenderPhase, SaveRequest,
};
use crate::error::{DownloadError, RenderError};
use crate::loader::{ContentLoader, ContentSource, ViewerEvent};
use crate::ui::document::viewer::DocumentViewer;

#[derive(Debug)]
pub struct DocumentSession {
    state: DocumentState,
    loader: ContentLoader,
    viewer: Arc<DocumentViewer>,
    sender: mpsc::UnboundedSender<ViewerEvent>,
    receiver: mpsc::UnboundedReceiver<ViewerEvent>,
}

impl DocumentSession {
    pub fn new(source: Arc<dyn ContentSource>, viewer: Arc<DocumentViewer>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            state: DocumentState::new(),
            loader: ContentLoader::new(source, sender.clone()),
            viewer,
            sender,
            receiver,
        }
    }

    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DocumentState {
        &mut self.state
    }

    pub fn source(&self) -> &Arc<dyn ContentSource> {
        self.loader.source()
    }

    /// Switch to `identifier`. Whatever was loading before is abandoned.
    pub fn open(&mut self, identifier: DocumentIdentifier) -> u64 {
        let generation = self.state.begin(identifier.clone());
        self.loader.load(generation, identifier);
        generation
    }

    /// Fetch the current identifier again.
    pub fn reload(&mut self) -> Option<u64> {
        let identifier = self.state.identifier()?.clone();
        info!("Reloading {}", identifier);
        Some(self.open(identifier))
    }

    pub async fn next_event(&mut self) -> Option<ViewerEvent> {
        self.receiver.recv().await
    }

    /// Apply a loader or renderer result. Returns true when the visible state changed.
    pub fn handle_event(&mut self, event: ViewerEvent) -> bool {
        match event {
            ViewerEvent::Loaded {
                generation,
                identifier,
                result,
            } => {
                let ok = result.is_ok();
                if !self.state.apply_load(generation, result) {
                    debug!("Ignoring load of {} (generation {})", identifier, generation);
                    return false;
                }
                if ok {
                    self.spawn_render(generation);
                }
                true
            }
            ViewerEvent::Rendered { generation, result } => self.state.apply_render(generation, result),
        }
    }

    /// Render on the blocking pool; the result comes back as [`ViewerEvent::Rendered`].
    fn spawn_render(&self, generation: u64) {
        let Some(loaded) = self.state.loaded() else {
            return;
        };
        let category = loaded.category;
        let content = loaded.content.clone();
        let viewer = self.viewer.clone();
        let sender = self.sender.clone();

        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || viewer.view_document(category, &content))
                .await
                .unwrap_or_else(|e| Err(RenderError::Task(e.to_string())));
            let _ = sender.send(ViewerEvent::Rendered { generation, result });
        });
    }

    /// True once the current document has either failed or finished rendering.
    pub fn is_settled(&self) -> bool {
        match self.state.load_phase() {
            LoadPhase::Idle | LoadPhase::Failed(_) => true,
            LoadPhase::Loading => false,
            LoadPhase::Loaded(_) => !matches!(self.state.render_phase(), RenderPhase::Pending),
        }
    }

    /// Process events until the current document settles.
    pub async fn settle(&mut self) -> &DocumentState {
        while !self.is_settled() {
            match self.next_event().await {
                Some(event) => {
                    self.handle_event(event);
                }
                None => break,
            }
        }
        &self.state
    }

    pub fn prepare_download(&self) -> Result<Option<SaveRequest>, DownloadError> {
        prepare_download(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ContentRepresentation, RepresentationKind};
    use crate::error::LoadError;
    use crate::ui::document::content::RenderedDocument;
    use crate::ui::document::viewer::PdfEngine;
    use async_trait::async_trait;
    use tokio::sync::Semaphore;

    /// Serves each identifier's own name as its content. Identifiers starting
    /// with `slow` wait for a permit first, `missing` is a 404 and `panic`
    /// panics mid-fetch.
    #[derive(Debug)]
    struct GatedSource {
        gate: Arc<Semaphore>,
    }

    #[async_trait]
    impl ContentSource for GatedSource {
        async fn fetch(
            &self,
            identifier: &DocumentIdentifier,
            kind: RepresentationKind,
        ) -> Result<ContentRepresentation, LoadError> {
            if identifier.as_str().starts_with("slow") {
                let _permit = self
                    .gate
                    .acquire()
                    .await
                    .map_err(|e| LoadError::Task(e.to_string()))?;
            }
            if identifier.as_str().starts_with("panic") {
                panic!("source crashed on {}", identifier);
            }
            if identifier.as_str().starts_with("missing") {
                return Err(LoadError::Status { status: 404, url: identifier.to_string() });
            }
            Ok(match kind {
                RepresentationKind::Text => ContentRepresentation::Text(identifier.to_string()),
                RepresentationKind::Binary => ContentRepresentation::Binary(identifier.as_str().as_bytes().to_vec()),
            })
        }

        fn describe(&self, identifier: &DocumentIdentifier) -> String {
            format!("gated:{}", identifier)
        }
    }

    fn session() -> (DocumentSession, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let viewer = Arc::new(DocumentViewer::new(PdfEngine::default()).unwrap());
        let source = Arc::new(GatedSource { gate: gate.clone() });
        (DocumentSession::new(source, viewer), gate)
    }

    fn id(name: &str) -> DocumentIdentifier {
        DocumentIdentifier::new(name).unwrap()
    }

    #[tokio::test]
    async fn last_identifier_wins() {
        let (mut session, gate) = session();
        session.open(id("slow.txt"));
        session.open(id("fast.txt"));

        let state = session.settle().await;
        assert_eq!(state.identifier().unwrap().as_str(), "fast.txt");
        assert_eq!(state.rendered(), Some(&RenderedDocument::Preformatted("fast.txt".into())));

        gate.add_permits(1);
        tokio::task::yield_now().await;
        assert_eq!(session.state().identifier().unwrap().as_str(), "fast.txt");
    }

    #[tokio::test]
    async fn late_result_for_superseded_generation_is_dropped() {
        let (mut session, _gate) = session();
        let stale = session.open(id("a.txt"));
        session.open(id("b.txt"));
        session.settle().await;

        let changed = session.handle_event(ViewerEvent::Loaded {
            generation: stale,
            identifier: id("a.txt"),
            result: Ok(ContentRepresentation::Text("a".into())),
        });
        assert!(!changed);
        assert_eq!(
            session.state().content(),
            Some(&ContentRepresentation::Text("b.txt".into()))
        );
    }

    #[tokio::test]
    async fn load_failure_settles_without_render() {
        let (mut session, _gate) = session();
        session.open(id("missing.txt"));
        let state = session.settle().await;
        assert!(matches!(state.load_phase(), LoadPhase::Failed(_)));
        assert!(matches!(state.render_phase(), RenderPhase::Pending));
    }

    #[tokio::test]
    async fn panicking_fetch_becomes_load_failure() {
        let (mut session, _gate) = session();
        session.open(id("panic.txt"));
        let state = session.settle().await;
        match state.load_phase() {
            LoadPhase::Failed(reason) => {
                assert!(reason.contains("source crashed on panic.txt"), "{}", reason)
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn render_failure_is_visible() {
        let (mut session, _gate) = session();
        session.open(id("broken.docx"));
        let state = session.settle().await;
        assert!(state.content().is_some());
        assert!(matches!(state.render_phase(), RenderPhase::Failed(_)));
    }

    #[tokio::test]
    async fn reload_repeats_current_identifier() {
        let (mut session, _gate) = session();
        assert!(session.reload().is_none());

        let first = session.open(id("notes.txt"));
        session.settle().await;
        let second = session.reload().unwrap();
        assert!(second > first);
        session.settle().await;
        assert_eq!(session.state().identifier().unwrap().as_str(), "notes.txt");
    }

    #[tokio::test]
    async fn download_after_load_carries_fetched_bytes() {
        let (mut session, _gate) = session();
        assert!(session.prepare_download().unwrap().is_none());

        session.open(id("report.pdf"));
        session.settle().await;
        let request = session.prepare_download().unwrap().unwrap();
        assert_eq!(request.file_name, "report.pdf");
        assert_eq!(request.bytes, b"report.pdf".to_vec());
    }
}
