//! Content loading.
//!
//! Loads run as tokio tasks and report back through a channel as
//! [`ViewerEvent`]s tagged with the generation they were issued for. Issuing a
//! new load aborts the one in flight; a result that still slips through is
//! dropped by [`DocumentState`](crate::document::DocumentState).

pub mod source;

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::document::{resolve, ContentRepresentation, DocumentIdentifier};
use crate::error::{LoadError, RenderError};
use crate::ui::document::content::RenderedDocument;

pub use source::{ContentSource, DirectorySource, HttpSource};

#[derive(Debug)]
pub enum ViewerEvent {
    Loaded {
        generation: u64,
        identifier: DocumentIdentifier,
        result: Result<ContentRepresentation, LoadError>,
    },
    Rendered {
        generation: u64,
        result: Result<RenderedDocument, RenderError>,
    },
}

#[derive(Debug)]
pub struct ContentLoader {
    source: Arc<dyn ContentSource>,
    sender: mpsc::UnboundedSender<ViewerEvent>,
    in_flight: Option<JoinHandle<()>>,
}

impl ContentLoader {
    pub fn new(source: Arc<dyn ContentSource>, sender: mpsc::UnboundedSender<ViewerEvent>) -> Self {
        Self {
            source,
            sender,
            in_flight: None,
        }
    }

    pub fn source(&self) -> &Arc<dyn ContentSource> {
        &self.source
    }

    /// Start fetching `identifier`, superseding any load still running.
    pub fn load(&mut self, generation: u64, identifier: DocumentIdentifier) {
        self.cancel();

        let (category, kind) = resolve(&identifier);
        info!(
            "Loading {} ({}, {}) from {}",
            identifier,
            category,
            kind.as_str(),
            self.source.describe(&identifier)
        );

        let source = self.source.clone();
        let sender = self.sender.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = AssertUnwindSafe(source.fetch(&identifier, kind))
                .catch_unwind()
                .await
                .unwrap_or_else(|panic| Err(LoadError::Task(panic_message(panic.as_ref()))));
            match &result {
                Ok(content) => debug!("Loaded {} ({} bytes)", identifier, content.len()),
                Err(e) => warn!("Failed to load {}: {}", identifier, e),
            }
            let _ = sender.send(ViewerEvent::Loaded {
                generation,
                identifier,
                result,
            });
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!("Aborting superseded load");
                handle.abort();
            }
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "fetch panicked".to_string())
}

impl Drop for ContentLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}
