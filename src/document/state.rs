use tracing::debug;

use crate::error::{LoadError, RenderError};
use crate::ui::document::content::RenderedDocument;

use super::{resolve, ContentRepresentation, DocumentIdentifier, FormatCategory};

#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub category: FormatCategory,
    pub content: ContentRepresentation,
}

#[derive(Debug, Clone, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded(LoadedDocument),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub enum RenderPhase {
    #[default]
    Pending,
    Ready(RenderedDocument),
    Failed(String),
}

/// The single content slot of the viewer.
///
/// Every [`begin`](Self::begin) bumps the generation; load and render results
/// are only applied when they carry the current generation, so a superseded
/// request can never overwrite the state of the identifier that replaced it.
#[derive(Debug, Default)]
pub struct DocumentState {
    generation: u64,
    identifier: Option<DocumentIdentifier>,
    category: Option<FormatCategory>,
    load: LoadPhase,
    render: RenderPhase,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all state with a fresh load of `identifier`.
    pub fn begin(&mut self, identifier: DocumentIdentifier) -> u64 {
        self.generation += 1;
        let (category, _) = resolve(&identifier);
        self.identifier = Some(identifier);
        self.category = Some(category);
        self.load = LoadPhase::Loading;
        self.render = RenderPhase::Pending;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation && self.identifier.is_some()
    }

    /// Returns false when the result belongs to a superseded load.
    pub fn apply_load(
        &mut self,
        generation: u64,
        result: Result<ContentRepresentation, LoadError>,
    ) -> bool {
        if !self.is_current(generation) {
            debug!(generation, current = self.generation, "dropping stale load result");
            return false;
        }
        let Some(category) = self.category else {
            return false;
        };
        self.load = match result {
            Ok(content) => LoadPhase::Loaded(LoadedDocument { category, content }),
            Err(e) => LoadPhase::Failed(e.to_string()),
        };
        true
    }

    pub fn apply_render(
        &mut self,
        generation: u64,
        result: Result<RenderedDocument, RenderError>,
    ) -> bool {
        if !self.is_current(generation) || !matches!(self.load, LoadPhase::Loaded(_)) {
            debug!(generation, current = self.generation, "dropping stale render result");
            return false;
        }
        self.render = match result {
            Ok(document) => RenderPhase::Ready(document),
            Err(e) => RenderPhase::Failed(e.to_string()),
        };
        true
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn identifier(&self) -> Option<&DocumentIdentifier> {
        self.identifier.as_ref()
    }

    pub fn category(&self) -> Option<FormatCategory> {
        self.category
    }

    pub fn load_phase(&self) -> &LoadPhase {
        &self.load
    }

    pub fn render_phase(&self) -> &RenderPhase {
        &self.render
    }

    pub fn loaded(&self) -> Option<&LoadedDocument> {
        match &self.load {
            LoadPhase::Loaded(loaded) => Some(loaded),
            _ => None,
        }
    }

    pub fn content(&self) -> Option<&ContentRepresentation> {
        self.loaded().map(|loaded| &loaded.content)
    }

    pub fn rendered(&self) -> Option<&RenderedDocument> {
        match &self.render {
            RenderPhase::Ready(document) => Some(document),
            _ => None,
        }
    }

    pub fn rendered_mut(&mut self) -> Option<&mut RenderedDocument> {
        match &mut self.render {
            RenderPhase::Ready(document) => Some(document),
            _ => None,
        }
    }
}
