use std::sync::Arc;

use color_eyre::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    text::Line,
};
use tracing::{error, info, warn};

use crate::document::{DocumentIdentifier, DownloadSink, FileSystemSink, LoadPhase};
use crate::event::{AppEvent, Event, EventHandler};
use crate::session::DocumentSession;
use crate::ui::document::{content::RenderedDocument, viewer::external::ExternalViewer};

/// Lines moved by PgUp / PgDn.
const PAGE_SCROLL: usize = 10;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing the identifier of another document.
    Prompt,
}

/// Document body wrapped for one width, kept until the document or the
/// width changes.
#[derive(Debug)]
struct BodyLayout {
    generation: u64,
    width: u16,
    rows: Vec<Line<'static>>,
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub mode: InputMode,
    pub prompt_input: String,
    /// First visible terminal row (or sheet row) of the document body.
    pub scroll: usize,
    /// Inner size of the document body at the last draw. Zero until then,
    /// which leaves lines unwrapped.
    pub body_width: u16,
    pub body_height: u16,
    body_layout: Option<BodyLayout>,
    /// Last action result shown in the footer.
    pub status: Option<String>,
    pub spinner_frame: usize,

    pub session: DocumentSession,
    pub external_viewer: Arc<ExternalViewer>,
    pub download_sink: FileSystemSink,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Constructs a new instance of [`App`] reading from the terminal.
    pub fn new(
        session: DocumentSession,
        external_viewer: Arc<ExternalViewer>,
        download_sink: FileSystemSink,
    ) -> Self {
        Self::with_events(session, external_viewer, download_sink, EventHandler::new())
    }

    pub fn with_events(
        session: DocumentSession,
        external_viewer: Arc<ExternalViewer>,
        download_sink: FileSystemSink,
        events: EventHandler,
    ) -> Self {
        Self {
            running: true,
            mode: InputMode::Normal,
            prompt_input: String::new(),
            scroll: 0,
            body_width: 0,
            body_height: 0,
            body_layout: None,
            status: None,
            spinner_frame: 0,
            session,
            external_viewer,
            download_sink,
            events,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                needs_redraw = false;
            }

            tokio::select! {
                event = self.events.next() => {
                    match event? {
                        Event::Tick => {
                            if self.is_loading() {
                                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                                needs_redraw = true;
                            }
                        }
                        Event::Crossterm(event) => match event {
                            crossterm::event::Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                                self.handle_key_events(key_event)?;
                                needs_redraw = true;
                            }
                            crossterm::event::Event::Resize(_, _) => needs_redraw = true,
                            _ => {}
                        },
                        Event::App(app_event) => {
                            self.handle_app_event(app_event);
                            needs_redraw = true;
                        }
                    }
                }
                Some(viewer_event) = self.session.next_event() => {
                    if self.session.handle_event(viewer_event) {
                        needs_redraw = true;
                    }
                }
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.events.send(AppEvent::Quit);
            return Ok(());
        }

        if self.mode == InputMode::Prompt {
            match key_event.code {
                KeyCode::Esc => self.events.send(AppEvent::CancelPrompt),
                KeyCode::Enter => {
                    let input = std::mem::take(&mut self.prompt_input);
                    self.events.send(AppEvent::Open(input));
                }
                KeyCode::Backspace => {
                    self.prompt_input.pop();
                }
                KeyCode::Char(ch) => self.prompt_input.push(ch),
                _ => {}
            }
            return Ok(());
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.events.send(AppEvent::Quit),
            KeyCode::Up | KeyCode::Char('k') => self.events.send(AppEvent::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => self.events.send(AppEvent::ScrollDown),
            KeyCode::PageUp => self.events.send(AppEvent::ScrollPageUp),
            KeyCode::PageDown => self.events.send(AppEvent::ScrollPageDown),
            KeyCode::Left | KeyCode::Char('h') => self.events.send(AppEvent::PreviousPage),
            KeyCode::Right | KeyCode::Char('l') => self.events.send(AppEvent::NextPage),
            KeyCode::Char('d') => self.events.send(AppEvent::Download),
            KeyCode::Char('o') => self.events.send(AppEvent::OpenExternal),
            KeyCode::Char('r') => self.events.send(AppEvent::Reload),
            KeyCode::Char('g') => self.events.send(AppEvent::BeginPrompt),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ScrollUp => self.scroll_up(1),
            AppEvent::ScrollDown => self.scroll_down(1),
            AppEvent::ScrollPageUp => self.scroll_up(PAGE_SCROLL),
            AppEvent::ScrollPageDown => self.scroll_down(PAGE_SCROLL),
            AppEvent::PreviousPage => self.turn_page(false),
            AppEvent::NextPage => self.turn_page(true),
            AppEvent::Open(input) => self.open(&input),
            AppEvent::Reload => {
                if self.session.reload().is_some() {
                    self.scroll = 0;
                    self.status = None;
                }
            }
            AppEvent::Download => self.download(),
            AppEvent::OpenExternal => self.open_external(),
            AppEvent::BeginPrompt => {
                self.prompt_input.clear();
                self.mode = InputMode::Prompt;
            }
            AppEvent::CancelPrompt => {
                self.prompt_input.clear();
                self.mode = InputMode::Normal;
            }
            AppEvent::Status(message) => self.status = Some(message),
            AppEvent::Quit => self.quit(),
        }
    }

    /// Start loading `input` as the current document.
    pub fn open(&mut self, input: &str) {
        self.mode = InputMode::Normal;
        match DocumentIdentifier::new(input.trim()) {
            Ok(identifier) => {
                self.session.open(identifier);
                self.scroll = 0;
                self.status = None;
            }
            Err(e) => {
                warn!("Rejected identifier {:?}: {}", input, e);
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.session.state().load_phase(), LoadPhase::Loading)
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Terminal rows of the current document at [`Self::body_width`].
    pub fn body_rows(&mut self) -> &[Line<'static>] {
        let state = self.session.state();
        let generation = state.generation();
        let width = self.body_width;
        let fresh = matches!(
            &self.body_layout,
            Some(layout) if layout.generation == generation && layout.width == width
        );
        if !fresh {
            self.body_layout = state.rendered().map(|document| BodyLayout {
                generation,
                width,
                rows: document.body_rows(usize::from(width)),
            });
        }
        self.body_layout
            .as_ref()
            .map(|layout| layout.rows.as_slice())
            .unwrap_or(&[])
    }

    /// Scrollable extent of the current document.
    pub fn content_len(&mut self) -> usize {
        match self.session.state().rendered() {
            Some(RenderedDocument::Table(table)) => table.row_count(),
            Some(_) => self.body_rows().len(),
            None => 0,
        }
    }

    /// Largest scroll offset that still fills the body.
    pub fn max_scroll(&mut self) -> usize {
        let visible = usize::from(self.body_height).max(1);
        self.content_len().saturating_sub(visible)
    }

    fn scroll_up(&mut self, by: usize) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    fn scroll_down(&mut self, by: usize) {
        let max = self.max_scroll();
        self.scroll = (self.scroll + by).min(max);
    }

    fn turn_page(&mut self, forward: bool) {
        let width = usize::from(self.body_width);
        let Some(RenderedDocument::Paginated(document)) = self.session.state_mut().rendered_mut() else {
            return;
        };
        let moved = if forward {
            document.next_page()
        } else {
            document.prev_page()
        };
        if moved {
            self.scroll = document.page_start_row(document.current_page, width);
        }
    }

    fn download(&mut self) {
        self.status = match self.session.prepare_download() {
            Ok(None) => None,
            Ok(Some(request)) => match self.download_sink.save(&request) {
                Ok(path) => Some(format!("Saved {}", path.display())),
                Err(e) => {
                    error!("Download of {} failed: {}", request.file_name, e);
                    Some(format!("Download failed: {}", e))
                }
            },
            Err(e) => Some(format!("Download failed: {}", e)),
        };
    }

    fn open_external(&mut self) {
        let state = self.session.state();
        let (Some(identifier), Some(document)) = (state.identifier(), state.rendered()) else {
            self.status = Some("Nothing to open yet".to_string());
            return;
        };

        let title = identifier.to_string();
        let document = document.clone();
        let viewer = self.external_viewer.clone();
        let sender = self.events.sender();
        self.status = Some("Opening in browser...".to_string());

        tokio::spawn(async move {
            let message = match viewer.show_document_external(&title, &document).await {
                Ok(path) => {
                    info!("External view of {} at {}", title, path.display());
                    format!("Opened {} in browser", title)
                }
                Err(e) => {
                    error!("Failed to launch external viewer: {}", e);
                    format!("Browser: {}", e)
                }
            };
            let _ = sender.send(Event::App(AppEvent::Status(message)));
        });
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
