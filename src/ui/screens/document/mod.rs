use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::document::RenderPhase;
use crate::ui::{
    components::UiComponent,
    document::content::RenderedDocument,
    style,
};

pub mod body;
pub mod prompt;
pub mod sheet;

pub use prompt::render_prompt;

const KEY_HINTS: &str = "[d] Download  [o] Browser  [r] Reload  [g] Open  [q] Quit";

pub fn render_document(app: &mut App, area: Rect, buf: &mut Buffer) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(app, main_layout[0], buf);
    body::render_body(app, main_layout[1], buf);
    render_footer(app, main_layout[2], buf);
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let state = app.session.state();
    let mut spans = Vec::new();
    match (state.identifier(), state.category()) {
        (Some(identifier), Some(category)) => {
            spans.push(Span::styled(identifier.to_string(), style::title_style()));
            spans.push(Span::styled(format!("  ({})", category), style::hint_style()));
        }
        _ => spans.push(Span::styled("no document", style::hint_style())),
    }
    spans.push(Span::raw("   "));
    spans.push(Span::styled(KEY_HINTS, style::hint_style()));

    Paragraph::new(Line::from(spans))
        .block(
            Block::bordered()
                .title(" docview ")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded)
                .border_style(style::BORDER),
        )
        .render(area, buf);
}

/// Page position, render failure and the last action, whichever apply.
fn footer_text(app: &App) -> Option<(String, bool)> {
    let state = app.session.state();
    let mut parts = Vec::new();
    let mut is_error = false;

    if let Some(RenderedDocument::Paginated(document)) = state.rendered() {
        parts.push(document.footer());
    }
    if let RenderPhase::Failed(reason) = state.render_phase() {
        parts.push(format!("Could not render document: {}", reason));
        is_error = true;
    }
    if let Some(status) = &app.status {
        parts.push(status.clone());
    }

    if parts.is_empty() {
        None
    } else {
        Some((parts.join("  |  "), is_error))
    }
}

fn render_footer(app: &App, area: Rect, buf: &mut Buffer) {
    match footer_text(app) {
        Some((text, is_error)) => UiComponent::status(text, is_error).render(area, buf),
        None => UiComponent::help(" Keys ", &[
            ("↑↓ jk", "Scroll"),
            ("←→ hl", "Page"),
            ("PgUp/PgDn", "Jump"),
        ])
        .render(area, buf),
    }
}
