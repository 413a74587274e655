use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::document::{LoadPhase, RenderPhase};
use crate::ui::{
    components::UiComponent,
    document::content::RenderedDocument,
    screens::document::sheet::render_sheet,
    style,
};

pub fn render_body(app: &mut App, area: Rect, buf: &mut Buffer) {
    let state = app.session.state();

    match state.load_phase() {
        LoadPhase::Idle => {
            UiComponent::empty_message("No document open. Press [g] to open one.", None)
                .render(area, buf);
        }
        LoadPhase::Loading => {
            UiComponent::empty_message(format!("{} Loading…", app.spinner()), Some(" Loading "))
                .render(area, buf);
        }
        LoadPhase::Failed(reason) => {
            let identifier = state.identifier().map(|id| id.to_string()).unwrap_or_default();
            Paragraph::new(vec![
                Line::styled(format!("Failed to load {}", identifier), style::error_style()),
                Line::raw(""),
                Line::raw(reason.clone()),
            ])
            .block(Block::bordered().border_type(BorderType::Rounded).border_style(style::ERROR))
            .wrap(Wrap { trim: false })
            .render(area, buf);
        }
        LoadPhase::Loaded(_) => match state.render_phase() {
            RenderPhase::Pending => {
                UiComponent::empty_message(format!("{} Rendering…", app.spinner()), Some(" Rendering "))
                    .render(area, buf);
            }
            // the footer carries the reason
            RenderPhase::Failed(_) => {
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style::ERROR)
                    .render(area, buf);
            }
            RenderPhase::Ready(_) => render_rendered(app, area, buf),
        },
    }
}

/// Draws the visible slice of the document. Rows are wrapped by the app at
/// the body width so the scroll offset is a row index with no upper limit.
fn render_rendered(app: &mut App, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(style::BORDER);
    let inner = block.inner(area);
    app.body_width = inner.width;
    app.body_height = inner.height;
    app.scroll = app.scroll.min(app.max_scroll());

    if let Some(RenderedDocument::Table(table)) = app.session.state().rendered() {
        render_sheet(table, app.scroll, block, area, buf);
        return;
    }

    let scroll = app.scroll;
    let visible: Vec<Line<'static>> = app
        .body_rows()
        .iter()
        .skip(scroll)
        .take(usize::from(inner.height))
        .cloned()
        .collect();
    Paragraph::new(visible).block(block).render(area, buf);
}
