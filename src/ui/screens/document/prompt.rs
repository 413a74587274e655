use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

use crate::app::App;
use crate::ui::style;

pub fn render_prompt(app: &App, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);

    Paragraph::new(vec![
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.prompt_input.as_str(), style::title_style()),
            Span::raw("█"),
        ]),
        Line::raw(""),
        Line::styled("Enter to open, Esc to cancel", style::hint_style()),
    ])
    .block(
        Block::bordered()
            .title(" Open document ")
            .border_type(BorderType::Rounded)
            .border_style(style::ACCENT),
    )
    .render(area, buf);
}
