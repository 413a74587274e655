use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::style;

use super::UiComponent;

impl UiComponent {
    /// Footer line; errors are flagged and drawn in the error color.
    pub fn status(text: String, is_error: bool) -> Paragraph<'static> {
        let (marker, color) = if is_error { ("✗ ", style::ERROR) } else { ("", style::STATUS) };

        Paragraph::new(Line::from(vec![Span::raw(marker), Span::raw(text)]))
            .block(Block::default().borders(Borders::ALL).border_style(color))
            .style(color)
            .alignment(Alignment::Center)
    }
}
