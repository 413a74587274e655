use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::UiComponent;

impl UiComponent {
    /// Key hints, one `[key] action` pair per entry.
    pub fn help<'a>(title: &'a str, hints: &[(&'a str, &'a str)]) -> Paragraph<'a> {
        let text = hints
            .iter()
            .map(|(key, action)| format!("[{}] {}", key, action))
            .collect::<Vec<_>>()
            .join("  ");

        Paragraph::new(Line::from(text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(title)
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
    }
}
