use ratatui::{
    layout::Alignment,
    text::Text,
    widgets::{Block, BorderType, Padding, Paragraph, Wrap},
};

use crate::ui::style;

use super::UiComponent;

impl UiComponent {
    /// Placeholder for a document body with nothing to show yet.
    pub fn empty_message<'a>(text: impl Into<Text<'a>>, title: Option<&'a str>) -> Paragraph<'a> {
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style::BORDER)
            .padding(Padding::top(1));
        if let Some(title) = title {
            block = block.title(title);
        }

        Paragraph::new(text)
            .block(block)
            .style(style::hint_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}
