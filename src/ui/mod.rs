pub mod components;
pub mod document;
pub mod screens;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::Widget,
};
use crate::app::{App, InputMode};
use crate::ui::screens::document::{render_document, render_prompt};

/// Rows taken by the open-document prompt.
const PROMPT_HEIGHT: u16 = 5;

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_document(self, area, buf);
        if self.mode == InputMode::Prompt {
            render_prompt(self, centered_rect(60, PROMPT_HEIGHT, area), buf);
        }
    }
}

/// `percent_x` of the width, `height` rows, centered in `r`.
pub(crate) fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = centered_rect(50, 4, Rect::new(0, 0, 100, 20));
        assert_eq!(area, Rect::new(25, 8, 50, 4));
    }
}
