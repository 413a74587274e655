use ratatui::style::{Color, Style, Stylize};

pub const ACCENT: Color = Color::Cyan;
pub const BORDER: Color = Color::DarkGray;
pub const ERROR: Color = Color::Red;
pub const STATUS: Color = Color::Yellow;

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).bold()
}

pub fn hint_style() -> Style {
    Style::default().dim().italic()
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

/// Every other sheet row is dimmed to keep wide tables readable.
pub fn striped_row(index: usize) -> Style {
    if index % 2 == 0 { Style::default() } else { Style::default().dim() }
}
