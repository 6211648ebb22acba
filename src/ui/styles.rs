use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Orange used for titles, the input field and the highlighted row.
pub const ACCENT: Color = Color::Indexed(208);
pub const WARNING: Color = Color::Yellow;

/// Bold accent shared by screen titles and the selected menu or picker row.
pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn title_text(text: impl Into<String>) -> Text<'static> {
    Text::styled(text.into(), accent_bold())
}

/// Dimmed span for descriptions and key hints.
pub fn hint_span(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().add_modifier(Modifier::DIM))
}

pub fn hint_line(text: impl Into<String>) -> Line<'static> {
    Line::from(hint_span(text))
}
