use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::ui::styles::{hint_line, ACCENT, WARNING};
use crate::ui::{
    components::utils::{centered_rect, split_vertical},
    TerminalGuard, UiRoute,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

/// Show a modal message until any key is pressed.
pub fn run_notice(kind: NoticeKind, message: &str) -> Result<()> {
    let mut guard = TerminalGuard::new()?;
    let (title, color) = match kind {
        NoticeKind::Info => (UiRoute::Notice.title(), ACCENT),
        NoticeKind::Warning => ("Warning", WARNING),
    };

    loop {
        guard.draw(|f| {
            let area = centered_rect(70, 40, f.size());
            f.render_widget(Clear, area);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title);
            f.render_widget(block.clone(), area);

            let chunks = split_vertical(block.inner(area), &[Constraint::Min(1), Constraint::Length(1)]);
            let body = Paragraph::new(message)
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: false });
            f.render_widget(body, chunks[0]);
            f.render_widget(
                Paragraph::new(hint_line("Press any key to continue")),
                chunks[1],
            );
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return guard.finish(());
                }
            }
        }
    }
}
