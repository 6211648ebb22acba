use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::ui::styles::{hint_line, ACCENT};
use crate::ui::{
    components::utils::{centered_rect, split_vertical},
    TerminalGuard, UiRoute,
};
use crate::utils::sanitize_filename_part;

/// Prompt for the customer label, pre-filled with `current`.
///
/// Any text is accepted; the preview shows how it will appear in the file name.
pub fn run_customer_prompt(current: &str) -> Result<Option<String>> {
    let mut guard = TerminalGuard::new()?;
    let mut buffer = current.to_string();

    loop {
        guard.draw(|f| {
            let size = f.size();
            let area = centered_rect(60, 40, size);
            f.render_widget(Clear, area);

            let block = Block::default().borders(Borders::ALL).title(format!(
                "{} — Enter customer label",
                UiRoute::CustomerPrompt.title()
            ));
            f.render_widget(block.clone(), area);
            let inner = block.inner(area);

            let chunks = split_vertical(
                inner,
                &[
                    Constraint::Length(2),
                    Constraint::Length(3),
                    Constraint::Length(2),
                    Constraint::Min(1),
                ],
            );

            let instructions = Paragraph::new(hint_line(
                "Characters < > : \" | ? * / \\ become '_' in the file name",
            ));
            f.render_widget(instructions, chunks[0]);

            let mut display = buffer.clone();
            display.push('_');
            let input = Paragraph::new(display)
                .style(Style::default().fg(ACCENT))
                .block(Block::default().borders(Borders::ALL).title("Customer"));
            f.render_widget(input, chunks[1]);

            let preview = Paragraph::new(hint_line(format!(
                "File name part: {}",
                sanitize_filename_part(Some(buffer.trim()))
            )));
            f.render_widget(preview, chunks[2]);

            let message = Paragraph::new(hint_line(
                "Enter to confirm • Esc to cancel • Backspace delete",
            ));
            f.render_widget(message, chunks[3]);
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc => {
                        return guard.finish(None);
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return guard.finish(None);
                    }
                    KeyCode::Enter => {
                        return guard.finish(Some(buffer.trim().to_string()));
                    }
                    KeyCode::Backspace => {
                        buffer.pop();
                    }
                    KeyCode::Char(ch) if !ch.is_control() => {
                        buffer.push(ch);
                    }
                    _ => {}
                }
            }
        }
    }
}
