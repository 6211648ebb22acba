use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::prelude::Stylize;
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::quote::QuoteFilename;
use crate::ui::styles::{title_text, hint_line, hint_span, accent_bold};
use crate::ui::{
    components::utils::{split_vertical, wrap_step},
    MenuAction, TerminalGuard, UiRoute,
};

/// Session details echoed in the main menu header.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuSummary<'a> {
    pub source: Option<&'a str>,
    pub descriptor: Option<&'a QuoteFilename>,
    pub customer: &'a str,
    pub last_output: Option<&'a Path>,
}

impl MenuSummary<'_> {
    fn header_lines(&self) -> String {
        let source = self.source.unwrap_or("None");
        let fields = match self.descriptor {
            Some(descriptor) => format!(
                "Line {} • Process {} • Inventory {} • Tool {}",
                descriptor.line, descriptor.process, descriptor.inventory, descriptor.tool
            ),
            None => "No quote fields parsed".to_string(),
        };
        let customer = if self.customer.trim().is_empty() {
            "None"
        } else {
            self.customer
        };
        format!(
            "Quote Builder — {}\nSource: {}\n{}\nCustomer: {}",
            UiRoute::MainMenu.title(),
            source,
            fields,
            customer
        )
    }
}

pub fn run_main_menu(summary: MenuSummary<'_>) -> Result<MenuAction> {
    // Ensure raw mode and the alternate screen are always restored regardless of how we exit.
    let mut guard = TerminalGuard::new()?;

    let items: Vec<(&str, &str, MenuAction)> = vec![
        (
            UiRoute::SourcePicker.title(),
            "Choose a source workbook from the input folder",
            MenuAction::PickSource,
        ),
        (
            UiRoute::CustomerPrompt.title(),
            "Set the customer label used in the quote name",
            MenuAction::EditCustomer,
        ),
        (
            UiRoute::BuildQuote.title(),
            "Write a quote file for the selected source",
            MenuAction::BuildQuote,
        ),
        ("Quit", "Exit Quote Builder", MenuAction::Exit),
    ];
    let mut selected = 0usize;
    let header_content = summary.header_lines();
    let footer = match summary.last_output {
        Some(path) => format!("Last quote: {}", path.display()),
        None => "↑/↓ or j/k navigate • Enter select • Esc quit • Ctrl+C exit".to_string(),
    };

    loop {
        guard.draw(|f| {
            let size = f.size();
            let chunks = split_vertical(
                size,
                &[
                    Constraint::Length(4),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ],
            );

            let header = Paragraph::new(title_text(header_content.as_str()));
            f.render_widget(header, chunks[0]);

            let list_items: Vec<ListItem> = items
                .iter()
                .enumerate()
                .map(|(i, (label, description, _))| {
                    let line: Line = vec![
                        Span::from(format!("{:<18}", label)).bold(),
                        "  ".into(),
                        hint_span(*description),
                    ]
                    .into();
                    let item = ListItem::new(line);
                    if i == selected {
                        item.style(accent_bold())
                    } else {
                        item
                    }
                })
                .collect();
            let list = List::new(list_items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(UiRoute::MainMenu.title()),
            );
            f.render_widget(list, chunks[1]);

            f.render_widget(Paragraph::new(hint_line(footer.as_str())), chunks[2]);
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match k.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        selected = wrap_step(selected, items.len(), false);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        selected = wrap_step(selected, items.len(), true);
                    }
                    KeyCode::Enter => {
                        let action = items[selected].2;
                        return guard.finish(action);
                    }
                    KeyCode::Esc => {
                        return guard.finish(MenuAction::Exit);
                    }
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        return guard.finish(MenuAction::Exit);
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::parse_quote_filename;

    #[test]
    fn header_lists_parsed_fields_and_customer() {
        let descriptor =
            parse_quote_filename("240101_LOT_LINE_PROC_INV(TOOL).xlsx").expect("descriptor");
        let summary = MenuSummary {
            source: Some("240101_LOT_LINE_PROC_INV(TOOL).xlsx"),
            descriptor: Some(&descriptor),
            customer: "ACME",
            last_output: None,
        };

        let header = summary.header_lines();
        assert!(header.contains("Source: 240101_LOT_LINE_PROC_INV(TOOL).xlsx"));
        assert!(header.contains("Inventory INV • Tool TOOL"));
        assert!(header.ends_with("Customer: ACME"));
    }

    #[test]
    fn empty_session_header() {
        let header = MenuSummary::default().header_lines();
        assert!(header.contains("Source: None"));
        assert!(header.contains("No quote fields parsed"));
        assert!(header.ends_with("Customer: None"));
    }
}
