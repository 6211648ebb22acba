use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{prelude::*, widgets::*};

use crate::error::Result;
use crate::quote::parse_quote_filename;
use crate::ui::components::utils::{column_width, split_vertical, wrap_step};
use crate::ui::styles::{hint_line, accent_bold};
use crate::ui::{TerminalGuard, UiRoute};
use crate::utils::{format_file_modified, list_xlsx_files, FileEntry};

const COLUMNS: [&str; 6] = ["File", "Line", "Process", "Inventory", "Tool", "Modified"];
const UNPARSED: &str = "—";

/// Display cells for one source file; unparsable names keep their row with dashes.
fn picker_row(entry: &FileEntry) -> [String; 6] {
    let modified = format_file_modified(entry.modified);
    match parse_quote_filename(&entry.name) {
        Some(descriptor) => [
            entry.name.clone(),
            descriptor.line,
            descriptor.process,
            descriptor.inventory,
            descriptor.tool,
            modified,
        ],
        None => [
            entry.name.clone(),
            UNPARSED.to_string(),
            UNPARSED.to_string(),
            UNPARSED.to_string(),
            UNPARSED.to_string(),
            modified,
        ],
    }
}

/// Let the operator choose a source workbook from `dir`; `None` when cancelled or empty.
pub fn run_source_picker(dir: &Path) -> Result<Option<PathBuf>> {
    // Protect terminal state while the picker owns the screen.
    let mut guard = TerminalGuard::new()?;

    let files = list_xlsx_files(dir);
    if files.is_empty() {
        guard.draw(|f| {
            let size = f.size();
            let block = Paragraph::new(hint_line(format!(
                "No .xlsx files in {}. Copy source workbooks there first.",
                dir.display()
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(UiRoute::SourcePicker.title()),
            );
            f.render_widget(block, size);
        })?;
        std::thread::sleep(Duration::from_millis(1200));
        return guard.finish(None);
    }

    let rows: Vec<[String; 6]> = files.iter().map(picker_row).collect();
    let widths: Vec<Constraint> = COLUMNS
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            Constraint::Length(column_width(header, rows.iter().map(|row| row[idx].as_str())))
        })
        .collect();
    let title = format!(
        "{} — {} ({} files)",
        UiRoute::SourcePicker.title(),
        dir.display(),
        files.len()
    );

    let mut selected = 0usize;
    loop {
        guard.draw(|f| {
            let size = f.size();
            let chunks = split_vertical(size, &[Constraint::Min(3), Constraint::Length(1)]);

            let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
                .style(Style::default().add_modifier(Modifier::BOLD));
            let table_rows: Vec<Row> = rows
                .iter()
                .enumerate()
                .map(|(i, cells)| {
                    let row = Row::new(cells.iter().map(|c| Cell::from(c.as_str())));
                    if i == selected {
                        row.style(accent_bold())
                    } else {
                        row
                    }
                })
                .collect();
            let table = Table::new(table_rows, widths.iter().copied())
                .header(header)
                .block(Block::default().borders(Borders::ALL).title(title.as_str()))
                .column_spacing(2);
            f.render_widget(table, chunks[0]);

            let help = Paragraph::new(hint_line(
                "↑/↓ or j/k move • Enter select • Esc cancel",
            ));
            f.render_widget(help, chunks[1]);
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match k.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        selected = wrap_step(selected, files.len(), false);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        selected = wrap_step(selected, files.len(), true);
                    }
                    KeyCode::Enter => {
                        return guard.finish(Some(files[selected].path.clone()));
                    }
                    KeyCode::Esc => {
                        return guard.finish(None);
                    }
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        return guard.finish(None);
                    }
                    _ => {}
                }
            }
        }
    }
}
