use std::path::Path;

use log::debug;

use crate::error::{Context, Result};
use crate::quote::QuoteSheet;

use super::WorkbookWriter;

/// Writes quote sheets as CSV: title, metadata pairs, a blank spacer, then the item table.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvWorkbookWriter;

impl CsvWorkbookWriter {
    pub fn new() -> Self {
        Self
    }
}

impl WorkbookWriter for CsvWorkbookWriter {
    fn write_sheet(&mut self, path: &Path, sheet: &QuoteSheet) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to create quote file {}", path.display()))?;

        writer.write_record([sheet.title.as_str()])?;
        for (label, value) in &sheet.metadata {
            writer.write_record([label.as_str(), value.as_str()])?;
        }
        writer.write_record([""])?;

        let width = sheet.column_count();
        if !sheet.header.is_empty() {
            writer.write_record(pad_row(&sheet.header, width))?;
        }
        for item in &sheet.items {
            writer.write_record(pad_row(item, width))?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to flush quote file {}", path.display()))?;
        debug!(
            "wrote {} item rows to {}",
            sheet.item_count(),
            path.display()
        );
        Ok(())
    }
}

fn pad_row(row: &[String], width: usize) -> Vec<&str> {
    let mut cells: Vec<&str> = row.iter().map(String::as_str).collect();
    cells.resize(width.max(cells.len()), "");
    cells
}
