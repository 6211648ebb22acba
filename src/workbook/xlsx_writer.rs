use std::path::Path;

use log::debug;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

use crate::error::{AppError, Result};
use crate::quote::QuoteSheet;

use super::WorkbookWriter;

/// Name of the single worksheet in generated quotes.
pub const QUOTE_SHEET_NAME: &str = "Quote";

const MAX_COLUMN_WIDTH: usize = 60;

/// Writes quote sheets as `.xlsx`: bold title, metadata pairs, a blank spacer,
/// then the item table under a bold header row.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxWorkbookWriter;

impl XlsxWorkbookWriter {
    pub fn new() -> Self {
        Self
    }
}

impl WorkbookWriter for XlsxWorkbookWriter {
    fn write_sheet(&mut self, path: &Path, sheet: &QuoteSheet) -> Result<()> {
        let bold = Format::new().set_bold();
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(QUOTE_SHEET_NAME)?;

        worksheet.write_string_with_format(0, 0, sheet.title.as_str(), &bold)?;

        let mut row = 1usize;
        for (label, value) in &sheet.metadata {
            let at = row_num(row)?;
            worksheet.write_string_with_format(at, 0, label.as_str(), &bold)?;
            worksheet.write_string(at, 1, value.as_str())?;
            row += 1;
        }

        // one blank spacer row between the metadata block and the items
        row += 1;
        if !sheet.header.is_empty() {
            write_row(worksheet, row, &sheet.header, Some(&bold))?;
            row += 1;
        }
        for item in &sheet.items {
            write_row(worksheet, row, item, None)?;
            row += 1;
        }

        fit_columns(worksheet, sheet)?;

        workbook.save(path).map_err(|err| {
            AppError::message(format!(
                "Failed to save quote workbook {}: {}",
                path.display(),
                err
            ))
        })?;
        debug!(
            "wrote {} item rows to {}",
            sheet.item_count(),
            path.display()
        );
        Ok(())
    }
}

fn write_row(
    worksheet: &mut Worksheet,
    row: usize,
    cells: &[String],
    format: Option<&Format>,
) -> Result<()> {
    let at = row_num(row)?;
    for (col, value) in cells.iter().enumerate() {
        let col = col_num(col)?;
        match format {
            Some(format) => worksheet.write_string_with_format(at, col, value.as_str(), format)?,
            None => worksheet.write_string(at, col, value.as_str())?,
        };
    }
    Ok(())
}

/// Size each item column to its widest cell so the table reads without resizing.
fn fit_columns(worksheet: &mut Worksheet, sheet: &QuoteSheet) -> Result<()> {
    for col in 0..sheet.column_count() {
        let widest = sheet
            .items
            .iter()
            .chain(std::iter::once(&sheet.header))
            .filter_map(|row| row.get(col))
            .map(|cell| UnicodeWidthStr::width(cell.as_str()))
            .max()
            .unwrap_or(0);
        let width = (widest + 2).min(MAX_COLUMN_WIDTH) as u32;
        worksheet.set_column_width(col_num(col)?, width)?;
    }
    Ok(())
}

fn row_num(index: usize) -> Result<RowNum> {
    RowNum::try_from(index)
        .map_err(|_| AppError::message(format!("row {index} is out of range for a worksheet")))
}

fn col_num(index: usize) -> Result<ColNum> {
    ColNum::try_from(index)
        .map_err(|_| AppError::message(format!("column {index} is out of range for a worksheet")))
}
