use std::path::Path;

use crate::error::Result;
use crate::quote::QuoteSheet;

pub mod csv_writer;
pub mod reader;
pub mod xlsx_writer;

pub use csv_writer::CsvWorkbookWriter;
pub use reader::read_source_rows;
pub use xlsx_writer::XlsxWorkbookWriter;

/// Narrow seam over whatever library persists quote sheets.
pub trait WorkbookWriter {
    /// Write `sheet` to `path`, creating or truncating the file.
    fn write_sheet(&mut self, path: &Path, sheet: &QuoteSheet) -> Result<()>;
}

/// Quote file formats a writer exists for, keyed by output extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub const SUPPORTED: &'static [&'static str] = &["xlsx", "csv"];

    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.trim();
        if extension.eq_ignore_ascii_case("xlsx") {
            Some(Self::Xlsx)
        } else if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }
}
