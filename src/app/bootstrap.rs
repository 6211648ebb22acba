use log::debug;

use crate::app::controller::AppController;
use crate::config::load_config;
use crate::error::{AppError, Result};
use crate::workbook::{CsvWorkbookWriter, OutputFormat, XlsxWorkbookWriter};

/// Entry point used by `main` to bootstrap the controller stack.
pub fn run() -> Result<()> {
    let config = load_config()?;
    let format = OutputFormat::from_extension(&config.output_extension).ok_or_else(|| {
        AppError::message(format!(
            "no writer for output extension `{}`",
            config.output_extension
        ))
    })?;
    debug!("writing quotes as {format:?}");

    match format {
        OutputFormat::Xlsx => AppController::new(config, XlsxWorkbookWriter::new())?.run(),
        OutputFormat::Csv => AppController::new(config, CsvWorkbookWriter::new())?.run(),
    }
}
