pub mod app;
pub mod config;
pub mod error;
pub mod quote;
pub mod ui;
pub mod utils;
pub mod workbook;

pub use error::{AppError, Result};
pub use quote::{parse_quote_filename, QuoteFilename};
pub use utils::{compute_base_dir, generate_unique_path, sanitize_filename_part};
