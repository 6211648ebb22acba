use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::utils::resolve_against_base;

pub mod loader;
pub mod validator;

pub use loader::{load_config, load_config_from, CONFIG_FILE_NAME};

/// Operator-tunable settings, read from `quote_builder.json` next to the executable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Folder scanned for source workbooks.
    pub input_dir: PathBuf,
    /// Folder receiving generated quotes.
    pub output_dir: PathBuf,
    /// Sheet copied from each source workbook; the first sheet when unset.
    pub sheet_name: Option<String>,
    /// `xlsx` or `csv`; also selects the writer.
    pub output_extension: String,
    /// `chrono` format for the date segment of output names.
    pub date_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("quotes"),
            output_dir: PathBuf::from("output"),
            sheet_name: None,
            output_extension: "xlsx".to_string(),
            date_format: "%y%m%d".to_string(),
        }
    }
}

impl AppConfig {
    pub fn input_dir(&self) -> PathBuf {
        resolve_against_base(&self.input_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        resolve_against_base(&self.output_dir)
    }

    pub fn sheet_name(&self) -> Option<&str> {
        self.sheet_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
