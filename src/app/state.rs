use std::path::{Path, PathBuf};

use crate::quote::{parse_quote_filename, QuoteFilename};

/// A source workbook whose name parsed under the quote convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSource {
    pub path: PathBuf,
    pub name: String,
    pub descriptor: QuoteFilename,
}

/// Operator choices carried between UI flows.
#[derive(Debug, Default)]
pub struct SessionState {
    source: Option<SelectedSource>,
    customer: String,
    last_output: Option<PathBuf>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `path` as the quote source when its file name parses.
    ///
    /// A non-matching name leaves the previous selection in place and returns `None`.
    pub fn select_source(&mut self, path: PathBuf) -> Option<&SelectedSource> {
        let name = path.file_name()?.to_str()?.to_string();
        let descriptor = parse_quote_filename(&name)?;
        self.source = Some(SelectedSource {
            path,
            name,
            descriptor,
        });
        self.source.as_ref()
    }

    pub fn source(&self) -> Option<&SelectedSource> {
        self.source.as_ref()
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn set_customer(&mut self, customer: impl Into<String>) {
        self.customer = customer.into();
    }

    pub fn last_output(&self) -> Option<&Path> {
        self.last_output.as_deref()
    }

    pub fn set_last_output(&mut self, path: PathBuf) {
        self.last_output = Some(path);
    }
}
