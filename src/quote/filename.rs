use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// `<date>_<lot>_<LINE>_<PROCESS>_<INVENTORY>(<TOOL>).xlsx`, date and lot left opaque.
const QUOTE_FILENAME_PATTERN: &str =
    r"^[^_]+_[^_]+_([^_]+)_([^_]+)_([^_()]+)\(([^_()]+)\)\.xlsx";

fn quote_filename_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(QUOTE_FILENAME_PATTERN).expect("quote filename pattern compiles"))
}

/// Fields carried by a source workbook's filename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteFilename {
    pub line: String,
    pub process: String,
    pub inventory: String,
    pub tool: String,
}

impl QuoteFilename {
    pub fn as_tuple(&self) -> (&str, &str, &str, &str) {
        (&self.line, &self.process, &self.inventory, &self.tool)
    }

    pub fn into_tuple(self) -> (String, String, String, String) {
        (self.line, self.process, self.inventory, self.tool)
    }

    /// `LINE_PROC_INV(TOOL)`, the part of the convention that survives into output names.
    pub fn output_stem(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QuoteFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}({})",
            self.line, self.process, self.inventory, self.tool
        )
    }
}

/// Parse a file name following the quote naming convention.
///
/// Returns `None` unless the name decomposes uniquely: five underscore-separated
/// segments, the last one holding exactly one `(TOOL)` group right before `.xlsx`.
/// Anything after the extension is ignored.
pub fn parse_quote_filename(filename: &str) -> Option<QuoteFilename> {
    let caps = quote_filename_regex().captures(filename)?;

    let field = |idx: usize| -> Option<String> {
        let value = caps.get(idx)?.as_str().trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    };

    Some(QuoteFilename {
        line: field(1)?,
        process: field(2)?,
        inventory: field(3)?,
        tool: field(4)?,
    })
}
