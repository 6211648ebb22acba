use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Context, Result};
use crate::utils::{generate_unique_path, sanitize_filename_part};
use crate::workbook::WorkbookWriter;

use super::filename::QuoteFilename;
use super::sheet::QuoteSheet;

/// Placeholder used in output names when no customer label was entered.
pub const UNNAMED_CUSTOMER: &str = "NONAME";

/// Everything needed to produce one quote file.
#[derive(Clone, Debug)]
pub struct QuoteRequest<'a> {
    pub source_name: &'a str,
    pub descriptor: &'a QuoteFilename,
    pub customer: &'a str,
    pub date_stamp: &'a str,
    pub created: &'a str,
    pub rows: Vec<Vec<String>>,
}

/// Names, assembles and writes quote sheets into an output directory.
pub struct QuoteBuilder<W: WorkbookWriter> {
    output_dir: PathBuf,
    extension: String,
    writer: W,
}

impl<W: WorkbookWriter> QuoteBuilder<W> {
    pub fn new(output_dir: impl Into<PathBuf>, extension: impl Into<String>, writer: W) -> Self {
        Self {
            output_dir: output_dir.into(),
            extension: extension.into(),
            writer,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// `{date}_{customer}_{LINE}_{PROC}_{INV}({TOOL})_quote.{ext}` with every part sanitized.
    pub fn output_name(&self, date_stamp: &str, customer: &str, descriptor: &QuoteFilename) -> String {
        let customer = customer.trim();
        let customer = if customer.is_empty() {
            UNNAMED_CUSTOMER
        } else {
            customer
        };

        format!(
            "{}_{}_{}_quote.{}",
            sanitize_filename_part(Some(date_stamp)),
            sanitize_filename_part(Some(customer)),
            sanitize_filename_part(Some(descriptor.output_stem().as_str())),
            sanitize_filename_part(Some(self.extension.as_str())),
        )
    }

    /// Write the quote described by `request` and return the path it landed on.
    pub fn build(&mut self, request: QuoteRequest<'_>) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.output_dir.display()
            )
        })?;

        let name = self.output_name(request.date_stamp, request.customer, request.descriptor);
        let path = generate_unique_path(&self.output_dir, &name)?;

        let sheet = assemble(
            request.source_name,
            request.descriptor,
            request.customer,
            request.created,
            request.rows,
        );
        self.writer.write_sheet(&path, &sheet)?;

        info!(
            "quote for {} written to {} ({} items)",
            request.descriptor,
            path.display(),
            sheet.item_count()
        );
        Ok(path)
    }
}

/// Combine filename metadata, operator input and source rows into a quote sheet.
///
/// The first source row is taken as the item header.
pub fn assemble(
    source_name: &str,
    descriptor: &QuoteFilename,
    customer: &str,
    created: &str,
    rows: Vec<Vec<String>>,
) -> QuoteSheet {
    let mut rows = rows.into_iter();
    let header = rows.next().unwrap_or_default();
    let items = rows.collect();

    let metadata = vec![
        ("Line".to_string(), descriptor.line.clone()),
        ("Process".to_string(), descriptor.process.clone()),
        ("Inventory".to_string(), descriptor.inventory.clone()),
        ("Tool".to_string(), descriptor.tool.clone()),
        ("Customer".to_string(), customer.trim().to_string()),
        ("Source".to_string(), source_name.to_string()),
        ("Created".to_string(), created.to_string()),
    ];

    QuoteSheet {
        title: format!("Quote {}", descriptor),
        metadata,
        header,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::quote::{parse_quote_filename, METADATA_LABELS};

    /// Records writes in memory instead of touching a spreadsheet library.
    #[derive(Default)]
    struct MemoryWorkbookWriter {
        written: Vec<(PathBuf, QuoteSheet)>,
        fail: bool,
    }

    impl WorkbookWriter for MemoryWorkbookWriter {
        fn write_sheet(&mut self, path: &Path, sheet: &QuoteSheet) -> Result<()> {
            if self.fail {
                return Err(AppError::message("disk full"));
            }
            self.written.push((path.to_path_buf(), sheet.clone()));
            Ok(())
        }
    }

    fn descriptor() -> QuoteFilename {
        parse_quote_filename("240101_LOT_LINE_PROC_INV(TOOL).xlsx").expect("descriptor")
    }

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["Item".to_string(), "Qty".to_string()],
            vec!["Bolt".to_string(), "4".to_string()],
            vec!["Nut".to_string(), "8".to_string()],
        ]
    }

    fn request<'a>(descriptor: &'a QuoteFilename, customer: &'a str) -> QuoteRequest<'a> {
        QuoteRequest {
            source_name: "240101_LOT_LINE_PROC_INV(TOOL).xlsx",
            descriptor,
            customer,
            date_stamp: "240102",
            created: "2024-01-02 09:30",
            rows: rows(),
        }
    }

    #[test]
    fn names_output_from_descriptor_and_customer() {
        let builder = QuoteBuilder::new("out", "csv", MemoryWorkbookWriter::default());
        let name = builder.output_name("240102", "ACME/East", &descriptor());
        assert_eq!(name, "240102_ACME_East_LINE_PROC_INV(TOOL)_quote.csv");
    }

    #[test]
    fn blank_customer_uses_placeholder() {
        let builder = QuoteBuilder::new("out", "csv", MemoryWorkbookWriter::default());
        let name = builder.output_name("240102", "   ", &descriptor());
        assert_eq!(name, "240102_NONAME_LINE_PROC_INV(TOOL)_quote.csv");
    }

    #[test]
    fn assembles_metadata_and_items() {
        let descriptor = descriptor();
        let sheet = assemble("source.xlsx", &descriptor, " ACME ", "now", rows());

        assert_eq!(sheet.title, "Quote LINE_PROC_INV(TOOL)");
        let labels: Vec<&str> = sheet.metadata.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(labels, METADATA_LABELS);
        assert_eq!(sheet.metadata_value("Customer"), Some("ACME"));
        assert_eq!(sheet.metadata_value("Tool"), Some("TOOL"));
        assert_eq!(sheet.header, vec!["Item".to_string(), "Qty".to_string()]);
        assert_eq!(sheet.item_count(), 2);
    }

    #[test]
    fn empty_source_gives_empty_table() {
        let sheet = assemble("source.xlsx", &descriptor(), "ACME", "now", Vec::new());
        assert!(sheet.header.is_empty());
        assert_eq!(sheet.item_count(), 0);
    }

    #[test]
    fn build_writes_through_writer_without_overwriting() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let out_dir = tmp.path().join("output");
        let descriptor = descriptor();
        let mut builder = QuoteBuilder::new(&out_dir, "csv", MemoryWorkbookWriter::default());

        let first = builder.build(request(&descriptor, "ACME")).expect("first build");
        assert!(out_dir.is_dir());
        assert!(first.ends_with("240102_ACME_LINE_PROC_INV(TOOL)_quote.csv"));
        std::fs::File::create(&first).expect("simulate written file");

        let second = builder.build(request(&descriptor, "ACME")).expect("second build");
        assert!(second.ends_with("240102_ACME_LINE_PROC_INV(TOOL)_quote_1.csv"));

        let written = &builder.writer().written;
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].0, first);
        assert_eq!(written[1].1.metadata_value("Source"), Some("240101_LOT_LINE_PROC_INV(TOOL).xlsx"));
    }

    #[test]
    fn writer_errors_propagate() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let descriptor = descriptor();
        let writer = MemoryWorkbookWriter {
            fail: true,
            ..Default::default()
        };
        let mut builder = QuoteBuilder::new(tmp.path(), "csv", writer);

        let err = builder
            .build(request(&descriptor, "ACME"))
            .expect_err("writer failure surfaces");
        assert_eq!(err.to_string(), "disk full");
    }
}
