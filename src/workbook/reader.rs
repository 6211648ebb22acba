use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{AppError, Context, Result};

/// Read the rows of a source workbook as trimmed text.
///
/// Uses `sheet_name` when given, otherwise the first sheet. Trailing rows with
/// no content are dropped.
pub fn read_source_rows(path: &Path, sheet_name: Option<&str>) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open source workbook {}", path.display()))?;

    let sheet = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook.sheet_names().into_iter().next().ok_or_else(|| {
            AppError::message(format!("Workbook {} has no sheets", path.display()))
        })?,
    };

    let range = match workbook.worksheet_range(&sheet) {
        Ok(range) => range,
        Err(err) => {
            return Err(AppError::message(format!(
                "Sheet `{}` not readable in {}: {}",
                sheet,
                path.display(),
                err
            )))
        }
    };

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>())
        .collect();
    Ok(trim_trailing_empty_rows(rows))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(value) => value.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn trim_trailing_empty_rows(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    while rows
        .last()
        .map(|row| row.iter().all(|cell| cell.is_empty()))
        .unwrap_or(false)
    {
        rows.pop();
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::path::PathBuf;

    /// Two-sheet source workbook: `Cover` first, then `Items` ending in blank-looking rows.
    fn write_fixture(dir: &Path) -> PathBuf {
        let path = dir.join("240101_LOT_LINE_PROC_INV(TOOL).xlsx");
        let mut workbook = Workbook::new();

        let cover = workbook.add_worksheet();
        cover.set_name("Cover").expect("name cover");
        cover.write_string(0, 0, "Source for LINE").expect("cover cell");

        let items = workbook.add_worksheet();
        items.set_name("Items").expect("name items");
        items.write_string(0, 0, "Item").expect("cell");
        items.write_string(0, 1, "Qty").expect("cell");
        items.write_string(1, 0, " Bolt ").expect("cell");
        items.write_number(1, 1, 4).expect("cell");
        items.write_string(2, 0, "Nut").expect("cell");
        items.write_number(2, 1, 2.5).expect("cell");
        items.write_string(3, 0, "   ").expect("cell");
        items.write_string(4, 1, "").expect("cell");

        workbook.save(&path).expect("save fixture");
        path
    }

    #[test]
    fn reads_first_sheet_by_default() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(tmp.path());

        let rows = read_source_rows(&path, None).expect("read default sheet");
        assert_eq!(rows, vec![vec!["Source for LINE".to_string()]]);
    }

    #[test]
    fn reads_named_sheet_and_drops_trailing_blank_rows() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(tmp.path());

        let rows = read_source_rows(&path, Some("Items")).expect("read named sheet");
        assert_eq!(
            rows,
            vec![
                vec!["Item".to_string(), "Qty".to_string()],
                vec!["Bolt".to_string(), "4".to_string()],
                vec!["Nut".to_string(), "2.5".to_string()],
            ]
        );
    }

    #[test]
    fn missing_sheet_is_a_message_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(tmp.path());

        let err = read_source_rows(&path, Some("Prices")).expect_err("sheet should be missing");
        assert!(matches!(err, AppError::Message(_)), "unexpected error: {err:?}");
        assert!(
            err.to_string().contains("Sheet `Prices`"),
            "unexpected error message: {err}"
        );
    }

    #[test]
    fn converts_cells_to_text() {
        assert_eq!(cell_to_string(&Data::String("  Bolt ".to_string())), "Bolt");
        assert_eq!(cell_to_string(&Data::Float(12.0)), "12");
        assert_eq!(cell_to_string(&Data::Float(12.5)), "12.5");
        assert_eq!(cell_to_string(&Data::Int(-3)), "-3");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn drops_only_trailing_blank_rows() {
        let rows = vec![
            vec!["Item".to_string(), "Qty".to_string()],
            vec![String::new(), String::new()],
            vec!["Bolt".to_string(), "4".to_string()],
            vec![String::new()],
            vec![],
        ];
        let trimmed = trim_trailing_empty_rows(rows);
        assert_eq!(trimmed.len(), 3);
        assert_eq!(trimmed[2], vec!["Bolt".to_string(), "4".to_string()]);
    }

    #[test]
    fn missing_workbook_is_reported() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("240101_LOT_LINE_PROC_INV(TOOL).xlsx");

        let err = read_source_rows(&path, None).expect_err("missing file should fail");
        assert!(
            err.to_string().contains("Failed to open source workbook"),
            "unexpected error message: {err}"
        );
    }
}
