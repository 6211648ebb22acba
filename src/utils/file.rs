use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;

/// Metadata for a file entry surfaced to the UI pickers.
#[derive(Clone, Debug)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// List files in `dir` whose extension matches `extension` (case-insensitive), newest first.
///
/// Unreadable directories and entries are skipped rather than reported.
pub fn list_files_with_extension(dir: impl AsRef<Path>, extension: &str) -> Vec<FileEntry> {
    let mut entries = Vec::new();
    let dir_path = dir.as_ref();

    if let Ok(read_dir) = fs::read_dir(dir_path) {
        for entry in read_dir.flatten() {
            let path = entry.path();
            let matches = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(extension))
                .unwrap_or(false);
            if !matches {
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(meta) if meta.is_file() => meta,
                _ => continue,
            };

            let modified = metadata.modified().unwrap_or(UNIX_EPOCH);
            let Some(name) = path
                .file_name()
                .and_then(|segment| segment.to_str())
                .map(|s| s.to_string())
            else {
                continue;
            };

            entries.push(FileEntry {
                name,
                path,
                modified,
            });
        }
    }

    entries.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));
    entries
}

pub fn list_xlsx_files(dir: impl AsRef<Path>) -> Vec<FileEntry> {
    list_files_with_extension(dir, "xlsx")
}

/// Return a path under `dir` named after `base_name` that does not exist yet.
///
/// `sample.xlsx` is tried first, then `sample_1.xlsx`, `sample_2.xlsx` and so on.
/// Nothing is created on disk. Two callers racing for the same name can both be
/// handed the same candidate; whoever creates the file second overwrites the first.
pub fn generate_unique_path(dir: impl AsRef<Path>, base_name: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let (stem, extension) = split_extension(base_name);

    let candidate = dir.join(base_name);
    if !candidate.try_exists()? {
        return Ok(candidate);
    }

    let mut counter: u64 = 1;
    loop {
        let candidate = dir.join(format!("{stem}_{counter}{extension}"));
        if !candidate.try_exists()? {
            return Ok(candidate);
        }
        counter += 1;
    }
}

/// Split `name` at its last `.`; the extension keeps the dot, so `.env` has an empty stem.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn unique_path_increments_counter() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let base = "sample.xlsx";

        let first = generate_unique_path(tmp.path(), base).expect("first path");
        assert!(first.ends_with(base));
        File::create(&first).expect("create first");

        let second = generate_unique_path(tmp.path(), base).expect("second path");
        assert_ne!(first, second);
        assert!(second.ends_with("sample_1.xlsx"));
        File::create(&second).expect("create second");

        let third = generate_unique_path(tmp.path(), base).expect("third path");
        assert!(third.ends_with("sample_2.xlsx"));
    }

    #[test]
    fn unique_path_does_not_create_files() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = generate_unique_path(tmp.path(), "quote.csv").expect("path");
        assert!(!path.exists());
        assert_eq!(path.parent(), Some(tmp.path()));
    }

    #[test]
    fn unique_path_fills_first_gap() {
        let tmp = tempfile::tempdir().expect("tempdir");
        File::create(tmp.path().join("report.csv")).expect("base");
        File::create(tmp.path().join("report_2.csv")).expect("gap neighbour");

        let path = generate_unique_path(tmp.path(), "report.csv").expect("path");
        assert!(path.ends_with("report_1.csv"));
    }

    #[test]
    fn unique_path_without_extension() {
        let tmp = tempfile::tempdir().expect("tempdir");
        File::create(tmp.path().join("README")).expect("base");

        let path = generate_unique_path(tmp.path(), "README").expect("path");
        assert!(path.ends_with("README_1"));
    }

    #[test]
    fn split_uses_last_dot() {
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("sample.xlsx"), ("sample", ".xlsx"));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension(".env"), ("", ".env"));
        assert_eq!(split_extension("..hidden.txt"), ("..hidden", ".txt"));
    }

    #[test]
    fn dotfile_suffix_goes_before_last_dot() {
        let tmp = tempfile::tempdir().expect("tempdir");
        File::create(tmp.path().join(".env")).expect("create dotfile");

        let path = generate_unique_path(tmp.path(), ".env").expect("unique path");
        assert_eq!(path, tmp.path().join("_1.env"));
    }

    #[test]
    fn lists_only_matching_files() {
        let tmp = tempfile::tempdir().expect("tempdir");
        File::create(tmp.path().join("a.xlsx")).expect("xlsx");
        File::create(tmp.path().join("b.XLSX")).expect("upper xlsx");
        File::create(tmp.path().join("c.csv")).expect("csv");
        fs::create_dir(tmp.path().join("d.xlsx")).expect("dir named like xlsx");

        let mut names: Vec<String> = list_xlsx_files(tmp.path())
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.xlsx".to_string(), "b.XLSX".to_string()]);
    }

    #[test]
    fn listing_missing_directory_is_empty() {
        let tmp = tempfile::tempdir().expect("tempdir");
        assert!(list_xlsx_files(tmp.path().join("missing")).is_empty());
    }
}
