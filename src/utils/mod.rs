pub mod file;
pub mod paths;
pub mod text;
pub mod time;

pub use file::{generate_unique_path, list_xlsx_files, FileEntry};
pub use paths::{base_dir, compute_base_dir, resolve_against_base, resource_path};
pub use text::sanitize_filename_part;
pub use time::{current_human_timestamp, format_file_modified, quote_date_stamp};
