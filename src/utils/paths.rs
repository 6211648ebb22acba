use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static BASE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Resolve the directory holding the running program, used to find co-located resources.
///
/// The executable's own location wins. When that is unavailable the directory of
/// `argv[0]` (made absolute against the working directory) is used, and the working
/// directory itself is the last resort.
pub fn compute_base_dir() -> PathBuf {
    if let Some(dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.canonicalize().ok().or(Some(exe)))
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        return dir;
    }

    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    env::args_os()
        .next()
        .map(PathBuf::from)
        .map(|entry| if entry.is_absolute() { entry } else { cwd.join(entry) })
        .and_then(|entry| entry.parent().map(Path::to_path_buf))
        .unwrap_or(cwd)
}

/// Base directory computed once and reused for the rest of the process.
pub fn base_dir() -> &'static Path {
    BASE_DIR.get_or_init(compute_base_dir)
}

/// Path of a resource bundled next to the executable.
pub fn resource_path(name: impl AsRef<Path>) -> PathBuf {
    base_dir().join(name)
}

/// Anchor relative paths on the base directory; absolute paths are returned as-is.
pub fn resolve_against_base(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir().join(path)
    }
}
