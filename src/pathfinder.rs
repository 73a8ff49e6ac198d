//! Display paths without leaking who you are.

use std::env;
use std::path::{Path, PathBuf};

/// The user's home directory, straight from the environment.
pub fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

/// Render a path for display with the home directory shortened to `~`.
///
/// Paths outside the home directory are returned unchanged.
///
/// ```
/// assert_eq!(anita::pathfinder::safe("notes/today.md"), "notes/today.md");
/// ```
pub fn safe<P: AsRef<Path>>(path: P) -> String {
    match home_dir() {
        Some(home) => safe_in(&home, path.as_ref()),
        None => path.as_ref().display().to_string(),
    }
}

fn safe_in(home: &Path, path: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => path.display().to_string(),
    }
}
