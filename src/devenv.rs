//! Guarded editable install of the local anita checkout.
//!
//! The whole flow is one conditional: if the `python3` on PATH does not live
//! inside the project virtualenv, refuse with exit code 1; otherwise run
//! `pip install -e ~/anita` and let pip's exit code stand.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use colored::*;

use crate::errors::SetupError;
use crate::pathfinder;
use crate::timer::Timer;

/// Substring of the resolved `python3` path that identifies the project venv.
pub const VENV_MARKER: &str = "anita";

/// Directory under `$HOME` holding the editable checkout.
pub const CHECKOUT_DIR: &str = "anita";

/// Path of the `python3` the shell would execute.
pub fn resolve_python3() -> Result<PathBuf, SetupError> {
    let finder = if cfg!(target_os = "windows") { "where" } else { "which" };
    let output = Command::new(finder)
        .arg("python3")
        .stderr(Stdio::null())
        .output()?;

    if !output.status.success() {
        return Err(SetupError::PythonNotFound);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    match stdout.lines().next().map(str::trim) {
        Some(line) if !line.is_empty() => Ok(PathBuf::from(line)),
        _ => Err(SetupError::PythonNotFound),
    }
}

/// Whether this interpreter path belongs to the project virtualenv.
pub fn venv_active(python: &Path) -> bool {
    python.to_string_lossy().contains(VENV_MARKER)
}

/// Resolve `python3` and require the virtualenv marker in its path.
pub fn guard() -> Result<PathBuf, SetupError> {
    let python = resolve_python3()?;
    if !venv_active(&python) {
        return Err(SetupError::WrongEnvironment(pathfinder::safe(&python)));
    }
    Ok(python)
}

/// The fixed install target, `~/anita`.
pub fn checkout_dir() -> Result<PathBuf, SetupError> {
    pathfinder::home_dir()
        .map(|home| home.join(CHECKOUT_DIR))
        .ok_or(SetupError::HomeNotSet)
}

/// Run `pip install -e` on `dir`, streaming pip's own output.
///
/// A killed pip reports as exit code 1.
pub fn editable_install(dir: &Path) -> Result<i32, SetupError> {
    let status = Command::new("pip")
        .arg("install")
        .arg("-e")
        .arg(dir)
        .status()
        .map_err(SetupError::PipUnavailable)?;

    Ok(status.code().unwrap_or(1))
}

/// Guard the environment, then delegate to pip.
///
/// Returns pip's exit code for the caller to exit with. Nothing is printed
/// about a pip failure beyond pip's own output.
pub fn dev_install() -> Result<i32, SetupError> {
    let python = guard()?;
    println!(
        "{} anita virtualenv active ({})",
        "✔".green(),
        pathfinder::safe(&python)
    );

    let target = checkout_dir()?;
    println!(
        "{} pip install -e {}",
        "→".cyan(),
        pathfinder::safe(&target)
    );

    let timer = Timer::start();
    let code = editable_install(&target)?;
    if code == 0 {
        println!(
            "{} editable install finished {}",
            "✔".green(),
            timer.read()
        );
    }
    Ok(code)
}
