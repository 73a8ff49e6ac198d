//! Write errors and diagnostics to the log in a way I like it.

use std::process::Command;

use anyhow::{bail, Result};

const RULE: &str =
    "    +----------------------------------------------------------------------------------------";

/// Lines of a framed report: a banner naming the outermost error, then the
/// numbered cause chain.
pub fn error_chain_lines(err: &anyhow::Error) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        "    |".to_string(),
        format!("    |        ERROR ---> {}", err),
        "    |".to_string(),
        RULE.to_string(),
        "    |".to_string(),
    ];
    for (i, cause) in err.chain().enumerate() {
        lines.push(format!("{:3} |  {}", i, cause));
    }
    lines
}

/// Print the framed error report to stderr.
pub fn log_error_chain(err: &anyhow::Error) {
    for line in error_chain_lines(err) {
        eprintln!("{}", line);
    }
}

/// Capture the output of `df -h .`, one line per entry.
///
/// Works on macOS and Linux; elsewhere the spawn itself will fail.
pub fn disk_free_lines() -> Result<Vec<String>> {
    let output = Command::new("df").args(["-h", "."]).output()?;
    if !output.status.success() {
        bail!("df exited with code {}", output.status.code().unwrap_or(1));
    }
    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Print the current disk usage to stdout; failures go through the framed
/// error report instead of bubbling up.
pub fn log_disk_free() {
    match disk_free_lines() {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(err) => log_error_chain(&err),
    }
}
