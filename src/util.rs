//! Context-free utility functions.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Shorten a string to at most `max` characters, ellipsis included.
///
/// ```
/// assert_eq!(anita::util::shorten("A long enough sentence", 10), "A long ...");
/// assert_eq!(anita::util::shorten("short", 10), "short");
/// ```
pub fn shorten(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

/// Convert a data volume like 3485678 to a human readable format.
///
/// 1024-based, one decimal; plain integers below 1024 stay bare.
///
/// ```
/// assert_eq!(anita::util::hr(3485678.0), "3.3 MB");
/// assert_eq!(anita::util::hr(17.0), "17");
/// ```
pub fn hr(n: f64) -> String {
    const UNITS: [&str; 6] = ["", "kB", "MB", "GB", "TB", "PB"];
    let mut value = n;
    let mut power = 0;
    while value >= 1024.0 && power < UNITS.len() - 1 {
        value /= 1024.0;
        power += 1;
    }
    if power == 0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1} {}", value, UNITS[power])
    }
}

/// Filter documents to the fields whose key contains any of the filter
/// terms; documents left with no matching field are dropped.
pub fn only_fields_like(
    documents: &[Map<String, Value>],
    filter_terms: &[&str],
) -> Vec<Map<String, Value>> {
    documents
        .iter()
        .filter_map(|document| {
            let matching: Map<String, Value> = document
                .iter()
                .filter(|(key, _)| filter_terms.iter().any(|term| key.contains(term)))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            if matching.is_empty() {
                None
            } else {
                Some(matching)
            }
        })
        .collect()
}

/// Render rows as fixed-width table lines, one string per row.
///
/// Columns are the caller's `fields` (in order) extended by any further keys
/// encountered; widths fit the longest value. A missing field prints `-`,
/// and a value equal to the one directly above prints blank.
pub fn render_as_ascii_table(rows: &[Map<String, Value>], fields: Option<&[&str]>) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut widths: HashMap<String, usize> = HashMap::new();

    if let Some(fields) = fields {
        for field in fields {
            order.push((*field).to_string());
            widths.insert((*field).to_string(), 0);
        }
    }
    for row in rows {
        for (key, value) in row {
            let len = plain(value).chars().count();
            match widths.get_mut(key) {
                Some(width) => *width = (*width).max(len),
                None => {
                    order.push(key.clone());
                    widths.insert(key.clone(), len);
                }
            }
        }
    }

    let mut last: HashMap<&String, String> =
        order.iter().map(|f| (f, " ".to_string())).collect();
    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = Vec::with_capacity(order.len());
        for field in &order {
            let mut val = match row.get(field) {
                Some(value) => plain(value),
                None => "-".to_string(),
            };
            if last.get(field) == Some(&val) {
                val = " ".to_string();
            } else {
                last.insert(field, val.clone());
            }
            cells.push(pad(&val, widths.get(field).copied().unwrap_or(0)));
        }
        lines.push(cells.join(" | "));
    }
    lines
}

// strings print without their JSON quotes
fn plain(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

/// SHA-256 hex fingerprint over files and directory trees.
///
/// Directories are walked recursively with entries sorted by name, so the
/// fingerprint is stable across runs and platforms.
pub fn content_hash<P: AsRef<Path>>(paths: &[P]) -> Result<String> {
    let mut hasher = Sha256::new();
    for path in paths {
        hash_path(path.as_ref(), &mut hasher)?;
    }
    Ok(format!("{:x}", hasher.finalize()))
}

fn hash_path(path: &Path, hasher: &mut Sha256) -> Result<()> {
    if path.is_file() {
        hasher.update(fs::read(path)?);
    } else if path.is_dir() {
        let mut entries: Vec<PathBuf> = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()?;

        entries.sort();

        for entry in entries {
            hash_path(&entry, hasher)?;
        }
    }
    Ok(())
}
