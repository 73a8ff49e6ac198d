//! Some utilities around JavaScript Object Notation (JSON).

use serde_json::Value;
use thiserror::Error;

const INDENT: &str = "    ";

/// A [`jpath`] traversal that ran aground.
#[derive(Debug, Error)]
#[error("invalid path '{rest}' for remaining value {value}")]
pub struct JsonPathError {
    /// The path steps that could not be applied.
    pub rest: String,
    /// Compact rendering of the value the first failing step was applied to.
    pub value: String,
}

/// Produce a denser JSON rendering than pretty-printing with indent 4.
///
/// Atoms and flat collections (every element atomic) stay on one line,
/// separated by `", "`; anything nested expands with 4-space indentation.
/// Keys follow `serde_json::Map` order.
///
/// ```
/// use serde_json::json;
/// assert_eq!(anita::jj::dumps(&json!({"a": 1, "b": 2})), r#"{"a": 1, "b": 2}"#);
/// assert_eq!(anita::jj::dumps(&json!([1, 2, 3])), "[1, 2, 3]");
/// ```
pub fn dumps(v: &Value) -> String {
    render(v, "", false)
}

fn is_atom(v: &Value) -> bool {
    !matches!(v, Value::Array(_) | Value::Object(_))
}

fn is_flat(v: &Value) -> bool {
    match v {
        Value::Array(items) => items.iter().all(is_atom),
        Value::Object(map) => map.values().all(is_atom),
        _ => true,
    }
}

fn one_line(v: &Value) -> String {
    match v {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(|i| i.to_string()).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, val)| format!("{}: {}", Value::String(k.clone()), val))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
        atom => atom.to_string(),
    }
}

fn render(v: &Value, indent: &str, in_element: bool) -> String {
    let prefix = if in_element { "" } else { indent };

    if is_flat(v) {
        return format!("{}{}", prefix, one_line(v));
    }

    let next = format!("{}{}", indent, INDENT);
    match v {
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, val)| {
                    format!(
                        "{}{}: {}",
                        next,
                        Value::String(k.clone()),
                        render(val, &next, true)
                    )
                })
                .collect();
            format!("{}{{\n{}\n{}}}", prefix, entries.join(",\n"), indent)
        }
        Value::Array(items) => {
            let entries: Vec<String> = items
                .iter()
                .map(|item| render(item, &next, false))
                .collect();
            format!("{}[\n{}\n{}]", prefix, entries.join(",\n"), indent)
        }
        atom => format!("{}{}", prefix, one_line(atom)),
    }
}

/// Dive into nested values of known structure, like API returns.
///
/// Access nested components with a simple path like `"data/0/name"` instead
/// of consecutive indexing. A numeric step indexes an array; any step keys
/// an object. Strings are never indexed into, even though an index step
/// would be well-formed, because this is usually NOT what you want.
///
/// ```
/// use serde_json::json;
/// let j = json!({"data": [{"name": "Alice"}, {"name": "Bob"}]});
/// assert_eq!(anita::jj::jpath(&j, "data/0/name").unwrap(), &json!("Alice"));
/// assert!(anita::jj::jpath(&j, "data/2/name").is_err());
/// ```
pub fn jpath<'a>(v: &'a Value, path: &str) -> Result<&'a Value, JsonPathError> {
    let steps: Vec<&str> = path.split('/').collect();
    let mut current = v;

    for (i, step) in steps.iter().enumerate() {
        let next = match current {
            Value::Array(items) if is_index(step) => {
                step.parse::<usize>().ok().and_then(|idx| items.get(idx))
            }
            Value::Object(map) => map.get(*step),
            _ => None,
        };
        current = match next {
            Some(value) => value,
            None => {
                return Err(JsonPathError {
                    rest: steps[i..].join("/"),
                    value: current.to_string(),
                })
            }
        };
    }

    Ok(current)
}

fn is_index(step: &str) -> bool {
    !step.is_empty() && step.bytes().all(|b| b.is_ascii_digit())
}

/// Path access as a method on [`Value`].
///
/// ```
/// use anita::jj::Jpath;
/// use serde_json::json;
/// let j = json!({"b": {"c": 2}});
/// assert_eq!(j.jpath("b/c").unwrap(), &json!(2));
/// ```
pub trait Jpath {
    fn jpath(&self, path: &str) -> Result<&Value, JsonPathError>;
}

impl Jpath for Value {
    fn jpath(&self, path: &str) -> Result<&Value, JsonPathError> {
        jpath(self, path)
    }
}
