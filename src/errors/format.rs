//! Text rendering of offending values inside messages

use serde_json::{Number, Value};

/// Plain rendering: strings unquoted, lists space-separated in brackets
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => display_list(items),
        Value::Number(n) => display_number(n),
        other => other.to_string(),
    }
}

/// Integral floats print without a fractional part, so `5.0` reads as `5`
pub(crate) fn display_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    }
}

/// Quoted rendering of a value, used when echoing offending data
pub(crate) fn quote_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        other => format!("{:?}", other.to_string()),
    }
}

pub(crate) fn display_list(items: &[Value]) -> String {
    let parts: Vec<String> = items.iter().map(display_value).collect();
    format!("[{}]", parts.join(" "))
}

pub(crate) fn display_strings<S: AsRef<str>>(items: &[S]) -> String {
    let parts: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    format!("[{}]", parts.join(" "))
}
