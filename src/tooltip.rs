use serde_json::{Map, Value};

use crate::layout::RESERVED_KEYS;

/// Renders an attribute map as tooltip text: one `key: value` line per
/// attribute, in map order, skipping structural keys. String values
/// longer than `wrap_chars` are hard-wrapped every `wrap_chars`
/// characters so wide values do not stretch the tooltip box.
pub fn format_attributes(attributes: &Map<String, Value>, wrap_chars: usize) -> String {
    let mut lines = Vec::new();
    for (key, value) in attributes {
        if RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }
        lines.push(format!("{key}: {}", value_text(value, wrap_chars)));
    }
    lines.join("\n")
}

fn value_text(value: &Value, wrap_chars: usize) -> String {
    match value {
        Value::String(text) => wrap_text(text, wrap_chars),
        other => other.to_string(),
    }
}

fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 || text.chars().count() <= width {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}
