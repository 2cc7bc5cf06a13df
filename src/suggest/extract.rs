use serde_json::Value;

use crate::suggest::sanitize::clean_candidate;

const ITEM_KEYS: &[&str] = &["items", "suggestions", "tasks", "kras"];

// Best-effort extraction of candidate strings from provider output. Accepts
// a JSON object with a recognized array key, a bare JSON array, an embedded
// JSON fragment inside prose, or raw free text split into lines. Unparseable
// input yields an empty list, never an error.
pub fn extract_items(text: &str) -> Vec<String> {
    let stripped = strip_code_fence(text.trim());
    if stripped.is_empty() {
        return Vec::new();
    }

    if let Ok(value) = serde_json::from_str::<Value>(stripped) {
        if let Some(items) = items_from_value(&value) {
            return items;
        }
    }

    if let (Some(start), Some(end)) = (stripped.find('{'), stripped.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&stripped[start..=end]) {
                if let Some(items) = items_from_value(&value) {
                    return items;
                }
            }
        }
    }

    stripped
        .lines()
        .map(clean_candidate)
        .filter(|line| !line.is_empty())
        .collect()
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the fence line (which may carry a language tag), then the closer.
    let body = match rest.find('\n') {
        Some(index) => &rest[index + 1..],
        None => rest,
    };
    body.trim_end().trim_end_matches("```").trim()
}

fn items_from_value(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(entries) => Some(collect_strings(entries)),
        Value::Object(map) => {
            for key in ITEM_KEYS {
                if let Some(Value::Array(entries)) = map.get(*key) {
                    return Some(collect_strings(entries));
                }
            }
            None
        }
        _ => None,
    }
}

fn collect_strings(entries: &[Value]) -> Vec<String> {
    entries
        .iter()
        .filter_map(Value::as_str)
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}
