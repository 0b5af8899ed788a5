use serde_json::Value;

/// Default maximum length of a displayed debug string.
pub const DEFAULT_MAX_STRING_LEN: usize = 100;

/// Return a copy of `value` with every string longer than `max_len` characters
/// cut down and suffixed with `...`.
///
/// For display only. Stored debug data is never truncated.
pub fn truncate_strings(value: &Value, max_len: usize) -> Value {
    match value {
        Value::String(s) if s.chars().count() > max_len => {
            let mut truncated: String = s.chars().take(max_len).collect();
            truncated.push_str("...");
            Value::String(truncated)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| truncate_strings(item, max_len))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), truncate_strings(v, max_len)))
                .collect(),
        ),
        other => other.clone(),
    }
}
