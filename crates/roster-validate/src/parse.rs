//! Field parsers and normalizers.
//!
//! Every helper returns a value or `None`; nothing here panics on bad
//! input. Two slot parsers exist on purpose: the lenient one drops bad
//! elements, the strict one rejects the whole field.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// `start-end` phase range, ASCII digits only.
static PHASE_RANGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-([0-9]+)$").expect("Invalid phase range regex"));

/// True when `raw` parses as any JSON value.
pub fn is_valid_json_text(raw: &str) -> bool {
    serde_json::from_str::<Value>(raw).is_ok()
}

/// True when `raw` is exactly `<digits>-<digits>`.
pub fn is_phase_range(raw: &str) -> bool {
    PHASE_RANGE_REGEX.is_match(raw)
}

/// Parse a JSON array, keeping only numeric elements >= 1.
///
/// Returns `None` when the text is not JSON or not an array. Fractional
/// values are truncated toward zero.
pub fn parse_json_array_of_positive_ints(raw: &str) -> Option<Vec<i64>> {
    let items = parse_json_array(raw)?;
    Some(items.iter().filter_map(positive_int).collect())
}

/// Parse a JSON array in which every element must be a number >= 1.
///
/// Any invalid element rejects the whole field.
pub fn parse_strict_slots(raw: &str) -> Option<Vec<i64>> {
    let items = parse_json_array(raw)?;
    items.iter().map(positive_int).collect()
}

/// Longest `start-end` range that will be expanded.
pub const MAX_RANGE_LEN: i64 = 10_000;

/// Expand a PreferredPhases cell into phase numbers.
///
/// Tried in order: JSON (an array yields its numeric elements, any other
/// JSON value yields nothing), `start-end` range (inclusive, empty when
/// start > end or longer than [`MAX_RANGE_LEN`]), comma list (non-numeric
/// tokens dropped).
pub fn normalize_preferred_phases(raw: &str) -> Vec<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return match value {
            Value::Array(items) => items.iter().filter_map(json_int).collect(),
            _ => Vec::new(),
        };
    }
    if let Some(caps) = PHASE_RANGE_REGEX.captures(trimmed) {
        let start = caps[1].parse::<i64>().ok();
        let end = caps[2].parse::<i64>().ok();
        return match (start, end) {
            (Some(start), Some(end)) if end - start < MAX_RANGE_LEN => (start..=end).collect(),
            _ => Vec::new(),
        };
    }
    trimmed
        .split(',')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .collect()
}

/// Split a comma-separated cell, trimming entries and dropping empty ones.
pub fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse_json_array(raw: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(raw).ok()? {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

fn positive_int(value: &Value) -> Option<i64> {
    let number = value.as_f64()?;
    if number >= 1.0 {
        Some(number.trunc() as i64)
    } else {
        None
    }
}

fn json_int(value: &Value) -> Option<i64> {
    value.as_f64().map(|number| number.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_pattern_rejects_padding() {
        assert!(is_phase_range("1-3"));
        assert!(!is_phase_range(" 1-3"));
        assert!(!is_phase_range("1-3,5"));
        assert!(!is_phase_range("a-3"));
    }

    #[test]
    fn json_int_truncates() {
        assert_eq!(json_int(&serde_json::json!(2.7)), Some(2));
        assert_eq!(json_int(&serde_json::json!("2")), None);
    }
}
