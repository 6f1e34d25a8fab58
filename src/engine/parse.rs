//! Boundary between raw form text and engine numbers.
//!
//! Nothing here fails: unreadable input is 0, negative input is clamped to 0.

use serde_json::Value;

use crate::engine::conversions::sanitize;

/// Parse a numeric form field.
///
/// Reads the longest numeric prefix, so `"25g"` is 25 and `"abc"` is 0.
pub fn parse_field(raw: &str) -> f64 {
    leading_number(raw).map(sanitize).unwrap_or(0.0)
}

/// Parse a field whose emptiness matters. `None` means the field is blank.
pub fn parse_optional_field(raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(parse_field(raw))
    }
}

/// Parse a calorie goal the way the registration form does: integer prefix only.
pub fn parse_calorie_goal(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes[0], b'+' | b'-'));
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digits_start {
        return Some(0.0);
    }
    Some(s[..end].parse::<f64>().map(sanitize).unwrap_or(0.0))
}

/// Parse a nutrient value from an analysis payload.
///
/// Accepts numbers, numeric strings, and `"15-20"` style ranges (midpoint).
pub fn parse_nutrient_value(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_text(s),
        _ => None,
    };
    parsed.map(sanitize).unwrap_or(0.0)
}

fn parse_numeric_text(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if let Ok(v) = trimmed.parse::<f64>() {
        return Some(v);
    }

    let parts: Vec<&str> = trimmed.split('-').collect();
    if let [low, high] = parts.as_slice() {
        let low: f64 = low.trim().parse().ok()?;
        let high: f64 = high.trim().parse().ok()?;
        return Some((low + high) / 2.0);
    }
    None
}

/// Longest prefix of `raw` (after leading whitespace) that reads as a decimal number.
fn leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if end < len && matches!(bytes[end], b'+' | b'-') {
        end += 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Whole kcal, halves rounded up.
pub fn format_kcal(value: f64) -> String {
    format!("{:.0}", sanitize(value).round())
}

/// Whole grams, halves rounded up.
pub fn format_grams(value: f64) -> String {
    format!("{:.0}", sanitize(value).round())
}

/// Whole percent with a trailing `%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", sanitize(value).round())
}
