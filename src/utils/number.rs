//! Coercion of raw form control values.
//!
//! Form controls hand over whatever the agent typed. Nothing here ever fails:
//! empty, non-numeric and non-finite input all count as zero.

/// Parses a raw control value as a number, falling back to `0.0`.
pub fn coerce_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Like [`coerce_number`] but for counters (travellers, tours, rooms).
/// Negative and fractional input is clamped down to a whole count.
pub fn coerce_count(raw: &str) -> u32 {
    let value = coerce_number(raw);
    if value <= 0.0 {
        0
    } else {
        value.floor().min(u32::MAX as f64) as u32
    }
}

/// Two-decimal money formatting used everywhere a price is displayed.
pub fn money(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "0.00".to_string()
    }
}

/// Trimmed text, or the preview placeholder when nothing is left.
pub fn or_placeholder(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

pub const PLACEHOLDER: &str = "—";
