//! Display formatting for computed values
//!
//! Results are cut to the display width character by character, never
//! rounded. The one exception is a value whose integer part alone would not
//! fit: cutting that would silently change its magnitude, so it is written
//! in scientific notation and only the mantissa is cut.

/// Maximum characters the display holds
pub const MAX_DISPLAY_LEN: usize = 9;

/// Marker shown while the evaluator is in the error phase
pub const ERROR_MARKER: &str = "Error";

/// Formats a finite value for the display
#[must_use]
pub fn format_result(value: f64) -> String {
    // -0 would otherwise print as "-0"
    let value = if value == 0.0 { 0.0 } else { value };

    let plain = value.to_string();
    let plain = plain.strip_suffix(".0").unwrap_or(&plain);
    let int_len = plain.find('.').unwrap_or(plain.len());

    if int_len > MAX_DISPLAY_LEN {
        return format_scientific(value);
    }
    if plain.chars().count() <= MAX_DISPLAY_LEN {
        return plain.to_string();
    }

    let truncated: String = plain.chars().take(MAX_DISPLAY_LEN).collect();
    tidy_fraction(&truncated)
}

fn format_scientific(value: f64) -> String {
    let full = format!("{value:e}");
    let (mantissa, exponent) = full.split_at(full.find('e').unwrap_or(full.len()));
    let budget = MAX_DISPLAY_LEN.saturating_sub(exponent.len());
    let mantissa: String = mantissa.chars().take(budget).collect();
    format!("{}{exponent}", tidy_fraction(&mantissa))
}

/// Drops zeros and a point left dangling at the end of a cut fraction
fn tidy_fraction(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    let tidy = text.trim_end_matches('0').trim_end_matches('.');
    match tidy {
        "-0" | "-" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
