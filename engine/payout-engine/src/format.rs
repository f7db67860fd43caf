//! Currency formatting at the display boundary.
//!
//! Payouts travel through the engine as plain `f64` dollars; these
//! helpers convert to and from the comma-grouped strings the app
//! renders and stores.

/// Format a dollar amount as a comma-grouped whole-dollar string
/// (`1234567.4` -> `"1,234,567"`). Non-finite amounts render as `"0"`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Parse a comma-grouped currency string back to a dollar amount.
/// Anything non-numeric parses as 0.
pub fn parse_currency(raw: &str) -> f64 {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Abbreviate a dollar amount for compact display:
/// `1_234_567` -> `"1.2mil"`, `45_300` -> `"45.3k"`, smaller amounts
/// render as-is.
pub fn abbreviate_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    if amount >= 1_000_000.0 {
        format!("{:.1}mil", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("{:.1}k", amount / 1_000.0)
    } else {
        format!("{amount}")
    }
}
