//! Number formatting for percentages, currency amounts and large counts.

use crate::shared::NOT_AVAILABLE;

/// Currency suffix used for profit figures.
pub const CURRENCY_SUFFIX: &str = "kr";

/// Fixed-point rendering with `decimals` places. Negative zero renders as zero.
pub fn fixed(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", value, decimals);
    match formatted.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => formatted,
    }
}

/// `5` → `"5.00%"`.
pub fn percent(value: f64) -> String {
    format!("{}%", fixed(value, 2))
}

/// `100` → `"100.00kr"`.
pub fn currency(value: f64) -> String {
    format!("{}{}", fixed(value, 2), CURRENCY_SUFFIX)
}

/// Currency amount, or `"N/A"` when there is nothing to show.
pub fn currency_or_na(value: Option<f64>) -> String {
    value.map(currency).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Insert thousands separators into an already-formatted number and trim
/// trailing fractional zeros: `"1234567.500"` → `"1,234,567.5"`.
pub fn grouped(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, frac.trim_end_matches('0')),
        None => (unsigned, ""),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut out = String::with_capacity(formatted.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }

    if fraction.is_empty() {
        format!("{}{}", sign, out)
    } else {
        format!("{}{}.{}", sign, out, fraction)
    }
}

/// Group an f64 with a fixed number of decimal places.
pub fn grouped_f64(value: f64, decimals: usize) -> String {
    grouped(&fixed(value, decimals))
}
