//! Hover text helpers: thousands grouping and the tooltip body.

use crate::models::Node;
use num_format::{Locale, ToFormattedString};

/// Format a number with comma thousands separators, keeping up to two
/// decimals when present: `1234567.5` → `"1,234,567.5"`.
///
/// Supports magnitudes up to about 9.2e16 (`i64::MAX` hundredths) — far past
/// any dollar-millions figure this chart displays.
pub fn add_commas(value: f64) -> String {
    debug_assert!(value.abs() < i64::MAX as f64 / 100.0);
    let negative = value < 0.0;
    // Round to hundredths first so the fraction can carry into the whole part.
    let hundredths = (value.abs() * 100.0).round() as i64;
    let mut s = (hundredths / 100).to_formatted_string(&Locale::en);
    let rem = hundredths % 100;
    if rem != 0 {
        let frac = format!("{rem:02}");
        s.push('.');
        s.push_str(frac.trim_end_matches('0'));
    }
    if negative { format!("-{s}") } else { s }
}

/// Tooltip body for a hovered bubble.
pub fn hover_detail(node: &Node) -> String {
    format!(
        "Country: {}\nAmount: ${} million\nYear: {}",
        node.name,
        add_commas(node.value),
        node.year
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(add_commas(1234567.0), "1,234,567");
        assert_eq!(add_commas(999.0), "999");
        assert_eq!(add_commas(0.0), "0");
    }

    #[test]
    fn large_magnitudes_stay_exact() {
        assert_eq!(add_commas(1.0e12), "1,000,000,000,000");
        assert_eq!(add_commas(-1.0e12), "-1,000,000,000,000");
    }

    #[test]
    fn keeps_fraction_and_sign() {
        assert_eq!(add_commas(1234.5), "1,234.5");
        assert_eq!(add_commas(-1234.5), "-1,234.5");
        assert_eq!(add_commas(-0.25), "-0.25");
    }
}
