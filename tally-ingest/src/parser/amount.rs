//! Amount token search.

use once_cell::sync::Lazy;
use regex::Regex;

// Optional sign and dollar sign, then 1,234,567 or 1234567, then optional cents.
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"-?\s*\$?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2})?")
        .expect("Failed to compile AMOUNT_RE")
});

/// First amount-like token in `text`, trimmed.
pub fn find_amount(text: &str) -> Option<&str> {
    AMOUNT_RE
        .find(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_currency() {
        assert_eq!(find_amount("Grocery Store -$45.67"), Some("-$45.67"));
        assert_eq!(find_amount("WALMART - $14.05"), Some("- $14.05"));
        assert_eq!(find_amount("Coffee $4.50"), Some("$4.50"));
    }

    #[test]
    fn test_plain_and_grouped() {
        assert_eq!(find_amount("Paycheck 2500.00"), Some("2500.00"));
        assert_eq!(find_amount("Rent $1,200.00"), Some("$1,200.00"));
        assert_eq!(find_amount("Bonus 1,234,567"), Some("1,234,567"));
        assert_eq!(find_amount("Tip 7"), Some("7"));
    }

    #[test]
    fn test_takes_first_number_in_text() {
        // Store numbers are captured before the real amount.
        assert_eq!(find_amount("H-E-B #455 SAN MARCOS $5.82"), Some("455"));
    }

    #[test]
    fn test_cents_need_two_digits() {
        assert_eq!(find_amount("Fee 3.5"), Some("3"));
        assert_eq!(find_amount("Fee 3.567"), Some("3.56"));
    }

    #[test]
    fn test_no_amount() {
        assert_eq!(find_amount("Coffee"), None);
        assert_eq!(find_amount("- $"), None);
        assert_eq!(find_amount(""), None);
    }
}
