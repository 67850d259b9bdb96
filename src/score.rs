// src/score.rs
use once_cell::sync::OnceCell;
use regex::Regex;

/// Parse a free-text score label into a number. Total: any shape that does
/// not contain a digit run parses to 0, including `None` and empty input.
///
/// Takes the first run of digits, allowing embedded `,` thousands
/// separators, so `"1,234 points"` is 1234. Abbreviated suffixes are NOT
/// expanded: `"1.2k"` parses to 1 (the run stops at the dot).
pub fn parse_score(text: Option<&str>) -> u64 {
    let Some(text) = text else {
        return 0;
    };

    static RE_DIGITS: OnceCell<Regex> = OnceCell::new();
    let re = RE_DIGITS.get_or_init(|| Regex::new(r"\d[\d,]*").unwrap());

    let Some(m) = re.find(text.trim()) else {
        return 0;
    };
    m.as_str().replace(',', "").parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_number() {
        assert_eq!(parse_score(Some("42")), 42);
    }

    #[test]
    fn thousands_separators_are_stripped() {
        assert_eq!(parse_score(Some("1,234")), 1234);
        assert_eq!(parse_score(Some("12,345,678 upvotes")), 12_345_678);
    }

    #[test]
    fn empty_and_absent_default_to_zero() {
        assert_eq!(parse_score(Some("")), 0);
        assert_eq!(parse_score(None), 0);
        assert_eq!(parse_score(Some("   ")), 0);
    }

    #[test]
    fn digit_free_text_defaults_to_zero() {
        assert_eq!(parse_score(Some("no digits here")), 0);
        assert_eq!(parse_score(Some("•")), 0);
    }

    #[test]
    fn k_suffix_is_not_expanded() {
        // Documented decision: "1.2k" is not multiplied out.
        assert_eq!(parse_score(Some("1.2k")), 1);
    }

    #[test]
    fn leading_whitespace_and_trailing_text_are_tolerated() {
        assert_eq!(parse_score(Some("  987 points ")), 987);
    }
}
