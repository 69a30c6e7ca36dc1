//! Shared regular-expression patterns for validation rules.
//!
//! The `&str` constants feed [`CellRule`](super::CellRule) constructors,
//! which compile them once at spec construction. The `Lazy` statics are the
//! matchers row validators consult directly.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an empty or whitespace-only cell. Included as an acceptable
/// alternative in the format rules of optional columns.
pub const EMPTY_STRING_REGEX: &str = r"^\s*$";

/// ISO-style territory codes: `US`, `GB`, optionally with a region suffix.
pub const COUNTRY_CODE_REGEX: &str = r"^[A-Za-z]{2}(-[A-Za-z0-9]{2,3})?$";

/// Dates in `YYYY-MM-DD` form.
pub const DATE_FORMAT_REGEX: &str = r"^\d{4}-\d{2}-\d{2}$";

/// An availability window with no closing date.
pub const OPEN_ENDED_DATE_REGEX: &str = r"(?i)^open$";

/// Non-negative decimal prices with up to two fractional digits.
pub const FLOAT_FORMAT_REGEX: &str = r"^[0-9]+(\.[0-9]{1,2})?$";

/// The supported work types, with an optional qualifier such as `Season 1`.
pub const WORK_TYPE_VALUES_REGEX: &str = r"(?i)^(movie|episode|season|collection)(\s+\S.*)?$";

/// The supported license types.
pub const LICENSE_TYPE_VALUES_REGEX: &str = r"(?i)^(EST|VOD|SVOD|POEST|DTR)$";

/// The supported format profiles.
pub const FORMAT_PROFILE_VALUES_REGEX: &str = r"(?i)^(SD|HD|3D)$";

/// The supported price types.
pub const PRICE_TYPE_VALUES_REGEX: &str = r"(?i)^(tier|category|wsp|srp)$";

/// Caption exemption reason codes.
pub const CAPTION_EXEMPTION_VALUES_REGEX: &str = r"^[1-6]$";

/// A strict yes/no answer, case-insensitive.
pub const YES_OR_NO_ONLY_REGEX: &str = r"(?i)^(yes|no)$";

/// Characters that must never appear in metadata cells.
pub const ILLEGAL_METADATA_CHARACTERS: &str = r"[<>|^~\\]";

/// Territory values denoting the United States.
pub static UNITED_STATES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(us|usa|united states)$").expect("valid pattern"));

/// Strict yes/no matcher for cross-column rules.
pub static YES_OR_NO: Lazy<Regex> =
    Lazy::new(|| Regex::new(YES_OR_NO_ONLY_REGEX).expect("valid pattern"));

/// An availability window with no closing date.
pub static OPEN_ENDED: Lazy<Regex> =
    Lazy::new(|| Regex::new(OPEN_ENDED_DATE_REGEX).expect("valid pattern"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_united_states_variants() {
        for value in ["US", "us", "USA", "United States"] {
            assert!(UNITED_STATES.is_match(value), "{value}");
        }
        assert!(!UNITED_STATES.is_match("GB"));
    }

    #[test]
    fn test_yes_or_no_is_strict() {
        assert!(YES_OR_NO.is_match("Yes"));
        assert!(YES_OR_NO.is_match("NO"));
        assert!(!YES_OR_NO.is_match("Maybe"));
        assert!(!YES_OR_NO.is_match("Yes "));
    }

    #[test]
    fn test_work_type_qualifier() {
        let work_type = Regex::new(WORK_TYPE_VALUES_REGEX).unwrap();
        assert!(work_type.is_match("Season 1"));
        assert!(work_type.is_match("movie"));
        assert!(!work_type.is_match("Short"));
    }
}
