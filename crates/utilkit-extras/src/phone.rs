//! Mainland China mobile numbers.

use std::sync::LazyLock;

use regex::Regex;

// 11 digits starting 13-19, optionally behind the +86 / 0086 country code
static MOBILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+86|0086)?(1[3-9][0-9]{9})$").expect("should be infallible")
});

/// The 11-digit national form of `tel` if it is a valid mainland mobile number.
///
/// Spaces, hyphens and parentheses are ignored. Any country code other than +86 is
/// rejected.
///
/// ```
/// use utilkit_extras::parse_phone;
///
/// assert_eq!(parse_phone("+86 177-1880-9932").as_deref(), Some("17718809932"));
/// assert_eq!(parse_phone("+8717718809932"), None);
/// ```
pub fn parse_phone(tel: &str) -> Option<String> {
    let compact: String = tel
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    MOBILE
        .captures(&compact)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEL: &str = "17718809932";

    #[test]
    fn national() {
        assert_eq!(parse_phone(TEL).as_deref(), Some(TEL));
    }

    #[test]
    fn country_code() {
        assert_eq!(parse_phone(&format!("+86{TEL}")).as_deref(), Some(TEL));
        assert_eq!(parse_phone(&format!("0086{TEL}")).as_deref(), Some(TEL));
        assert_eq!(parse_phone(&format!("+87{TEL}")), None);
    }

    #[test]
    fn separators() {
        assert_eq!(parse_phone("177 1880 9932").as_deref(), Some(TEL));
        assert_eq!(parse_phone("(+86) 177-1880-9932").as_deref(), Some(TEL));
    }

    #[test]
    fn wrong_length() {
        assert_eq!(parse_phone(&TEL[..10]), None);
        assert_eq!(parse_phone(&format!("{TEL}1")), None);
        assert_eq!(parse_phone(""), None);
    }

    #[test]
    fn not_mobile() {
        // landline and an unassigned 12x prefix
        assert_eq!(parse_phone("01012345678"), None);
        assert_eq!(parse_phone("12718809932"), None);
        assert_eq!(parse_phone("1771880993a"), None);
    }
}
