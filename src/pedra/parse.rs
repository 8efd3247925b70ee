//! Stone name parsing
//!
//! Stone names carry their grade inline, e.g. `"Ruby Tier 3 +7"` or
//! `"T5 Stone"`. These helpers pull the tier and enhancement markers out
//! of a name and format the labels shown in the details modal.

use regex::Regex;
use std::sync::OnceLock;

/// Tier shown when the name carries no tier marker
pub const DEFAULT_TIER: u32 = 1;

/// Number of uid characters shown before the ellipsis
pub const UID_DISPLAY_CHARS: usize = 8;

fn tier_word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)Tier\s*([0-9]+)").expect("tier word pattern is valid"))
}

fn tier_letter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[Tt]([0-9]+)").expect("tier letter pattern is valid"))
}

fn enhancement_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\+([0-9]+)").expect("enhancement pattern is valid"))
}

/// Digits of the tier marker, exactly as written in the name
///
/// `Tier <digits>` (any case) wins over a bare `T<digits>` / `t<digits>`,
/// which may appear anywhere in the name.
fn tier_digits(name: &str) -> Option<&str> {
    tier_word_regex()
        .captures(name)
        .or_else(|| tier_letter_regex().captures(name))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Digits following the first `+` marker
fn enhancement_digits(name: &str) -> Option<&str> {
    enhancement_regex()
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Tier encoded in the name, if any
///
/// Returns `None` when there is no marker or the digits overflow `u32`.
pub fn parse_tier(name: &str) -> Option<u32> {
    tier_digits(name).and_then(|digits| digits.parse().ok())
}

/// Enhancement level encoded in the name, if any
pub fn parse_enhancement(name: &str) -> Option<u32> {
    enhancement_digits(name).and_then(|digits| digits.parse().ok())
}

/// Tier badge text, `"Tier 1"` when the name has no marker
pub fn tier_label(name: &str) -> String {
    match tier_digits(name) {
        Some(digits) => format!("Tier {}", digits),
        None => format!("Tier {}", DEFAULT_TIER),
    }
}

/// Enhancement badge text; `None` means the badge is hidden
pub fn enhancement_label(name: &str) -> Option<String> {
    enhancement_digits(name).map(|digits| format!("+{}", digits))
}

/// Uid line text: the first characters of the uid followed by an ellipsis
pub fn uid_label(uid: &str) -> String {
    let head: String = uid.chars().take(UID_DISPLAY_CHARS).collect();
    format!("UID: {}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_word_marker() {
        assert_eq!(tier_label("Ruby Tier 3"), "Tier 3");
        assert_eq!(tier_label("ruby tier4"), "Tier 4");
        assert_eq!(parse_tier("Ruby TIER 12"), Some(12));
    }

    #[test]
    fn test_tier_letter_marker() {
        assert_eq!(tier_label("T5 Stone"), "Tier 5");
        assert_eq!(tier_label("OpalT2"), "Tier 2");
        assert_eq!(parse_tier("t7 pedra"), Some(7));
    }

    #[test]
    fn test_tier_word_wins_over_letter() {
        assert_eq!(tier_label("T9 Ruby Tier 2"), "Tier 2");
    }

    #[test]
    fn test_tier_default() {
        assert_eq!(tier_label("Emerald"), "Tier 1");
        assert_eq!(tier_label(""), "Tier 1");
        assert_eq!(parse_tier("Emerald +7"), None);
    }

    #[test]
    fn test_tier_keeps_digits_as_written() {
        assert_eq!(tier_label("Tier 03"), "Tier 03");
        assert_eq!(parse_tier("Tier 03"), Some(3));
    }

    #[test]
    fn test_enhancement() {
        assert_eq!(enhancement_label("Emerald +7"), Some("+7".to_string()));
        assert_eq!(enhancement_label("Emerald"), None);
        assert_eq!(enhancement_label("Tier 3 +0"), Some("+0".to_string()));
        assert_eq!(parse_enhancement("Ruby +12 +3"), Some(12));
        assert_eq!(parse_enhancement("Ruby +"), None);
    }

    #[test]
    fn test_uid_label() {
        assert_eq!(uid_label("abcdef1234567890"), "UID: abcdef12...");
        assert_eq!(uid_label("abc"), "UID: abc...");
        assert_eq!(uid_label(""), "UID: ...");
        assert_eq!(uid_label("ãéíõúçàè99"), "UID: ãéíõúçàè...");
    }
}
