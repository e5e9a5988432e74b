//! Character records
//!
//! Expands categories into concrete `UnicodeCharacter` records and
//! rehydrates single characters from code points (e.g. recognition results).

use super::categories::{self, UnicodeCategory};
use super::names;

/// Category label used when no block contains a code point
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// A single character with derived display metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeCharacter {
    /// Decoded scalar value
    pub ch: char,
    /// Numeric code point
    pub code_point: u32,
    /// Generated display name ("<Block> Character U+XXXX")
    pub name: String,
    /// Curated common name, if any
    pub common_name: Option<&'static str>,
    /// Category display name (not id)
    pub category: String,
    /// HTML numeric entity ("&#65;")
    pub html_entity: String,
    /// CSS escape ("\41")
    pub css_code: String,
}

impl UnicodeCharacter {
    /// Build a record for `code_point` attributed to `category`.
    /// Returns None for surrogates and out-of-range values.
    fn build(code_point: u32, category: &str) -> Option<Self> {
        let ch = char::from_u32(code_point)?;
        Some(Self {
            ch,
            code_point,
            name: character_name(code_point),
            common_name: names::common_name(code_point),
            category: category.to_string(),
            html_entity: format!("&#{};", code_point),
            css_code: format!("\\{:X}", code_point),
        })
    }

    /// "U+XXXX" (uppercase, zero-padded to at least 4 digits)
    pub fn code_point_label(&self) -> String {
        code_point_label(self.code_point)
    }

    /// Uppercase hex, zero-padded to at least 4 digits
    pub fn hex_padded(&self) -> String {
        format!("{:04X}", self.code_point)
    }

    /// Uppercase hex without padding
    pub fn hex_upper(&self) -> String {
        format!("{:X}", self.code_point)
    }

    pub fn decimal(&self) -> String {
        self.code_point.to_string()
    }
}

/// "U+XXXX" label for any code point
pub fn code_point_label(code_point: u32) -> String {
    format!("U+{:04X}", code_point)
}

/// Generated display name.
///
/// Not a Unicode database name: derived from the containing block.
pub fn character_name(code_point: u32) -> String {
    match categories::containing(code_point) {
        Some(category) => format!(
            "{} Character {}",
            category.name,
            code_point_label(code_point)
        ),
        None => format!("Unicode Character {}", code_point_label(code_point)),
    }
}

/// Non-printing control: whitespace below U+0020
#[inline]
fn is_skipped_control(ch: char) -> bool {
    (ch as u32) < 0x20 && ch.is_whitespace()
}

/// Expand a category into characters, ascending by code point.
///
/// Whitespace controls below U+0020 and undecodable code points are skipped;
/// unassigned code points are kept (renderers show a fallback glyph).
pub fn generate(category: &UnicodeCategory) -> Vec<UnicodeCharacter> {
    (category.low..=category.high)
        .filter_map(|cp| UnicodeCharacter::build(cp, category.name))
        .filter(|c| !is_skipped_control(c.ch))
        .collect()
}

/// Rehydrate a character outside category iteration.
///
/// The category is the first block (table order) containing the code point,
/// or "Unknown". Returns None when the code point is not a scalar value.
pub fn from_code_point(code_point: u32) -> Option<UnicodeCharacter> {
    let category = categories::containing(code_point)
        .map(|c| c.name)
        .unwrap_or(UNKNOWN_CATEGORY);
    UnicodeCharacter::build(code_point, category)
}

/// Rehydrate from a string holding exactly one scalar value
pub fn from_single_char(s: &str) -> Option<UnicodeCharacter> {
    let mut chars = s.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    from_code_point(ch as u32)
}

/// Parse user input identifying a character.
///
/// Accepts "U+XXXX", "0xXXXX", bare hex of two or more digits, or a single
/// literal character. A single hex digit is read as the literal character.
pub fn parse_code_point(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    if let Some(hex) = lower.strip_prefix("u+").or_else(|| lower.strip_prefix("0x")) {
        return u32::from_str_radix(hex, 16).ok();
    }

    let mut chars = trimmed.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Some(ch as u32);
    }

    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
        return u32::from_str_radix(trimmed, 16).ok();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::categories::CATEGORIES;

    #[test]
    fn test_generate_within_range_ascending_unique() {
        for category in CATEGORIES {
            let chars = generate(category);
            assert!(!chars.is_empty(), "{} generated nothing", category.id);
            for pair in chars.windows(2) {
                assert!(pair[0].code_point < pair[1].code_point);
            }
            for c in &chars {
                assert!(category.contains(c.code_point));
                assert_eq!(c.category, category.name);
            }
        }
    }

    #[test]
    fn test_generate_skips_only_whitespace_controls() {
        let low = UnicodeCategory {
            id: "test",
            name: "Test",
            low: 0x00,
            high: 0x21,
        };
        let cps: Vec<u32> = generate(&low).iter().map(|c| c.code_point).collect();
        // TAB, LF, VT, FF, CR
        for skipped in [0x09, 0x0A, 0x0B, 0x0C, 0x0D] {
            assert!(!cps.contains(&skipped), "U+{:04X} should be skipped", skipped);
        }
        // Non-whitespace controls and printable characters stay
        for kept in [0x00, 0x01, 0x1B, 0x1F, 0x20, 0x21] {
            assert!(cps.contains(&kept), "U+{:04X} should be kept", kept);
        }
    }

    #[test]
    fn test_generate_skips_surrogates() {
        let surrogates = UnicodeCategory {
            id: "surrogates",
            name: "Surrogates",
            low: 0xD7FE,
            high: 0xE001,
        };
        let cps: Vec<u32> = generate(&surrogates).iter().map(|c| c.code_point).collect();
        assert_eq!(cps, vec![0xD7FE, 0xD7FF, 0xE000, 0xE001]);
    }

    #[test]
    fn test_derived_fields() {
        let a = from_code_point(0x41).unwrap();
        assert_eq!(a.ch, 'A');
        assert_eq!(a.name, "Basic Latin Character U+0041");
        assert_eq!(a.category, "Basic Latin");
        assert_eq!(a.html_entity, "&#65;");
        assert_eq!(a.css_code, "\\41");
        assert_eq!(a.code_point_label(), "U+0041");
        assert_eq!(a.common_name, None);
        assert_eq!(a.decimal(), "65");
        assert_eq!(a.hex_upper(), "41");

        let euro = from_code_point(0x20AC).unwrap();
        assert_eq!(euro.common_name, Some("EURO SIGN"));
        assert_eq!(euro.category, "Currency Symbols");
    }

    #[test]
    fn test_from_code_point_unknown_and_invalid() {
        let pua = from_code_point(0xE000).unwrap();
        assert_eq!(pua.category, UNKNOWN_CATEGORY);
        assert_eq!(pua.name, "Unicode Character U+E000");
        assert!(from_code_point(0xD800).is_none());
        assert!(from_code_point(0x110000).is_none());
    }

    #[test]
    fn test_from_single_char() {
        assert_eq!(from_single_char("β").map(|c| c.code_point), Some(0x3B2));
        assert!(from_single_char("ab").is_none());
        assert!(from_single_char("").is_none());
    }

    #[test]
    fn test_parse_code_point() {
        assert_eq!(parse_code_point("U+00E9"), Some(0xE9));
        assert_eq!(parse_code_point("0x1f600"), Some(0x1F600));
        assert_eq!(parse_code_point("2192"), Some(0x2192));
        assert_eq!(parse_code_point("→"), Some(0x2192));
        assert_eq!(parse_code_point("a"), Some('a' as u32));
        assert_eq!(parse_code_point("xyz"), None);
        assert_eq!(parse_code_point("U+zz"), None);
    }
}
