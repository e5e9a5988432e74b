//! Unicode block table
//!
//! Named code-point ranges in display order. Ranges may overlap;
//! lookups resolve to the first block in table order.

/// A named, inclusive code-point range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeCategory {
    /// Stable identifier used for filtering (e.g. "basic-latin")
    pub id: &'static str,
    /// Display name (e.g. "Basic Latin")
    pub name: &'static str,
    /// Lowest code point (inclusive)
    pub low: u32,
    /// Highest code point (inclusive)
    pub high: u32,
}

impl UnicodeCategory {
    const fn new(id: &'static str, name: &'static str, low: u32, high: u32) -> Self {
        Self { id, name, low, high }
    }

    /// Whether the code point falls inside this block
    #[inline]
    pub fn contains(&self, code_point: u32) -> bool {
        (self.low..=self.high).contains(&code_point)
    }

    /// Number of code points in the range
    pub fn span(&self) -> u32 {
        self.high - self.low + 1
    }
}

/// Category table (display order)
pub static CATEGORIES: &[UnicodeCategory] = &[
    UnicodeCategory::new("basic-latin", "Basic Latin", 0x0020, 0x007F),
    UnicodeCategory::new("latin-1", "Latin-1 Supplement", 0x0080, 0x00FF),
    UnicodeCategory::new("latin-extended-a", "Latin Extended-A", 0x0100, 0x017F),
    UnicodeCategory::new("latin-extended-b", "Latin Extended-B", 0x0180, 0x024F),
    UnicodeCategory::new("greek", "Greek and Coptic", 0x0370, 0x03FF),
    UnicodeCategory::new("cyrillic", "Cyrillic", 0x0400, 0x04FF),
    UnicodeCategory::new("armenian", "Armenian", 0x0530, 0x058F),
    UnicodeCategory::new("hebrew", "Hebrew", 0x0590, 0x05FF),
    UnicodeCategory::new("arabic", "Arabic", 0x0600, 0x06FF),
    UnicodeCategory::new("thai", "Thai", 0x0E00, 0x0E7F),
    UnicodeCategory::new("cjk-symbols", "CJK Symbols", 0x3000, 0x303F),
    UnicodeCategory::new("hiragana", "Hiragana", 0x3040, 0x309F),
    UnicodeCategory::new("katakana", "Katakana", 0x30A0, 0x30FF),
    UnicodeCategory::new("punctuation", "General Punctuation", 0x2000, 0x206F),
    UnicodeCategory::new("currency", "Currency Symbols", 0x20A0, 0x20CF),
    UnicodeCategory::new("letterlike", "Letterlike Symbols", 0x2100, 0x214F),
    UnicodeCategory::new("number-forms", "Number Forms", 0x2150, 0x218F),
    UnicodeCategory::new("arrows", "Arrows", 0x2190, 0x21FF),
    UnicodeCategory::new("math-operators", "Mathematical Operators", 0x2200, 0x22FF),
    UnicodeCategory::new("misc-technical", "Miscellaneous Technical", 0x2300, 0x23FF),
    UnicodeCategory::new("box-drawing", "Box Drawing", 0x2500, 0x257F),
    UnicodeCategory::new("block-elements", "Block Elements", 0x2580, 0x259F),
    UnicodeCategory::new("geometric-shapes", "Geometric Shapes", 0x25A0, 0x25FF),
    UnicodeCategory::new("misc-symbols", "Miscellaneous Symbols", 0x2600, 0x26FF),
    UnicodeCategory::new("dingbats", "Dingbats", 0x2700, 0x27BF),
    UnicodeCategory::new("braille", "Braille Patterns", 0x2800, 0x28FF),
    UnicodeCategory::new("supplemental-arrows", "Supplemental Arrows-B", 0x2900, 0x297F),
    UnicodeCategory::new("misc-math-a", "Misc Mathematical Symbols-A", 0x27C0, 0x27EF),
    UnicodeCategory::new("misc-math-b", "Misc Mathematical Symbols-B", 0x2980, 0x29FF),
    UnicodeCategory::new("emoticons", "Emoticons", 0x1F600, 0x1F64F),
    UnicodeCategory::new(
        "misc-symbols-pictographs",
        "Misc Symbols and Pictographs",
        0x1F300,
        0x1F5FF,
    ),
    UnicodeCategory::new("transport-map", "Transport and Map", 0x1F680, 0x1F6FF),
    UnicodeCategory::new("supplemental-symbols", "Supplemental Symbols", 0x1F900, 0x1F9FF),
];

/// Find a category by id
pub fn by_id(id: &str) -> Option<&'static UnicodeCategory> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// First category (table order) whose range contains the code point
pub fn containing(code_point: u32) -> Option<&'static UnicodeCategory> {
    CATEGORIES.iter().find(|c| c.contains(code_point))
}

/// Categories to scan for a filter, in table order.
///
/// `None` or an empty filter selects every category. Unknown ids are ignored.
pub fn select(ids: Option<&[String]>) -> Vec<&'static UnicodeCategory> {
    match ids {
        Some(ids) if !ids.is_empty() => CATEGORIES
            .iter()
            .filter(|c| ids.iter().any(|id| id == c.id))
            .collect(),
        _ => CATEGORIES.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_invariants() {
        let mut ids = HashSet::new();
        for c in CATEGORIES {
            assert!(c.low <= c.high, "{} has inverted range", c.id);
            assert!(ids.insert(c.id), "duplicate id {}", c.id);
        }
        assert_eq!(CATEGORIES.len(), 33);
    }

    #[test]
    fn test_containing_first_match() {
        assert_eq!(containing(0x41).map(|c| c.id), Some("basic-latin"));
        assert_eq!(containing(0x1F600).map(|c| c.id), Some("emoticons"));
        assert!(containing(0x10).is_none());
        assert!(containing(0xE000).is_none());
    }

    #[test]
    fn test_select_keeps_table_order() {
        let ids = vec!["arrows".to_string(), "greek".to_string(), "nope".to_string()];
        let picked: Vec<_> = select(Some(&ids)).iter().map(|c| c.id).collect();
        assert_eq!(picked, vec!["greek", "arrows"]);
        assert_eq!(select(Some(&[])).len(), CATEGORIES.len());
        assert_eq!(select(None).len(), CATEGORIES.len());
    }
}
