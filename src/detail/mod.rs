//! Character detail view
//!
//! Label/value rows for a single character, rendered as aligned text.

use unicode_width::UnicodeWidthStr;

use crate::unicode::UnicodeCharacter;
use crate::wiki::{article_url, ArticleStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    /// Value is meant to be copied verbatim
    #[allow(dead_code)]
    pub copyable: bool,
}

#[derive(Debug, Clone)]
pub struct CharacterDetail {
    rows: Vec<DetailRow>,
}

impl CharacterDetail {
    pub fn new(ch: &UnicodeCharacter) -> Self {
        let mut rows = vec![row("Character", display_char(ch.ch), true)];
        if let Some(common) = ch.common_name {
            rows.push(row("Common Name", common.to_string(), false));
        }
        rows.extend([
            row("Code Point", ch.code_point_label(), true),
            row("Decimal", ch.decimal(), true),
            row("HTML Entity", ch.html_entity.clone(), true),
            row("CSS Code", ch.css_code.clone(), true),
            row("Category", ch.category.clone(), false),
            row("Wikipedia", article_url(ch.code_point), false),
        ]);
        Self { rows }
    }

    pub fn rows(&self) -> &[DetailRow] {
        &self.rows
    }

    /// Append the article status to the Wikipedia row
    pub fn set_article_status(&mut self, status: ArticleStatus) {
        if let Some(wiki) = self.rows.iter_mut().find(|r| r.label == "Wikipedia") {
            wiki.value = format!("{} ({})", article_base(&wiki.value), status);
        }
    }

    /// Labels right-padded to a common width
    pub fn render(&self) -> String {
        let width = self.rows.iter().map(|r| r.label.width()).max().unwrap_or(0);
        self.rows
            .iter()
            .map(|r| format!("{:<width$}  {}", r.label, r.value, width = width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn row(label: &'static str, value: String, copyable: bool) -> DetailRow {
    DetailRow {
        label,
        value,
        copyable,
    }
}

/// Strip a previously appended status
fn article_base(value: &str) -> &str {
    value.split(" (").next().unwrap_or(value)
}

/// Control characters would corrupt the terminal
fn display_char(ch: char) -> String {
    if ch.is_control() {
        "(control)".to_string()
    } else {
        ch.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::from_code_point;

    fn labels(detail: &CharacterDetail) -> Vec<&'static str> {
        detail.rows().iter().map(|r| r.label).collect()
    }

    #[test]
    fn test_rows_with_common_name() {
        let ch = from_code_point(0x20AC).unwrap();
        let detail = CharacterDetail::new(&ch);
        assert_eq!(
            labels(&detail),
            vec![
                "Character",
                "Common Name",
                "Code Point",
                "Decimal",
                "HTML Entity",
                "CSS Code",
                "Category",
                "Wikipedia"
            ]
        );
        assert_eq!(detail.rows()[0].value, "€");
        assert_eq!(detail.rows()[2].value, "U+20AC");
        assert_eq!(detail.rows()[3].value, "8364");
        assert_eq!(detail.rows()[4].value, "&#8364;");
        assert_eq!(detail.rows()[7].value, "https://en.wikipedia.org/wiki/U+20AC");
    }

    #[test]
    fn test_rows_without_common_name() {
        let ch = from_code_point(0x4E00).unwrap();
        let detail = CharacterDetail::new(&ch);
        assert!(!labels(&detail).contains(&"Common Name"));
        assert_eq!(detail.rows().len(), 7);
    }

    #[test]
    fn test_article_status_replaces_previous() {
        let ch = from_code_point(0x41).unwrap();
        let mut detail = CharacterDetail::new(&ch);
        detail.set_article_status(ArticleStatus::Unknown);
        detail.set_article_status(ArticleStatus::Exists);
        let wiki = detail.rows().last().unwrap();
        assert_eq!(wiki.value, "https://en.wikipedia.org/wiki/U+0041 (article exists)");
    }

    #[test]
    fn test_render_aligned() {
        let ch = from_code_point(0x41).unwrap();
        let text = CharacterDetail::new(&ch).render();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Character    A"));
        assert!(lines.iter().any(|l| l.starts_with("Code Point   U+0041")));
    }

    #[test]
    fn test_control_not_printed_raw() {
        let ch = from_code_point(0x07).unwrap();
        assert_eq!(CharacterDetail::new(&ch).rows()[0].value, "(control)");
    }
}
