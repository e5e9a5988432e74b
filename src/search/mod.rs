//! Character search
//!
//! Linear scan over generated characters, category by category in table
//! order, matching any of several fields by substring. The scan stops at a
//! global result cap, so later categories may not be visited at all.

use log::debug;

use crate::constants::SEARCH_MAX_RESULTS;
use crate::unicode::{categories, generate, UnicodeCharacter};

/// Search engine with a global result cap
#[derive(Debug, Clone)]
pub struct SearchEngine {
    max_results: usize,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SEARCH_MAX_RESULTS)
    }
}

/// Pre-lowered forms of a query, computed once per search
struct Query<'a> {
    raw: &'a str,
    lower: String,
    hex: String,
}

impl<'a> Query<'a> {
    fn new(raw: &'a str) -> Self {
        let lower = raw.to_lowercase();
        let hex = lower
            .strip_prefix("u+")
            .or_else(|| lower.strip_prefix("0x"))
            .unwrap_or(&lower)
            .to_string();
        Self { raw, lower, hex }
    }

    fn matches(&self, c: &UnicodeCharacter) -> bool {
        let mut buf = [0u8; 4];
        if c.ch.encode_utf8(&mut buf).contains(self.raw) {
            return true;
        }
        if c.name.to_lowercase().contains(&self.lower) {
            return true;
        }
        if c
            .common_name
            .is_some_and(|n| n.to_lowercase().contains(&self.lower))
        {
            return true;
        }
        if c.html_entity.contains(&self.lower) {
            return true;
        }
        if self.hex.is_empty() {
            return false;
        }
        format!("{:x}", c.code_point).contains(&self.hex)
            || format!("{:04x}", c.code_point).contains(&self.hex)
    }
}

impl SearchEngine {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    /// Search the given categories (all when `None` or empty).
    ///
    /// Results keep table order, then ascending code point. An empty query
    /// returns nothing without scanning.
    pub fn search(&self, query: &str, category_ids: Option<&[String]>) -> Vec<UnicodeCharacter> {
        if query.is_empty() || self.max_results == 0 {
            return Vec::new();
        }

        let q = Query::new(query);
        let mut results = Vec::new();
        let mut scanned = 0usize;

        'categories: for category in categories::select(category_ids) {
            scanned += 1;
            for c in generate(category) {
                if q.matches(&c) {
                    results.push(c);
                    if results.len() >= self.max_results {
                        break 'categories;
                    }
                }
            }
        }

        debug!(
            "search {:?}: {} results from {} categories",
            query,
            results.len(),
            scanned
        );
        results
    }
}
