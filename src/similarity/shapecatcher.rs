//! Direct shapecatcher.com adapter
//!
//! Posts the data URL as a form field and scrapes the candidate
//! characters out of the returned HTML.

use log::debug;
use regex::Regex;
use std::sync::OnceLock;
use ureq::Agent;
use url::form_urlencoded;

use super::recognizer::{RecognizeError, Recognizer};
use crate::http;

static CANDIDATE_REGEX: OnceLock<Regex> = OnceLock::new();

fn candidate_regex() -> &'static Regex {
    CANDIDATE_REGEX.get_or_init(|| {
        Regex::new(r"<span class='detail_character_unicode'[^>]*>([^<]+)</span>")
            .expect("Failed to compile candidate regex")
    })
}

/// Candidates in document order
pub fn scrape_candidates(html: &str) -> Vec<String> {
    candidate_regex()
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}

pub struct ShapecatcherRecognizer {
    agent: Agent,
    endpoint: String,
}

impl ShapecatcherRecognizer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            agent: http::agent(),
            endpoint: endpoint.into(),
        }
    }
}

impl Recognizer for ShapecatcherRecognizer {
    fn recognize(&self, data_url: &str) -> Result<Vec<String>, RecognizeError> {
        let form = form_urlencoded::Serializer::new(String::new())
            .append_pair("file", data_url)
            .finish();

        let mut response = self
            .agent
            .post(self.endpoint.as_str())
            .header("User-Agent", http::user_agent())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .send(form.as_str())?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(RecognizeError::Status(status));
        }
        let html = response.body_mut().read_to_string()?;
        let candidates = scrape_candidates(&html);
        debug!("shapecatcher: {} candidates", candidates.len());
        Ok(candidates)
    }

    fn name(&self) -> &'static str {
        "shapecatcher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_in_order() {
        let html = "<div><span class='detail_character_unicode' style='x'>A</span>\
                    <span class='other'>skip</span>\
                    <span class='detail_character_unicode'>Α</span>\
                    <span class='detail_character_unicode'>А</span></div>";
        assert_eq!(scrape_candidates(html), vec!["A", "Α", "А"]);
    }

    #[test]
    fn test_scrape_nothing() {
        assert!(scrape_candidates("<html>No matches</html>").is_empty());
    }
}
