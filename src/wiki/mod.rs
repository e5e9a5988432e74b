//! Wikipedia article-existence probe
//!
//! Queries the MediaWiki API for the `U+XXXX` article of a code point.
//! Follows the same latest-request-wins rule as the similarity client.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use ureq::Agent;
use url::Url;

use crate::constants::WIKI_ARTICLE_URL;
use crate::http;

const NO_TARGET: u32 = u32::MAX;

/// Whether an article exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStatus {
    Exists,
    Missing,
    /// Lookup failed; status not known
    Unknown,
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ArticleStatus::Exists => "article exists",
            ArticleStatus::Missing => "no article",
            ArticleStatus::Unknown => "status unknown",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Committed(ArticleStatus),
    Superseded,
}

/// Article title for a code point: `U+` and 4-6 uppercase hex digits
pub fn article_title(code_point: u32) -> String {
    format!("U+{:04X}", code_point)
}

pub fn article_url(code_point: u32) -> String {
    format!("{}{}", WIKI_ARTICLE_URL, article_title(code_point))
}

/// Query URL for a title (`+` is sent as `%2B`)
pub fn query_url(api_url: &str, title: &str) -> Result<Url> {
    Url::parse_with_params(
        api_url,
        &[("action", "query"), ("format", "json"), ("titles", title)],
    )
    .with_context(|| format!("invalid wiki API URL: {}", api_url))
}

/// Interpret a `action=query` response.
///
/// The API reports a nonexistent title as a single page keyed `-1`.
pub fn parse_query_response(body: &str) -> ArticleStatus {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return ArticleStatus::Unknown;
    };
    let Some(pages) = value
        .get("query")
        .and_then(|q| q.get("pages"))
        .and_then(|p| p.as_object())
    else {
        return ArticleStatus::Unknown;
    };

    match pages.len() {
        0 => ArticleStatus::Unknown,
        1 if pages.contains_key("-1") => ArticleStatus::Missing,
        _ => ArticleStatus::Exists,
    }
}

/// Raw API access (blocking)
pub trait WikiApi: Send + Sync {
    fn query(&self, title: &str) -> Result<String>;
}

pub struct HttpWikiApi {
    agent: Agent,
    api_url: String,
}

impl HttpWikiApi {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            agent: http::agent(),
            api_url: api_url.into(),
        }
    }
}

impl WikiApi for HttpWikiApi {
    fn query(&self, title: &str) -> Result<String> {
        let url = query_url(&self.api_url, title)?;
        let mut response = self
            .agent
            .get(url.as_str())
            .header("User-Agent", http::user_agent())
            .call()
            .context("wiki request failed")?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            anyhow::bail!("wiki API returned HTTP {}", status);
        }
        response
            .body_mut()
            .read_to_string()
            .context("failed to read wiki response")
    }
}

pub struct ArticleProbe {
    api: Arc<dyn WikiApi>,
    current: AtomicU32,
}

impl ArticleProbe {
    pub fn new(api: Arc<dyn WikiApi>) -> Self {
        Self {
            api,
            current: AtomicU32::new(NO_TARGET),
        }
    }

    pub fn from_url(api_url: &str) -> Self {
        Self::new(Arc::new(HttpWikiApi::new(api_url)))
    }

    /// Check whether the code point has an article
    pub async fn check(&self, code_point: u32) -> ProbeOutcome {
        self.current.store(code_point, Ordering::SeqCst);

        let title = article_title(code_point);
        let api = Arc::clone(&self.api);
        let result = tokio::task::spawn_blocking(move || api.query(&title))
            .await
            .context("wiki task failed")
            .and_then(|r| r);

        if self.current.load(Ordering::SeqCst) != code_point {
            debug!("wiki: discarding stale result for U+{:04X}", code_point);
            return ProbeOutcome::Superseded;
        }

        let status = match result {
            Ok(body) => parse_query_response(&body),
            Err(e) => {
                warn!("Wiki probe for U+{:04X} failed: {:#}", code_point, e);
                ArticleStatus::Unknown
            }
        };
        debug!("wiki: U+{:04X} {}", code_point, status);
        ProbeOutcome::Committed(status)
    }
}
