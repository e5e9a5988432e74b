//! Similar-character lookup
//!
//! Renders a character onto the drawing canvas, submits it to a shape
//! recognizer and keeps the results in a per-code-point cache.
//!
//! Only the most recent request counts: each lookup records its subject as
//! the current target, and a completion whose subject is no longer current
//! is discarded without touching the cache.

pub mod lookalikes;
pub mod proxy;
pub mod recognizer;
pub mod shapecatcher;

use anyhow::{anyhow, Context, Result};
use log::{debug, info, trace, warn};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::{SimilarityBackend, SimilarityConfig};
use crate::constants::RECOGNITION_GLYPH_PX;
use crate::drawing::Canvas;
use crate::font::GlyphSource;
use crate::unicode::{from_code_point, from_single_char, UnicodeCharacter};

pub use proxy::ProxyRecognizer;
pub use recognizer::{single_scalar, Recognizer};
pub use shapecatcher::ShapecatcherRecognizer;

/// No lookup in flight (not a valid scalar value)
const NO_TARGET: u32 = u32::MAX;

/// Result of a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimilarityOutcome {
    Committed(Vec<UnicodeCharacter>),
    /// A newer lookup started before this one finished
    Superseded,
}

pub struct SimilarityClient {
    recognizer: Arc<dyn Recognizer>,
    glyphs: Arc<dyn GlyphSource>,
    /// Code point -> candidate code points
    cache: Mutex<HashMap<u32, Vec<u32>>>,
    current: AtomicU32,
}

impl SimilarityClient {
    pub fn new(recognizer: Arc<dyn Recognizer>, glyphs: Arc<dyn GlyphSource>) -> Self {
        Self {
            recognizer,
            glyphs,
            cache: Mutex::new(HashMap::new()),
            current: AtomicU32::new(NO_TARGET),
        }
    }

    /// Build the configured backend
    pub fn from_config(config: &SimilarityConfig, glyphs: Arc<dyn GlyphSource>) -> Self {
        let recognizer: Arc<dyn Recognizer> = match config.backend {
            SimilarityBackend::Proxy => Arc::new(ProxyRecognizer::new(config.proxy_url.as_str())),
            SimilarityBackend::Shapecatcher => {
                Arc::new(ShapecatcherRecognizer::new(config.shapecatcher_url.as_str()))
            }
        };
        info!("Similarity backend: {}", recognizer.name());

        let client = Self::new(recognizer, glyphs);
        if config.use_builtin_cache {
            client.with_builtin_cache()
        } else {
            client
        }
    }

    /// Seed the cache with the built-in look-alike table
    pub fn with_builtin_cache(self) -> Self {
        if let Ok(mut cache) = self.cache.lock() {
            for (query, candidates) in lookalikes::LOOKALIKES {
                cache.insert(*query, candidates.to_vec());
            }
            debug!("similarity: seeded {} cache entries", cache.len());
        }
        self
    }

    /// Cached candidates for a code point
    pub fn cached(&self, code_point: u32) -> Option<Vec<u32>> {
        self.cache.lock().ok()?.get(&code_point).cloned()
    }

    /// Record `code_point` as the current lookup target
    pub fn begin(&self, code_point: u32) {
        self.current.store(code_point, Ordering::SeqCst);
    }

    pub fn is_current(&self, code_point: u32) -> bool {
        self.current.load(Ordering::SeqCst) == code_point
    }

    /// Find characters that look like `ch`.
    ///
    /// Cached results are returned without a network call unless `force`
    /// is set. Failures yield an empty list.
    pub async fn find_similar(&self, ch: &UnicodeCharacter, force: bool) -> SimilarityOutcome {
        let code_point = ch.code_point;
        self.begin(code_point);

        if !force {
            if let Some(candidates) = self.cached(code_point) {
                debug!("similarity: cache hit for {}", ch.code_point_label());
                return SimilarityOutcome::Committed(rehydrate(&candidates));
            }
        }

        let result = self.recognize_char(ch.ch).await;

        if !self.is_current(code_point) {
            debug!("similarity: discarding stale result for {}", ch.code_point_label());
            return SimilarityOutcome::Superseded;
        }

        match result {
            Ok(raw) => {
                let candidates = filter_candidates(code_point, &raw);
                trace!("similarity: {:?} -> {:?}", raw, candidates);
                if let Ok(mut cache) = self.cache.lock() {
                    cache.insert(code_point, candidates.clone());
                }
                SimilarityOutcome::Committed(rehydrate(&candidates))
            }
            Err(e) => {
                warn!("Similarity lookup for {} failed: {:#}", ch.code_point_label(), e);
                SimilarityOutcome::Committed(Vec::new())
            }
        }
    }

    /// Recognize a drawing. Every returned character is kept in order.
    pub async fn recognize_drawing(&self, canvas: &Canvas) -> Vec<UnicodeCharacter> {
        let data_url = match canvas.to_data_url() {
            Ok(url) => url,
            Err(e) => {
                warn!("Canvas export failed: {}", e);
                return Vec::new();
            }
        };

        let recognizer = Arc::clone(&self.recognizer);
        let result = tokio::task::spawn_blocking(move || recognizer.recognize(&data_url))
            .await
            .context("recognition task failed")
            .and_then(|r| r.map_err(anyhow::Error::from));

        match result {
            Ok(raw) => raw.iter().filter_map(|s| from_single_char(s)).collect(),
            Err(e) => {
                warn!("Drawing recognition failed: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Render and submit on the blocking pool
    async fn recognize_char(&self, ch: char) -> Result<Vec<String>> {
        let recognizer = Arc::clone(&self.recognizer);
        let glyphs = Arc::clone(&self.glyphs);
        tokio::task::spawn_blocking(move || -> Result<Vec<String>> {
            let data_url = render_query(glyphs.as_ref(), ch)?;
            Ok(recognizer.recognize(&data_url)?)
        })
        .await
        .context("recognition task failed")?
    }
}

/// Draw the character black on white, centered, as a PNG data URL
fn render_query(glyphs: &dyn GlyphSource, ch: char) -> Result<String> {
    let glyph = glyphs
        .glyph(ch, RECOGNITION_GLYPH_PX)
        .ok_or_else(|| anyhow!("no glyph for U+{:04X}", ch as u32))?;
    let mut canvas = Canvas::new();
    canvas.draw_glyph(&glyph);
    Ok(canvas.to_data_url()?)
}

/// Drop the echoed first entry, multi-scalar strings and the query itself
pub fn filter_candidates(query: u32, raw: &[String]) -> Vec<u32> {
    raw.iter()
        .skip(1)
        .filter_map(|s| single_scalar(s))
        .map(|ch| ch as u32)
        .filter(|&cp| cp != query)
        .collect()
}

fn rehydrate(candidates: &[u32]) -> Vec<UnicodeCharacter> {
    candidates
        .iter()
        .filter_map(|&cp| from_code_point(cp))
        .collect()
}
