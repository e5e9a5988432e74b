//! Shape recognition adapters
//!
//! A recognizer takes a PNG data URL and returns the characters the
//! service considers closest, best match first.

use thiserror::Error;

/// Recognition failures (never propagated past the similarity client)
#[derive(Debug, Error)]
pub enum RecognizeError {
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),
    #[error("service returned HTTP {0}")]
    Status(u16),
    #[error("service error: {0}")]
    Service(String),
    #[error("malformed response: {0}")]
    Parse(String),
}

/// Swappable recognition backend
pub trait Recognizer: Send + Sync {
    /// Ordered candidate strings for the image
    fn recognize(&self, data_url: &str) -> Result<Vec<String>, RecognizeError>;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}

/// The single scalar value a candidate string holds, if it holds exactly one
pub fn single_scalar(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
