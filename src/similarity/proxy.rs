//! JSON recognition proxy adapter
//!
//! `POST {endpoint}` with `{"imageData": "<data url>"}`.
//! Success: `{"characters": [...]}`. Failure: `{"error": "..."}` and/or a
//! non-2xx status.

use log::debug;
use serde::Deserialize;
use ureq::Agent;

use super::recognizer::{RecognizeError, Recognizer};
use crate::http;

#[derive(Debug, Deserialize)]
struct ProxyResponse {
    #[serde(default)]
    characters: Option<Vec<String>>,
    #[serde(default)]
    error: Option<String>,
}

pub struct ProxyRecognizer {
    agent: Agent,
    endpoint: String,
}

impl ProxyRecognizer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            agent: http::agent(),
            endpoint: endpoint.into(),
        }
    }
}

impl Recognizer for ProxyRecognizer {
    fn recognize(&self, data_url: &str) -> Result<Vec<String>, RecognizeError> {
        let body = serde_json::json!({ "imageData": data_url }).to_string();
        let mut response = self
            .agent
            .post(self.endpoint.as_str())
            .header("User-Agent", http::user_agent())
            .header("Content-Type", "application/json")
            .send(body.as_str())?;

        let status = response.status().as_u16();
        let text = response.body_mut().read_to_string()?;
        debug!("proxy: HTTP {} ({} bytes)", status, text.len());
        parse_response(status, &text)
    }

    fn name(&self) -> &'static str {
        "proxy"
    }
}

/// Interpret a proxy reply. An `error` field wins over the status code.
fn parse_response(status: u16, body: &str) -> Result<Vec<String>, RecognizeError> {
    let parsed = serde_json::from_str::<ProxyResponse>(body);

    if let Ok(ProxyResponse {
        error: Some(message),
        ..
    }) = &parsed
    {
        return Err(RecognizeError::Service(message.clone()));
    }
    if !(200..300).contains(&status) {
        return Err(RecognizeError::Status(status));
    }

    parsed
        .map_err(|e| RecognizeError::Parse(e.to_string()))?
        .characters
        .ok_or_else(|| RecognizeError::Parse("missing \"characters\"".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        let chars = parse_response(200, r#"{"characters":["A","Α","А"]}"#).unwrap();
        assert_eq!(chars, vec!["A", "Α", "А"]);
    }

    #[test]
    fn test_parse_error_body() {
        let err = parse_response(500, r#"{"error":"Failed to recognize shape"}"#).unwrap_err();
        assert!(matches!(err, RecognizeError::Service(ref m) if m == "Failed to recognize shape"));
    }

    #[test]
    fn test_parse_error_body_on_success_status() {
        let body = r#"{"characters":["A"],"error":"quota exceeded"}"#;
        let err = parse_response(200, body).unwrap_err();
        assert!(matches!(err, RecognizeError::Service(ref m) if m == "quota exceeded"));
    }

    #[test]
    fn test_parse_bad_status_without_body() {
        let err = parse_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, RecognizeError::Status(502)));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_response(200, "not json").unwrap_err(),
            RecognizeError::Parse(_)
        ));
        assert!(matches!(
            parse_response(200, "{}").unwrap_err(),
            RecognizeError::Parse(_)
        ));
    }
}
