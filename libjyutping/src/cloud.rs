//! Regional usage lookup against a remote dictionary service.
//!
//! This is a diagnostic aid only: it tells whether a character is Cantonese
//! specific, standard written Chinese, or both. Nothing in the table pipeline
//! depends on it, and any network or decode failure is logged and treated as
//! "no answer".
//!
//! Request: `GET <url>?char=<percent-encoded character>`
//! Response: `{"usage": "cantonese" | "standard" | "both" | ...}`
//!
//! Uses the `reqwest` blocking client, no async runtime needed.

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Regional usage of a character as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionalUsage {
    /// Only used in written Cantonese.
    Cantonese,
    /// Standard written Chinese.
    Standard,
    Both,
    /// Any label the service returns that is not one of the above.
    Unknown(String),
}

impl RegionalUsage {
    fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "cantonese" | "yue" => Self::Cantonese,
            "standard" | "zh" => Self::Standard,
            "both" => Self::Both,
            _ => Self::Unknown(label.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UsageResponse {
    usage: String,
}

/// Blocking client for the regional usage service.
pub struct RegionClassifier {
    url: String,
    timeout_ms: u64,
}

impl RegionClassifier {
    pub fn new<U: Into<String>>(url: U) -> Self {
        Self {
            url: url.into(),
            timeout_ms: 2000,
        }
    }

    /// Build a classifier from configuration, if an endpoint is configured.
    pub fn from_config(config: &crate::JyutpingConfig) -> Option<Self> {
        config.classify_url.as_ref().map(|url| {
            let mut c = Self::new(url.clone());
            c.set_timeout(config.classify_timeout_ms);
            c
        })
    }

    /// Set the request timeout in milliseconds.
    pub fn set_timeout(&mut self, timeout_ms: u64) {
        self.timeout_ms = timeout_ms;
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Classify one character. Returns `None` on any failure.
    pub fn classify(&self, character: &str) -> Option<RegionalUsage> {
        if character.is_empty() {
            return None;
        }
        match self.query_blocking(character) {
            Ok(usage) => {
                debug!("{} classified as {:?}", character, usage);
                Some(usage)
            }
            Err(e) => {
                warn!("regional usage lookup for {} failed: {}", character, e);
                None
            }
        }
    }

    fn request_url(&self, character: &str) -> String {
        let sep = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}char={}", self.url, sep, urlencoding::encode(character))
    }

    fn query_blocking(&self, character: &str) -> Result<RegionalUsage, Box<dyn std::error::Error>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(self.timeout_ms))
            .build()?;
        let response = client
            .get(self.request_url(character))
            .send()?
            .error_for_status()?;
        let body: UsageResponse = response.json()?;
        Ok(RegionalUsage::from_label(&body.usage))
    }
}
