//! Page retrieval.
//!
//! The engine only sees a `FetchResult`; how it was obtained is behind the
//! `PageFetcher` trait so analyses can run against canned content.

pub mod http;

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};
use url::Url;

use crate::error::Result;

pub use http::HttpFetcher;

pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> Result<FetchResult>;
}

/// Response headers keyed case-insensitively.
///
/// Names are stored lowercase; repeated headers are joined with `", "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(BTreeMap<String, String>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.0
            .entry(name.to_ascii_lowercase())
            .and_modify(|v| {
                v.push_str(", ");
                v.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&name.to_ascii_lowercase())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (k, v) in iter {
            headers.insert(k.as_ref(), v.as_ref());
        }
        headers
    }
}

/// Body and headers of the page under analysis.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// URL the body was actually read from (after at most one redirect).
    pub final_url: Url,
    pub status: u16,
    pub body: String,
    pub headers: Headers,
    /// Hex SHA-256 of the body bytes.
    pub fingerprint: String,
}

impl FetchResult {
    pub fn new(final_url: Url, status: u16, body: String, headers: Headers) -> Self {
        let fingerprint = fingerprint(body.as_bytes());
        Self {
            final_url,
            status,
            body,
            headers,
            fingerprint,
        }
    }
}

pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
