//! Blocking HTTP fetcher.
//!
//! Redirect policy: automatic redirects are disabled and exactly one hop is
//! followed by hand. Whatever the second response is, including another 3xx
//! or a 4xx, its body and headers are used as the page. Only a
//! non-redirected response is held to the 2xx requirement.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, LOCATION};
use reqwest::redirect::Policy;
use tracing::{debug, warn};
use url::Url;

use crate::config::FetchConfig;
use crate::error::{Result, SiteLintError};
use crate::fetch::{FetchResult, Headers, PageFetcher};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Self::build(&config.user_agent, config.timeout())
    }

    /// Same as `new`, with an explicit timeout.
    pub fn with_timeout(config: &FetchConfig, timeout: Duration) -> Result<Self> {
        Self::build(&config.user_agent, timeout)
    }

    fn build(user_agent: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(Policy::none())
            .timeout(timeout)
            .build()
            .map_err(|e| SiteLintError::ConnectionFailure(error_chain(&e)))?;

        Ok(Self { client, timeout })
    }

    fn get(&self, url: &Url) -> Result<Response> {
        self.client
            .get(url.as_str())
            .send()
            .map_err(|e| self.classify(e))
    }

    fn read(&self, url: Url, response: Response) -> Result<FetchResult> {
        let status = response.status().as_u16();
        let headers: Headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().map_err(|e| self.classify(e))?;
        Ok(FetchResult::new(url, status, body, headers))
    }

    fn classify(&self, err: reqwest::Error) -> SiteLintError {
        if err.is_timeout() {
            SiteLintError::Timeout {
                after_ms: self.timeout.as_millis() as u64,
            }
        } else {
            SiteLintError::ConnectionFailure(error_chain(&err))
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<FetchResult> {
        debug!(%url, "fetching page");
        let first = self.get(url)?;
        let status = first.status();

        if status.is_redirection() {
            if let Some(next) = redirect_target(url, first.headers()) {
                debug!(from = %url, to = %next, "following single redirect hop");
                let second = self.get(&next)?;
                if !second.status().is_success() {
                    warn!(%next, status = second.status().as_u16(), "redirect target is not 2xx; using it as-is");
                }
                return self.read(next, second);
            }
        }

        if !status.is_success() {
            return Err(SiteLintError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        self.read(url.clone(), first)
    }
}

/// Resolve `Location` against the request URL.
fn redirect_target(base: &Url, headers: &HeaderMap) -> Option<Url> {
    let location = headers.get(LOCATION)?.to_str().ok()?;
    base.join(location.trim()).ok()
}

/// Display an error together with its sources, e.g.
/// `error sending request: tcp connect error: Connection refused`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !msg.contains(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        source = inner.source();
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn relative_location_resolves_against_request() {
        let base = Url::parse("https://example.com/old/page").unwrap();
        let next = redirect_target(&base, &location("/new")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/new");
    }

    #[test]
    fn absolute_location_is_used_verbatim() {
        let base = Url::parse("http://example.com/").unwrap();
        let next = redirect_target(&base, &location("https://www.example.org/x")).unwrap();
        assert_eq!(next.as_str(), "https://www.example.org/x");
    }

    #[test]
    fn missing_location_yields_none() {
        let base = Url::parse("http://example.com/").unwrap();
        assert!(redirect_target(&base, &HeaderMap::new()).is_none());
    }

    #[test]
    fn error_chain_includes_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let outer = std::io::Error::other(inner);
        assert!(error_chain(&outer).contains("refused"));
    }
}
