pub mod config;
pub mod error;
pub mod fetch;
pub mod report;
pub mod rules;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::EngineConfig;
use crate::error::{Result, SiteLintError};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::report::aggregate::{self, PageInfo};
use crate::report::model::AnalysisResult;
use crate::rules::eval::{self, PageContext};
use crate::rules::select::select_rules;

pub const TOOL_NAME: &str = "sitelint";

/// Version of the rule catalog. Bump when rule ids or semantics change.
pub const RULE_CATALOG_VERSION: &str = "0.1.0";

/// What to analyse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub site_url: String,
    /// Source id, id prefix or source-name fragment; `None` means all rules.
    #[serde(default)]
    pub source_filter: Option<String>,
}

impl AnalysisRequest {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            source_filter: None,
        }
    }

    pub fn with_source(mut self, filter: impl Into<String>) -> Self {
        self.source_filter = Some(filter.into());
        self
    }
}

/// Runs analyses with one fetcher and one configuration.
pub struct Analyzer<F: PageFetcher> {
    fetcher: F,
    config: EngineConfig,
}

impl Analyzer<HttpFetcher> {
    /// Analyzer backed by a real HTTP client.
    pub fn http(config: EngineConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        Ok(Self::with_config(fetcher, config))
    }
}

impl<F: PageFetcher> Analyzer<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_config(fetcher, EngineConfig::default())
    }

    pub fn with_config(fetcher: F, config: EngineConfig) -> Self {
        Self { fetcher, config }
    }

    /// Fetch the page and evaluate the selected rules against it.
    ///
    /// Only a malformed request is an `Err`. A failed fetch yields a result
    /// with a single `connection-error` violation.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let url = validate_url(&request.site_url)?;
        let rules = select_rules(request.source_filter.as_deref());
        info!(%url, rules = rules.len(), "analysis started");

        let page = match self.fetcher.fetch(&url) {
            Ok(page) => page,
            Err(err) => {
                warn!(%url, error = %err, "fetch failed");
                return Ok(aggregate::failure_result(&url, rules.len(), &err, Utc::now()));
            }
        };

        if page.final_url != url {
            debug!(%url, final_url = %page.final_url, "followed redirect");
        }

        // Checks judge the requested URL; only the body and headers come from
        // the redirect target.
        let ctx = PageContext::new(&url, &page.body, &page.headers)
            .with_evidence(self.config.evidence);
        let outcomes = eval::evaluate(&rules, &ctx, self.config.parallel);

        let result = aggregate::aggregate(
            outcomes,
            PageInfo {
                url: &url,
                analyzed_at: Utc::now(),
                content_sha256: Some(page.fingerprint.clone()),
            },
        );
        info!(
            %url,
            score = result.overall_score,
            violations = result.violations.len(),
            "analysis finished"
        );
        Ok(result)
    }
}

/// Analyse with the default configuration over HTTP.
pub fn analyze(request: &AnalysisRequest) -> Result<AnalysisResult> {
    Analyzer::http(EngineConfig::default())?.analyze(request)
}

/// Parse `raw` as an absolute http(s) URL.
pub fn validate_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SiteLintError::InvalidInput("siteUrl is required".into()));
    }
    let url = Url::parse(raw)
        .map_err(|e| SiteLintError::InvalidInput(format!("siteUrl {raw:?} is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        "http" | "https" => Err(SiteLintError::InvalidInput(format!(
            "siteUrl {raw:?} has no host"
        ))),
        other => Err(SiteLintError::InvalidInput(format!(
            "siteUrl scheme must be http or https, got {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_url_accepts_http_and_https() {
        assert_eq!(
            validate_url(" https://example.com ").unwrap().as_str(),
            "https://example.com/"
        );
        assert!(validate_url("http://localhost:8080/x").is_ok());
    }

    #[test]
    fn validate_url_rejects_bad_input() {
        for raw in ["", "   ", "example.com", "ftp://example.com/", "not a url"] {
            let err = validate_url(raw).unwrap_err();
            assert!(matches!(err, SiteLintError::InvalidInput(_)), "{raw}: {err}");
            assert_eq!(err.http_status(), 400);
        }
    }

    #[test]
    fn request_uses_camel_case() {
        let req: AnalysisRequest =
            serde_json::from_str(r#"{"siteUrl":"https://example.com","sourceFilter":"wcag"}"#)
                .unwrap();
        assert_eq!(req, AnalysisRequest::new("https://example.com").with_source("wcag"));

        let req: AnalysisRequest = serde_json::from_str(r#"{"siteUrl":"x"}"#).unwrap();
        assert!(req.source_filter.is_none());
    }
}
