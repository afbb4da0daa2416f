use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::rules::catalog::{Rule, Severity};
use crate::rules::eval::Verdict;

/// Outcome of one analysis.
///
/// This struct is the JSON contract returned to callers. Field names are
/// camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub site_name: String,
    pub site_url: String,
    /// RFC 3339 timestamp, UTC.
    pub analyzed_at: String,
    pub overall_score: u8,
    pub violations: Vec<Violation>,
    pub recommendations: Vec<String>,
    pub summary: Summary,
    /// SHA-256 of the fetched body; absent when nothing was fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_sha256: Option<String>,
}

/// A failed rule, enriched with the rule's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub id: String,
    pub rule_name: String,
    pub category: String,
    pub severity: String,
    pub description: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub recommendation: String,
    pub examples: Vec<String>,
    pub page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

impl Violation {
    /// Build a violation from a failed verdict.
    pub fn from_verdict(rule: &Rule, verdict: Verdict, page: &str) -> Self {
        let recommendation = verdict
            .recommendation
            .unwrap_or_else(|| rule.fallback_recommendation());
        let (code_snippet, line_number) = match verdict.evidence {
            Some(ev) => (Some(ev.snippet), Some(ev.line_number)),
            None => (None, None),
        };

        Self {
            id: rule.id.to_string(),
            rule_name: rule.name.to_string(),
            category: rule.category.to_string(),
            severity: rule.severity.to_string(),
            description: rule.description.to_string(),
            details: verdict.details,
            rationale: Some(rule.rationale.to_string()),
            impact: Some(rule.impact.to_string()),
            source: Some(rule.source.to_string()),
            source_url: Some(rule.source_url.to_string()),
            recommendation,
            examples: rule
                .examples
                .good
                .iter()
                .chain(rule.examples.bad.iter())
                .map(|s| s.to_string())
                .collect(),
            page: page.to_string(),
            code_snippet,
            line_number,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_rules: usize,
    pub passed_rules: usize,
    pub failed_rules: usize,
    pub warning_rules: usize,
    pub info_rules: usize,
}

impl Summary {
    /// Count one failed rule under its severity bucket.
    pub fn record_failure(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.failed_rules += 1,
            Severity::Warning => self.warning_rules += 1,
            Severity::Info => self.info_rules += 1,
        }
    }

    pub fn non_passing(&self) -> usize {
        self.failed_rules + self.warning_rules + self.info_rules
    }
}

/// Host of `url` without a leading `www.`; the raw input when it has no host.
pub fn site_name(url: &Url) -> String {
    match url.host_str() {
        Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
        None => url.as_str().to_string(),
    }
}

pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
