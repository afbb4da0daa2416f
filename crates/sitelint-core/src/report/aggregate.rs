//! Aggregation of rule outcomes into an `AnalysisResult`.
//!
//! Responsibilities:
//! - Turn failed verdicts into violations, in evaluation order
//! - Count passes and failures by severity
//! - Compute the overall score
//! - Derive per-category recommendations
//! - Build the degenerate result for an analysis whose fetch failed
//!
//! Scoring policy:
//!
//!   score = round(100 * passed / total), and 0 when nothing was evaluated
//!
//! Recommendations are one line per violated category, in order of each
//! category's first violation, capped at five. They are not sorted by
//! count or severity.

use chrono::{DateTime, Utc};
use url::Url;

use crate::error::SiteLintError;
use crate::report::model::{AnalysisResult, Summary, Violation, site_name, timestamp};
use crate::rules::catalog::Severity;
use crate::rules::eval::RuleOutcome;

pub const MAX_RECOMMENDATIONS: usize = 5;

pub const CONNECTION_ERROR_ID: &str = "connection-error";
pub const CONNECTIVITY_CATEGORY: &str = "Connectivity";

/// Inputs to an aggregation that are not rule outcomes.
#[derive(Debug, Clone)]
pub struct PageInfo<'a> {
    pub url: &'a Url,
    pub analyzed_at: DateTime<Utc>,
    pub content_sha256: Option<String>,
}

pub fn aggregate(outcomes: Vec<RuleOutcome<'_>>, page: PageInfo<'_>) -> AnalysisResult {
    let page_url = page.url.as_str();
    let mut summary = Summary {
        total_rules: outcomes.len(),
        ..Summary::default()
    };
    let mut violations = Vec::new();

    for outcome in outcomes {
        if outcome.verdict.passed {
            summary.passed_rules += 1;
        } else {
            summary.record_failure(outcome.rule.severity);
            violations.push(Violation::from_verdict(outcome.rule, outcome.verdict, page_url));
        }
    }

    AnalysisResult {
        site_name: site_name(page.url),
        site_url: page_url.to_string(),
        analyzed_at: timestamp(page.analyzed_at),
        overall_score: score(summary.passed_rules, summary.total_rules),
        recommendations: recommendations(&violations),
        violations,
        summary,
        content_sha256: page.content_sha256,
    }
}

pub fn score(passed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * passed as f64 / total as f64).round().clamp(0.0, 100.0) as u8
}

/// "Fix N <category> issue(s)" per category, first-seen order, at most five.
pub fn recommendations(violations: &[Violation]) -> Vec<String> {
    let mut groups: Vec<(&str, usize)> = Vec::new();
    for v in violations {
        match groups.iter_mut().find(|(c, _)| *c == v.category) {
            Some((_, n)) => *n += 1,
            None => groups.push((&v.category, 1)),
        }
    }

    groups
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(category, n)| {
            let noun = if n == 1 { "issue" } else { "issues" };
            format!("Fix {n} {category} {noun}")
        })
        .collect()
}

/// Result for an analysis whose page could not be fetched.
///
/// The summary is deliberately not reconciled with the single violation:
/// `total_rules` is the number of rules that would have run.
pub fn failure_result(
    url: &Url,
    selected_rules: usize,
    error: &SiteLintError,
    analyzed_at: DateTime<Utc>,
) -> AnalysisResult {
    let violation = Violation {
        id: CONNECTION_ERROR_ID.to_string(),
        rule_name: "Site Connection".to_string(),
        category: CONNECTIVITY_CATEGORY.to_string(),
        severity: Severity::Error.to_string(),
        description: "The site could not be fetched, so no rules were evaluated".to_string(),
        details: error.to_string(),
        rationale: None,
        impact: None,
        source: None,
        source_url: None,
        recommendation: "Verify that the URL is correct and the site is reachable".to_string(),
        examples: Vec::new(),
        page: url.as_str().to_string(),
        code_snippet: None,
        line_number: None,
    };

    AnalysisResult {
        site_name: site_name(url),
        site_url: url.as_str().to_string(),
        analyzed_at: timestamp(analyzed_at),
        overall_score: 0,
        recommendations: recommendations(std::slice::from_ref(&violation)),
        violations: vec![violation],
        summary: Summary {
            total_rules: selected_rules,
            failed_rules: 1,
            ..Summary::default()
        },
        content_sha256: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::catalog::find_rule;
    use crate::rules::eval::{Tier, Verdict};

    fn out(id: &str, passed: bool) -> RuleOutcome<'static> {
        RuleOutcome {
            rule: find_rule(id).unwrap(),
            tier: Tier::Specific,
            verdict: Verdict::check(passed, "d"),
        }
    }

    fn page(url: &Url) -> PageInfo<'_> {
        PageInfo {
            url,
            analyzed_at: Utc::now(),
            content_sha256: Some("abc".into()),
        }
    }

    fn violation(category: &str) -> Violation {
        let mut v = Violation::from_verdict(
            find_rule("sec-001").unwrap(),
            Verdict::fail("d"),
            "https://example.com/",
        );
        v.category = category.to_string();
        v
    }

    #[test]
    fn score_rounds_and_handles_empty() {
        assert_eq!(score(0, 0), 0);
        assert_eq!(score(1, 3), 33);
        assert_eq!(score(2, 3), 67);
        assert_eq!(score(1, 2), 50);
        assert_eq!(score(5, 5), 100);
    }

    #[test]
    fn summary_counts_add_up() {
        let url = Url::parse("https://www.example.com/").unwrap();
        // sec-001 error, sec-005 warning, seo-011 info
        let outcomes = vec![
            out("html-002", true),
            out("sec-001", false),
            out("sec-005", false),
            out("seo-011", false),
        ];
        let r = aggregate(outcomes, page(&url));

        let s = r.summary;
        assert_eq!(s.total_rules, 4);
        assert_eq!(
            s.passed_rules + s.failed_rules + s.warning_rules + s.info_rules,
            s.total_rules
        );
        assert_eq!(r.violations.len(), s.non_passing());
        assert_eq!(r.overall_score, 25);
        assert_eq!(r.site_name, "example.com");
        assert_eq!(r.content_sha256.as_deref(), Some("abc"));
    }

    #[test]
    fn violations_keep_evaluation_order() {
        let url = Url::parse("https://example.com/").unwrap();
        let outcomes = vec![out("seo-001", false), out("html-002", false), out("sec-001", false)];
        let r = aggregate(outcomes, page(&url));
        let ids: Vec<_> = r.violations.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["seo-001", "html-002", "sec-001"]);
    }

    #[test]
    fn empty_selection_scores_zero() {
        let url = Url::parse("https://example.com/").unwrap();
        let r = aggregate(Vec::new(), page(&url));
        assert_eq!(r.overall_score, 0);
        assert_eq!(r.summary, Summary::default());
        assert!(r.recommendations.is_empty());
    }

    #[test]
    fn recommendations_group_in_first_seen_order() {
        let vs = vec![
            violation("SEO"),
            violation("Security"),
            violation("SEO"),
            violation("SEO"),
        ];
        assert_eq!(
            recommendations(&vs),
            vec!["Fix 3 SEO issues".to_string(), "Fix 1 Security issue".to_string()]
        );
    }

    #[test]
    fn recommendations_are_capped_at_five_categories() {
        let vs: Vec<_> = ["A", "B", "C", "D", "E", "F", "A"]
            .iter()
            .map(|c| violation(c))
            .collect();
        let recs = recommendations(&vs);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert_eq!(recs[0], "Fix 2 A issues");
        assert!(!recs.iter().any(|r| r.contains(" F ")));
    }

    #[test]
    fn failure_result_has_single_connectivity_violation() {
        let url = Url::parse("https://unreachable.example/").unwrap();
        let err = SiteLintError::ConnectionFailure("dns error".into());
        let r = failure_result(&url, 62, &err, Utc::now());

        assert_eq!(r.overall_score, 0);
        assert_eq!(r.violations.len(), 1);
        let v = &r.violations[0];
        assert_eq!(v.id, CONNECTION_ERROR_ID);
        assert_eq!(v.category, "Connectivity");
        assert_eq!(v.severity, "error");
        assert!(v.details.contains("dns error"));
        assert!(v.examples.is_empty());
        assert_eq!(v.page, "https://unreachable.example/");

        assert_eq!(r.summary.total_rules, 62);
        assert_eq!(r.summary.failed_rules, 1);
        assert_eq!(
            (r.summary.passed_rules, r.summary.warning_rules, r.summary.info_rules),
            (0, 0, 0)
        );
        assert_eq!(r.recommendations, vec!["Fix 1 Connectivity issue".to_string()]);
        assert!(r.content_sha256.is_none());
    }
}
