//! Rule evaluation engine.
//!
//! Every selected rule is resolved through three tiers:
//!
//!   1. a specific check registered for the rule id (`rules::checks`)
//!   2. a heuristic keyed on the rule's category
//!   3. a failing "manual inspection required" verdict
//!
//! Responsibilities:
//! - Route rules to checks and fall back when none is registered
//! - Isolate each rule: an error or panic inside a check becomes a failed
//!   verdict for that rule only
//! - Fill in a recommendation for failing rules that did not supply one
//! - Keep outcomes in rule order, sequential or parallel
//!
//! Non-responsibilities:
//! - Fetching the page (`fetch`)
//! - Scoring and summarising outcomes (`report::aggregate`)

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::EvidenceConfig;
use crate::error::{Result, SiteLintError};
use crate::fetch::Headers;
use crate::rules::catalog::Rule;
use crate::rules::checks;
use crate::rules::evidence::{self, Evidence};
use crate::rules::patterns::*;

const SCRIPT_TAG_LIMIT: usize = 20;
const PAGE_BYTES_LIMIT: usize = 500_000;

/// A specific check.
pub type Check = fn(&PageContext<'_>) -> Result<Verdict>;

/// Everything a check may look at.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub url: &'a Url,
    pub html: &'a str,
    pub headers: &'a Headers,
    pub evidence: EvidenceConfig,
}

impl<'a> PageContext<'a> {
    pub fn new(url: &'a Url, html: &'a str, headers: &'a Headers) -> Self {
        Self {
            url,
            html,
            headers,
            evidence: EvidenceConfig::default(),
        }
    }

    pub fn with_evidence(mut self, evidence: EvidenceConfig) -> Self {
        self.evidence = evidence;
        self
    }

    /// Snippet around the first line matching `re`.
    pub fn locate(&self, re: &Regex) -> Option<Evidence> {
        evidence::locate_pattern(self.html, &self.evidence, re)
    }

    /// Snippet around the line holding byte `offset` of the body.
    pub fn locate_at(&self, offset: usize) -> Option<Evidence> {
        evidence::locate_offset(self.html, &self.evidence, offset)
    }

    /// Snippet around the first line satisfying `is_match`.
    pub fn locate_line(&self, is_match: impl FnMut(&str) -> bool) -> Option<Evidence> {
        evidence::locate(self.html, &self.evidence, is_match)
    }
}

/// Result of one rule against one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub passed: bool,
    pub details: String,
    pub recommendation: Option<String>,
    pub evidence: Option<Evidence>,
}

impl Verdict {
    pub fn check(passed: bool, details: impl Into<String>) -> Self {
        Self {
            passed,
            details: details.into(),
            recommendation: None,
            evidence: None,
        }
    }

    pub fn pass(details: impl Into<String>) -> Self {
        Self::check(true, details)
    }

    pub fn fail(details: impl Into<String>) -> Self {
        Self::check(false, details)
    }

    pub fn recommend(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    pub fn with_evidence(mut self, evidence: Option<Evidence>) -> Self {
        self.evidence = evidence;
        self
    }
}

/// Which tier decided a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Specific,
    CategoryHeuristic,
    ManualReview,
}

impl Tier {
    pub fn of(rule: &Rule) -> Self {
        if checks::lookup(rule.id).is_some() {
            return Tier::Specific;
        }
        let category = rule.category.to_lowercase();
        if ["javascript", "performance", "accessibility"]
            .iter()
            .any(|c| category.contains(c))
        {
            Tier::CategoryHeuristic
        } else {
            Tier::ManualReview
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome<'r> {
    pub rule: &'r Rule,
    pub tier: Tier,
    pub verdict: Verdict,
}

/// Evaluate one rule. Never fails: faults are folded into the verdict.
pub fn evaluate_rule<'r>(rule: &'r Rule, page: &PageContext<'_>) -> RuleOutcome<'r> {
    let tier = Tier::of(rule);
    let mut verdict = match checks::lookup(rule.id) {
        Some(check) => isolate(rule, || check(page)),
        None => isolate(rule, || category_default(rule, page)),
    };

    if !verdict.passed && verdict.recommendation.is_none() {
        verdict.recommendation = Some(rule.fallback_recommendation());
    }

    debug!(rule = rule.id, ?tier, passed = verdict.passed, "rule evaluated");
    RuleOutcome {
        rule,
        tier,
        verdict,
    }
}

/// Evaluate `rules` against `page`, preserving rule order.
pub fn evaluate<'r>(
    rules: &[&'r Rule],
    page: &PageContext<'_>,
    parallel: bool,
) -> Vec<RuleOutcome<'r>> {
    if parallel {
        rules.par_iter().map(|&r| evaluate_rule(r, page)).collect()
    } else {
        rules.iter().map(|&r| evaluate_rule(r, page)).collect()
    }
}

fn isolate(rule: &Rule, run: impl FnOnce() -> Result<Verdict>) -> Verdict {
    let result = panic::catch_unwind(AssertUnwindSafe(run)).unwrap_or_else(|payload| {
        Err(SiteLintError::EvaluationFault {
            rule_id: rule.id.to_string(),
            message: panic_message(payload.as_ref()),
        })
    });

    match result {
        Ok(verdict) => verdict,
        Err(err) => {
            let message = match err {
                SiteLintError::EvaluationFault { message, .. } => message,
                other => other.to_string(),
            };
            warn!(rule = rule.id, %message, "rule evaluation failed");
            Verdict::fail(format!("Evaluation error: {message}"))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "check panicked".to_string()
    }
}

/// Coarse verdict for rules without a specific check.
fn category_default(rule: &Rule, page: &PageContext<'_>) -> Result<Verdict> {
    let category = rule.category.to_lowercase();

    if category.contains("javascript") {
        let scripts = re!(SCRIPT_OPEN).find_iter(page.html).count();
        let details = format!("{scripts} <script> tags (heuristic limit {SCRIPT_TAG_LIMIT})");
        return Ok(Verdict::check(scripts < SCRIPT_TAG_LIMIT, details));
    }

    if category.contains("performance") {
        let bytes = page.html.len();
        let details = format!("Page is {bytes} bytes (heuristic limit {PAGE_BYTES_LIMIT})");
        return Ok(Verdict::check(bytes < PAGE_BYTES_LIMIT, details));
    }

    if category.contains("accessibility") {
        let aria = re!(ARIA_ATTR).is_match(page.html);
        let alt = re!(ALT_ATTR).is_match(page.html);
        return Ok(if aria || alt {
            Verdict::pass("Page uses ARIA or alt attributes")
        } else {
            Verdict::fail("No ARIA or alt attributes found")
        });
    }

    Ok(Verdict::fail(format!(
        "Manual inspection required: no automated check for \"{}\"",
        rule.name
    )))
}
