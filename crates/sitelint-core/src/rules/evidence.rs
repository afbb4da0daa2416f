use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::EvidenceConfig;

/// A located snippet of the page supporting a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub snippet: String,
    /// 1-based line of the matching line within the body.
    pub line_number: usize,
}

/// Locate the first body line satisfying `is_match` and cut a context window
/// around it.
pub fn locate(
    html: &str,
    cfg: &EvidenceConfig,
    mut is_match: impl FnMut(&str) -> bool,
) -> Option<Evidence> {
    let lines: Vec<&str> = html.lines().collect();
    let idx = lines.iter().position(|l| is_match(*l))?;

    let start = idx.saturating_sub(cfg.context_lines);
    let end = (idx + cfg.context_lines + 1).min(lines.len());
    let window = lines[start..end].join("\n");

    let snippet = if window.chars().count() > cfg.max_chars {
        window.chars().take(cfg.max_chars).collect()
    } else {
        window
    };

    Some(Evidence {
        snippet,
        line_number: idx + 1,
    })
}

/// Window around the line containing byte `offset`.
pub fn locate_offset(html: &str, cfg: &EvidenceConfig, offset: usize) -> Option<Evidence> {
    let target = html.get(..offset)?.matches('\n').count();
    let mut line = 0;
    locate(html, cfg, |_| {
        line += 1;
        line == target + 1
    })
}

pub fn locate_pattern(html: &str, cfg: &EvidenceConfig, re: &Regex) -> Option<Evidence> {
    locate(html, cfg, |line| re.is_match(line))
}
