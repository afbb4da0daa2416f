use crate::TOOL_NAME;
use crate::report::model::AnalysisResult;

pub fn render_text(result: &AnalysisResult) -> String {
    let s = &result.summary;
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", TOOL_NAME, env!("CARGO_PKG_VERSION")));
    out.push_str(&format!("Site: {} ({})\n", result.site_name, result.site_url));
    out.push_str(&format!("Analyzed at: {}\n", result.analyzed_at));
    out.push_str(&format!("Score: {}/100\n", result.overall_score));
    out.push_str(&format!(
        "Rules: {} total, {} passed, {} failed, {} warnings, {} info\n",
        s.total_rules, s.passed_rules, s.failed_rules, s.warning_rules, s.info_rules
    ));

    if !result.recommendations.is_empty() {
        out.push_str("Recommendations:\n");
        for r in &result.recommendations {
            out.push_str(&format!("  * {r}\n"));
        }
    }

    out.push_str("Violations:\n");
    if result.violations.is_empty() {
        out.push_str("  (none)\n");
    }
    for v in &result.violations {
        out.push_str(&format!(
            "  - {} [{}] {}: {}\n",
            v.id, v.severity, v.rule_name, v.details
        ));
        if let Some(line) = v.line_number {
            out.push_str(&format!("      at line {line}\n"));
        }
        out.push_str(&format!("      fix: {}\n", v.recommendation));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteLintError;
    use crate::report::aggregate::failure_result;
    use chrono::Utc;
    use url::Url;

    #[test]
    fn failure_result_renders_connectivity_violation() {
        let url = Url::parse("https://www.example.com/").unwrap();
        let err = SiteLintError::Timeout { after_ms: 10_000 };
        let text = render_text(&failure_result(&url, 3, &err, Utc::now()));

        assert!(text.starts_with("sitelint "));
        assert!(text.contains("Site: example.com (https://www.example.com/)"));
        assert!(text.contains("Score: 0/100"));
        assert!(text.contains("Rules: 3 total, 0 passed, 1 failed, 0 warnings, 0 info"));
        assert!(text.contains("connection-error [error] Site Connection: request timed out after 10000 ms"));
        assert!(text.contains("* Fix 1 Connectivity issue"));
    }
}
