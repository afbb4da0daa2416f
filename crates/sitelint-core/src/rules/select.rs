//! Rule selection by source filter token.
//!
//! A token selects the union of:
//! - the rules a registered source with that id lists (`webdev`)
//! - rules whose id prefix equals the token (`wcag` → `wcag-*`)
//! - rules whose source citation contains the token, case-insensitively
//!
//! `"all"`, an empty token, or no token at all select the whole catalog.
//! Catalog order is preserved in every case.

use crate::rules::catalog::{RULES, Rule, find_source};

pub const ALL: &str = "all";

pub fn select_rules(filter: Option<&str>) -> Vec<&'static Rule> {
    select_from(RULES, filter)
}

pub fn select_from<'a>(catalog: &'a [Rule], filter: Option<&str>) -> Vec<&'a Rule> {
    let token = filter.map(str::trim).unwrap_or_default();
    if token.is_empty() || token.eq_ignore_ascii_case(ALL) {
        return catalog.iter().collect();
    }

    let registered = find_source(token);
    let needle = token.to_lowercase();
    catalog
        .iter()
        .filter(|r| {
            registered.is_some_and(|s| s.covers(r.id))
                || r.prefix().eq_ignore_ascii_case(token)
                || r.source.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::catalog::SOURCES;

    fn ids(rules: &[&Rule]) -> Vec<&'static str> {
        rules.iter().map(|r| r.id).collect()
    }

    #[test]
    fn all_and_empty_select_everything() {
        assert_eq!(select_rules(None).len(), RULES.len());
        assert_eq!(select_rules(Some("")).len(), RULES.len());
        assert_eq!(select_rules(Some("ALL")).len(), RULES.len());
        assert_eq!(ids(&select_rules(Some("all")))[0], RULES[0].id);
    }

    #[test]
    fn id_prefix_selects_namespace() {
        let picked = select_rules(Some("js"));
        assert_eq!(picked.len(), 7);
        assert!(picked.iter().all(|r| r.id.starts_with("js-")));
    }

    #[test]
    fn source_substring_is_case_insensitive() {
        let picked = select_rules(Some("search central"));
        assert!(!picked.is_empty());
        assert!(picked.iter().all(|r| r.source == "Google Search Central"));
    }

    #[test]
    fn prefix_and_source_matches_are_unioned() {
        // "wcag" is both the id prefix and part of the "WCAG 2.1" citation;
        // "mdn" only matches the citation of the html-* rules.
        let wcag = select_rules(Some("wcag"));
        assert_eq!(wcag.len(), 13);

        let mdn = select_rules(Some("mdn"));
        assert!(mdn.iter().all(|r| r.id.starts_with("html-")));
        assert_eq!(mdn.len(), 8);
    }

    #[test]
    fn selection_preserves_catalog_order() {
        let picked = ids(&select_rules(Some("seo")));
        let mut sorted = picked.clone();
        sorted.sort_by_key(|id| RULES.iter().position(|r| r.id == *id));
        assert_eq!(picked, sorted);
    }

    #[test]
    fn every_registered_source_selects_its_rules() {
        for source in SOURCES {
            let picked = ids(&select_rules(Some(source.id)));
            let listed: Vec<_> = source.rules().iter().map(|r| r.id).collect();
            assert!(!picked.is_empty(), "{} selects nothing", source.id);
            assert_eq!(picked, listed, "{}", source.id);
        }
    }

    #[test]
    fn registry_id_without_matching_prefix_or_citation() {
        let webdev = select_rules(Some("WebDev"));
        assert_eq!(webdev.len(), 9);
        assert!(webdev.iter().all(|r| r.id.starts_with("perf-")));

        let css = ids(&select_rules(Some("css-guidelines")));
        assert_eq!(css, ["css-001", "css-002", "css-003", "css-004", "css-005"]);
    }

    #[test]
    fn unknown_token_selects_nothing() {
        assert!(select_rules(Some("no-such-standard")).is_empty());
    }
}
