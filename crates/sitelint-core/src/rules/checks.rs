//! Rule-specific predicates and the dispatch table routing rule ids to them.
//!
//! Each check is a pure function of the page context. Several rule ids
//! share one check (HTTPS, render-blocking, heading hierarchy, ...); the
//! sharing lives in `ROUTES`, not in duplicated functions.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use crate::error::Result;
use crate::rules::eval::{Check, PageContext, Verdict};
use crate::rules::evidence::Evidence;
use crate::rules::patterns::*;

/// Anchor texts that say nothing about the destination.
const GENERIC_LINK_TEXT: &[&str] = &["click here", "here", "more", "read more", "link"];

static ROUTES: &[(&str, Check)] = &[
    ("sec-001", https),
    ("sec-002", security_headers_any),
    ("sec-003", content_security_policy),
    ("sec-004", hardening_headers),
    ("sec-005", strict_transport_security),
    ("sec-006", mixed_content),
    ("sec-007", safe_external_links),
    ("wcag-001", image_alt_text),
    ("wcag-002", page_language),
    ("wcag-003", page_titled),
    ("wcag-004", heading_hierarchy),
    ("wcag-005", form_labels),
    ("wcag-006", generic_link_text),
    ("wcag-007", focus_visible),
    ("wcag-008", semantic_structure),
    ("wcag-009", skip_link),
    ("wcag-010", small_text),
    ("wcag-013", media_captions),
    ("html-001", essential_meta),
    ("html-002", doctype),
    ("html-003", semantic_structure),
    ("html-004", deprecated_elements),
    ("html-005", inline_styles),
    ("html-006", render_blocking),
    ("html-007", duplicate_ids),
    ("perf-001", render_blocking),
    ("perf-002", image_delivery),
    ("perf-003", layout_shift),
    ("perf-005", caching_headers),
    ("perf-006", resource_hints),
    ("perf-007", font_display),
    ("perf-009", script_request_count),
    ("seo-001", title_quality),
    ("seo-002", meta_description),
    ("seo-003", heading_hierarchy),
    ("seo-004", canonical_url),
    ("seo-005", open_graph),
    ("seo-006", json_ld),
    ("seo-007", microdata),
    ("seo-008", https),
    ("seo-009", url_hygiene),
    ("seo-010", indexable),
    ("seo-011", sitemap_reference),
    ("seo-012", mobile_viewport),
    ("js-001", no_console),
    ("js-002", no_debugger),
    ("js-003", strict_equality),
    ("js-004", render_blocking),
    ("js-006", no_eval),
    ("js-007", no_document_write),
    ("css-001", focus_visible),
    ("css-002", sparing_important),
    ("css-003", no_css_import),
    ("css-004", small_text),
];

static DISPATCH: LazyLock<HashMap<&'static str, Check>> =
    LazyLock::new(|| ROUTES.iter().copied().collect());

/// The specific check registered for `rule_id`, if any.
pub fn lookup(rule_id: &str) -> Option<Check> {
    DISPATCH.get(rule_id).copied()
}

// ── Transport & headers ───────────────────────────────────────────────────

fn https(ctx: &PageContext<'_>) -> Result<Verdict> {
    let scheme = ctx.url.scheme();
    if scheme == "https" {
        return Ok(Verdict::pass("Page is served over HTTPS"));
    }
    Ok(Verdict::fail(format!("Page is served over {scheme}, not HTTPS"))
        .recommend("Serve the site over HTTPS and redirect every HTTP request to it"))
}

fn security_headers_any(ctx: &PageContext<'_>) -> Result<Verdict> {
    let present = present_headers(
        ctx,
        &["content-security-policy", "x-content-type-options", "x-frame-options"],
    );
    if present.is_empty() {
        return Ok(Verdict::fail(
            "No Content-Security-Policy, X-Content-Type-Options or X-Frame-Options header",
        )
        .recommend("Send at least Content-Security-Policy, X-Content-Type-Options: nosniff and X-Frame-Options"));
    }
    Ok(Verdict::pass(format!("Security headers present: {}", present.join(", "))))
}

fn content_security_policy(ctx: &PageContext<'_>) -> Result<Verdict> {
    match ctx.headers.get("content-security-policy") {
        Some(policy) => Ok(Verdict::pass(format!("Content-Security-Policy: {policy}"))),
        None => Ok(Verdict::fail("No Content-Security-Policy header")),
    }
}

fn hardening_headers(ctx: &PageContext<'_>) -> Result<Verdict> {
    let wanted = ["x-content-type-options", "x-frame-options", "referrer-policy"];
    let present = present_headers(ctx, &wanted);
    let missing: Vec<&str> = wanted
        .iter()
        .copied()
        .filter(|h| !present.contains(h))
        .collect();
    let details = format!(
        "{} of 3 hardening headers present{}",
        present.len(),
        if missing.is_empty() {
            String::new()
        } else {
            format!(" (missing: {})", missing.join(", "))
        }
    );
    Ok(Verdict::check(present.len() >= 2, details))
}

fn strict_transport_security(ctx: &PageContext<'_>) -> Result<Verdict> {
    match ctx.headers.get("strict-transport-security") {
        Some(v) => Ok(Verdict::pass(format!("Strict-Transport-Security: {v}"))),
        None => Ok(Verdict::fail("No Strict-Transport-Security header")),
    }
}

fn mixed_content(ctx: &PageContext<'_>) -> Result<Verdict> {
    if ctx.url.scheme() != "https" {
        return Ok(Verdict::pass("Page is not served over HTTPS; mixed content does not apply"));
    }
    let insecure_src = re!(INSECURE_SRC);
    let insecure_href = re!(INSECURE_HREF);
    let link_tag = re!(LINK_TAG);

    let src_count = insecure_src.find_iter(ctx.html).count();
    let link_count = link_tag
        .find_iter(ctx.html)
        .filter(|m| insecure_href.is_match(m.as_str()))
        .count();
    let total = src_count + link_count;
    if total == 0 {
        return Ok(Verdict::pass("All subresources are loaded over HTTPS"));
    }
    Ok(
        Verdict::fail(format!("{total} subresource(s) loaded over plain HTTP"))
            .with_evidence(ctx.locate_line(|line| {
                insecure_src.is_match(line)
                    || link_tag
                        .find_iter(line)
                        .any(|m| insecure_href.is_match(m.as_str()))
            })),
    )
}

fn safe_external_links(ctx: &PageContext<'_>) -> Result<Verdict> {
    let anchor = re!(ANCHOR_OPEN);
    let blank = re!(TARGET_BLANK);
    let noopener = re!(REL_NOOPENER);
    let unsafe_link = |tag: &str| blank.is_match(tag) && !noopener.is_match(tag);

    let count = anchor
        .find_iter(ctx.html)
        .filter(|m| unsafe_link(m.as_str()))
        .count();
    if count == 0 {
        return Ok(Verdict::pass("Every target=\"_blank\" link sets rel=\"noopener\""));
    }
    Ok(
        Verdict::fail(format!("{count} target=\"_blank\" link(s) without rel=\"noopener\""))
            .with_evidence(
                ctx.locate_line(|line| anchor.find_iter(line).any(|m| unsafe_link(m.as_str()))),
            ),
    )
}

fn caching_headers(ctx: &PageContext<'_>) -> Result<Verdict> {
    let present = present_headers(ctx, &["cache-control", "etag"]);
    if present.is_empty() {
        return Ok(Verdict::fail("Response carries neither Cache-Control nor ETag"));
    }
    Ok(Verdict::pass(format!("Caching headers present: {}", present.join(", "))))
}

fn presence(found: bool, present: &str, absent: &str) -> Verdict {
    if found {
        Verdict::pass(present)
    } else {
        Verdict::fail(absent)
    }
}

fn present_headers<'h>(ctx: &PageContext<'_>, names: &[&'h str]) -> Vec<&'h str> {
    names
        .iter()
        .copied()
        .filter(|h| ctx.headers.contains(h))
        .collect()
}

// ── Document structure ────────────────────────────────────────────────────

fn doctype(ctx: &PageContext<'_>) -> Result<Verdict> {
    if re!(DOCTYPE).is_match(ctx.html) {
        return Ok(Verdict::pass("<!DOCTYPE html> declaration present"));
    }
    Ok(Verdict::fail("Missing <!DOCTYPE html> declaration")
        .recommend("Add <!DOCTYPE html> as the very first line of the document")
        .with_evidence(ctx.locate(re!(HTML_OPEN))))
}

fn essential_meta(ctx: &PageContext<'_>) -> Result<Verdict> {
    let charset = re!(CHARSET_ATTR);
    let viewport = re!(NAME_VIEWPORT);
    let description = re!(NAME_DESCRIPTION);

    let tags: Vec<&str> = re!(META_TAG).find_iter(ctx.html).map(|m| m.as_str()).collect();
    let has_charset = tags.iter().any(|t| charset.is_match(t));
    let has_viewport = tags.iter().any(|t| viewport.is_match(t));
    let has_description = tags.iter().any(|t| description.is_match(t));

    if has_charset && has_viewport {
        let note = if has_description {
            ""
        } else {
            " (no meta description)"
        };
        return Ok(Verdict::pass(format!("Charset and viewport meta tags present{note}")));
    }

    let mut missing = Vec::new();
    if !has_charset {
        missing.push("charset");
    }
    if !has_viewport {
        missing.push("viewport");
    }
    Ok(
        Verdict::fail(format!("Missing meta tags: {}", missing.join(", ")))
            .with_evidence(ctx.locate(re!(HEAD_OPEN))),
    )
}

fn page_language(ctx: &PageContext<'_>) -> Result<Verdict> {
    if re!(HTML_LANG).is_match(ctx.html) {
        return Ok(Verdict::pass("<html> declares a lang attribute"));
    }
    Ok(Verdict::fail("<html> element has no lang attribute")
        .with_evidence(ctx.locate(re!(HTML_OPEN))))
}

fn semantic_structure(ctx: &PageContext<'_>) -> Result<Verdict> {
    let found: BTreeSet<String> = re!(LANDMARK)
        .captures_iter(ctx.html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect();
    let list = found.iter().cloned().collect::<Vec<_>>().join(", ");
    if found.len() >= 2 {
        return Ok(Verdict::pass(format!("Semantic landmarks present: {list}")));
    }
    let details = if found.is_empty() {
        "No <nav>, <main>, <header> or <footer> elements found".to_string()
    } else {
        format!("Only one semantic landmark found ({list}); expected at least 2")
    };
    Ok(Verdict::fail(details).with_evidence(ctx.locate(re!(BODY_OPEN))))
}

fn heading_hierarchy(ctx: &PageContext<'_>) -> Result<Verdict> {
    let h1 = re!(H1);
    let h3 = re!(H3);
    let h1_count = h1.find_iter(ctx.html).count();
    let h2_count = re!(H2).find_iter(ctx.html).count();
    let h3_count = h3.find_iter(ctx.html).count();
    let skipped = h3_count > 0 && h2_count == 0;

    if h1_count == 1 && !skipped {
        return Ok(Verdict::pass("One <h1> and no skipped heading levels"));
    }

    let mut problems = Vec::new();
    match h1_count {
        0 => problems.push("No <h1> heading found".to_string()),
        1 => {}
        n => problems.push(format!("Found {n} <h1> headings; expected exactly one")),
    }
    if skipped {
        problems.push("Heading level skipped: <h3> used without any <h2>".to_string());
    }

    let evidence = if h1_count > 1 {
        // Point at the second <h1>, the first redundant one.
        let mut seen = 0;
        ctx.locate_line(|line| {
            seen += h1.find_iter(line).count();
            seen >= 2
        })
    } else if skipped {
        ctx.locate(h3)
    } else {
        None
    };

    Ok(Verdict::fail(problems.join("; "))
        .recommend("Use a single <h1> for the page topic and nest <h2>-<h6> without skipping levels")
        .with_evidence(evidence))
}

fn deprecated_elements(ctx: &PageContext<'_>) -> Result<Verdict> {
    let re = re!(DEPRECATED_ELEMENT);
    let found: BTreeSet<String> = re
        .captures_iter(ctx.html)
        .filter_map(|c| c.get(1))
        .map(|m| format!("<{}>", m.as_str().to_ascii_lowercase()))
        .collect();
    if found.is_empty() {
        return Ok(Verdict::pass("No deprecated presentational elements"));
    }
    Ok(Verdict::fail(format!(
        "Deprecated elements used: {}",
        found.into_iter().collect::<Vec<_>>().join(", ")
    ))
    .recommend("Replace presentational elements with semantic markup styled by CSS")
    .with_evidence(ctx.locate(re)))
}

fn inline_styles(ctx: &PageContext<'_>) -> Result<Verdict> {
    let re = re!(STYLE_ATTR);
    let count = re.find_iter(ctx.html).count();
    if count < 10 {
        return Ok(Verdict::pass(format!("{count} inline style attribute(s)")));
    }
    Ok(
        Verdict::fail(format!("{count} inline style attributes (threshold 10)"))
            .with_evidence(ctx.locate(re)),
    )
}

fn duplicate_ids(ctx: &PageContext<'_>) -> Result<Verdict> {
    let re = re!(ID_ATTR);
    let tag_re = re!(TAG);
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tag in tag_re.find_iter(ctx.html) {
        if let Some(id) = attr_value(re, tag.as_str()) {
            *counts.entry(id).or_default() += 1;
        }
    }
    let dups: Vec<&str> = counts
        .iter()
        .filter(|(_, n)| **n > 1)
        .map(|(id, _)| *id)
        .collect();
    if dups.is_empty() {
        return Ok(Verdict::pass(format!("{} unique id attribute(s)", counts.len())));
    }
    let first = dups[0];
    Ok(
        Verdict::fail(format!("Duplicate id values: {}", dups.join(", "))).with_evidence(
            ctx.locate_line(|line| {
                tag_re
                    .find_iter(line)
                    .any(|t| attr_value(re, t.as_str()) == Some(first))
            }),
        ),
    )
}

// ── Titles, descriptions & metadata ──────────────────────────────────────

fn title_text<'h>(ctx: &PageContext<'h>) -> Result<Option<&'h str>> {
    Ok(first_capture(re!(TITLE), ctx.html)
        .map(str::trim)
        .filter(|t| !t.is_empty()))
}

fn title_quality(ctx: &PageContext<'_>) -> Result<Verdict> {
    let evidence = ctx.locate(re!(TITLE_OPEN));
    let Some(title) = title_text(ctx)? else {
        return Ok(Verdict::fail("Missing or empty page title")
            .recommend("Add a descriptive <title> between 10 and 60 characters")
            .with_evidence(evidence));
    };
    let len = title.chars().count();
    if (10..=60).contains(&len) {
        return Ok(Verdict::pass(format!("Title is {len} characters: \"{title}\"")));
    }
    Ok(
        Verdict::fail(format!(
            "Title length is {len} characters (recommended 10-60): \"{title}\""
        ))
        .recommend("Rewrite the title to between 10 and 60 characters")
        .with_evidence(evidence),
    )
}

fn page_titled(ctx: &PageContext<'_>) -> Result<Verdict> {
    match title_text(ctx)? {
        Some(title) => Ok(Verdict::pass(format!("Page title: \"{title}\""))),
        None => Ok(Verdict::fail("Missing or empty page title")
            .with_evidence(ctx.locate(re!(TITLE_OPEN)))),
    }
}

fn meta_description(ctx: &PageContext<'_>) -> Result<Verdict> {
    let name = re!(NAME_DESCRIPTION);
    let content = re!(CONTENT_ATTR);
    let Some(tag) = re!(META_TAG)
        .find_iter(ctx.html)
        .map(|m| m.as_str())
        .find(|t| name.is_match(t))
    else {
        return Ok(Verdict::fail("Missing meta description")
            .recommend("Add a <meta name=\"description\"> of 120 to 160 characters"));
    };

    let evidence = ctx.locate_line(|line| line.contains(tag));
    let text = attr_value(content, tag).unwrap_or_default().trim();
    if text.is_empty() {
        return Ok(Verdict::fail("Meta description is empty").with_evidence(evidence));
    }
    let len = text.chars().count();
    if (120..=160).contains(&len) {
        return Ok(Verdict::pass(format!("Meta description is {len} characters")));
    }
    Ok(
        Verdict::fail(format!(
            "Meta description is {len} characters (recommended 120-160)"
        ))
        .with_evidence(evidence),
    )
}

fn open_graph(ctx: &PageContext<'_>) -> Result<Verdict> {
    let found: BTreeSet<String> = re!(OG_PROPERTY)
        .captures_iter(ctx.html)
        .filter_map(|c| c.get(1))
        .map(|m| format!("og:{}", m.as_str().to_ascii_lowercase()))
        .collect();
    let missing: Vec<String> = ["og:title", "og:description", "og:image", "og:url"]
        .iter()
        .filter(|p| !found.contains(**p))
        .map(|p| p.to_string())
        .collect();
    let details = format!(
        "{} of 4 core Open Graph tags present{}",
        found.len(),
        if missing.is_empty() {
            String::new()
        } else {
            format!(" (missing: {})", missing.join(", "))
        }
    );
    Ok(Verdict::check(found.len() >= 3, details))
}

fn canonical_url(ctx: &PageContext<'_>) -> Result<Verdict> {
    if re!(CANONICAL).is_match(ctx.html) {
        return Ok(Verdict::pass("Canonical link present"));
    }
    Ok(Verdict::fail("No <link rel=\"canonical\"> found")
        .with_evidence(ctx.locate(re!(HEAD_OPEN))))
}

fn json_ld(ctx: &PageContext<'_>) -> Result<Verdict> {
    Ok(presence(
        re!(JSON_LD).is_match(ctx.html),
        "JSON-LD structured data present",
        "No JSON-LD structured data found",
    ))
}

fn microdata(ctx: &PageContext<'_>) -> Result<Verdict> {
    Ok(presence(
        re!(MICRODATA).is_match(ctx.html),
        "Microdata (itemscope/itemprop) present",
        "No itemscope or itemprop microdata found",
    ))
}

fn indexable(ctx: &PageContext<'_>) -> Result<Verdict> {
    let robots = re!(NAME_ROBOTS);
    let content = re!(CONTENT_ATTR);
    let blocking = re!(META_TAG)
        .find_iter(ctx.html)
        .map(|m| m.as_str())
        .find(|t| {
            robots.is_match(t)
                && attr_value(content, t)
                    .is_some_and(|c| c.to_ascii_lowercase().contains("noindex"))
        });
    match blocking {
        None => Ok(Verdict::pass("No robots noindex directive")),
        Some(tag) => Ok(Verdict::fail("Robots meta tag blocks indexing (noindex)")
            .recommend("Remove noindex from the robots meta tag on pages meant to be found")
            .with_evidence(ctx.locate_line(|line| line.contains(tag)))),
    }
}

fn sitemap_reference(ctx: &PageContext<'_>) -> Result<Verdict> {
    let found = ctx.html.to_ascii_lowercase().contains("sitemap");
    Ok(presence(
        found,
        "Page references a sitemap",
        "No reference to a sitemap found",
    ))
}

fn mobile_viewport(ctx: &PageContext<'_>) -> Result<Verdict> {
    let viewport = re!(NAME_VIEWPORT);
    let found = re!(META_TAG)
        .find_iter(ctx.html)
        .any(|m| viewport.is_match(m.as_str()));
    Ok(presence(
        found,
        "Responsive viewport meta tag present",
        "No viewport meta tag; the page will render at desktop width on phones",
    ))
}

fn url_hygiene(ctx: &PageContext<'_>) -> Result<Verdict> {
    let path = ctx.url.path();
    let mut problems = Vec::new();
    if path.contains('_') {
        problems.push("contains underscores");
    }
    if path.chars().any(|c| c.is_ascii_uppercase()) {
        problems.push("contains uppercase letters");
    }
    if path.len() >= 100 {
        problems.push("is 100 characters or longer");
    }
    if problems.is_empty() {
        return Ok(Verdict::pass(format!("URL path \"{path}\" is clean")));
    }
    Ok(Verdict::fail(format!("URL path \"{path}\" {}", problems.join(", ")))
        .recommend("Use short, lowercase, hyphen-separated URL paths"))
}

// ── Images & media ────────────────────────────────────────────────────────

fn image_alt_text(ctx: &PageContext<'_>) -> Result<Verdict> {
    let img = re!(IMG_TAG);
    let alt = re!(ALT_ATTR);
    let total = img.find_iter(ctx.html).count();
    if total == 0 {
        return Ok(Verdict::pass("No images found"));
    }
    let missing = img
        .find_iter(ctx.html)
        .filter(|m| !alt.is_match(m.as_str()))
        .count();
    if missing == 0 {
        return Ok(Verdict::pass(format!("All {total} images have alt attributes")));
    }
    Ok(
        Verdict::fail(format!("{missing} of {total} images are missing alt attributes"))
            .recommend("Add alt=\"...\" describing each informative image, or alt=\"\" for decorative ones")
            .with_evidence(ctx.locate_line(|line| {
                img.find_iter(line).any(|m| !alt.is_match(m.as_str()))
            })),
    )
}

fn image_delivery(ctx: &PageContext<'_>) -> Result<Verdict> {
    let modern = re!(MODERN_SOURCE).is_match(ctx.html);
    let lazy = re!(LAZY_LOADING).is_match(ctx.html);
    if modern && lazy {
        return Ok(Verdict::pass("Modern image formats and lazy loading in use"));
    }
    let mut missing = Vec::new();
    if !modern {
        missing.push("no WebP/AVIF <source>");
    }
    if !lazy {
        missing.push("no loading=\"lazy\" images");
    }
    Ok(Verdict::fail(format!("Image delivery: {}", missing.join(", ")))
        .with_evidence(ctx.locate(re!(IMG_TAG))))
}

fn layout_shift(ctx: &PageContext<'_>) -> Result<Verdict> {
    let img = re!(IMG_TAG);
    let width = re!(WIDTH_ATTR);
    let height = re!(HEIGHT_ATTR);
    let sized = |tag: &str| width.is_match(tag) && height.is_match(tag);

    let total = img.find_iter(ctx.html).count();
    if total == 0 {
        return Ok(Verdict::pass("No images found"));
    }
    let with_dims = img.find_iter(ctx.html).filter(|m| sized(m.as_str())).count();
    let ratio = with_dims as f64 / total as f64;
    let details = format!(
        "{with_dims} of {total} images declare width and height ({:.0}%)",
        ratio * 100.0
    );
    if ratio > 0.8 {
        return Ok(Verdict::pass(details));
    }
    Ok(Verdict::fail(details)
        .with_evidence(ctx.locate_line(|line| img.find_iter(line).any(|m| !sized(m.as_str())))))
}

fn media_captions(ctx: &PageContext<'_>) -> Result<Verdict> {
    let video = re!(VIDEO);
    if !video.is_match(ctx.html) {
        return Ok(Verdict::pass("No <video> elements found"));
    }
    if re!(TRACK).is_match(ctx.html) {
        return Ok(Verdict::pass("Video captions provided with <track>"));
    }
    Ok(Verdict::fail("<video> present without a <track> element")
        .with_evidence(ctx.locate(video)))
}

// ── Links & forms ─────────────────────────────────────────────────────────

fn generic_link_text(ctx: &PageContext<'_>) -> Result<Verdict> {
    let anchor = re!(ANCHOR);
    let is_generic = |inner: &str| -> Result<bool> {
        let text = text_content(inner)?.to_lowercase();
        Ok(GENERIC_LINK_TEXT.contains(&text.as_str()))
    };

    let mut generic = 0;
    for caps in anchor.captures_iter(ctx.html) {
        if let Some(inner) = caps.get(2) {
            if is_generic(inner.as_str())? {
                generic += 1;
            }
        }
    }
    if generic == 0 {
        return Ok(Verdict::pass("No generic link text found"));
    }
    Ok(
        Verdict::fail(format!(
            "{generic} link(s) use generic text such as \"click here\" or \"read more\""
        ))
        .with_evidence(ctx.locate_line(|line| {
            anchor.captures_iter(line).any(|c| {
                c.get(2)
                    .is_some_and(|inner| is_generic(inner.as_str()).unwrap_or(false))
            })
        })),
    )
}

fn skip_link(ctx: &PageContext<'_>) -> Result<Verdict> {
    let fragment = re!(HREF_FRAGMENT);
    let mut found = false;
    for caps in re!(ANCHOR).captures_iter(ctx.html) {
        let attrs = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let inner = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        if fragment.is_match(attrs) && text_content(inner)?.to_lowercase().contains("skip") {
            found = true;
            break;
        }
    }
    Ok(presence(
        found,
        "Skip navigation link present",
        "No in-page \"skip\" link found",
    ))
}

fn form_labels(ctx: &PageContext<'_>) -> Result<Verdict> {
    let id = re!(ID_ATTR);
    let inputs: Vec<&str> = re!(INPUT_TAG)
        .find_iter(ctx.html)
        .map(|m| m.as_str())
        .collect();
    if inputs.is_empty() {
        return Ok(Verdict::pass("No form inputs found"));
    }

    let targets: HashSet<&str> = re!(LABEL_FOR)
        .captures_iter(ctx.html)
        .filter_map(|c| c.iter().skip(1).flatten().next())
        .map(|m| m.as_str())
        .collect();
    let labelled = |tag: &str| attr_value(id, tag).is_some_and(|v| targets.contains(v));
    let matched = inputs.iter().filter(|&&t| labelled(t)).count();
    let ratio = matched as f64 / inputs.len() as f64;
    let details = format!(
        "{matched} of {} inputs have a matching <label for> ({:.0}%)",
        inputs.len(),
        ratio * 100.0
    );
    if ratio >= 0.8 {
        return Ok(Verdict::pass(details));
    }
    let input = re!(INPUT_TAG);
    Ok(Verdict::fail(details)
        .with_evidence(ctx.locate_line(|line| input.find_iter(line).any(|m| !labelled(m.as_str())))))
}

// ── Rendering ─────────────────────────────────────────────────────────────

fn render_blocking(ctx: &PageContext<'_>) -> Result<Verdict> {
    let script = re!(SCRIPT_TAG);
    let src = re!(SRC_ATTR);
    let deferred = re!(DEFER_ASYNC);
    let link = re!(LINK_TAG);
    let stylesheet = re!(REL_STYLESHEET);
    let print = re!(MEDIA_PRINT);

    let blocking_script = |tag: &str| src.is_match(tag) && !deferred.is_match(tag);
    let blocking_style = |tag: &str| stylesheet.is_match(tag) && !print.is_match(tag);

    let scripts = script
        .find_iter(ctx.html)
        .filter(|m| blocking_script(m.as_str()))
        .count();
    let styles = link
        .find_iter(ctx.html)
        .filter(|m| blocking_style(m.as_str()))
        .count();

    if scripts == 0 && styles == 0 {
        return Ok(Verdict::pass("No render-blocking scripts or stylesheets"));
    }
    Ok(
        Verdict::fail(format!(
            "{scripts} render-blocking script(s) and {styles} render-blocking stylesheet(s)"
        ))
        .recommend("Add defer or async to external scripts and load non-critical CSS asynchronously")
        .with_evidence(ctx.locate_line(|line| {
            script.find_iter(line).any(|m| blocking_script(m.as_str()))
                || link.find_iter(line).any(|m| blocking_style(m.as_str()))
        })),
    )
}

fn resource_hints(ctx: &PageContext<'_>) -> Result<Verdict> {
    Ok(presence(
        re!(RESOURCE_HINT).is_match(ctx.html),
        "preconnect, dns-prefetch or preload hints present",
        "No preconnect, dns-prefetch or preload hints",
    ))
}

fn font_display(ctx: &PageContext<'_>) -> Result<Verdict> {
    let face = re!(FONT_FACE);
    if !face.is_match(ctx.html) {
        return Ok(Verdict::pass("No @font-face declarations"));
    }
    if re!(FONT_DISPLAY).is_match(ctx.html) {
        return Ok(Verdict::pass("@font-face declares font-display"));
    }
    Ok(Verdict::fail("@font-face without a font-display strategy")
        .with_evidence(ctx.locate(face)))
}

fn script_request_count(ctx: &PageContext<'_>) -> Result<Verdict> {
    let src = re!(SRC_ATTR);
    let count = re!(SCRIPT_TAG)
        .find_iter(ctx.html)
        .filter(|m| src.is_match(m.as_str()))
        .count();
    let details = format!("{count} external script(s) (threshold 15)");
    Ok(Verdict::check(count < 15, details))
}

// ── Scripts ───────────────────────────────────────────────────────────────

/// Concatenated bodies of inline, non-JSON script blocks.
/// Bodies of inline `<script>` elements, skipping external and JSON-LD ones.
fn inline_scripts<'a>(ctx: &PageContext<'a>) -> Result<Vec<regex::Match<'a>>> {
    let src = re!(SRC_ATTR);
    let json = re!(JSON_LD_TYPE);
    let mut out = Vec::new();
    for caps in re!(INLINE_SCRIPT).captures_iter(ctx.html) {
        let attrs = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        if src.is_match(attrs) || json.is_match(attrs) {
            continue;
        }
        out.extend(caps.get(2));
    }
    Ok(out)
}

fn inline_script_text(ctx: &PageContext<'_>) -> Result<String> {
    Ok(inline_scripts(ctx)?
        .iter()
        .map(|body| format!("{}\n", body.as_str()))
        .collect())
}

/// Evidence at the first `pattern` match that lies inside an inline script.
fn locate_in_scripts(ctx: &PageContext<'_>, pattern: &regex::Regex) -> Result<Option<Evidence>> {
    let hit = inline_scripts(ctx)?
        .iter()
        .find_map(|body| pattern.find(body.as_str()).map(|m| body.start() + m.start()));
    Ok(hit.and_then(|offset| ctx.locate_at(offset)))
}

fn forbidden_in_scripts(
    ctx: &PageContext<'_>,
    pattern: &regex::Regex,
    what: &str,
) -> Result<Verdict> {
    let count: usize = inline_scripts(ctx)?
        .iter()
        .map(|body| pattern.find_iter(body.as_str()).count())
        .sum();
    if count == 0 {
        return Ok(Verdict::pass(format!("No {what} in inline scripts")));
    }
    Ok(
        Verdict::fail(format!("{count} {what} occurrence(s) in inline scripts"))
            .with_evidence(locate_in_scripts(ctx, pattern)?),
    )
}

fn no_console(ctx: &PageContext<'_>) -> Result<Verdict> {
    forbidden_in_scripts(ctx, re!(CONSOLE_CALL), "console.*() call")
}

fn no_debugger(ctx: &PageContext<'_>) -> Result<Verdict> {
    forbidden_in_scripts(ctx, re!(DEBUGGER), "debugger statement")
}

fn no_eval(ctx: &PageContext<'_>) -> Result<Verdict> {
    forbidden_in_scripts(ctx, re!(EVAL_CALL), "eval() call")
}

fn no_document_write(ctx: &PageContext<'_>) -> Result<Verdict> {
    forbidden_in_scripts(ctx, re!(DOCUMENT_WRITE), "document.write() call")
}

fn strict_equality(ctx: &PageContext<'_>) -> Result<Verdict> {
    let scripts = inline_script_text(ctx)?;
    let loose = re!(LOOSE_EQUALITY);
    if !loose.is_match(&scripts) {
        return Ok(Verdict::pass("No loose equality comparisons in inline scripts"));
    }
    if re!(STRICT_EQUALITY).is_match(&scripts) {
        return Ok(Verdict::pass("Strict equality is used alongside loose comparisons"));
    }
    Ok(Verdict::fail("Inline scripts use == / != without any === / !==")
        .with_evidence(locate_in_scripts(ctx, loose)?))
}

// ── Styles ────────────────────────────────────────────────────────────────

fn focus_visible(ctx: &PageContext<'_>) -> Result<Verdict> {
    let re = re!(FOCUS_OUTLINE_NONE);
    if !re.is_match(ctx.html) {
        return Ok(Verdict::pass("Focus outlines are not removed"));
    }
    Ok(Verdict::fail(":focus rule removes the outline without a replacement")
        .recommend("Style :focus-visible instead of removing the outline on :focus")
        .with_evidence(ctx.locate(re)))
}

fn small_text(ctx: &PageContext<'_>) -> Result<Verdict> {
    let re = re!(FONT_SIZE_PX);
    let is_small = |text: &str| {
        re.captures_iter(text).any(|c| {
            c.get(1)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .is_some_and(|px| px < 14.0)
        })
    };
    let small = re
        .captures_iter(ctx.html)
        .filter_map(|c| c.get(1))
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .filter(|px| *px < 14.0)
        .count();
    let details = format!("{small} font-size declaration(s) below 14px (threshold 5)");
    if small < 5 {
        return Ok(Verdict::pass(details));
    }
    Ok(Verdict::fail(details).with_evidence(ctx.locate_line(is_small)))
}

fn sparing_important(ctx: &PageContext<'_>) -> Result<Verdict> {
    let re = re!(IMPORTANT);
    let count = re.find_iter(ctx.html).count();
    let details = format!("{count} !important declaration(s) (threshold 10)");
    if count < 10 {
        return Ok(Verdict::pass(details));
    }
    Ok(Verdict::fail(details).with_evidence(ctx.locate(re)))
}

fn no_css_import(ctx: &PageContext<'_>) -> Result<Verdict> {
    let re = re!(CSS_IMPORT);
    if !re.is_match(ctx.html) {
        return Ok(Verdict::pass("No CSS @import rules"));
    }
    Ok(Verdict::fail("CSS @import chains stylesheet downloads").with_evidence(ctx.locate(re)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::Headers;
    use url::Url;

    fn run(check: Check, url: &str, html: &str) -> Verdict {
        run_with_headers(check, url, html, Headers::new())
    }

    fn run_with_headers(check: Check, url: &str, html: &str, headers: Headers) -> Verdict {
        let url = Url::parse(url).unwrap();
        let ctx = PageContext::new(&url, html, &headers);
        check(&ctx).expect("check should not fault")
    }

    const SITE: &str = "https://example.com/";

    #[test]
    fn aliased_ids_share_one_check() {
        let same = |a: &str, b: &str| lookup(a).unwrap() as usize == lookup(b).unwrap() as usize;
        assert!(same("sec-001", "seo-008"));
        assert!(same("perf-001", "html-006"));
        assert!(same("perf-001", "js-004"));
        assert!(same("seo-003", "wcag-004"));
        assert!(same("wcag-007", "css-001"));
    }

    #[test]
    fn routed_ids_exist_in_catalog_and_are_unique() {
        let mut seen = HashSet::new();
        for (id, _) in ROUTES {
            assert!(crate::rules::catalog::find_rule(id).is_some(), "{id} not in catalog");
            assert!(seen.insert(id), "{id} routed twice");
        }
    }

    #[test]
    fn unrouted_rules_have_no_check() {
        for id in ["wcag-011", "wcag-012", "perf-004", "perf-008", "js-005", "html-008", "css-005", "sec-008"] {
            assert!(lookup(id).is_none(), "{id} should fall through");
        }
    }

    #[test]
    fn https_depends_on_scheme() {
        assert!(run(https, SITE, "").passed);
        let v = run(https, "http://example.com/", "");
        assert!(!v.passed);
        assert!(v.details.contains("http"));
    }

    #[test]
    fn doctype_is_case_insensitive() {
        assert!(run(doctype, SITE, "<!doctype HTML><html></html>").passed);
        let v = run(doctype, SITE, "<html><head><title>Hi</title></head><body></body></html>");
        assert!(!v.passed);
        assert_eq!(v.evidence.unwrap().line_number, 1);
    }

    #[test]
    fn essential_meta_requires_charset_and_viewport() {
        let both = r#"<meta charset="utf-8"><meta name="viewport" content="width=device-width">"#;
        let v = run(essential_meta, SITE, both);
        assert!(v.passed);
        assert!(v.details.contains("no meta description"));

        let v = run(essential_meta, SITE, r#"<meta charset="utf-8">"#);
        assert!(!v.passed);
        assert_eq!(v.details, "Missing meta tags: viewport");
    }

    #[test]
    fn title_quality_checks_length_bounds() {
        let v = run(title_quality, SITE, "<html><head><title>Hi</title></head></html>");
        assert!(!v.passed);
        assert!(!v.details.contains("Missing or empty page title"));
        assert!(v.details.contains("2 characters"));

        let v = run(title_quality, SITE, "<title>   </title>");
        assert_eq!(v.details, "Missing or empty page title");

        assert!(run(title_quality, SITE, "<title>Ten chars!!</title>").passed);
        let long = format!("<title>{}</title>", "x".repeat(61));
        assert!(!run(title_quality, SITE, &long).passed);
        let max = format!("<title>{}</title>", "x".repeat(60));
        assert!(run(title_quality, SITE, &max).passed);
    }

    #[test]
    fn meta_description_length_window() {
        let desc = |n: usize| format!(r#"<meta name="description" content="{}">"#, "d".repeat(n));
        assert!(run(meta_description, SITE, &desc(120)).passed);
        assert!(run(meta_description, SITE, &desc(160)).passed);
        assert!(!run(meta_description, SITE, &desc(119)).passed);
        assert!(!run(meta_description, SITE, &desc(161)).passed);
        assert_eq!(run(meta_description, SITE, &desc(0)).details, "Meta description is empty");
        assert_eq!(run(meta_description, SITE, "<p></p>").details, "Missing meta description");
    }

    #[test]
    fn image_alt_text_requires_every_image() {
        assert!(run(image_alt_text, SITE, "<p>no images</p>").passed);
        assert!(run(image_alt_text, SITE, r#"<img src="a" alt=""><img alt="b" src="b">"#).passed);

        let html = "<p>intro</p>\n<img src=\"a\" alt=\"a\">\n<img src=\"b\">\n";
        let v = run(image_alt_text, SITE, html);
        assert!(!v.passed);
        assert_eq!(v.details, "1 of 2 images are missing alt attributes");
        let ev = v.evidence.unwrap();
        assert_eq!(ev.line_number, 3);
        assert!(ev.snippet.contains("<img src=\"b\">"));
    }

    #[test]
    fn semantic_structure_needs_two_landmarks() {
        assert!(run(semantic_structure, SITE, "<header></header><main></main>").passed);
        assert!(!run(semantic_structure, SITE, "<head></head><main></main>").passed);
        assert!(!run(semantic_structure, SITE, "<div></div>").passed);
    }

    #[test]
    fn security_header_checks() {
        let h = |pairs: &[(&str, &str)]| pairs.iter().copied().collect::<Headers>();

        assert!(!run(security_headers_any, SITE, "").passed);
        assert!(run_with_headers(security_headers_any, SITE, "", h(&[("X-Frame-Options", "DENY")])).passed);

        let one = h(&[("X-Frame-Options", "DENY")]);
        assert!(!run_with_headers(hardening_headers, SITE, "", one).passed);
        let two = h(&[("X-Frame-Options", "DENY"), ("Referrer-Policy", "no-referrer")]);
        let v = run_with_headers(hardening_headers, SITE, "", two);
        assert!(v.passed);
        assert!(v.details.contains("missing: x-content-type-options"));

        let csp = h(&[("Content-Security-Policy", "default-src 'self'")]);
        assert!(run_with_headers(content_security_policy, SITE, "", csp).passed);
        assert!(!run(content_security_policy, SITE, "").passed);
    }

    #[test]
    fn heading_hierarchy_rules() {
        assert!(run(heading_hierarchy, SITE, "<h1>Only</h1><h2>a</h2><h3>b</h3>").passed);
        assert!(run(heading_hierarchy, SITE, "<h1 class=\"t\">Only</h1>").passed);

        let v = run(heading_hierarchy, SITE, "<h2>a</h2>");
        assert_eq!(v.details, "No <h1> heading found");

        let v = run(heading_hierarchy, SITE, "<h1>a</h1>\n<p>x</p>\n<h1>b</h1>");
        assert!(v.details.contains("Found 2 <h1>"));
        assert_eq!(v.evidence.unwrap().line_number, 3);

        let v = run(heading_hierarchy, SITE, "<h1>a</h1>\n<h3>b</h3>");
        assert!(v.details.contains("skipped"));
        assert_eq!(v.evidence.unwrap().line_number, 2);
    }

    #[test]
    fn render_blocking_counts_scripts_and_styles() {
        let ok = r#"<script src="a.js" defer></script><script>inline()</script>
<link rel="stylesheet" href="p.css" media="print"><link rel="icon" href="f.ico">"#;
        assert!(run(render_blocking, SITE, ok).passed);

        let bad = "<p>x</p>\n<script src=\"a.js\"></script>\n<link rel=\"stylesheet\" href=\"s.css\">";
        let v = run(render_blocking, SITE, bad);
        assert!(!v.passed);
        assert_eq!(
            v.details,
            "1 render-blocking script(s) and 1 render-blocking stylesheet(s)"
        );
        assert_eq!(v.evidence.unwrap().line_number, 2);
    }

    #[test]
    fn image_delivery_needs_modern_format_and_lazy_loading() {
        let good = r#"<picture><source srcset="a.webp" type="image/webp"><img src="a.jpg" loading="lazy"></picture>"#;
        assert!(run(image_delivery, SITE, good).passed);
        let v = run(image_delivery, SITE, r#"<img src="a.jpg" loading="lazy">"#);
        assert!(!v.passed);
        assert!(v.details.contains("WebP/AVIF"));
    }

    #[test]
    fn layout_shift_ratio_must_exceed_eighty_percent() {
        assert!(run(layout_shift, SITE, "").passed);
        let sized = r#"<img src="a" width="1" height="1">"#;
        let unsized_img = r#"<img src="b">"#;
        let four_of_five = format!("{}{}", sized.repeat(4), unsized_img);
        assert!(!run(layout_shift, SITE, &four_of_five).passed);
        let five_of_six = format!("{}{}", sized.repeat(5), unsized_img);
        assert!(run(layout_shift, SITE, &five_of_six).passed);
    }

    #[test]
    fn structured_data_checks() {
        let ld = r#"<script type="application/ld+json">{"@type":"Thing"}</script>"#;
        assert!(run(json_ld, SITE, ld).passed);
        assert!(!run(json_ld, SITE, "<script>{}</script>").passed);
        assert!(run(microdata, SITE, r#"<div itemscope itemtype="x">"#).passed);
        assert!(run(microdata, SITE, r#"<span itemprop="name">"#).passed);
        assert!(!run(microdata, SITE, "<div>").passed);
    }

    #[test]
    fn open_graph_needs_three_of_four() {
        let og = |p: &str| format!(r#"<meta property="og:{p}" content="x">"#);
        let three = format!("{}{}{}", og("title"), og("image"), og("url"));
        assert!(run(open_graph, SITE, &three).passed);
        let two = format!("{}{}", og("title"), og("title"));
        let v = run(open_graph, SITE, &two);
        assert!(!v.passed);
        assert!(v.details.starts_with("1 of 4"));
    }

    #[test]
    fn canonical_link_required() {
        assert!(run(canonical_url, SITE, r#"<link rel="canonical" href="/">"#).passed);
        assert!(!run(canonical_url, SITE, r#"<link rel="icon" href="/">"#).passed);
    }

    #[test]
    fn generic_link_text_is_flagged() {
        assert!(run(generic_link_text, SITE, r#"<a href="/p">Pricing plans</a>"#).passed);
        let v = run(generic_link_text, SITE, "<p>a</p>\n<a href=\"/p\"> Click <b>here</b></a>");
        assert!(!v.passed);
        assert_eq!(v.evidence.unwrap().line_number, 2);
        assert!(!run(generic_link_text, SITE, r#"<a href="/p">Read More</a>"#).passed);
    }

    #[test]
    fn form_labels_need_eighty_percent() {
        assert!(run(form_labels, SITE, "<form></form>").passed);
        let labelled = r#"<label for="e">Email</label><input id="e" type="email">"#;
        assert!(run(form_labels, SITE, labelled).passed);
        let v = run(form_labels, SITE, r#"<label for="e">E</label><input id="e"><input id="p">"#);
        assert!(!v.passed);
        assert!(v.details.starts_with("1 of 2"));
    }

    #[test]
    fn focus_outline_removal_is_flagged() {
        assert!(!run(focus_visible, SITE, "<style>a:focus { outline: none; }</style>").passed);
        assert!(!run(focus_visible, SITE, "<style>:focus{color:red;outline:0}</style>").passed);
        assert!(run(focus_visible, SITE, "<style>:focus:not(:focus-visible) { outline: none; }</style>").passed);
        assert!(run(focus_visible, SITE, "<style>:focus { outline: 2px solid; }</style>").passed);
    }

    #[test]
    fn console_and_debugger_in_inline_scripts() {
        assert!(!run(no_console, SITE, "<script>console.log('x')</script>").passed);
        assert!(run(no_console, SITE, r#"<script src="console.log.js"></script>"#).passed);
        assert!(!run(no_debugger, SITE, "<script>debugger;</script>").passed);
        assert!(run(no_debugger, SITE, "<p>debugger;</p>").passed);
    }

    #[test]
    fn script_evidence_skips_matches_in_page_text() {
        let html = "<p>Call console.log( to debug</p>\n<div></div>\n<div></div>\n<div></div>\n<script>\nconsole.log('x');\n</script>";
        let v = run(no_console, SITE, html);
        assert!(!v.passed);
        assert!(v.details.starts_with("1 "));
        let ev = v.evidence.unwrap();
        assert_eq!(ev.line_number, 6);
        assert!(ev.snippet.contains("console.log('x')"));
    }

    #[test]
    fn strict_equality_requires_strict_usage_when_loose_found() {
        assert!(run(strict_equality, SITE, "<script>if (a) {}</script>").passed);
        assert!(!run(strict_equality, SITE, "<script>if (a == b) {}</script>").passed);
        assert!(run(strict_equality, SITE, "<script>if (a == b || c === d) {}</script>").passed);
    }

    #[test]
    fn small_text_threshold_is_five() {
        let css = |n: usize| format!("<style>{}</style>", ".a{font-size: 12px}".repeat(n));
        assert!(run(small_text, SITE, &css(4)).passed);
        assert!(!run(small_text, SITE, &css(5)).passed);
        assert!(run(small_text, SITE, &".a{font-size:16px}".repeat(10)).passed);
    }

    #[test]
    fn url_hygiene_checks_path() {
        assert!(run(url_hygiene, "https://example.com/leather-wallets", "").passed);
        assert!(!run(url_hygiene, "https://example.com/Leather", "").passed);
        assert!(!run(url_hygiene, "https://example.com/a_b", "").passed);
        let long = format!("https://example.com/{}", "a".repeat(99));
        assert!(!run(url_hygiene, &long, "").passed);
    }

    #[test]
    fn supplementary_checks() {
        assert!(run(page_language, SITE, r#"<html lang="en">"#).passed);
        assert!(!run(page_language, SITE, "<html>").passed);

        assert!(run(skip_link, SITE, r##"<a href="#main">Skip to content</a>"##).passed);
        assert!(!run(skip_link, SITE, r#"<a href="/main">Skip</a>"#).passed);

        assert!(run(media_captions, SITE, "<p></p>").passed);
        assert!(!run(media_captions, SITE, "<video src=a></video>").passed);

        assert!(!run(deprecated_elements, SITE, "<center>x</center>").passed);
        assert!(run(duplicate_ids, SITE, r#"<a id="x"></a><b id="y"></b>"#).passed);
        let v = run(duplicate_ids, SITE, "<a id=\"x\"></a>\n<b id=\"x\"></b>");
        assert!(v.details.contains("x"));
        assert!(!v.passed);

        assert!(run(indexable, SITE, r#"<meta name="robots" content="index,follow">"#).passed);
        assert!(!run(indexable, SITE, r#"<meta name="robots" content="NOINDEX">"#).passed);

        assert!(run(sitemap_reference, SITE, r#"<a href="/Sitemap.xml">map</a>"#).passed);
        assert!(run(mixed_content, "http://example.com/", r#"<img src="http://x/a.png">"#).passed);
        assert!(!run(mixed_content, SITE, r#"<img src="http://x/a.png">"#).passed);
        assert!(!run(mixed_content, SITE, r#"<link rel="stylesheet" href="http://x/a.css">"#).passed);
        assert!(run(mixed_content, SITE, r#"<a href="http://other.example/">x</a>"#).passed);

        assert!(!run(safe_external_links, SITE, r#"<a href="x" target="_blank">x</a>"#).passed);
        assert!(run(safe_external_links, SITE, r#"<a href="x" target="_blank" rel="noopener">x</a>"#).passed);

        assert!(!run(no_eval, SITE, "<script>eval(code)</script>").passed);
        assert!(!run(no_document_write, SITE, "<script>document.write('x')</script>").passed);
        assert!(!run(no_css_import, SITE, "<style>@import url(a.css);</style>").passed);
        assert!(run(font_display, SITE, "<style>@font-face{font-display:swap}</style>").passed);
        assert!(!run(font_display, SITE, "<style>@font-face{src:url(a)}</style>").passed);
        assert!(run(resource_hints, SITE, r#"<link rel="preconnect" href="https://x">"#).passed);
    }
}
