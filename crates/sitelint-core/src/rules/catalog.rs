//! Static rule catalog.
//!
//! The catalog is pure data: every rule sitelint knows about, in the order
//! they are evaluated and reported. It is compiled into the binary and never
//! mutated, so it can be shared freely across threads and analyses.
//!
//! Rule ids are namespaced by a source prefix (`wcag-`, `sec-`, ...) and
//! must be unique across the whole table.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Illustrative snippets attached to a rule.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Examples {
    pub good: &'static [&'static str],
    pub bad: &'static [&'static str],
}

/// One best-practice check with fixed metadata.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub rationale: &'static str,
    pub impact: &'static str,
    pub source: &'static str,
    pub source_url: &'static str,
    pub examples: Examples,
}

impl Rule {
    /// Id namespace, e.g. `wcag` for `wcag-001`.
    pub fn prefix(&self) -> &'static str {
        self.id.split('-').next().unwrap_or(self.id)
    }

    /// Recommendation used when a failing check supplies none of its own.
    pub fn fallback_recommendation(&self) -> String {
        match self.examples.good.first() {
            Some(good) => (*good).to_string(),
            None => format!("Follow {} guidelines", self.source),
        }
    }
}

/// A named grouping of rules representing one authoritative standard.
///
/// An empty `rule_ids` list selects the whole catalog.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuleSource {
    pub id: &'static str,
    pub name: &'static str,
    pub organization: &'static str,
    pub rule_ids: &'static [&'static str],
}

impl RuleSource {
    pub fn covers(&self, rule_id: &str) -> bool {
        self.rule_ids.is_empty() || self.rule_ids.contains(&rule_id)
    }

    /// Resolve `rule_ids` against the catalog, in catalog order.
    pub fn rules(&self) -> Vec<&'static Rule> {
        RULES.iter().filter(|r| self.covers(r.id)).collect()
    }
}

pub fn find_rule(id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.id == id)
}

pub fn find_source(id: &str) -> Option<&'static RuleSource> {
    SOURCES.iter().find(|s| s.id.eq_ignore_ascii_case(id))
}

const OWASP: &str = "OWASP Secure Headers Project";
const WCAG: &str = "WCAG 2.1";
const MDN: &str = "MDN Web Docs";
const WEBDEV: &str = "web.dev";
const SEARCH: &str = "Google Search Central";
const AIRBNB: &str = "Airbnb JavaScript Style Guide";
const CSSG: &str = "CSS Guidelines";

pub static SOURCES: &[RuleSource] = &[
    RuleSource {
        id: "all",
        name: "All Sources",
        organization: "sitelint",
        rule_ids: &[],
    },
    RuleSource {
        id: "owasp",
        name: OWASP,
        organization: "OWASP Foundation",
        rule_ids: &[
            "sec-001", "sec-002", "sec-003", "sec-004", "sec-005", "sec-006", "sec-007",
            "sec-008",
        ],
    },
    RuleSource {
        id: "wcag",
        name: WCAG,
        organization: "W3C",
        rule_ids: &[
            "wcag-001", "wcag-002", "wcag-003", "wcag-004", "wcag-005", "wcag-006", "wcag-007",
            "wcag-008", "wcag-009", "wcag-010", "wcag-011", "wcag-012", "wcag-013",
        ],
    },
    RuleSource {
        id: "mdn",
        name: MDN,
        organization: "Mozilla",
        rule_ids: &[
            "html-001", "html-002", "html-003", "html-004", "html-005", "html-006", "html-007",
            "html-008",
        ],
    },
    RuleSource {
        id: "webdev",
        name: WEBDEV,
        organization: "Google",
        rule_ids: &[
            "perf-001", "perf-002", "perf-003", "perf-004", "perf-005", "perf-006", "perf-007",
            "perf-008", "perf-009",
        ],
    },
    RuleSource {
        id: "google-search",
        name: SEARCH,
        organization: "Google",
        rule_ids: &[
            "seo-001", "seo-002", "seo-003", "seo-004", "seo-005", "seo-006", "seo-007",
            "seo-008", "seo-009", "seo-010", "seo-011", "seo-012",
        ],
    },
    RuleSource {
        id: "airbnb",
        name: AIRBNB,
        organization: "Airbnb",
        rule_ids: &[
            "js-001", "js-002", "js-003", "js-004", "js-005", "js-006", "js-007",
        ],
    },
    RuleSource {
        id: "css-guidelines",
        name: CSSG,
        organization: "Harry Roberts",
        rule_ids: &["css-001", "css-002", "css-003", "css-004", "css-005"],
    },
];

pub static RULES: &[Rule] = &[
    // ── Security ──────────────────────────────────────────────────────────
    Rule {
        id: "sec-001",
        name: "Serve over HTTPS",
        category: "Security",
        severity: Severity::Error,
        description: "The page must be served over HTTPS.",
        rationale: "Plain HTTP exposes every request and response to interception and tampering.",
        impact: "Credentials, cookies and content can be read or modified in transit.",
        source: OWASP,
        source_url: "https://owasp.org/www-project-secure-headers/",
        examples: Examples {
            good: &["Redirect all http:// traffic to https:// and serve the site with a valid TLS certificate"],
            bad: &["http://example.com/login"],
        },
    },
    Rule {
        id: "sec-002",
        name: "Security Headers Present",
        category: "Security",
        severity: Severity::Error,
        description: "At least one baseline security header is sent with the document.",
        rationale: "Security headers let the browser enforce protections the markup cannot.",
        impact: "Without them the page is exposed to clickjacking, MIME sniffing and injection.",
        source: OWASP,
        source_url: "https://owasp.org/www-project-secure-headers/#div-headers",
        examples: Examples {
            good: &["Content-Security-Policy: default-src 'self'"],
            bad: &[],
        },
    },
    Rule {
        id: "sec-003",
        name: "Content Security Policy",
        category: "Security",
        severity: Severity::Warning,
        description: "A Content-Security-Policy header restricts where scripts and styles load from.",
        rationale: "CSP is the primary browser-side mitigation for cross-site scripting.",
        impact: "Injected scripts run with the full privileges of the page.",
        source: OWASP,
        source_url: "https://owasp.org/www-project-secure-headers/#content-security-policy",
        examples: Examples {
            good: &["Content-Security-Policy: default-src 'self'; script-src 'self' https://cdn.example.com"],
            bad: &[],
        },
    },
    Rule {
        id: "sec-004",
        name: "Hardening Headers",
        category: "Security",
        severity: Severity::Warning,
        description: "X-Content-Type-Options, X-Frame-Options and Referrer-Policy are set.",
        rationale: "Each header closes a well-known class of browser-side attack.",
        impact: "Missing headers allow MIME confusion, framing and referrer leakage.",
        source: OWASP,
        source_url: "https://owasp.org/www-project-secure-headers/#x-content-type-options",
        examples: Examples {
            good: &["X-Content-Type-Options: nosniff\nX-Frame-Options: DENY\nReferrer-Policy: strict-origin-when-cross-origin"],
            bad: &[],
        },
    },
    Rule {
        id: "sec-005",
        name: "Strict Transport Security",
        category: "Security",
        severity: Severity::Warning,
        description: "A Strict-Transport-Security header pins the site to HTTPS.",
        rationale: "HSTS prevents protocol downgrade and cookie hijacking on first contact.",
        impact: "Users can be silently downgraded to HTTP on hostile networks.",
        source: OWASP,
        source_url: "https://owasp.org/www-project-secure-headers/#http-strict-transport-security",
        examples: Examples {
            good: &["Strict-Transport-Security: max-age=31536000; includeSubDomains"],
            bad: &[],
        },
    },
    Rule {
        id: "sec-006",
        name: "No Mixed Content",
        category: "Security",
        severity: Severity::Error,
        description: "An HTTPS page must not load subresources over plain HTTP.",
        rationale: "Mixed content undoes the guarantees of TLS for the affected resources.",
        impact: "Browsers block or warn on mixed content and attackers can swap the resources.",
        source: OWASP,
        source_url: "https://developer.mozilla.org/en-US/docs/Web/Security/Mixed_content",
        examples: Examples {
            good: &["<script src=\"https://cdn.example.com/app.js\"></script>"],
            bad: &["<script src=\"http://cdn.example.com/app.js\"></script>"],
        },
    },
    Rule {
        id: "sec-007",
        name: "Safe External Links",
        category: "Security",
        severity: Severity::Info,
        description: "Links opening a new tab carry rel=\"noopener\" or rel=\"noreferrer\".",
        rationale: "The opened page otherwise gets a handle to window.opener.",
        impact: "Reverse tabnabbing can redirect the original tab to a phishing page.",
        source: OWASP,
        source_url: "https://owasp.org/www-community/attacks/Reverse_Tabnabbing",
        examples: Examples {
            good: &["<a href=\"https://other.example\" target=\"_blank\" rel=\"noopener noreferrer\">Docs</a>"],
            bad: &["<a href=\"https://other.example\" target=\"_blank\">Docs</a>"],
        },
    },
    Rule {
        id: "sec-008",
        name: "Third-party Dependency Audit",
        category: "Security",
        severity: Severity::Info,
        description: "Client-side libraries are current and free of known vulnerabilities.",
        rationale: "Outdated front-end libraries are a common entry point for attacks.",
        impact: "Known exploits against bundled libraries remain reachable.",
        source: OWASP,
        source_url: "https://owasp.org/www-project-top-ten/2017/A9_2017-Using_Components_with_Known_Vulnerabilities",
        examples: Examples {
            good: &[],
            bad: &[],
        },
    },
    // ── Accessibility ─────────────────────────────────────────────────────
    Rule {
        id: "wcag-001",
        name: "Image Alternative Text",
        category: "Accessibility",
        severity: Severity::Error,
        description: "Every <img> element has an alt attribute.",
        rationale: "Screen readers announce alt text in place of the image.",
        impact: "Blind users lose the information the image carries.",
        source: WCAG,
        source_url: "https://www.w3.org/TR/WCAG21/#non-text-content",
        examples: Examples {
            good: &["<img src=\"chart.png\" alt=\"Sales grew 20% in Q3\">"],
            bad: &["<img src=\"chart.png\">"],
        },
    },
    Rule {
        id: "wcag-002",
        name: "Page Language",
        category: "Accessibility",
        severity: Severity::Error,
        description: "The <html> element declares the page language.",
        rationale: "Assistive technology picks pronunciation rules from the lang attribute.",
        impact: "Screen readers may read the page with the wrong voice and accent.",
        source: WCAG,
        source_url: "https://www.w3.org/TR/WCAG21/#language-of-page",
        examples: Examples {
            good: &["<html lang=\"en\">"],
            bad: &["<html>"],
        },
    },
    Rule {
        id: "wcag-003",
        name: "Page Titled",
        category: "Accessibility",
        severity: Severity::Error,
        description: "The document has a non-empty <title>.",
        rationale: "The title is the first thing announced when a page loads.",
        impact: "Users cannot tell tabs and history entries apart.",
        source: WCAG,
        source_url: "https://www.w3.org/TR/WCAG21/#page-titled",
        examples: Examples {
            good: &["<title>Checkout - Example Store</title>"],
            bad: &["<title></title>"],
        },
    },
    Rule {
        id: "wcag-004",
        name: "Heading Structure",
        category: "Accessibility",
        severity: Severity::Warning,
        description: "One <h1> per page and no skipped heading levels.",
        rationale: "Screen reader users navigate by headings.",
        impact: "A broken outline makes the page hard to skim without sight.",
        source: WCAG,
        source_url: "https://www.w3.org/TR/WCAG21/#info-and-relationships",
        examples: Examples {
            good: &["<h1>Products</h1>\n<h2>Laptops</h2>\n<h3>Gaming</h3>"],
            bad: &["<h1>Products</h1>\n<h3>Gaming</h3>"],
        },
    },
    Rule {
        id: "wcag-005",
        name: "Form Input Labels",
        category: "Accessibility",
        severity: Severity::Error,
        description: "Form inputs are associated with a <label for=...>.",
        rationale: "Labels give inputs an accessible name and a larger click target.",
        impact: "Screen reader users hear an unnamed edit field.",
        source: WCAG,
        source_url: "https://www.w3.org/TR/WCAG21/#labels-or-instructions",
        examples: Examples {
            good: &["<label for=\"email\">Email</label>\n<input id=\"email\" type=\"email\">"],
            bad: &["<input type=\"email\" placeholder=\"Email\">"],
        },
    },
    Rule {
        id: "wcag-006",
        name: "Descriptive Link Text",
        category: "Accessibility",
        severity: Severity::Warning,
        description: "Link text describes the destination on its own.",
        rationale: "Links are often listed out of context by assistive technology.",
        impact: "A list of \"click here\" links is meaningless.",
        source: WCAG,
        source_url: "https://www.w3.org/TR/WCAG21/#link-purpose-in-context",
        examples: Examples {
            good: &["<a href=\"/pricing\">View pricing plans</a>"],
            bad: &["<a href=\"/pricing\">Click here</a>"],
        },
    },
    Rule {
        id: "wcag-007",
        name: "Visible Focus",
        category: "Accessibility",
        severity: Severity::Warning,
        description: "Focus outlines are not removed without a replacement.",
        rationale: "Keyboard users rely on the focus indicator to know where they are.",
        impact: "Keyboard navigation becomes guesswork.",
        source: WCAG,
        source_url: "https://www.w3.org/TR/WCAG21/#focus-visible",
        examples: Examples {
            good: &[":focus-visible { outline: 2px solid #005fcc; }"],
            bad: &[":focus { outline: none; }"],
        },
    },
    Rule {
        id: "wcag-008",
        name: "Landmark Regions",
        category: "Accessibility",
        severity: Severity::Warning,
        description: "The page uses semantic landmarks such as <nav>, <main>, <header> and <footer>.",
        rationale: "Landmarks let assistive technology jump between page regions.",
        impact: "Users must read the page linearly to find the content.",
        source: WCAG,
        source_url: "https://www.w3.org/TR/WCAG21/#info-and-relationships",
        examples: Examples {
            good: &["<header>...</header>\n<nav>...</nav>\n<main>...</main>\n<footer>...</footer>"],
            bad: &["<div class=\"header\">...</div>\n<div class=\"content\">...</div>"],
        },
    },
    Rule {
        id: "wcag-009",
        name: "Skip Navigation Link",
        category: "Accessibility",
        severity: Severity::Info,
        description: "A skip link lets keyboard users bypass repeated navigation.",
        rationale: "Tabbing through the same menu on every page is tiring.",
        impact: "Keyboard users need many keystrokes to reach the content.",
        source: WCAG,
        source_url: "https://www.w3.org/TR/WCAG21/#bypass-blocks",
        examples: Examples {
            good: &["<a href=\"#main\" class=\"skip-link\">Skip to content</a>"],
            bad: &[],
        },
    },
    Rule {
        id: "wcag-010",
        name: "Touch Target Size",
        category: "Accessibility",
        severity: Severity::Info,
        description: "Text and tap targets are not styled below a readable size.",
        rationale: "Small text and targets are hard to read and hit on touch screens.",
        impact: "Users with low vision or motor impairments mis-tap and zoom.",
        source: WCAG,
        source_url: "https://www.w3.org/WAI/WCAG21/Understanding/target-size.html",
        examples: Examples {
            good: &["font-size: 16px;"],
            bad: &["font-size: 10px;"],
        },
    },
    Rule {
        id: "wcag-011",
        name: "Colour Contrast",
        category: "Accessibility",
        severity: Severity::Warning,
        description: "Text has a contrast ratio of at least 4.5:1 against its background.",
        rationale: "Low contrast text is unreadable for many users.",
        impact: "Users with low vision or in bright light cannot read the content.",
        source: WCAG,
        source_url: "https://www.w3.org/TR/WCAG21/#contrast-minimum",
        examples: Examples {
            good: &["color: #1a1a1a; background: #ffffff;"],
            bad: &["color: #aaaaaa; background: #ffffff;"],
        },
    },
    Rule {
        id: "wcag-012",
        name: "Keyboard Accessible",
        category: "Accessibility",
        severity: Severity::Warning,
        description: "All functionality is operable from a keyboard.",
        rationale: "Many users cannot use a pointing device.",
        impact: "Mouse-only controls lock keyboard and switch users out.",
        source: WCAG,
        source_url: "https://www.w3.org/TR/WCAG21/#keyboard",
        examples: Examples {
            good: &["<button type=\"button\" aria-expanded=\"false\">Menu</button>"],
            bad: &["<div onclick=\"openMenu()\">Menu</div>"],
        },
    },
    Rule {
        id: "wcag-013",
        name: "Media Captions",
        category: "Accessibility",
        severity: Severity::Warning,
        description: "Video content provides captions through a <track> element.",
        rationale: "Captions are the only way deaf users can follow spoken content.",
        impact: "Video content is inaccessible without sound.",
        source: WCAG,
        source_url: "https://www.w3.org/TR/WCAG21/#captions-prerecorded",
        examples: Examples {
            good: &["<video src=\"intro.mp4\" controls>\n  <track kind=\"captions\" src=\"intro.vtt\" srclang=\"en\">\n</video>"],
            bad: &["<video src=\"intro.mp4\" controls></video>"],
        },
    },
    // ── HTML ──────────────────────────────────────────────────────────────
    Rule {
        id: "html-001",
        name: "Essential Meta Tags",
        category: "HTML Best Practices",
        severity: Severity::Error,
        description: "The document declares a character set and a viewport.",
        rationale: "Charset avoids mojibake; viewport makes the page render at device width.",
        impact: "Text may be garbled and mobile layouts zoomed out.",
        source: MDN,
        source_url: "https://developer.mozilla.org/en-US/docs/Web/HTML/Element/meta",
        examples: Examples {
            good: &["<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"],
            bad: &[],
        },
    },
    Rule {
        id: "html-002",
        name: "Document Type",
        category: "HTML Best Practices",
        severity: Severity::Error,
        description: "The document starts with an HTML5 doctype.",
        rationale: "Without a doctype browsers fall back to quirks mode.",
        impact: "Layout and box-model behaviour differ between browsers.",
        source: MDN,
        source_url: "https://developer.mozilla.org/en-US/docs/Glossary/Doctype",
        examples: Examples {
            good: &["<!DOCTYPE html>"],
            bad: &[],
        },
    },
    Rule {
        id: "html-003",
        name: "Semantic Structure",
        category: "HTML Best Practices",
        severity: Severity::Warning,
        description: "Layout uses semantic sectioning elements instead of generic divs.",
        rationale: "Semantic elements convey structure to browsers, crawlers and tools.",
        impact: "Document structure is invisible to anything but a human eye.",
        source: MDN,
        source_url: "https://developer.mozilla.org/en-US/docs/Glossary/Semantics#semantics_in_html",
        examples: Examples {
            good: &["<header>...</header>\n<main>...</main>\n<footer>...</footer>"],
            bad: &["<div id=\"header\">...</div>"],
        },
    },
    Rule {
        id: "html-004",
        name: "No Deprecated Elements",
        category: "HTML Best Practices",
        severity: Severity::Warning,
        description: "Obsolete presentational elements are not used.",
        rationale: "Elements like <center> and <font> were removed from the standard.",
        impact: "Rendering is inconsistent and presentation is mixed into content.",
        source: MDN,
        source_url: "https://developer.mozilla.org/en-US/docs/Web/HTML/Element#obsolete_and_deprecated_elements",
        examples: Examples {
            good: &["<p class=\"centered\">Welcome</p>"],
            bad: &["<center><font color=\"red\">Welcome</font></center>"],
        },
    },
    Rule {
        id: "html-005",
        name: "Limited Inline Styles",
        category: "HTML Best Practices",
        severity: Severity::Info,
        description: "Styling lives in stylesheets rather than style attributes.",
        rationale: "Inline styles cannot be cached, reused or overridden cleanly.",
        impact: "Pages grow heavier and harder to maintain.",
        source: MDN,
        source_url: "https://developer.mozilla.org/en-US/docs/Learn/CSS/First_steps/How_CSS_is_structured",
        examples: Examples {
            good: &["<p class=\"notice\">Saved</p>"],
            bad: &["<p style=\"color:green;font-weight:bold\">Saved</p>"],
        },
    },
    Rule {
        id: "html-006",
        name: "Deferred Scripts",
        category: "HTML Best Practices",
        severity: Severity::Warning,
        description: "External scripts use defer or async.",
        rationale: "Synchronous scripts stop the parser until they download and run.",
        impact: "First render is delayed by every blocking script.",
        source: MDN,
        source_url: "https://developer.mozilla.org/en-US/docs/Web/HTML/Element/script#defer",
        examples: Examples {
            good: &["<script src=\"/app.js\" defer></script>"],
            bad: &["<script src=\"/app.js\"></script>"],
        },
    },
    Rule {
        id: "html-007",
        name: "Unique Element Ids",
        category: "HTML Best Practices",
        severity: Severity::Warning,
        description: "Every id attribute value is unique within the document.",
        rationale: "Duplicate ids break label association, fragment links and scripts.",
        impact: "Assistive technology and scripts target the wrong element.",
        source: MDN,
        source_url: "https://developer.mozilla.org/en-US/docs/Web/HTML/Global_attributes/id",
        examples: Examples {
            good: &["<div id=\"cart\"></div>\n<div id=\"cart-summary\"></div>"],
            bad: &["<div id=\"cart\"></div>\n<div id=\"cart\"></div>"],
        },
    },
    Rule {
        id: "html-008",
        name: "Valid Element Nesting",
        category: "HTML Best Practices",
        severity: Severity::Info,
        description: "Elements are nested according to their content models.",
        rationale: "Invalid nesting is silently repaired by the parser in surprising ways.",
        impact: "The rendered DOM differs from the authored markup.",
        source: MDN,
        source_url: "https://developer.mozilla.org/en-US/docs/Web/HTML/Content_categories",
        examples: Examples {
            good: &[],
            bad: &["<p><div>Block inside paragraph</div></p>"],
        },
    },
    // ── Performance ───────────────────────────────────────────────────────
    Rule {
        id: "perf-001",
        name: "Render-blocking Resources",
        category: "Performance",
        severity: Severity::Warning,
        description: "Scripts and stylesheets do not block first render.",
        rationale: "Blocking resources sit on the critical rendering path.",
        impact: "First Contentful Paint is delayed.",
        source: WEBDEV,
        source_url: "https://web.dev/articles/render-blocking-resources",
        examples: Examples {
            good: &["<script src=\"/app.js\" defer></script>\n<link rel=\"stylesheet\" href=\"/print.css\" media=\"print\">"],
            bad: &["<script src=\"/app.js\"></script>"],
        },
    },
    Rule {
        id: "perf-002",
        name: "Modern Image Delivery",
        category: "Performance",
        severity: Severity::Warning,
        description: "Images are offered in modern formats and lazily loaded.",
        rationale: "WebP and AVIF are much smaller than JPEG/PNG; lazy loading defers offscreen bytes.",
        impact: "Pages download far more image data than needed.",
        source: WEBDEV,
        source_url: "https://web.dev/articles/serve-images-webp",
        examples: Examples {
            good: &["<picture>\n  <source srcset=\"hero.avif\" type=\"image/avif\">\n  <img src=\"hero.jpg\" alt=\"Hero\" loading=\"lazy\">\n</picture>"],
            bad: &["<img src=\"hero.png\" alt=\"Hero\">"],
        },
    },
    Rule {
        id: "perf-003",
        name: "Layout Shift Prevention",
        category: "Performance",
        severity: Severity::Warning,
        description: "Images declare explicit width and height.",
        rationale: "Explicit dimensions let the browser reserve space before the image loads.",
        impact: "Content jumps as images arrive (poor Cumulative Layout Shift).",
        source: WEBDEV,
        source_url: "https://web.dev/articles/optimize-cls",
        examples: Examples {
            good: &["<img src=\"a.jpg\" alt=\"A\" width=\"640\" height=\"360\">"],
            bad: &["<img src=\"a.jpg\" alt=\"A\">"],
        },
    },
    Rule {
        id: "perf-004",
        name: "Page Weight",
        category: "Performance",
        severity: Severity::Info,
        description: "The HTML document stays small.",
        rationale: "Large documents take longer to download and parse.",
        impact: "Slow connections wait longer for the first byte of content.",
        source: WEBDEV,
        source_url: "https://web.dev/articles/total-byte-weight",
        examples: Examples {
            good: &[],
            bad: &[],
        },
    },
    Rule {
        id: "perf-005",
        name: "Caching Headers",
        category: "Performance",
        severity: Severity::Info,
        description: "The response carries Cache-Control or ETag validators.",
        rationale: "Cache validators allow repeat visits to skip the download.",
        impact: "Every visit refetches the full document.",
        source: WEBDEV,
        source_url: "https://web.dev/articles/http-cache",
        examples: Examples {
            good: &["Cache-Control: max-age=300, stale-while-revalidate=60"],
            bad: &[],
        },
    },
    Rule {
        id: "perf-006",
        name: "Resource Hints",
        category: "Performance",
        severity: Severity::Info,
        description: "Critical third-party origins are preconnected or key assets preloaded.",
        rationale: "Hints let the browser start connections and downloads early.",
        impact: "Critical requests pay DNS, TCP and TLS setup on the critical path.",
        source: WEBDEV,
        source_url: "https://web.dev/articles/preconnect-and-dns-prefetch",
        examples: Examples {
            good: &["<link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>"],
            bad: &[],
        },
    },
    Rule {
        id: "perf-007",
        name: "Font Display Strategy",
        category: "Performance",
        severity: Severity::Info,
        description: "Web fonts declare a font-display strategy.",
        rationale: "Without one, text may stay invisible while fonts download.",
        impact: "Users stare at blank text on slow connections.",
        source: WEBDEV,
        source_url: "https://web.dev/articles/font-display",
        examples: Examples {
            good: &["@font-face { font-family: Inter; src: url(inter.woff2); font-display: swap; }"],
            bad: &["@font-face { font-family: Inter; src: url(inter.woff2); }"],
        },
    },
    Rule {
        id: "perf-008",
        name: "Third-party Weight",
        category: "Performance",
        severity: Severity::Info,
        description: "Third-party embeds do not dominate page load.",
        rationale: "Third-party code competes with first-party content for bandwidth and CPU.",
        impact: "Ads, widgets and trackers slow the page down.",
        source: WEBDEV,
        source_url: "https://web.dev/articles/optimizing-content-efficiency-loading-third-party-javascript",
        examples: Examples {
            good: &[],
            bad: &[],
        },
    },
    Rule {
        id: "perf-009",
        name: "Script Request Count",
        category: "Performance",
        severity: Severity::Info,
        description: "The page loads a moderate number of external scripts.",
        rationale: "Each script is a request, a parse and a compile.",
        impact: "Many small scripts add up to slow startup.",
        source: WEBDEV,
        source_url: "https://web.dev/articles/reduce-javascript-payloads-with-code-splitting",
        examples: Examples {
            good: &["Bundle related modules and split by route"],
            bad: &[],
        },
    },
    // ── SEO ───────────────────────────────────────────────────────────────
    Rule {
        id: "seo-001",
        name: "Title Tag Quality",
        category: "SEO",
        severity: Severity::Error,
        description: "The page title is present and 10 to 60 characters long.",
        rationale: "Titles are the headline of the search result.",
        impact: "Short titles rank poorly; long ones are truncated in results.",
        source: SEARCH,
        source_url: "https://developers.google.com/search/docs/appearance/title-link",
        examples: Examples {
            good: &["<title>Handmade Leather Wallets | Example Co</title>"],
            bad: &["<title>Home</title>"],
        },
    },
    Rule {
        id: "seo-002",
        name: "Meta Description",
        category: "SEO",
        severity: Severity::Warning,
        description: "The meta description is 120 to 160 characters long.",
        rationale: "The description is often used as the search result snippet.",
        impact: "Search engines pick arbitrary page text for the snippet.",
        source: SEARCH,
        source_url: "https://developers.google.com/search/docs/appearance/snippet",
        examples: Examples {
            good: &["<meta name=\"description\" content=\"Handmade leather wallets crafted from full-grain hide, stitched by hand and built to last a lifetime. Free shipping on all orders.\">"],
            bad: &["<meta name=\"description\" content=\"Wallets\">"],
        },
    },
    Rule {
        id: "seo-003",
        name: "Heading Hierarchy",
        category: "SEO",
        severity: Severity::Warning,
        description: "Exactly one <h1> and no skipped heading levels.",
        rationale: "Headings signal the topic structure of the page to crawlers.",
        impact: "The main topic of the page is ambiguous.",
        source: SEARCH,
        source_url: "https://developers.google.com/search/docs/fundamentals/seo-starter-guide",
        examples: Examples {
            good: &["<h1>Leather Wallets</h1>\n<h2>Bifold</h2>"],
            bad: &["<h1>Shop</h1>\n<h1>Wallets</h1>"],
        },
    },
    Rule {
        id: "seo-004",
        name: "Canonical URL",
        category: "SEO",
        severity: Severity::Warning,
        description: "The page declares a canonical URL.",
        rationale: "Canonical links consolidate duplicate URLs into one ranking signal.",
        impact: "Ranking is split across URL variants.",
        source: SEARCH,
        source_url: "https://developers.google.com/search/docs/crawling-indexing/consolidate-duplicate-urls",
        examples: Examples {
            good: &["<link rel=\"canonical\" href=\"https://example.com/wallets\">"],
            bad: &[],
        },
    },
    Rule {
        id: "seo-005",
        name: "Open Graph Tags",
        category: "SEO",
        severity: Severity::Info,
        description: "og:title, og:description, og:image and og:url are provided.",
        rationale: "Open Graph tags control how links render when shared.",
        impact: "Shared links show a bare URL or a random image.",
        source: SEARCH,
        source_url: "https://ogp.me/",
        examples: Examples {
            good: &["<meta property=\"og:title\" content=\"Leather Wallets\">\n<meta property=\"og:image\" content=\"https://example.com/og.jpg\">"],
            bad: &[],
        },
    },
    Rule {
        id: "seo-006",
        name: "Structured Data",
        category: "SEO",
        severity: Severity::Info,
        description: "The page embeds JSON-LD structured data.",
        rationale: "Structured data makes the page eligible for rich results.",
        impact: "Search results stay plain blue links.",
        source: SEARCH,
        source_url: "https://developers.google.com/search/docs/appearance/structured-data/intro-structured-data",
        examples: Examples {
            good: &["<script type=\"application/ld+json\">{\"@context\":\"https://schema.org\",\"@type\":\"Product\"}</script>"],
            bad: &[],
        },
    },
    Rule {
        id: "seo-007",
        name: "Microdata Markup",
        category: "SEO",
        severity: Severity::Info,
        description: "The page annotates content with schema.org microdata.",
        rationale: "Microdata is an alternative structured data syntax understood by crawlers.",
        impact: "Entities on the page are not machine readable.",
        source: SEARCH,
        source_url: "https://developers.google.com/search/docs/appearance/structured-data/intro-structured-data#structured-data-format",
        examples: Examples {
            good: &["<div itemscope itemtype=\"https://schema.org/Product\"><span itemprop=\"name\">Wallet</span></div>"],
            bad: &[],
        },
    },
    Rule {
        id: "seo-008",
        name: "HTTPS Ranking Signal",
        category: "SEO",
        severity: Severity::Warning,
        description: "The page is served over HTTPS.",
        rationale: "HTTPS is a confirmed ranking signal.",
        impact: "HTTP pages are marked not secure and may rank lower.",
        source: SEARCH,
        source_url: "https://developers.google.com/search/blog/2014/08/https-as-ranking-signal",
        examples: Examples {
            good: &["Serve the canonical version of every page over https://"],
            bad: &[],
        },
    },
    Rule {
        id: "seo-009",
        name: "Clean URL Structure",
        category: "SEO",
        severity: Severity::Info,
        description: "URL paths are short, lowercase and hyphen-separated.",
        rationale: "Readable URLs are easier to share and hint at page content.",
        impact: "Case and underscore variants create duplicate URLs.",
        source: SEARCH,
        source_url: "https://developers.google.com/search/docs/crawling-indexing/url-structure",
        examples: Examples {
            good: &["https://example.com/leather-wallets"],
            bad: &["https://example.com/Leather_Wallets"],
        },
    },
    Rule {
        id: "seo-010",
        name: "Indexable Page",
        category: "SEO",
        severity: Severity::Error,
        description: "The page does not opt out of indexing with a robots noindex directive.",
        rationale: "noindex removes the page from search results entirely.",
        impact: "The page cannot be found through search.",
        source: SEARCH,
        source_url: "https://developers.google.com/search/docs/crawling-indexing/block-indexing",
        examples: Examples {
            good: &["<meta name=\"robots\" content=\"index, follow\">"],
            bad: &["<meta name=\"robots\" content=\"noindex\">"],
        },
    },
    Rule {
        id: "seo-011",
        name: "Sitemap Reference",
        category: "SEO",
        severity: Severity::Info,
        description: "The page links to or mentions a sitemap.",
        rationale: "Sitemaps help crawlers discover every page on the site.",
        impact: "Deep pages may be crawled late or not at all.",
        source: SEARCH,
        source_url: "https://developers.google.com/search/docs/crawling-indexing/sitemaps/overview",
        examples: Examples {
            good: &["<link rel=\"sitemap\" type=\"application/xml\" href=\"/sitemap.xml\">"],
            bad: &[],
        },
    },
    Rule {
        id: "seo-012",
        name: "Mobile Friendly Viewport",
        category: "Mobile",
        severity: Severity::Warning,
        description: "The page declares a responsive viewport.",
        rationale: "Search uses mobile-first indexing.",
        impact: "The page renders as a zoomed-out desktop page on phones.",
        source: SEARCH,
        source_url: "https://developers.google.com/search/docs/crawling-indexing/mobile/mobile-sites-mobile-first-indexing",
        examples: Examples {
            good: &["<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"],
            bad: &[],
        },
    },
    // ── JavaScript ────────────────────────────────────────────────────────
    Rule {
        id: "js-001",
        name: "No Console Statements",
        category: "JavaScript",
        severity: Severity::Warning,
        description: "Inline scripts do not call console methods.",
        rationale: "Console output is debugging residue that leaks internals.",
        impact: "Noise in the console and occasional information disclosure.",
        source: AIRBNB,
        source_url: "https://github.com/airbnb/javascript#no-console",
        examples: Examples {
            good: &["logger.info('checkout started');"],
            bad: &["console.log('checkout started', user);"],
        },
    },
    Rule {
        id: "js-002",
        name: "No Debugger Statements",
        category: "JavaScript",
        severity: Severity::Error,
        description: "Inline scripts contain no debugger statements.",
        rationale: "debugger pauses execution whenever dev tools are open.",
        impact: "The page freezes for anyone with dev tools open.",
        source: AIRBNB,
        source_url: "https://github.com/airbnb/javascript#no-debugger",
        examples: Examples {
            good: &["function total(items) { return items.reduce(sum, 0); }"],
            bad: &["function total(items) { debugger; return items.reduce(sum, 0); }"],
        },
    },
    Rule {
        id: "js-003",
        name: "Strict Equality",
        category: "JavaScript",
        severity: Severity::Warning,
        description: "Comparisons use === and !== instead of == and !=.",
        rationale: "Loose equality performs surprising type coercion.",
        impact: "Comparisons like '0' == false silently evaluate to true.",
        source: AIRBNB,
        source_url: "https://github.com/airbnb/javascript#comparison--eqeqeq",
        examples: Examples {
            good: &["if (count === 0) { reset(); }"],
            bad: &["if (count == 0) { reset(); }"],
        },
    },
    Rule {
        id: "js-004",
        name: "Asynchronous Script Loading",
        category: "JavaScript",
        severity: Severity::Warning,
        description: "Scripts are loaded with async or defer.",
        rationale: "Synchronous loading serialises download and execution with parsing.",
        impact: "Interactivity is delayed.",
        source: AIRBNB,
        source_url: "https://developer.mozilla.org/en-US/docs/Web/HTML/Element/script#async",
        examples: Examples {
            good: &["<script src=\"/analytics.js\" async></script>"],
            bad: &["<script src=\"/analytics.js\"></script>"],
        },
    },
    Rule {
        id: "js-005",
        name: "Inline Script Volume",
        category: "JavaScript",
        severity: Severity::Info,
        description: "The page does not scatter logic across many script blocks.",
        rationale: "Many script blocks are hard to cache, audit and lock down with CSP.",
        impact: "Script behaviour is difficult to reason about.",
        source: AIRBNB,
        source_url: "https://github.com/airbnb/javascript#modules",
        examples: Examples {
            good: &["<script type=\"module\" src=\"/main.js\"></script>"],
            bad: &[],
        },
    },
    Rule {
        id: "js-006",
        name: "No eval",
        category: "JavaScript",
        severity: Severity::Error,
        description: "Inline scripts never call eval().",
        rationale: "eval executes arbitrary strings as code.",
        impact: "Any injected string becomes executable script.",
        source: AIRBNB,
        source_url: "https://github.com/airbnb/javascript#strings--eval",
        examples: Examples {
            good: &["const data = JSON.parse(payload);"],
            bad: &["const data = eval('(' + payload + ')');"],
        },
    },
    Rule {
        id: "js-007",
        name: "No document.write",
        category: "JavaScript",
        severity: Severity::Warning,
        description: "Inline scripts do not use document.write().",
        rationale: "document.write blocks the parser and is ignored in some contexts.",
        impact: "Slow, fragile page loads, especially on 2G connections.",
        source: AIRBNB,
        source_url: "https://developer.mozilla.org/en-US/docs/Web/API/Document/write",
        examples: Examples {
            good: &["container.append(banner);"],
            bad: &["document.write('<div>banner</div>');"],
        },
    },
    // ── CSS ───────────────────────────────────────────────────────────────
    Rule {
        id: "css-001",
        name: "Preserve Focus Outlines",
        category: "CSS",
        severity: Severity::Warning,
        description: ":focus rules do not strip outlines.",
        rationale: "outline: none on :focus hides the keyboard position.",
        impact: "Keyboard users lose track of focus.",
        source: CSSG,
        source_url: "https://cssguidelin.es/#specificity",
        examples: Examples {
            good: &[":focus:not(:focus-visible) { outline: none; }"],
            bad: &[":focus { outline: none; }"],
        },
    },
    Rule {
        id: "css-002",
        name: "Sparing !important",
        category: "CSS",
        severity: Severity::Info,
        description: "!important is used sparingly.",
        rationale: "!important escalates specificity wars.",
        impact: "Styles become hard to override and maintain.",
        source: CSSG,
        source_url: "https://cssguidelin.es/#important",
        examples: Examples {
            good: &[".u-hidden { display: none !important; }"],
            bad: &[".title { color: red !important; margin: 0 !important; }"],
        },
    },
    Rule {
        id: "css-003",
        name: "No CSS @import",
        category: "CSS",
        severity: Severity::Info,
        description: "Stylesheets are linked rather than chained with @import.",
        rationale: "@import serialises stylesheet downloads.",
        impact: "Render is delayed by each level of imports.",
        source: CSSG,
        source_url: "https://web.dev/articles/critical-rendering-path/render-blocking-css",
        examples: Examples {
            good: &["<link rel=\"stylesheet\" href=\"/theme.css\">"],
            bad: &["@import url('/theme.css');"],
        },
    },
    Rule {
        id: "css-004",
        name: "Readable Font Sizes",
        category: "CSS",
        severity: Severity::Info,
        description: "Declared font sizes stay at or above 14px.",
        rationale: "Very small text is hard to read on every device.",
        impact: "Users zoom or give up.",
        source: CSSG,
        source_url: "https://cssguidelin.es/#units",
        examples: Examples {
            good: &["body { font-size: 16px; }"],
            bad: &[".legal { font-size: 9px; }"],
        },
    },
    Rule {
        id: "css-005",
        name: "Consistent Class Naming",
        category: "CSS",
        severity: Severity::Info,
        description: "Class names follow a consistent naming convention such as BEM.",
        rationale: "Predictable names make stylesheets navigable.",
        impact: "Styles drift and duplicate.",
        source: CSSG,
        source_url: "https://cssguidelin.es/#naming-conventions",
        examples: Examples {
            good: &[],
            bad: &[],
        },
    },
];
