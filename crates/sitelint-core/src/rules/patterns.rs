//! Compiled markup patterns shared by the checks.
//!
//! Markup is treated as text. A pattern that fails to compile stays `None`
//! and surfaces as an evaluation fault on the rules that use it, rather than
//! taking the whole engine down.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SiteLintError};

pub type Pattern = LazyLock<Option<Regex>>;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        pub static $name: Pattern = LazyLock::new(|| Regex::new($re).ok());
    };
}

/// Borrow a compiled pattern, or fail with the pattern's name.
macro_rules! re {
    ($name:ident) => {
        $crate::rules::patterns::compiled(&$name, stringify!($name))?
    };
}
pub(crate) use re;

pub fn compiled(pattern: &'static Pattern, name: &str) -> Result<&'static Regex> {
    pattern.as_ref().ok_or_else(|| SiteLintError::EvaluationFault {
        rule_id: String::new(),
        message: format!("pattern {name} failed to compile"),
    })
}

// ── Document ──────────────────────────────────────────────────────────────
pattern!(DOCTYPE, r"(?i)<!DOCTYPE\s+html");
pattern!(HTML_OPEN, r"(?i)<html[\s>]");
pattern!(HTML_LANG, r"(?i)<html\b[^>]*\blang\s*=");
pattern!(HEAD_OPEN, r"(?i)<head[\s>]");
pattern!(BODY_OPEN, r"(?i)<body[\s>]");
pattern!(TITLE, r"(?is)<title[^>]*>(.*?)</title>");
pattern!(TITLE_OPEN, r"(?i)<title[\s>]");
pattern!(LANDMARK, r"(?i)<(nav|main|header|footer)[\s>]");
pattern!(H1, r"(?i)<h1[\s>]");
pattern!(H2, r"(?i)<h2[\s>]");
pattern!(H3, r"(?i)<h3[\s>]");
pattern!(DEPRECATED_ELEMENT, r"(?i)<(center|font|marquee|blink)\b");
pattern!(STYLE_ATTR, r#"(?i)\sstyle\s*=\s*["']"#);
pattern!(
    ID_ATTR,
    r#"(?i)(?:^|\s)id\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>"']+))"#
);

// ── Meta ──────────────────────────────────────────────────────────────────
pattern!(META_TAG, r"(?i)<meta\b[^>]*>");
pattern!(CHARSET_ATTR, r"(?i)\bcharset\s*=");
pattern!(NAME_VIEWPORT, r#"(?i)\bname\s*=\s*["']?viewport\b"#);
pattern!(NAME_DESCRIPTION, r#"(?i)\bname\s*=\s*["']?description\b"#);
pattern!(NAME_ROBOTS, r#"(?i)\bname\s*=\s*["']?robots\b"#);
pattern!(
    CONTENT_ATTR,
    r#"(?i)\bcontent\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>"']+))"#
);
pattern!(
    OG_PROPERTY,
    r#"(?i)\bproperty\s*=\s*["']?og:(title|description|image|url)\b"#
);

// ── Links ─────────────────────────────────────────────────────────────────
pattern!(LINK_TAG, r"(?i)<link\b[^>]*>");
pattern!(REL_STYLESHEET, r#"(?i)\brel\s*=\s*["']?stylesheet\b"#);
pattern!(MEDIA_PRINT, r#"(?i)\bmedia\s*=\s*["']?print\b"#);
pattern!(CANONICAL, r#"(?i)<link\b[^>]*\brel\s*=\s*["']?canonical\b"#);
pattern!(
    RESOURCE_HINT,
    r#"(?i)<link\b[^>]*\brel\s*=\s*["']?[^"'>]*\b(?:preconnect|dns-prefetch|preload)\b"#
);
pattern!(ANCHOR, r"(?is)<a\b([^>]*)>(.*?)</a>");
pattern!(ANCHOR_OPEN, r"(?i)<a\b[^>]*>");
pattern!(HREF_FRAGMENT, r#"(?i)\bhref\s*=\s*["']?#"#);
pattern!(TARGET_BLANK, r#"(?i)\btarget\s*=\s*["']?_blank\b"#);
pattern!(
    REL_NOOPENER,
    r#"(?i)\brel\s*=\s*["']?[^"'>]*\b(?:noopener|noreferrer)\b"#
);
pattern!(INSECURE_SRC, r#"(?i)\bsrc\s*=\s*["']?http://"#);
pattern!(INSECURE_HREF, r#"(?i)\bhref\s*=\s*["']?http://"#);
pattern!(TAG, r"<[^>]*>");
pattern!(WHITESPACE, r"\s+");

// ── Media ─────────────────────────────────────────────────────────────────
pattern!(IMG_TAG, r"(?i)<img\b[^>]*>");
pattern!(ALT_ATTR, r"(?i)\balt\s*=");
pattern!(WIDTH_ATTR, r"(?i)\swidth\s*=");
pattern!(HEIGHT_ATTR, r"(?i)\sheight\s*=");
pattern!(
    MODERN_SOURCE,
    r#"(?i)<source\b[^>]*\btype\s*=\s*["']?image/(?:webp|avif)"#
);
pattern!(LAZY_LOADING, r#"(?i)\bloading\s*=\s*["']?lazy\b"#);
pattern!(VIDEO, r"(?i)<video\b");
pattern!(TRACK, r"(?i)<track\b");

// ── Forms ─────────────────────────────────────────────────────────────────
pattern!(INPUT_TAG, r"(?i)<input\b[^>]*>");
pattern!(
    LABEL_FOR,
    r#"(?i)<label\b[^>]*\bfor\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>"']+))"#
);

// ── Scripts ───────────────────────────────────────────────────────────────
pattern!(SCRIPT_OPEN, r"(?i)<script\b");
pattern!(SCRIPT_TAG, r"(?i)<script\b[^>]*>");
pattern!(INLINE_SCRIPT, r"(?is)<script\b([^>]*)>(.*?)</script>");
pattern!(SRC_ATTR, r"(?i)\bsrc\s*=");
pattern!(DEFER_ASYNC, r"(?i)\b(?:defer|async)\b");
pattern!(
    JSON_LD,
    r#"(?i)<script\b[^>]*\btype\s*=\s*["']?application/ld\+json"#
);
pattern!(JSON_LD_TYPE, r#"(?i)\btype\s*=\s*["']?application/ld\+json"#);
pattern!(MICRODATA, r"(?i)\bitemscope\b|\bitemprop\s*=");
pattern!(CONSOLE_CALL, r"\bconsole\.\w+\s*\(");
pattern!(DEBUGGER, r"\bdebugger\s*;");
pattern!(LOOSE_EQUALITY, r"[^=!<>]==[^=]|!=[^=]");
pattern!(STRICT_EQUALITY, r"===|!==");
pattern!(EVAL_CALL, r"\beval\s*\(");
pattern!(DOCUMENT_WRITE, r"\bdocument\.write(?:ln)?\s*\(");

// ── Styles ────────────────────────────────────────────────────────────────
pattern!(
    FOCUS_OUTLINE_NONE,
    r"(?i):focus\s*\{[^}]*\boutline\s*:\s*(?:none|0)\b"
);
pattern!(FONT_SIZE_PX, r"(?i)font-size\s*:\s*(\d+(?:\.\d+)?)px");
pattern!(IMPORTANT, r"(?i)!important\b");
pattern!(CSS_IMPORT, r"(?i)@import\b");
pattern!(FONT_FACE, r"(?i)@font-face\b");
pattern!(FONT_DISPLAY, r"(?i)\bfont-display\s*:");
pattern!(ARIA_ATTR, r"(?i)\baria-");

/// First non-empty capture group of `re` in `text`.
pub fn first_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    let caps = re.captures(text)?;
    caps.iter().skip(1).flatten().next().map(|m| m.as_str())
}

/// Value of an attribute matched by a pattern with one alternative per
/// quoting style (`"v"`, `'v'`, bare).
pub fn attr_value<'t>(re: &Regex, tag: &'t str) -> Option<&'t str> {
    first_capture(re, tag)
}

/// Visible text of a markup fragment, whitespace-collapsed.
pub fn text_content(fragment: &str) -> Result<String> {
    let stripped = re!(TAG).replace_all(fragment, " ");
    Ok(re!(WHITESPACE).replace_all(stripped.trim(), " ").into_owned())
}
