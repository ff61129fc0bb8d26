//! Releases-page version extraction
//!
//! The remote body is the HTML of a hosting site's latest-release page. The
//! scan walks anchor elements that carry a non-empty `title` attribute and
//! whose inner `<span>` text contains both a `v` and a `.`, and keeps the
//! LAST such match in document order.
//!
//! Last-match-wins depends on anchor ordering in third-party HTML that can
//! change without notice. It is kept for compatibility with the observed page
//! layout, not because the last anchor is inherently the best version. When
//! nothing matches, the extractor yields no version at all; the comparator
//! reports the missing name later.

use regex::Regex;

/// Scan a latest-release HTML page for the tag-like text of its last
/// qualifying anchor. Returns `None` when no anchor qualifies.
pub fn extract_version(body: &str) -> Option<String> {
    let anchor_re = Regex::new(r#"(?is)<a\s[^>]*title\s*=\s*"[^"]+"[^>]*>(.*?)</a>"#)
        .expect("invalid anchor pattern");
    let span_re = Regex::new(r"(?is)<span[^>]*>([^<]*)</span>").expect("invalid span pattern");

    let mut selected = None;

    for anchor in anchor_re.captures_iter(body) {
        let inner = &anchor[1];
        let Some(span) = span_re.captures(inner) else {
            continue;
        };

        let text = span[1].to_string();
        if text.contains('v') && text.contains('.') {
            selected = Some(text);
        }
    }

    selected
}
