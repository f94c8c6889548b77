//! Reply Sanitization
//!
//! Strips markdown syntax and emoji from completion replies before they
//! are handed to TTS. Speech engines read markup aloud ("asterisk
//! asterisk bold"), so everything syntactic has to go while the spoken
//! content stays.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Code spans: 1-3 backticks on each side, content removed, across lines
    static ref CODE_SPAN: Regex = Regex::new(r"(?s)`{1,3}.*?`{1,3}").expect("valid regex");
    /// Markdown links: keep the label, drop the URL
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid regex");
    /// Bold/italic markers: 1-3 `*` or `_` around non-marker text
    static ref EMPHASIS: Regex = Regex::new(r"[*_]{1,3}([^*_]+)[*_]{1,3}").expect("valid regex");
    /// Heading markers at line start, up to 3 leading spaces
    static ref HEADING: Regex = Regex::new(r"(?m)^\s{0,3}#{1,6}\s*").expect("valid regex");
    /// Emoji and pictographic blocks, merged to the minimal range set:
    /// U+24C2-1F251 (enclosed characters, swallowing the misc-symbol,
    /// dingbat, card and enclosed-supplement blocks) runs straight into
    /// emoticons at U+1F64F; transport, alchemical/geometric,
    /// supplemental pictographs and extended-A follow.
    static ref EMOJI: Regex = Regex::new(
        r"[\x{24C2}-\x{1F64F}\x{1F680}-\x{1F6FF}\x{1F700}-\x{1F7FF}\x{1F800}-\x{1F9FF}\x{1FA00}-\x{1FAFF}]+"
    )
    .expect("valid regex");
    /// List markers: line-leading `-`, `*` or `+` plus whitespace
    static ref LIST_MARKER: Regex = Regex::new(r"(?m)^\s*[-*+]\s+").expect("valid regex");
    /// Blockquote markers: repeated leading `>`, each with optional space,
    /// so nested quotes strip in a single pass
    static ref BLOCKQUOTE: Regex = Regex::new(r"(?m)^\s*(?:>\s?)+").expect("valid regex");
}

/// Strip markdown syntax and emoji from a completion reply.
///
/// Total over all inputs: malformed markdown (an unterminated code span,
/// a half-written link) is left as literal text rather than rejected.
/// The step order is fixed; later patterns assume earlier syntax is
/// already gone (e.g. emphasis inside a link label survives as the bare
/// label text).
pub fn sanitize(text: &str) -> String {
    let text = CODE_SPAN.replace_all(text, "");
    let text = LINK.replace_all(&text, "${1}");
    let text = EMPHASIS.replace_all(&text, "${1}");
    let text = HEADING.replace_all(&text, "");
    let text = EMOJI.replace_all(&text, "");
    let text = LIST_MARKER.replace_all(&text, "");
    let text = BLOCKQUOTE.replace_all(&text, "");

    // Collapse all whitespace runs (including newlines) to single spaces
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
