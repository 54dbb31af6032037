//! MarkdownV2 escaping for free-text fields.
//!
//! Names, verbs, and objects all pass through here before they are
//! interpolated into the reply template. URIs and the template's own
//! punctuation are never escaped.

/// The characters Telegram's MarkdownV2 dialect treats as markup.
const MARKDOWN_V2_SPECIALS: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escape `text` for verbatim embedding in a MarkdownV2 message.
///
/// Every special character, and every literal backslash, gets exactly one
/// backslash prepended; everything else passes through unchanged. The
/// function never removes a backslash, so escaping is safe on arbitrary
/// user input.
///
/// # Examples
///
/// ```
/// use quotebot::utils::markdown::escape_markdown_v2;
///
/// assert_eq!(escape_markdown_v2("a.b"), "a\\.b");
/// assert_eq!(escape_markdown_v2("笑"), "笑");
/// ```
#[must_use]
pub fn escape_markdown_v2(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        if ch == '\\' || MARKDOWN_V2_SPECIALS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
