use std::collections::HashSet;

use super::kinds::{Delimiter, Image, MAX_TOKEN_LEN, emphasis};
use crate::parsing::source::ParagraphSource;

/// The escape character: whatever follows it is emitted verbatim.
const ESCAPE: char = '\\';

/// Resolves one paragraph's inline content into HTML markup.
///
/// Entry point for a full paragraph: starts a top-level span with no opening
/// delimiter and a fresh open-delimiter set. The set is scoped to this one
/// call and threaded by mutable reference through the recursion.
pub fn resolve_inline(src: &mut ParagraphSource<'_>) -> String {
    let mut open = HashSet::new();
    resolve(src, None, &mut open)
}

/// Resolves one span of inline content.
///
/// `opening` is the delimiter that started this span (`None` at top level);
/// `open` holds every delimiter token currently open on the recursion path.
/// A span terminates one of three ways:
///
/// - its own delimiter recurs: the content is wrapped in the delimiter's tag
/// - an *ancestor's* delimiter recurs, or the paragraph ends first: the span
///   degrades, rendering its opening marker as literal text with no tag
/// - at top level the paragraph simply ends and the content is returned as-is
fn resolve(
    src: &mut ParagraphSource<'_>,
    opening: Option<&'static Delimiter>,
    open: &mut HashSet<&'static str>,
) -> String {
    let mut content = String::new();

    loop {
        // Escape: the next character is literal, with no interpretation.
        if src.peek_match(ESCAPE) {
            if let Some(c) = src.next_char() {
                content.push(c);
            }
            continue;
        }

        // Image trigger: only `![` starts an image; a lone `!` is text.
        if src.peek_match(Image::BANG) {
            if src.peek_match(Image::ALT_OPEN) {
                match try_parse_image(src) {
                    Some(img) => content.push_str(&img),
                    None => content.push_str(Image::BANG_BRACKET),
                }
                continue;
            }
            src.backtrack(1);
        }

        let Some(next) = src.next_char() else {
            break;
        };

        // Entity substitution for HTML-significant characters.
        if matches!(next, '&' | '<' | '>') {
            let mut buf = [0u8; 4];
            html_escape::encode_text_to_string(next.encode_utf8(&mut buf), &mut content);
            continue;
        }
        src.backtrack(1);

        // Delimiter matching, longest token first so `**` beats `*`.
        let peek = src.lookahead(MAX_TOKEN_LEN);
        let got = peek.chars().count();
        let mut matched = None;
        for len in (1..=got).rev() {
            let candidate: String = peek.chars().take(len).collect();
            if let Some(delim) = emphasis::lookup(&candidate) {
                // Leave exactly the candidate consumed.
                src.backtrack(got - len);
                matched = Some((delim, len));
                break;
            }
        }

        match matched {
            Some((delim, _)) if opening == Some(delim) => {
                // This span's own closer: wrap and return to the parent.
                open.remove(delim.token);
                return format!("<{tag}>{content}</{tag}>", tag = delim.tag);
            }
            Some((delim, len)) if open.contains(delim.token) => {
                // An ancestor opened this token, so the current span can
                // never close validly. Un-consume the marker and degrade;
                // the parent re-scans it.
                src.backtrack(len);
                return degrade(opening, open, content);
            }
            Some((delim, _)) => {
                // A new span opens here.
                open.insert(delim.token);
                let nested = resolve(src, Some(delim), open);
                content.push_str(&nested);
            }
            None => {
                // No delimiter: keep a single literal character.
                src.backtrack(got.saturating_sub(1));
                content.push(next);
            }
        }
    }

    // End of paragraph with this span still open.
    degrade(opening, open, content)
}

/// Renders an unmatched span: the literal opening marker followed by the
/// accumulated content, no tags. A top-level "span" has no marker and
/// returns its content unchanged.
fn degrade(
    opening: Option<&'static Delimiter>,
    open: &mut HashSet<&'static str>,
    content: String,
) -> String {
    match opening {
        Some(delim) => {
            open.remove(delim.token);
            format!("{}{}", delim.token, content)
        }
        None => content,
    }
}

/// Attempts to parse the remainder of `![alt](href)`, invoked immediately
/// after `![` has been consumed.
///
/// Returns `None` when the paragraph ends before the form completes or the
/// `(` after the alt text is missing. On failure the cursor is restored to
/// just after `![`, so everything scanned in the attempt is re-read by the
/// caller as ordinary text.
fn try_parse_image(src: &mut ParagraphSource<'_>) -> Option<String> {
    let mut consumed = 0;

    let Some(alt) = scan_until(src, Image::ALT_CLOSE, &mut consumed) else {
        src.backtrack(consumed);
        return None;
    };
    if !src.peek_match(Image::HREF_OPEN) {
        src.backtrack(consumed);
        return None;
    }
    consumed += 1;
    let Some(href) = scan_until(src, Image::HREF_CLOSE, &mut consumed) else {
        src.backtrack(consumed);
        return None;
    };

    // Alt and href are carried verbatim; no nested markup applies.
    Some(format!("<img alt='{alt}' src='{href}'>"))
}

/// Scans literal characters up to an unescaped `close`, which is consumed
/// but not captured. An escape keeps the following character literal.
/// `consumed` counts every cursor advance so a failed attempt can be rolled
/// back exactly; returns `None` if the paragraph ends before `close`.
fn scan_until(
    src: &mut ParagraphSource<'_>,
    close: char,
    consumed: &mut usize,
) -> Option<String> {
    let mut text = String::new();
    loop {
        if src.peek_match(close) {
            *consumed += 1;
            return Some(text);
        }
        match src.next_char() {
            None => return None,
            Some(ESCAPE) => {
                *consumed += 1;
                if let Some(c) = src.next_char() {
                    *consumed += 1;
                    text.push(c);
                }
            }
            Some(c) => {
                *consumed += 1;
                text.push(c);
            }
        }
    }
}
