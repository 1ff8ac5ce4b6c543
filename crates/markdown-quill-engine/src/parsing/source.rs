use std::str::Lines;

/// A paragraph-buffered character source with lookahead and backtrack.
///
/// Buffers one paragraph of the document at a time (a maximal run of
/// non-blank lines, joined by `\n`) and exposes an integer cursor over its
/// characters. Consumption and backtrack are symmetric: every character
/// consumed via [`next_char`](Self::next_char) or
/// [`lookahead`](Self::lookahead) can be undone by a matching
/// [`backtrack`](Self::backtrack).
///
/// End of paragraph is signalled out-of-band: `next_char` returns `None`
/// and leaves the cursor where it is, so backtrack arithmetic only ever
/// counts characters that were actually consumed.
pub struct ParagraphSource<'a> {
    lines: Lines<'a>,
    /// Next unconsumed line, already skipped past any blank run.
    /// `None` once the document is exhausted.
    next_line: Option<&'a str>,
    /// The current paragraph as an indexed character sequence.
    paragraph: Vec<char>,
    /// Cursor into `paragraph`. Invariant: `pos <= paragraph.len()`.
    pos: usize,
}

impl<'a> ParagraphSource<'a> {
    /// Creates a source over a whole document, positioned before its first
    /// paragraph. Leading blank lines are skipped immediately so that
    /// [`has_more`](Self::has_more) is accurate from the start.
    pub fn new(document: &'a str) -> Self {
        let mut lines = document.lines();
        let next_line = lines.next();
        let mut source = Self {
            lines,
            next_line,
            paragraph: Vec::new(),
            pos: 0,
        };
        source.skip_blank_lines();
        source
    }

    /// Returns true while an unread paragraph remains in the document.
    pub fn has_more(&self) -> bool {
        self.next_line.is_some()
    }

    /// Loads the next paragraph into the buffer and resets the cursor.
    ///
    /// Accumulates consecutive non-blank lines joined by `\n`, then skips
    /// the blank run that follows (any length collapses to one separator).
    /// A no-op once the document is exhausted.
    pub fn load_next_paragraph(&mut self) {
        let Some(first) = self.next_line else {
            return;
        };
        let mut paragraph = String::from(first);
        self.next_line = self.lines.next();
        while let Some(line) = self.next_line
            && !is_blank(line)
        {
            paragraph.push('\n');
            paragraph.push_str(line);
            self.next_line = self.lines.next();
        }
        self.paragraph = paragraph.chars().collect();
        self.pos = 0;
        self.skip_blank_lines();
    }

    /// Returns the character at the cursor and advances by one, or `None`
    /// (cursor unchanged) once the paragraph is exhausted.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.paragraph.get(self.pos).copied();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Consumes one character if it equals `expected`, otherwise leaves the
    /// cursor unchanged.
    pub fn peek_match(&mut self, expected: char) -> bool {
        if self.paragraph.get(self.pos) == Some(&expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes and returns up to `n` characters. Returns fewer than `n`
    /// when the paragraph ends first; the cursor advances exactly by the
    /// number of characters returned.
    pub fn lookahead(&mut self, n: usize) -> String {
        let mut taken = String::new();
        for _ in 0..n {
            match self.next_char() {
                Some(c) => taken.push(c),
                None => break,
            }
        }
        taken
    }

    /// Rewinds the cursor by `k` characters, clamped at the start of the
    /// paragraph.
    pub fn backtrack(&mut self, k: usize) {
        self.pos = self.pos.saturating_sub(k);
    }

    fn skip_blank_lines(&mut self) {
        while let Some(line) = self.next_line
            && is_blank(line)
        {
            self.next_line = self.lines.next();
        }
    }
}

/// A blank line separates paragraphs; whitespace-only lines count as blank.
fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_basics() {
        let mut src = ParagraphSource::new("hello");
        assert!(src.has_more());
        src.load_next_paragraph();
        assert!(!src.has_more());
        assert_eq!(src.next_char(), Some('h'));
        assert_eq!(src.next_char(), Some('e'));
    }

    #[test]
    fn empty_document() {
        let mut src = ParagraphSource::new("");
        assert!(!src.has_more());
        src.load_next_paragraph();
        assert_eq!(src.next_char(), None);
    }

    #[test]
    fn blank_only_document() {
        let src = ParagraphSource::new("\n\n   \n\t\n");
        assert!(!src.has_more());
    }

    #[test]
    fn next_char_at_end_is_idempotent() {
        let mut src = ParagraphSource::new("x");
        src.load_next_paragraph();
        assert_eq!(src.next_char(), Some('x'));
        assert_eq!(src.next_char(), None);
        assert_eq!(src.next_char(), None);
        // The cursor did not move past the end, so one backtrack undoes
        // the one real consumption.
        src.backtrack(1);
        assert_eq!(src.next_char(), Some('x'));
    }

    #[test]
    fn paragraph_joins_lines_with_newline() {
        let mut src = ParagraphSource::new("one\ntwo");
        src.load_next_paragraph();
        let text: String = std::iter::from_fn(|| src.next_char()).collect();
        assert_eq!(text, "one\ntwo");
    }

    #[test]
    fn blank_run_length_is_insignificant() {
        for doc in ["a\n\nb", "a\n\n\n\nb", "\n\na\n \n \nb\n\n"] {
            let mut src = ParagraphSource::new(doc);
            src.load_next_paragraph();
            assert_eq!(src.next_char(), Some('a'));
            assert!(src.has_more());
            src.load_next_paragraph();
            assert_eq!(src.next_char(), Some('b'));
            assert!(!src.has_more());
        }
    }

    #[test]
    fn peek_match_consumes_only_on_match() {
        let mut src = ParagraphSource::new("ab");
        src.load_next_paragraph();
        assert!(!src.peek_match('b'));
        assert!(src.peek_match('a'));
        assert!(src.peek_match('b'));
        assert!(!src.peek_match('b'));
    }

    #[test]
    fn lookahead_past_end_returns_short() {
        let mut src = ParagraphSource::new("ab");
        src.load_next_paragraph();
        assert_eq!(src.lookahead(5), "ab");
        // Only two characters were really consumed.
        src.backtrack(2);
        assert_eq!(src.next_char(), Some('a'));
    }

    #[test]
    fn backtrack_clamps_at_zero() {
        let mut src = ParagraphSource::new("ab");
        src.load_next_paragraph();
        src.next_char();
        src.backtrack(10);
        assert_eq!(src.next_char(), Some('a'));
    }

    #[test]
    fn load_after_exhaustion_is_a_noop() {
        let mut src = ParagraphSource::new("a");
        src.load_next_paragraph();
        assert!(!src.has_more());
        src.load_next_paragraph();
        assert_eq!(src.next_char(), Some('a'));
    }
}
