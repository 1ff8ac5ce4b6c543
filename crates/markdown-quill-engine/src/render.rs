//! Document driver: renders a whole document paragraph by paragraph.

use crate::parsing::blocks::render_block;
use crate::parsing::source::ParagraphSource;

/// Renders a document into a concatenated sequence of HTML block fragments.
///
/// Each paragraph becomes `<p>…</p>\n` or `<hN>…</hN>\n`; there is no
/// enclosing document wrapper. Paragraphs are processed one at a time,
/// fully, before the next is loaded. Empty input renders to the empty
/// string.
pub fn render_document(document: &str) -> String {
    let mut source = ParagraphSource::new(document);
    let mut html = String::new();
    while source.has_more() {
        source.load_next_paragraph();
        html.push_str(&render_block(&mut source));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_each_paragraph_as_one_block() {
        assert_eq!(
            render_document("# Title\n\nbody text"),
            "<h1>Title</h1>\n<p>body text</p>\n"
        );
    }

    #[test]
    fn empty_document_renders_empty() {
        assert_eq!(render_document(""), "");
        assert_eq!(render_document("\n\n\n"), "");
    }

    #[test]
    fn intra_paragraph_newlines_are_preserved() {
        assert_eq!(render_document("one\ntwo"), "<p>one\ntwo</p>\n");
    }
}
