use crate::parsing::inline::resolve_inline;
use crate::parsing::source::ParagraphSource;

/// The heading marker character.
const HEADING_MARKER: char = '#';

/// Renders the paragraph currently loaded in `src` as one HTML block.
///
/// A paragraph whose first characters are a run of `#` followed by one
/// whitespace character is a heading of that level; everything else is a
/// plain paragraph. Either way the body is one full inline pass, and every
/// block ends with a trailing newline.
pub fn render_block(src: &mut ParagraphSource<'_>) -> String {
    match heading_level(src) {
        0 => format!("<p>{}</p>\n", resolve_inline(src)),
        level => format!(
            "<h{level}>{}</h{level}>\n",
            resolve_inline(src)
        ),
    }
}

/// Counts leading heading markers.
///
/// Returns the marker count when it is nonzero and followed by a whitespace
/// character, which is consumed and dropped. There is no upper bound: seven
/// markers yield level 7. Otherwise every consumed character is rewound and
/// 0 is returned.
fn heading_level(src: &mut ParagraphSource<'_>) -> usize {
    let mut level = 0;
    loop {
        match src.next_char() {
            Some(HEADING_MARKER) => level += 1,
            Some(c) if level > 0 && c.is_whitespace() => return level,
            Some(_) => {
                src.backtrack(level + 1);
                return 0;
            }
            None => {
                src.backtrack(level);
                return 0;
            }
        }
    }
}
