/// An inline formatting delimiter: a fixed 1- or 2-character token that
/// opens and closes a span, and the HTML tag the span renders as.
#[derive(Debug, PartialEq, Eq)]
pub struct Delimiter {
    /// The literal marker text, e.g. `**` or `` ` ``.
    pub token: &'static str,
    /// The HTML tag name the span maps to.
    pub tag: &'static str,
}

/// Length in characters of the longest token in [`DELIMITERS`].
pub const MAX_TOKEN_LEN: usize = 2;

/// The fixed, case-sensitive delimiter table. Two-character tokens are
/// listed before the one-character tokens sharing their prefix; matching is
/// longest-first so `**` always wins over two adjacent `*`.
pub const DELIMITERS: [Delimiter; 6] = [
    Delimiter {
        token: "**",
        tag: "strong",
    },
    Delimiter {
        token: "__",
        tag: "strong",
    },
    Delimiter { token: "--", tag: "s" },
    Delimiter { token: "*", tag: "em" },
    Delimiter { token: "_", tag: "em" },
    Delimiter {
        token: "`",
        tag: "code",
    },
];

/// Looks up a candidate token in the delimiter table.
pub fn lookup(token: &str) -> Option<&'static Delimiter> {
    DELIMITERS.iter().find(|d| d.token == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_resolve_to_tags() {
        assert_eq!(lookup("**").map(|d| d.tag), Some("strong"));
        assert_eq!(lookup("__").map(|d| d.tag), Some("strong"));
        assert_eq!(lookup("*").map(|d| d.tag), Some("em"));
        assert_eq!(lookup("_").map(|d| d.tag), Some("em"));
        assert_eq!(lookup("--").map(|d| d.tag), Some("s"));
        assert_eq!(lookup("`").map(|d| d.tag), Some("code"));
    }

    #[test]
    fn unknown_tokens_do_not_resolve() {
        assert_eq!(lookup("-"), None);
        assert_eq!(lookup("~~"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn max_token_len_covers_the_table() {
        let longest = DELIMITERS
            .iter()
            .map(|d| d.token.chars().count())
            .max()
            .unwrap();
        assert_eq!(longest, MAX_TOKEN_LEN);
    }

    #[test]
    fn same_token_compares_equal_distinct_tokens_do_not() {
        // `**` and `__` render the same tag but are distinct tokens; the
        // open-set logic keys on the token, not the tag.
        assert_eq!(lookup("**"), lookup("**"));
        assert_ne!(lookup("**"), lookup("__"));
    }
}
