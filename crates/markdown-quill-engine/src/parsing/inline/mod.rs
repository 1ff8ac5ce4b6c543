//! # Inline Resolution
//!
//! Recursive descent over one paragraph's characters, resolving delimiter
//! nesting, escapes, entity substitution and image syntax into inline HTML.
//!
//! ## Architecture
//!
//! The resolver consumes characters from [`ParagraphSource`] and relies on
//! its arbitrary backtrack to scan speculatively: every construct that
//! fails to complete (a delimiter that never closes, an image missing its
//! `](…)` tail) rolls the cursor back and degrades to literal text. No
//! input is ever rejected.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter table and image syntax constants
//! - **`resolver`**: `resolve_inline()` entry point and the recursive span
//!   resolver with its `try_parse_image` helper
//!
//! [`ParagraphSource`]: crate::parsing::source::ParagraphSource

pub mod kinds;
pub mod resolver;

pub use resolver::resolve_inline;
