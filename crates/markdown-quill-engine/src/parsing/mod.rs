pub mod blocks;
pub mod inline;
pub mod source;

pub use inline::resolve_inline;
pub use source::ParagraphSource;
