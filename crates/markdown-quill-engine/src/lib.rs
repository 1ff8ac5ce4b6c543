pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::ParagraphSource;
pub use render::render_document;
