//! # Inline Kinds
//!
//! Inline-specific types that own their syntax constants.
//!
//! ## Types
//!
//! - **`emphasis`**: the fixed delimiter table (`**`/`__`→strong, `*`/`_`→em,
//!   `--`→s, `` ` ``→code) and its longest-token length
//! - **`Image`**: `![alt](href)` syntax characters
//!
//! All delimiter constants live here, not scattered in resolver code.
//! The resolver calls these constants; it never hardcodes `![` or `**`.

pub mod emphasis;
pub mod image;

pub use emphasis::{DELIMITERS, Delimiter, MAX_TOKEN_LEN};
pub use image::Image;
