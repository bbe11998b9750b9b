//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Emoji`**: `FENCE = b':'` plus the name character class
//! - **`Emphasis`**: `*`, `_`, `~` and the word-character class used for flanking
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The tokenizer and matcher call these; they never hardcode `` ` `` or `*`.

pub mod code_span;
pub mod emoji;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emoji::Emoji;
pub use emphasis::Emphasis;
