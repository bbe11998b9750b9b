//! # Inline Parsing
//!
//! Chat markup is inline-only: a message is one run of text with emphasis,
//! code spans and emoji mixed in.
//!
//! ## Architecture
//!
//! Parsing happens in two passes over the same message:
//!
//! 1. **Tokenizer** (`tokens`): a cursor sweeps left to right and takes
//!    *atomic spans* eagerly: code spans and whitelisted `:emoji:` names.
//!    Each remaining `*`, `_`, `~` becomes a delimiter token; everything else
//!    is grouped into text runs.
//! 2. **Matcher** (`parser`): pairs delimiters using flanking rules and
//!    recurses into each matched interior.
//!
//! ## Modules
//!
//! - **`types`**: `Node` enum (Text, Emphasis, Code, Emoji) and `EmphasisKind`
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`tokens`**: `tokenize()` and the `Token` stream
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Raw Zone Precedence
//!
//! Atomic spans take precedence over emphasis: `` `*not bold*` `` is a single
//! code node, and the underscore in `:emoji_time:` never pairs with another
//! underscore outside the emoji.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod tokens;
pub mod types;

pub use parser::parse_inline;
pub use types::{EmphasisKind, Node};
