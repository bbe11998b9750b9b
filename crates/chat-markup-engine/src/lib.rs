//! # chat-markup-engine
//!
//! Parses chat messages with lightweight inline markup into a node tree:
//!
//! | Markup | Node |
//! |--------|------|
//! | `*bold*` | `Emphasis { kind: Bold, .. }` |
//! | `_italic_` | `Emphasis { kind: Italic, .. }` |
//! | `~strike~` | `Emphasis { kind: Strike, .. }` |
//! | `` `code` `` | `Code` (verbatim, never parsed further) |
//! | `:name:` | `Emoji` (optionally restricted to a whitelist) |
//!
//! Emphasis nests to any depth. Markup that does not pair up is kept as
//! literal text, so parsing never fails.
//!
//! ```
//! use chat_markup_engine::{Node, ParseOptions, parse};
//!
//! let nodes = parse("some *bold* text", &ParseOptions::default());
//! assert_eq!(
//!     nodes,
//!     vec![
//!         Node::text("some "),
//!         Node::bold(vec![Node::text("bold")]),
//!         Node::text(" text"),
//!     ]
//! );
//! ```

pub mod parsing;
pub mod render;

pub use parsing::{EmphasisKind, Node, ParseOptions, parse};
pub use render::{literal_text, to_markup};
