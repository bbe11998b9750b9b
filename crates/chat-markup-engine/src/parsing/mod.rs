pub mod inline;
pub mod invariants;
pub mod options;
pub mod span;

pub use inline::{EmphasisKind, Node};
pub use options::ParseOptions;

/// Parses one chat message.
///
/// Pure function of its arguments: no state survives between calls.
pub fn parse(input: &str, options: &ParseOptions) -> Vec<Node> {
    inline::parse_inline(input, options)
}
