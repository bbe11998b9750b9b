//! Runtime checks for parser correctness, used by the test suites.

use crate::{
    parsing::{
        ParseOptions,
        inline::{Node, tokens::{Token, tokenize}},
    },
    render::to_markup,
};

/// Panics unless the tokens of `s` tile it exactly, atomic inner spans sit
/// inside their full spans, and text runs are never empty.
pub fn check_tokens(s: &str, options: &ParseOptions) {
    let tokens = tokenize(s, options);
    let mut pos = 0;
    for tok in &tokens {
        let span = tok.span();
        assert_eq!(
            span.start, pos,
            "gap or overlap before {tok:?} (expected start {pos})"
        );
        assert!(span.end <= s.len(), "token out of bounds: {tok:?}");
        match *tok {
            Token::Text(sp) => assert!(!sp.is_empty(), "empty text token at {pos}"),
            Token::CodeSpan { full, inner } => assert!(
                full.contains(inner) && inner.len() + 2 == full.len(),
                "code span inner {inner:?} not framed by {full:?}"
            ),
            Token::Emoji { full, name } => assert!(
                full.contains(name) && !name.is_empty() && name.len() + 2 == full.len(),
                "emoji name {name:?} not framed by {full:?}"
            ),
            Token::Delimiter { .. } => {}
        }
        pos = span.end;
    }
    assert_eq!(pos, s.len(), "tokens stop short of end of input");
}

/// Panics unless `nodes` has no adjacent or empty text nodes at any depth
/// and re-serializes to exactly `s`.
pub fn check_nodes(s: &str, nodes: &[Node]) {
    check_coalesced(nodes);
    assert_eq!(to_markup(nodes), s, "parse result is not lossless");
}

fn check_coalesced(nodes: &[Node]) {
    for pair in nodes.windows(2) {
        assert!(
            !matches!(pair, [Node::Text(_), Node::Text(_)]),
            "adjacent text nodes: {pair:?}"
        );
    }
    for node in nodes {
        if let Node::Text(text) = node {
            assert!(!text.is_empty(), "empty text node");
        }
        check_coalesced(node.children());
    }
}
