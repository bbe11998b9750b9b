//! Text renderings of a parsed node tree.

use crate::parsing::{Node, inline::kinds::{CodeSpan, Emoji, Emphasis}};

/// Rebuilds markup source from nodes.
///
/// Lossless: for any message `s`, `to_markup(&parse(s, opts)) == s`.
pub fn to_markup(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_markup(&mut out, nodes);
    out
}

fn write_markup(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Emphasis { kind, content } => {
                let delim = char::from(Emphasis::delimiter(*kind));
                out.push(delim);
                write_markup(out, content);
                out.push(delim);
            }
            Node::Code(code) => {
                out.push(char::from(CodeSpan::TICK));
                out.push_str(code);
                out.push(char::from(CodeSpan::TICK));
            }
            Node::Emoji { name } => {
                out.push(char::from(Emoji::FENCE));
                out.push_str(name);
                out.push(char::from(Emoji::FENCE));
            }
        }
    }
}

/// Concatenates the literal text of every node: emphasis delimiters and
/// code backticks dropped, code verbatim, emoji as their bare name.
pub fn literal_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_literal(&mut out, nodes);
    out
}

fn write_literal(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Text(text) | Node::Code(text) => out.push_str(text),
            Node::Emphasis { content, .. } => write_literal(out, content),
            Node::Emoji { name } => out.push_str(name),
        }
    }
}
