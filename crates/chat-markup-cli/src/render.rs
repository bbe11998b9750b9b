//! Output formats for parsed messages.

use anyhow::Result;
use chat_markup_engine::{EmphasisKind, Node, literal_text, to_markup};
use crossterm::style::{ContentStyle, Stylize};
use std::fmt::Write;

use crate::cli::Format;

/// Renders one parsed message in `format`, without a trailing newline.
pub fn render(nodes: &[Node], format: Format) -> Result<String> {
    Ok(match format {
        Format::Ansi => to_ansi(nodes),
        Format::Json => serde_json::to_string(nodes)?,
        Format::Plain => literal_text(nodes),
        Format::Markup => to_markup(nodes),
        Format::Tree => to_tree(nodes),
    })
}

/// Terminal styling. Nested emphasis accumulates attributes.
pub fn to_ansi(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_ansi(&mut out, nodes, ContentStyle::new());
    out
}

fn write_ansi(out: &mut String, nodes: &[Node], style: ContentStyle) {
    for node in nodes {
        match node {
            Node::Text(text) => push_styled(out, style, text),
            Node::Emphasis { kind, content } => {
                let inner = match kind {
                    EmphasisKind::Bold => style.bold(),
                    EmphasisKind::Italic => style.italic(),
                    EmphasisKind::Strike => style.crossed_out(),
                };
                write_ansi(out, content, inner);
            }
            Node::Code(code) => push_styled(out, style.reverse(), code),
            Node::Emoji { name } => push_styled(out, style, &emoji_glyph(name)),
        }
    }
}

fn push_styled(out: &mut String, style: ContentStyle, text: &str) {
    if style == ContentStyle::new() {
        out.push_str(text);
    } else {
        // Writing to a String cannot fail
        let _ = write!(out, "{}", style.apply(text));
    }
}

/// The emoji's glyph when the shortcode is known, else `:name:`.
pub fn emoji_glyph(name: &str) -> String {
    match emojis::get_by_shortcode(name) {
        Some(emoji) => emoji.as_str().to_string(),
        None => {
            log::debug!("no glyph for :{name}:");
            format!(":{name}:")
        }
    }
}

/// Indented debug tree, one node per line.
pub fn to_tree(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_tree(&mut out, nodes, 0);
    out.truncate(out.trim_end_matches('\n').len());
    out
}

fn write_tree(out: &mut String, nodes: &[Node], depth: usize) {
    let indent = "  ".repeat(depth);
    // Writing to a String cannot fail
    for node in nodes {
        match node {
            Node::Text(text) => {
                let _ = writeln!(out, "{indent}text {text:?}");
            }
            Node::Emphasis { kind, content } => {
                let _ = writeln!(out, "{indent}{}", kind.name());
                write_tree(out, content, depth + 1);
            }
            Node::Code(code) => {
                let _ = writeln!(out, "{indent}code {code:?}");
            }
            Node::Emoji { name } => {
                let _ = writeln!(out, "{indent}emoji :{name}:");
            }
        }
    }
}
