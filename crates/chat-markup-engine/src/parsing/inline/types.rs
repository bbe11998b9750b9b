use serde::{Serialize, Serializer, ser::SerializeMap};

/// The three flavours of emphasis, one per delimiter character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmphasisKind {
    /// `*bold*`
    Bold,
    /// `_italic_`
    Italic,
    /// `~strike~`
    Strike,
}

impl EmphasisKind {
    /// Name used in the serialized `type` field.
    pub fn name(self) -> &'static str {
        match self {
            EmphasisKind::Bold => "bold",
            EmphasisKind::Italic => "italic",
            EmphasisKind::Strike => "strike",
        }
    }
}

/// A parsed chat markup node.
///
/// Nodes own their content; a parse result shares nothing with the input
/// or with other results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Plain text. Adjacent plain runs are always coalesced into one node.
    Text(String),
    /// Bold, italic or strikethrough with recursively parsed content.
    Emphasis {
        kind: EmphasisKind,
        content: Vec<Node>,
    },
    /// Inline code. The text between the backticks, verbatim.
    Code(String),
    /// An `:emoji:` reference, stored without its colons.
    Emoji { name: String },
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn bold(content: Vec<Node>) -> Self {
        Node::Emphasis {
            kind: EmphasisKind::Bold,
            content,
        }
    }

    pub fn italic(content: Vec<Node>) -> Self {
        Node::Emphasis {
            kind: EmphasisKind::Italic,
            content,
        }
    }

    pub fn strike(content: Vec<Node>) -> Self {
        Node::Emphasis {
            kind: EmphasisKind::Strike,
            content,
        }
    }

    pub fn code(s: impl Into<String>) -> Self {
        Node::Code(s.into())
    }

    pub fn emoji(name: impl Into<String>) -> Self {
        Node::Emoji { name: name.into() }
    }

    /// Child nodes of an emphasis node; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Emphasis { content, .. } => content,
            Node::Text(_) | Node::Code(_) | Node::Emoji { .. } => &[],
        }
    }
}

/// Serializes to the chat client interchange shape: text nodes are bare
/// strings, everything else is an object tagged with `type`.
///
/// ```json
/// ["some ", {"type": "bold", "content": ["bold"]}, {"type": "emoji", "name": "tada"}]
/// ```
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Text(text) => serializer.serialize_str(text),
            Node::Emphasis { kind, content } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", kind.name())?;
                map.serialize_entry("content", content)?;
                map.end()
            }
            Node::Code(code) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "code")?;
                map.serialize_entry("content", &[code])?;
                map.end()
            }
            Node::Emoji { name } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "emoji")?;
                map.serialize_entry("name", name)?;
                map.end()
            }
        }
    }
}
