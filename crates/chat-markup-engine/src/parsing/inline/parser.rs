use crate::parsing::ParseOptions;

use super::{
    kinds::Emphasis,
    tokens::{Token, tokenize},
    types::{EmphasisKind, Node},
};

/// Parses a chat message into a sequence of [`Node`]s.
///
/// Runs the tokenizer pass once, then matches emphasis delimiters over the
/// token stream. The interior of each matched pair is parsed by the same
/// matcher, so nesting depth in the output equals nesting depth in the input.
///
/// Never fails: markup that does not match degrades to literal text.
pub fn parse_inline(s: &str, options: &ParseOptions) -> Vec<Node> {
    let tokens = tokenize(s, options);
    Matcher { s, options }.nodes(&tokens, 0)
}

/// What sits on one side of a delimiter, for flanking checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// Start or end of the region being parsed.
    Edge,
    Whitespace,
    Word,
    /// Punctuation, symbols, and the boundary of an atomic span.
    Other,
}

impl Side {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            Side::Whitespace
        } else if Emphasis::is_word_char(c) {
            Side::Word
        } else {
            Side::Other
        }
    }
}

/// Accumulates output, coalescing adjacent plain text into one node.
#[derive(Default)]
struct NodeSink {
    out: Vec<Node>,
    text: String,
}

impl NodeSink {
    fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    fn push_node(&mut self, node: Node) {
        self.flush_text();
        self.out.push(node);
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.out.push(Node::Text(std::mem::take(&mut self.text)));
        }
    }

    fn finish(mut self) -> Vec<Node> {
        self.flush_text();
        self.out
    }
}

struct Matcher<'a> {
    s: &'a str,
    options: &'a ParseOptions,
}

impl Matcher<'_> {
    /// Builds nodes for `tokens`, which are the interior of `depth` enclosing
    /// emphasis pairs. Region edges count as start/end of input.
    fn nodes(&self, tokens: &[Token], depth: usize) -> Vec<Node> {
        let mut sink = NodeSink::default();
        let mut i = 0;

        while i < tokens.len() {
            match tokens[i] {
                Token::Text(sp) => sink.push_str(sp.slice(self.s)),
                Token::CodeSpan { inner, .. } => {
                    sink.push_node(Node::Code(inner.slice(self.s).to_string()))
                }
                Token::Emoji { name, .. } => sink.push_node(Node::Emoji {
                    name: name.slice(self.s).to_string(),
                }),
                Token::Delimiter { kind, at } => {
                    if let Some(close) = self.find_close(tokens, i, kind, depth) {
                        log::trace!(
                            "{} pair at {at}..={}",
                            kind.name(),
                            tokens[close].span().start
                        );
                        let content = self.nodes(&tokens[i + 1..close], depth + 1);
                        sink.push_node(Node::Emphasis { kind, content });
                        i = close + 1;
                        continue;
                    }
                    sink.push_str(self.s_at(at));
                }
            }
            i += 1;
        }

        sink.finish()
    }

    /// Finds the nearest valid closer for the delimiter at `open`, if it is
    /// a valid opener at all. An adjacent closer yields empty emphasis.
    fn find_close(
        &self,
        tokens: &[Token],
        open: usize,
        kind: EmphasisKind,
        depth: usize,
    ) -> Option<usize> {
        if !self.options.allows_depth(depth) || !self.can_open(tokens, open) {
            return None;
        }
        let close = (open + 1..tokens.len()).find(|&j| {
            matches!(tokens[j], Token::Delimiter { kind: k, .. } if k == kind)
                && self.can_close(tokens, j)
        });
        if close.is_none() {
            log::trace!(
                "unmatched {} opener at {}",
                kind.name(),
                tokens[open].span().start
            );
        }
        close
    }

    /// Not preceded by a word character; followed by something other than whitespace.
    fn can_open(&self, tokens: &[Token], i: usize) -> bool {
        self.before(tokens, i) != Side::Word
            && !matches!(self.after(tokens, i), Side::Edge | Side::Whitespace)
    }

    /// Preceded by something other than whitespace; not followed by a word character.
    fn can_close(&self, tokens: &[Token], i: usize) -> bool {
        !matches!(self.before(tokens, i), Side::Edge | Side::Whitespace)
            && self.after(tokens, i) != Side::Word
    }

    fn before(&self, tokens: &[Token], i: usize) -> Side {
        match i.checked_sub(1).map(|p| tokens[p]) {
            None => Side::Edge,
            Some(tok) => self.side_of(tok, |text| text.chars().next_back()),
        }
    }

    fn after(&self, tokens: &[Token], i: usize) -> Side {
        match tokens.get(i + 1) {
            None => Side::Edge,
            Some(&tok) => self.side_of(tok, |text| text.chars().next()),
        }
    }

    /// Classifies the character of `tok` that touches the delimiter.
    fn side_of(&self, tok: Token, pick: impl Fn(&str) -> Option<char>) -> Side {
        match tok {
            Token::Text(sp) => pick(sp.slice(self.s)).map_or(Side::Edge, Side::of),
            Token::Delimiter { at, .. } => pick(self.s_at(at)).map_or(Side::Edge, Side::of),
            Token::CodeSpan { .. } | Token::Emoji { .. } => Side::Other,
        }
    }

    /// The single delimiter byte at `at`, as a string slice.
    fn s_at(&self, at: usize) -> &str {
        &self.s[at..at + 1]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(s: &str) -> Vec<Node> {
        parse_inline(s, &ParseOptions::default())
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse("hello world"), vec![Node::text("hello world")]);
    }

    #[test]
    fn empty_input_yields_no_nodes() {
        assert_eq!(parse(""), vec![]);
    }

    #[test]
    fn parse_bold() {
        assert_eq!(
            parse("some *bold* text"),
            vec![
                Node::text("some "),
                Node::bold(vec![Node::text("bold")]),
                Node::text(" text"),
            ]
        );
    }

    #[test]
    fn unmatched_opener_is_coalesced_into_text() {
        assert_eq!(parse("a *b c"), vec![Node::text("a *b c")]);
    }

    #[test]
    fn opener_needs_non_word_before() {
        assert_eq!(parse("a*b*"), vec![Node::text("a*b*")]);
    }

    #[test]
    fn closer_needs_non_word_after() {
        assert_eq!(parse("*a*b"), vec![Node::text("*a*b")]);
    }

    #[test]
    fn closer_cannot_follow_whitespace() {
        assert_eq!(parse("*a *"), vec![Node::text("*a *")]);
    }

    #[test]
    fn nearest_valid_closer_wins() {
        assert_eq!(
            parse("*a* b*"),
            vec![Node::bold(vec![Node::text("a")]), Node::text(" b*")]
        );
    }

    #[test]
    fn invalid_closer_is_skipped_for_a_later_one() {
        // The middle `*` is followed by a word char, so it cannot close
        assert_eq!(
            parse("*a*b c*"),
            vec![Node::bold(vec![Node::text("a*b c")])]
        );
    }

    #[test]
    fn adjacent_delimiters_make_empty_emphasis() {
        assert_eq!(parse("**"), vec![Node::bold(vec![])]);
        assert_eq!(
            parse("a ~~ b"),
            vec![Node::text("a "), Node::strike(vec![]), Node::text(" b")]
        );
        assert_eq!(
            parse("(__)"),
            vec![Node::text("("), Node::italic(vec![]), Node::text(")")]
        );
    }

    #[test]
    fn repeated_underscores_nest_one_level_each() {
        let nested = parse("___deep___");
        let mut depth = 0;
        let mut level = nested.as_slice();
        while let [Node::Emphasis { kind: EmphasisKind::Italic, content }] = level {
            depth += 1;
            level = content;
        }
        assert_eq!(depth, 3);
        assert_eq!(level, [Node::text("deep")]);
    }

    #[test]
    fn doubled_delimiters_nest() {
        assert_eq!(
            parse("__a__"),
            vec![Node::italic(vec![Node::italic(vec![Node::text("a")])])]
        );
    }

    #[test]
    fn atomic_span_edges_are_non_word_boundaries() {
        assert_eq!(
            parse("*`x`*"),
            vec![Node::bold(vec![Node::code("x")])]
        );
        assert_eq!(
            parse("_:wave:_"),
            vec![Node::italic(vec![Node::emoji("wave")])]
        );
    }

    #[test]
    fn punctuation_is_not_a_word_char() {
        assert_eq!(
            parse("(*a*)"),
            vec![
                Node::text("("),
                Node::bold(vec![Node::text("a")]),
                Node::text(")"),
            ]
        );
    }

    #[test]
    fn non_ascii_letters_are_not_word_chars() {
        assert_eq!(
            parse("é*a*"),
            vec![Node::text("é"), Node::bold(vec![Node::text("a")])]
        );
    }

    #[test]
    fn max_nesting_leaves_deep_delimiters_literal() {
        let opts = ParseOptions::new().with_max_nesting(1);
        assert_eq!(
            parse_inline("*a _b_*", &opts),
            vec![Node::bold(vec![Node::text("a _b_")])]
        );

        let flat = ParseOptions::new().with_max_nesting(0);
        assert_eq!(
            parse_inline("*a* :x:", &flat),
            vec![Node::text("*a* "), Node::emoji("x")]
        );
    }
}
