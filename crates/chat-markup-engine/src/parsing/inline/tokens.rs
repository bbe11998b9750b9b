use crate::parsing::{ParseOptions, span::Span};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emoji, Emphasis},
    types::EmphasisKind,
};

/// Output of the tokenizer pass.
///
/// Atomic spans (`CodeSpan`, `Emoji`) are opaque to emphasis matching.
/// Every emphasis delimiter byte outside an atomic span gets its own
/// `Delimiter` token; all other bytes are grouped into `Text` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A non-empty run of plain text.
    Text(Span),
    /// A single `*`, `_` or `~` at byte offset `at`.
    Delimiter { kind: EmphasisKind, at: usize },
    /// `` `code` ``; `inner` excludes the backticks.
    CodeSpan { full: Span, inner: Span },
    /// `:name:` accepted by the whitelist; `name` excludes the colons.
    Emoji { full: Span, name: Span },
}

impl Token {
    /// The full source span covered by this token.
    pub fn span(&self) -> Span {
        match *self {
            Token::Text(sp) => sp,
            Token::Delimiter { at, .. } => Span::new(at, at + 1),
            Token::CodeSpan { full, .. } => full,
            Token::Emoji { full, .. } => full,
        }
    }
}

/// Result of probing for an emoji at the cursor.
enum EmojiProbe {
    NotEmoji,
    Accepted(Token),
    /// A well-formed `:name:` the whitelist turned down. Its bytes up to
    /// `end` are plain text and cannot start another atomic span.
    Rejected { end: usize },
}

/// Tokenizes a message in one left-to-right sweep.
///
/// Code spans and emoji are recognized eagerly in source order, so
/// whichever starts first wins. The returned tokens cover `s` exactly.
pub fn tokenize(s: &str, options: &ParseOptions) -> Vec<Token> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();
    let mut plain_until = 0;

    fn flush_text(out: &mut Vec<Token>, start: usize, end: usize) {
        if end > start {
            out.push(Token::Text(Span::new(start, end)));
        }
    }

    while !cur.eof() {
        if cur.pos() >= plain_until {
            if let Some(tok) = try_code_span(&mut cur) {
                flush_text(&mut out, text_start, tok.span().start);
                text_start = tok.span().end;
                out.push(tok);
                continue;
            }
            match try_emoji(&mut cur, options) {
                EmojiProbe::Accepted(tok) => {
                    flush_text(&mut out, text_start, tok.span().start);
                    text_start = tok.span().end;
                    out.push(tok);
                    continue;
                }
                EmojiProbe::Rejected { end } => plain_until = end,
                EmojiProbe::NotEmoji => {}
            }
        }

        if let Some(kind) = cur.peek().and_then(Emphasis::kind_of) {
            flush_text(&mut out, text_start, cur.pos());
            out.push(Token::Delimiter {
                kind,
                at: cur.pos(),
            });
            cur.bump();
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to take a code span at the cursor.
///
/// Returns `None` if not at a backtick or if no closing backtick follows.
/// On failure, cursor position is restored.
fn try_code_span(cur: &mut Cursor<'_>) -> Option<Token> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() && cur.peek() != Some(CodeSpan::TICK) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(Token::CodeSpan {
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
    })
}

/// Probes for `:name:` at the cursor. Only an accepted emoji moves the cursor.
fn try_emoji(cur: &mut Cursor<'_>, options: &ParseOptions) -> EmojiProbe {
    if cur.peek() != Some(Emoji::FENCE) {
        return EmojiProbe::NotEmoji;
    }

    let start = cur.pos();
    cur.bump(); // :
    let name_len = cur.count_while(Emoji::is_name_byte);
    let closed = cur.peek_at(name_len) == Some(Emoji::FENCE);
    cur.i = start;

    if name_len == 0 || !closed {
        return EmojiProbe::NotEmoji;
    }

    let name = Span::new(start + 1, start + 1 + name_len);
    let full = Span::new(start, name.end + 1);
    if !options.accepts_emoji(name.slice(cur.s)) {
        log::trace!("emoji {:?} rejected by whitelist", name.slice(cur.s));
        return EmojiProbe::Rejected { end: full.end };
    }

    cur.bump_n(full.len());
    EmojiProbe::Accepted(Token::Emoji { full, name })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<Token> {
        tokenize(s, &ParseOptions::default())
    }

    #[test]
    fn plain_text_is_one_token() {
        assert_eq!(toks("hello world"), vec![Token::Text(Span::new(0, 11))]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(toks("").is_empty());
    }

    #[test]
    fn delimiters_are_split_out() {
        assert_eq!(
            toks("a*b_c~"),
            vec![
                Token::Text(Span::new(0, 1)),
                Token::Delimiter {
                    kind: EmphasisKind::Bold,
                    at: 1
                },
                Token::Text(Span::new(2, 3)),
                Token::Delimiter {
                    kind: EmphasisKind::Italic,
                    at: 3
                },
                Token::Text(Span::new(4, 5)),
                Token::Delimiter {
                    kind: EmphasisKind::Strike,
                    at: 5
                },
            ]
        );
    }

    #[test]
    fn code_span_swallows_delimiters() {
        assert_eq!(
            toks("`*x*`"),
            vec![Token::CodeSpan {
                full: Span::new(0, 5),
                inner: Span::new(1, 4),
            }]
        );
    }

    #[test]
    fn empty_code_span() {
        assert_eq!(
            toks("``"),
            vec![Token::CodeSpan {
                full: Span::new(0, 2),
                inner: Span::new(1, 1),
            }]
        );
    }

    #[test]
    fn unclosed_code_span_becomes_text() {
        assert_eq!(toks("`unclosed code"), vec![Token::Text(Span::new(0, 14))]);
    }

    #[test]
    fn emoji_with_underscores_is_atomic() {
        assert_eq!(
            toks(":emoji_time:"),
            vec![Token::Emoji {
                full: Span::new(0, 12),
                name: Span::new(1, 11),
            }]
        );
    }

    #[test]
    fn lone_and_empty_colons_are_text() {
        assert_eq!(toks("a: b"), vec![Token::Text(Span::new(0, 4))]);
        assert_eq!(toks("::"), vec![Token::Text(Span::new(0, 2))]);
        assert_eq!(toks(":a b:"), vec![Token::Text(Span::new(0, 5))]);
    }

    #[test]
    fn emoji_matching_is_non_overlapping() {
        // `:a:` is taken first; the `:` it closes with cannot open `:b:`
        let tokens = toks(":a:b:");
        assert_eq!(
            tokens,
            vec![
                Token::Emoji {
                    full: Span::new(0, 3),
                    name: Span::new(1, 2),
                },
                Token::Text(Span::new(3, 5)),
            ]
        );
    }

    #[test]
    fn rejected_emoji_does_not_lend_its_closing_colon() {
        let opts = ParseOptions::new().with_emoji_names(["b"]);
        assert_eq!(
            tokenize(":a:b:", &opts),
            vec![Token::Text(Span::new(0, 5))]
        );
    }

    #[test]
    fn rejected_emoji_underscores_are_delimiters() {
        let opts = ParseOptions::new().with_emoji_names(["ok"]);
        assert_eq!(
            tokenize(":no_way:", &opts),
            vec![
                Token::Text(Span::new(0, 3)),
                Token::Delimiter {
                    kind: EmphasisKind::Italic,
                    at: 3
                },
                Token::Text(Span::new(4, 8)),
            ]
        );
    }

    #[test]
    fn code_span_wins_when_it_starts_first() {
        let tokens = toks("`:a:` :b:");
        assert!(matches!(tokens[0], Token::CodeSpan { .. }));
        assert!(matches!(tokens[2], Token::Emoji { .. }));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn tokens_cover_input_exactly() {
        let s = "é *x* `y` :z: _w";
        let tokens = toks(s);
        let mut pos = 0;
        for t in &tokens {
            assert_eq!(t.span().start, pos);
            pos = t.span().end;
        }
        assert_eq!(pos, s.len());
    }
}
