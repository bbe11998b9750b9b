use crate::parsing::inline::types::EmphasisKind;

/// Emphasis delimiters. Each delimiter maps to exactly one [`EmphasisKind`].
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    pub const TILDE: u8 = b'~';

    /// The emphasis kind a delimiter byte opens, if any.
    pub fn kind_of(b: u8) -> Option<EmphasisKind> {
        match b {
            Self::STAR => Some(EmphasisKind::Bold),
            Self::UNDERSCORE => Some(EmphasisKind::Italic),
            Self::TILDE => Some(EmphasisKind::Strike),
            _ => None,
        }
    }

    /// The delimiter byte for `kind`.
    pub fn delimiter(kind: EmphasisKind) -> u8 {
        match kind {
            EmphasisKind::Bold => Self::STAR,
            EmphasisKind::Italic => Self::UNDERSCORE,
            EmphasisKind::Strike => Self::TILDE,
        }
    }

    /// Word characters for delimiter flanking: ASCII letters, digits, underscore.
    pub fn is_word_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_map_both_ways() {
        for b in [Emphasis::STAR, Emphasis::UNDERSCORE, Emphasis::TILDE] {
            let kind = Emphasis::kind_of(b).unwrap();
            assert_eq!(Emphasis::delimiter(kind), b);
        }
        assert_eq!(Emphasis::kind_of(b'`'), None);
        assert_eq!(Emphasis::kind_of(b':'), None);
    }

    #[test]
    fn underscore_is_a_word_char() {
        assert!(Emphasis::is_word_char('_'));
        assert!(Emphasis::is_word_char('q'));
        assert!(Emphasis::is_word_char('7'));
        assert!(!Emphasis::is_word_char('*'));
        assert!(!Emphasis::is_word_char('!'));
        assert!(!Emphasis::is_word_char('é'));
    }
}
