/// A byte range `[start, end)` into the message being parsed.
///
/// Tokens store spans rather than copied text; slicing the message with a
/// span reproduces the exact source bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `s` with this span.
    ///
    /// Spans produced by the tokenizer always fall on char boundaries.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }

    /// True if `other` lies entirely within this span.
    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 5).len(), 3);
        assert!(Span::new(4, 4).is_empty());
        // Inverted spans saturate rather than underflow
        assert!(Span::new(5, 2).is_empty());
    }

    #[test]
    fn slice_returns_source_text() {
        let s = "some *bold* text";
        assert_eq!(Span::new(5, 11).slice(s), "*bold*");
    }

    #[test]
    fn contains_checks_both_ends() {
        let outer = Span::new(0, 10);
        assert!(outer.contains(Span::new(1, 9)));
        assert!(outer.contains(outer));
        assert!(!outer.contains(Span::new(5, 11)));
    }
}
