use std::collections::HashSet;

/// Parser configuration, threaded unchanged through every nested parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Emoji whitelist. `None` or an empty set accepts any `:name:` token.
    pub emoji_names: Option<HashSet<String>>,
    /// Maximum emphasis nesting depth. `None` means unlimited.
    ///
    /// Delimiters that would open a level beyond this limit stay literal.
    pub max_nesting: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds names to the emoji whitelist, creating it if absent.
    pub fn with_emoji_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emoji_names
            .get_or_insert_with(HashSet::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = Some(max_nesting);
        self
    }

    /// Whether `name` may become an emoji node under the current whitelist.
    pub fn accepts_emoji(&self, name: &str) -> bool {
        match &self.emoji_names {
            Some(names) if !names.is_empty() => names.contains(name),
            _ => true,
        }
    }

    /// Whether an emphasis node may open at nesting `depth` (0 = top level).
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_nesting.is_none_or(|max| depth < max)
    }
}
