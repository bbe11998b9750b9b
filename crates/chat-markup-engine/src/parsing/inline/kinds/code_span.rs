/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: the interior is kept verbatim and no emphasis
/// or emoji parsing happens inside it. A code span closes at the very next
/// backtick; no flanking rules apply.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
