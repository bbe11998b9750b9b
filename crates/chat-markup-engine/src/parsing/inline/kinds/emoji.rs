/// Emoji reference inline type: `:name:`.
pub struct Emoji;

impl Emoji {
    /// The colon that fences an emoji name on both sides.
    pub const FENCE: u8 = b':';

    /// Name characters: ASCII letters, digits and underscore.
    pub fn is_name_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_'
    }
}
