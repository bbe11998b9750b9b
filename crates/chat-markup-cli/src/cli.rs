use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chat-markup")]
#[command(author, version)]
#[command(about = "Parse chat messages with *bold*, _italic_, ~strike~, `code` and :emoji: markup")]
#[command(after_help = "\
EXAMPLES:

    # Render a message with terminal styling
    chat-markup 'some *bold* text :tada:'

    # One JSON node array per line of stdin
    cat messages.txt | chat-markup --format json

    # Only accept a couple of emoji
    chat-markup --emoji tada --emoji wave ':tada: :nope:'

CONFIGURATION:

Settings are read from ~/.config/chat-markup/config.toml unless --config is given:

    emoji_names = [\"smile\", \"tada\"]
    emoji_names_file = \"~/.config/chat-markup/emoji.txt\"
    max_nesting = 32")]
pub struct Cli {
    /// Message to parse. When omitted, every line of stdin is parsed as a message.
    pub message: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
    pub format: Format,

    /// Accept this emoji name (repeatable). Adds to the configured whitelist.
    #[arg(long = "emoji", value_name = "NAME")]
    pub emoji: Vec<String>,

    /// Also accept every shortcode in the gemoji set. With no other whitelist
    /// source, only those shortcodes are accepted.
    #[arg(long)]
    pub known_emoji: bool,

    /// Maximum emphasis nesting depth (overrides the config file)
    #[arg(long, value_name = "N")]
    pub max_nesting: Option<usize>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Terminal styling; emoji shown as glyphs where known
    Ansi,
    /// The node array as JSON
    Json,
    /// Text only, markup removed
    Plain,
    /// Markup rebuilt from the parse tree
    Markup,
    /// Indented node tree
    Tree,
}
