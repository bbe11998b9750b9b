// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_log(messages: usize) -> Vec<String> {
    let base = [
        "some *bold* text and some _italic_ text",
        "check `cargo test --all` before you push :rocket:",
        "~nope~ _it's :emoji_time:!_",
        "underscored_words are fun_! a * b",
        "*bold _italic ~strike `code`~_* :tada: :not_whitelisted:",
    ];
    (0..messages)
        .map(|i| base[i % base.len()].to_string())
        .collect()
}

/// `depth` nested italic levels around a single word: `___deep___`.
///
/// Each inner closer is followed by another `_`, a word character, so it
/// cannot close an outer opener and every level pairs with its mirror.
#[allow(dead_code)]
pub fn generate_nested_message(depth: usize) -> String {
    let run = "_".repeat(depth);
    format!("{run}deep{run}")
}

/// A long message full of delimiters that never pair up.
#[allow(dead_code)]
pub fn generate_unmatched_message(len: usize) -> String {
    "a * b _ c ~ ".repeat(len)
}
