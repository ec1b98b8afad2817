//! Text cleaning applied before vectorization.
//!
//! Must match the cleaning used when the vectorizer was fitted: lowercase,
//! strip @mentions, strip links, strip everything outside `[a-z]` and
//! whitespace, trim.

use std::sync::LazyLock;

use regex::Regex;

static MENTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@[A-Za-z0-9_]+").expect("valid mention pattern")
});

static LINKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid link pattern"));

static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]").expect("valid letter pattern"));

pub fn preprocess(text: &str) -> String {
    let text = text.to_lowercase();
    let text = MENTIONS.replace_all(&text, "");
    let text = LINKS.replace_all(&text, "");
    let text = NON_LETTERS.replace_all(&text, "");
    text.trim().to_string()
}
