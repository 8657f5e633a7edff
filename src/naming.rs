//! Normalization of tag text into file-name parts.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// An apostrophe plus exactly one letter, closing a word.
static ONE_LETTER_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'[A-Za-z]( |\z)").expect("suffix pattern is valid"));

/// Lowercase, title-case, then lowercase one-letter suffixes after an apostrophe.
///
/// `"bob's song"` becomes `"Bob's Song"`. Longer suffixes keep their capital:
/// `"o'brien"` becomes `"O'Brien"`.
pub fn format_tag(input: &str) -> String {
    let titled = title_case(&input.to_lowercase());
    ONE_LETTER_SUFFIX
        .replace_all(&titled, |caps: &Captures| caps[0].to_lowercase())
        .into_owned()
}

/// Uppercase every letter that starts a word.
///
/// A word starts after whitespace or after any ASCII character that is not a
/// letter, digit or underscore, so `rock-n-roll` becomes `Rock-N-Roll`.
///
/// Word starts use full uppercase mapping, not titlecase: `ß` becomes `SS`
/// and the digraph `ǆ` becomes `Ǆ` rather than `ǅ`.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev = ' ';
    for c in input.chars() {
        if is_word_separator(prev) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = c;
    }
    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}

/// `title + separator + artist + ext`.
pub fn target_name(title: &str, artist: &str, ext: &str, separator: &str) -> String {
    format!("{title}{separator}{artist}{ext}")
}
