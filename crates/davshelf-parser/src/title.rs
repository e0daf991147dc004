//! Title guessing.
//!
//! Each step runs on the previous step's output. Delimiters are turned into
//! spaces before the noise patterns run, because the resolution and year
//! patterns only match whole words.

use std::sync::LazyLock;

use regex::Regex;

static DELIMITER_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[._-]+").unwrap());

static SEASON_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)s\d{1,2}e\d{1,2}").unwrap());

static RESOLUTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b\d{3,4}p\b").unwrap());

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}\b").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Derive a human-searchable title from a raw filename.
///
/// Total: every input produces a (possibly empty) string.
///
/// ```
/// use davshelf_parser::guess_title;
///
/// assert_eq!(guess_title("Breaking.Bad.S01E01.720p.2008.mkv"), "Breaking Bad");
/// assert_eq!(guess_title("Inception"), "Inception");
/// ```
pub fn guess_title(filename: &str) -> String {
    let stem = strip_extension(filename);
    let spaced = DELIMITER_RUN.replace_all(stem, " ");
    let without_episode = SEASON_EPISODE.replace_all(&spaced, "");
    let without_resolution = RESOLUTION.replace_all(&without_episode, "");
    let without_year = YEAR.replace_all(&without_resolution, "");
    WHITESPACE_RUN
        .replace_all(&without_year, " ")
        .trim()
        .to_string()
}

/// Drop the text after the last `.`, if any.
fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => &filename[..idx],
        None => filename,
    }
}
