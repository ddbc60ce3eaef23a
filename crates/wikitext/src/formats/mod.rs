// ABOUTME: Text normalization and file naming for extracted article text.
// ABOUTME: Applies whitespace and punctuation rewrites and trims surrounding blank lines.

//! Output text formatting.
//!
//! [`normalize`] is the last pass over the walker's buffer. Its rules run in a
//! fixed order, each on the output of the previous one, and the whole pass is
//! idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

static MULTI_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").unwrap());
static SPACE_BEFORE_STOP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,.])").unwrap());
static SPACE_AFTER_OPEN_PAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\s+").unwrap());
static SPACE_BEFORE_CLOSE_PAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\)").unwrap());
static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

const NBSP: char = '\u{00A0}';

/// Characters that cannot appear in a file name on common platforms.
const FILE_NAME_RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Normalize whitespace and punctuation of extracted text.
pub fn normalize(text: &str) -> String {
    let text = MULTI_SPACE_RE.replace_all(text, " ");
    let text = SPACE_BEFORE_STOP_RE.replace_all(&text, "$1");
    let text = nbsp_before_double_punctuation(&text);
    let text = SPACE_AFTER_OPEN_PAREN_RE.replace_all(&text, "(");
    let text = SPACE_BEFORE_CLOSE_PAREN_RE.replace_all(&text, ")");
    trim_blank_lines(&text)
}

/// Insert a no-break space before `; : ! ?` when the character before the
/// mark is not whitespace. Every mark is checked against its own predecessor
/// in the input, so runs like `?!` get a space before each mark.
fn nbsp_before_double_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if matches!(c, ';' | ':' | '!' | '?') && prev.is_some_and(|p| !p.is_whitespace()) {
            out.push(NBSP);
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Drop blank lines at the start and end; inner blank lines stay.
///
/// `\r\n`, `\r` and `\n` all end a line, and lines are rejoined with `\n`.
fn trim_blank_lines(text: &str) -> String {
    let lines: Vec<&str> = LINE_BREAK_RE.split(text).collect();
    let is_blank = |l: &&str| l.trim().is_empty();
    let start = lines.iter().position(|l| !is_blank(l)).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !is_blank(l))
        .map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}

/// Derive a file-system-safe name from an article title.
///
/// Reserved and control characters become `_`; leading/trailing spaces and
/// dots are removed. An empty result falls back to `article`.
pub fn file_safe_title(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| {
            if c.is_control() || FILE_NAME_RESERVED.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();
    let trimmed = replaced.trim_matches(|c: char| c.is_whitespace() || c == '.');
    if trimmed.is_empty() {
        "article".to_string()
    } else {
        trimmed.to_string()
    }
}
