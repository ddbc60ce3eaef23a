// ABOUTME: Article struct holding the extracted title and plain text of one page.
// ABOUTME: Includes the derived output file name and small convenience helpers.

use serde::{Deserialize, Serialize};

/// The result of extracting one article page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Article {
    /// URL or file path the page came from; empty when unnamed.
    pub source: String,
    pub title: String,
    /// File-system-safe form of the title.
    pub file_stem: String,
    pub text: String,
}

impl Article {
    /// Name of the output file: `<file_stem>.txt`.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.file_stem)
    }

    /// Returns true if no text was extracted.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of whitespace-separated words in the text.
    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }
}

/// Count words in a text string using whitespace splitting.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
