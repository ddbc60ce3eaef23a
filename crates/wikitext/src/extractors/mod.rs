// ABOUTME: Article extraction pipeline over an already-parsed document.
// ABOUTME: Chains region selection, the section walk, and text normalization.

//! Content extraction module.
//!
//! [`extract_article`] is the pure entry point: it borrows a parsed page and
//! returns the finished [`Article`] without performing any I/O.
//!
//! Submodules:
//! - `sections`: the section walker that assembles the raw text buffer.

pub mod sections;

use scraper::Html;
use tracing::debug;

use crate::dom::region::select_region;
use crate::error::ExtractError;
use crate::formats::{file_safe_title, normalize};
use crate::options::ExtractOptions;
use crate::result::Article;

use self::sections::walk_outcome;

/// Extract the article title and text from a parsed page.
pub fn extract_article(doc: &Html, opts: &ExtractOptions) -> Result<Article, ExtractError> {
    let region = select_region(doc, opts)?;
    let outcome = walk_outcome(&region, &opts.stop_headings);
    let text = normalize(&outcome.text);
    debug!(
        title = %region.title,
        blocks = outcome.emitted,
        chars = text.chars().count(),
        "extracted article"
    );

    Ok(Article {
        source: String::new(),
        file_stem: file_safe_title(&region.title),
        title: region.title,
        text,
    })
}
