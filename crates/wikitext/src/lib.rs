// ABOUTME: Main library entry point for wikitext, the encyclopedia article to plain text converter.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Article, ExtractError, ErrorCode, Options.

//! wikitext - Convert one encyclopedia article page into clean plain text.
//!
//! The core is a pure pipeline over an already-parsed page: select the
//! content region, walk its headings, paragraphs and list items, then
//! normalize whitespace and punctuation. [`Client`] adds the fetch.
//!
//! # Example
//!
//! ```no_run
//! use wikitext::{Client, ExtractError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ExtractError> {
//!     let client = Client::builder().build();
//!     let article = client.fetch("https://fr.wikipedia.org/wiki/Lyon").await?;
//!     println!("{}", article.text);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dom;
pub mod error;
pub mod extractors;
pub mod formats;
pub mod options;
pub mod resource;
pub mod result;

pub use crate::client::Client;
pub use crate::dom::flatten::{flatten, flatten_with};
pub use crate::dom::region::{select_region, Block, BlockKind, Region};
pub use crate::error::{ErrorCode, ExtractError};
pub use crate::extractors::extract_article;
pub use crate::extractors::sections::{walk, walk_outcome, WalkOutcome};
pub use crate::formats::{file_safe_title, normalize};
pub use crate::options::{ClientBuilder, ExtractOptions, Options, DEFAULT_STOP_HEADINGS};
pub use crate::result::Article;
