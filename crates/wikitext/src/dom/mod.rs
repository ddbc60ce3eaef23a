// ABOUTME: DOM traversal utilities over scraper's parsed document tree.
// ABOUTME: Hosts the region selector and the inline flattener.

//! DOM utilities for article pages.
//!
//! Nothing here mutates the parsed document: noise removal is expressed as a
//! set of pruned node ids that traversals skip.

pub mod flatten;
pub mod region;
