// ABOUTME: Inline flattener rendering a heading, paragraph, or list item into one line of text.
// ABOUTME: Skips footnote markers and citation anchors and inserts word-boundary spaces.

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::{ElementRef, Node};

/// Flatten an element's inline content into a single line.
///
/// The result is not trimmed.
pub fn flatten(element: ElementRef<'_>) -> String {
    flatten_with(element, &HashSet::new())
}

/// Flatten an element, treating nodes whose id is in `pruned` as absent.
pub fn flatten_with(element: ElementRef<'_>, pruned: &HashSet<NodeId>) -> String {
    let mut text = String::new();
    for child in element.children() {
        if pruned.contains(&child.id()) {
            continue;
        }
        let fragment = match child.value() {
            Node::Text(t) => String::from(&**t),
            Node::Element(_) => match ElementRef::wrap(child) {
                Some(el) if is_footnote_marker(&el) || is_citation_anchor(&el) => continue,
                Some(el) => flatten_with(el, pruned),
                None => continue,
            },
            _ => continue,
        };
        push_fragment(&mut text, &fragment);
    }
    text
}

/// Append `fragment`, separating it from `text` with one space when both
/// sides touch without whitespace. An apostrophe never takes a space after it.
fn push_fragment(text: &mut String, fragment: &str) {
    let Some(first) = fragment.chars().next() else {
        return;
    };
    if let Some(last) = text.chars().next_back() {
        if !last.is_whitespace() && !first.is_whitespace() && !is_apostrophe(last) {
            text.push(' ');
        }
    }
    text.push_str(fragment);
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// `<sup class="reference">` footnote markers.
fn is_footnote_marker(el: &ElementRef<'_>) -> bool {
    el.value().name() == "sup" && el.value().classes().any(|c| c == "reference")
}

/// Links into the page's own citation list (`#cite_note-…`, `#cite_ref-…`).
fn is_citation_anchor(el: &ElementRef<'_>) -> bool {
    el.value().name() == "a"
        && el
            .value()
            .attr("href")
            .is_some_and(|href| href.starts_with("#cite"))
}
