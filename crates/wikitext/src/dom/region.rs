// ABOUTME: Region selector locating the article title and body container of a parsed page.
// ABOUTME: Truncates the body at the info panel and prunes banner cells and nested panels.

use std::collections::HashSet;
use std::fmt;

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Html, Node};
use tracing::debug;

use crate::error::ExtractError;
use crate::options::ExtractOptions;

/// Kind of block node consumed by the section walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading2,
    Heading3,
    Paragraph,
    ListItem,
}

impl BlockKind {
    fn from_tag(name: &str) -> Option<Self> {
        match name {
            "h2" => Some(BlockKind::Heading2),
            "h3" => Some(BlockKind::Heading3),
            "p" => Some(BlockKind::Paragraph),
            "li" => Some(BlockKind::ListItem),
            _ => None,
        }
    }
}

/// A block node of the region, in document order.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    pub kind: BlockKind,
    pub element: ElementRef<'a>,
}

/// The content region of an article: a pruned view over the parsed page.
///
/// The document is never modified. `roots` is the body container's effective
/// child list and `pruned` holds the roots of removed noise subtrees.
#[derive(Clone)]
pub struct Region<'a> {
    pub title: String,
    pub roots: Vec<NodeRef<'a, Node>>,
    pub pruned: HashSet<NodeId>,
}

impl fmt::Debug for Region<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("title", &self.title)
            .field("roots", &self.roots.len())
            .field("pruned", &self.pruned.len())
            .finish()
    }
}

impl<'a> Region<'a> {
    /// Block nodes (h2, h3, p, li) not inside a pruned subtree, in document
    /// order. Nested blocks are all yielded: a `p` inside an `li` comes right
    /// after the `li`.
    pub fn blocks(&self) -> Vec<Block<'a>> {
        let mut out = Vec::new();
        for root in &self.roots {
            self.collect_blocks(*root, &mut out);
        }
        out
    }

    /// Whether `id` is the root of a pruned subtree.
    pub fn is_pruned(&self, id: NodeId) -> bool {
        self.pruned.contains(&id)
    }

    fn collect_blocks(&self, node: NodeRef<'a, Node>, out: &mut Vec<Block<'a>>) {
        if self.is_pruned(node.id()) {
            return;
        }
        if let Some(element) = ElementRef::wrap(node) {
            if let Some(kind) = BlockKind::from_tag(element.value().name()) {
                out.push(Block { kind, element });
            }
        }
        for child in node.children() {
            self.collect_blocks(child, out);
        }
    }
}

/// Locate the title and body of an article page and prune its noise.
pub fn select_region<'a>(
    doc: &'a Html,
    opts: &ExtractOptions,
) -> Result<Region<'a>, ExtractError> {
    let title_el = doc
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "span" && has_class(el, &opts.title_class))
        .ok_or_else(|| ExtractError::title_not_found("", "SelectRegion"))?;
    let title = title_el.text().collect::<String>().trim().to_string();

    let body = doc
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "div" && el.value().id() == Some(opts.body_id.as_str()))
        .ok_or_else(|| ExtractError::body_not_found("", "SelectRegion"))?;

    let infobox = body
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table" && has_class(el, &opts.infobox_class));

    let roots: Vec<NodeRef<'a, Node>> = match infobox {
        Some(panel) => {
            debug!(title = %title, "truncating body after info panel");
            panel.next_siblings().collect()
        }
        None => body.children().collect(),
    };

    let mut pruned = HashSet::new();
    for root in &roots {
        mark_noise(*root, &opts.banner_classes, &mut pruned);
    }
    for root in &roots {
        mark_infoboxes(*root, &opts.infobox_class, &mut pruned);
    }
    debug!(
        title = %title,
        roots = roots.len(),
        pruned = pruned.len(),
        "selected content region"
    );

    Ok(Region {
        title,
        roots,
        pruned,
    })
}

fn has_class(el: &ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Mark every banner-cell subtree. Descent stops at a marked node since its
/// whole subtree is already gone.
fn mark_noise(node: NodeRef<'_, Node>, classes: &[String], pruned: &mut HashSet<NodeId>) {
    if let Some(el) = ElementRef::wrap(node) {
        if classes.iter().any(|c| has_class(&el, c)) {
            pruned.insert(node.id());
            return;
        }
    }
    for child in node.children() {
        mark_noise(child, classes, pruned);
    }
}

/// Mark info panels that survived truncation and banner removal.
fn mark_infoboxes(node: NodeRef<'_, Node>, class: &str, pruned: &mut HashSet<NodeId>) {
    if pruned.contains(&node.id()) {
        return;
    }
    if let Some(el) = ElementRef::wrap(node) {
        if has_class(&el, class) {
            pruned.insert(node.id());
            return;
        }
    }
    for child in node.children() {
        mark_infoboxes(child, class, pruned);
    }
}
