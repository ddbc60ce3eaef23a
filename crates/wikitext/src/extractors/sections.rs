// ABOUTME: Section walker assembling article text from the region's block nodes.
// ABOUTME: Emits headings, paragraphs, and list items until a stop-listed level-2 heading.

use tracing::debug;

use crate::dom::flatten::flatten_with;
use crate::dom::region::{BlockKind, Region};

/// What a walk produced, besides the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    pub text: String,
    /// Number of blocks appended to the buffer.
    pub emitted: usize,
    /// The stop heading that ended the walk, if any.
    pub stopped_at: Option<String>,
}

/// Walk the region and return the raw (not yet normalized) text.
pub fn walk(region: &Region<'_>, stop_set: &[String]) -> String {
    walk_outcome(region, stop_set).text
}

/// Walk the region, also reporting how the walk ended.
pub fn walk_outcome(region: &Region<'_>, stop_set: &[String]) -> WalkOutcome {
    let mut buf = String::new();
    let mut started = false;
    let mut emitted = 0;
    let mut stopped_at = None;

    for block in region.blocks() {
        let text = flatten_with(block.element, &region.pruned);
        let text = text.trim();
        match block.kind {
            BlockKind::Heading2 | BlockKind::Heading3 => {
                if block.kind == BlockKind::Heading2 && stop_set.iter().any(|s| s == text) {
                    stopped_at = Some(text.to_string());
                    break;
                }
                started = true;
                truncate_trailing_newlines(&mut buf);
                buf.push_str("\n\n");
                buf.push_str(text);
                buf.push('\n');
            }
            BlockKind::Paragraph => {
                started = true;
                truncate_trailing_newlines(&mut buf);
                buf.push('\n');
                buf.push_str(text);
            }
            // List items are appended whether or not content has started.
            BlockKind::ListItem => {
                buf.push_str("\n- ");
                buf.push_str(text);
            }
        }
        emitted += 1;
    }

    debug!(
        emitted,
        started,
        stopped_at = stopped_at.as_deref().unwrap_or(""),
        "walked content region"
    );

    WalkOutcome {
        text: buf,
        emitted,
        stopped_at,
    }
}

fn truncate_trailing_newlines(buf: &mut String) {
    let len = buf.trim_end_matches('\n').len();
    buf.truncate(len);
}
