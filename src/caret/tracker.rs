//! Capture and restore of caret positions

use super::node::TextNode;

/// Character offsets into the flattened text of one cell
///
/// Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CaretOffsetPair {
    pub start: usize,
    pub end: usize,
}

impl CaretOffsetPair {
    /// Build a pair, ordering the bounds
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Collapsed caret at `offset`
    pub fn collapsed(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Clamp both bounds to `len`
    pub fn clamped(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

/// A boundary point inside a rendered tree
///
/// On a text leaf `offset` counts characters; on an element it counts
/// children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub path: Vec<usize>,
    pub offset: usize,
}

impl Anchor {
    pub fn new(path: Vec<usize>, offset: usize) -> Self {
        Self { path, offset }
    }
}

/// The host's live selection, relative to a cell's root node
///
/// `anchor` stays fixed while `focus` moves, so a selection made
/// right-to-left has `focus` before `anchor`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LiveSelection {
    pub anchor: Anchor,
    pub focus: Anchor,
}

impl LiveSelection {
    pub fn new(anchor: Anchor, focus: Anchor) -> Self {
        Self { anchor, focus }
    }

    pub fn collapsed(at: Anchor) -> Self {
        Self {
            anchor: at.clone(),
            focus: at,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}

/// Flattened offset of a boundary point, or None if it lies outside `root`
fn resolve(root: &TextNode, anchor: &Anchor) -> Option<usize> {
    let (start, node) = root.start_of(&anchor.path)?;
    match node {
        TextNode::Text(s) => {
            if anchor.offset > s.chars().count() {
                return None;
            }
            Some(start + anchor.offset)
        }
        TextNode::Element { children, .. } => {
            let before = children.get(..anchor.offset)?;
            Some(start + before.iter().map(TextNode::text_len).sum::<usize>())
        }
    }
}

/// Snapshot a live selection as flattened offsets
///
/// Returns `{0, 0}` when there is no selection or it does not lie
/// inside `root`.
pub fn capture(root: &TextNode, live: Option<&LiveSelection>) -> CaretOffsetPair {
    let Some(selection) = live else {
        return CaretOffsetPair::default();
    };
    match (resolve(root, &selection.anchor), resolve(root, &selection.focus)) {
        (Some(a), Some(b)) => CaretOffsetPair::new(a, b),
        _ => {
            tracing::trace!("Selection outside cell content, capturing empty caret");
            CaretOffsetPair::default()
        }
    }
}

/// Boundary point for a flattened offset; the first leaf whose range
/// contains the offset wins
fn locate(root: &TextNode, offset: usize) -> Anchor {
    let leaves = root.leaves();
    leaves
        .iter()
        .find(|leaf| offset >= leaf.start && offset <= leaf.start + leaf.len)
        .map(|leaf| Anchor::new(leaf.path.clone(), offset - leaf.start))
        .or_else(|| {
            leaves
                .last()
                .map(|leaf| Anchor::new(leaf.path.clone(), leaf.len))
        })
        .unwrap_or_default()
}

/// Build a live selection spanning `pair` inside `root`
///
/// Offsets past the end of the content clamp to end-of-content. Empty
/// content yields a collapsed selection at the root.
pub fn restore(root: &TextNode, pair: CaretOffsetPair) -> LiveSelection {
    let pair = pair.clamped(root.text_len());
    let start = locate(root, pair.start);
    if pair.is_collapsed() {
        return LiveSelection::collapsed(start);
    }
    LiveSelection::new(start, locate(root, pair.end))
}

/// Total character count of the cell content
pub fn text_len(root: &TextNode) -> usize {
    root.text_len()
}

/// Collapsed selection at end-of-content (first focus of an edit)
pub fn place_at_end(root: &TextNode) -> LiveSelection {
    restore(root, CaretOffsetPair::collapsed(root.text_len()))
}
