//! Host text surface
//!
//! The one platform-specific coupling of the core: the rendered text of
//! each cell and the single live selection. Caret capture reads from it
//! and caret restore writes to it.

use std::collections::BTreeMap;

use crate::caret::{capture, restore, CaretOffsetPair, LiveSelection, TextNode};
use crate::grid::RenderedGrid;
use crate::messages::Msg;
use crate::model::CellKey;

pub trait TextSurface {
    /// Replace the rendered structure with a new render pass
    fn commit(&mut self, grid: &RenderedGrid);

    /// Rendered content of a cell
    fn content(&self, cell: &CellKey) -> Option<&TextNode>;

    /// The live selection, with the cell whose subtree holds it
    fn selection(&self) -> Option<(&CellKey, &LiveSelection)>;

    fn set_selection(&mut self, cell: &CellKey, selection: LiveSelection);

    /// The live selection if it lies inside `cell`
    fn selection_in(&self, cell: &CellKey) -> Option<&LiveSelection> {
        self.selection()
            .filter(|(key, _)| *key == cell)
            .map(|(_, selection)| selection)
    }
}

/// In-memory surface that behaves like a browser document
///
/// Committing a render replaces a cell's text node only when its text
/// changed, and replacing the node drops a selection inside it.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    cells: BTreeMap<CellKey, TextNode>,
    selection: Option<(CellKey, LiveSelection)>,
    commits: usize,
    selection_writes: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattened text of a cell
    pub fn text(&self, cell: &CellKey) -> Option<String> {
        self.cells.get(cell).map(TextNode::flattened)
    }

    /// Caret of a cell as offsets; `{0, 0}` if the selection is elsewhere
    pub fn caret(&self, cell: &CellKey) -> Option<CaretOffsetPair> {
        self.cells
            .get(cell)
            .map(|root| capture(root, self.selection_in(cell)))
    }

    /// Put the caret into a cell like a user click would
    pub fn place_caret(&mut self, cell: &CellKey, pair: CaretOffsetPair) -> bool {
        match self.cells.get(cell) {
            Some(root) => {
                self.selection = Some((cell.clone(), restore(root, pair)));
                true
            }
            None => false,
        }
    }

    /// Type `text` over the current selection in `cell`
    ///
    /// Mutates the content in place, leaves the caret after the typed
    /// text and returns the input message the host would report. Returns
    /// `None` if the cell does not hold the selection.
    pub fn type_text(&mut self, cell: &CellKey, text: &str) -> Option<Msg> {
        let root = self.cells.get(cell)?;
        let live = self.selection_in(cell)?;
        let caret = capture(root, Some(live));

        let current: Vec<char> = root.flattened().chars().collect();
        let mut edited: String = current[..caret.start].iter().collect();
        edited.push_str(text);
        edited.extend(current[caret.end..].iter());

        let content = TextNode::from_text(&edited);
        let after = restore(
            &content,
            CaretOffsetPair::collapsed(caret.start + text.chars().count()),
        );
        self.cells.insert(cell.clone(), content.clone());
        self.selection = Some((cell.clone(), after.clone()));
        Some(Msg::text_changed(cell.clone(), content, Some(after)))
    }

    /// Number of committed render passes
    pub fn commits(&self) -> usize {
        self.commits
    }

    /// Number of programmatic selection changes
    pub fn selection_writes(&self) -> usize {
        self.selection_writes
    }
}

impl TextSurface for MemorySurface {
    fn commit(&mut self, grid: &RenderedGrid) {
        let selected = self.selection.as_ref().map(|(key, _)| key.clone());
        let mut selection_survives = false;
        let mut next = BTreeMap::new();
        for cell in grid.cells() {
            let text = cell.content.display_text();
            let node = match self.cells.remove(&cell.key) {
                Some(existing) if existing.flattened() == text => {
                    if selected.as_ref() == Some(&cell.key) {
                        selection_survives = true;
                    }
                    existing
                }
                _ => TextNode::from_text(text),
            };
            next.insert(cell.key.clone(), node);
        }

        if !selection_survives {
            self.selection = None;
        }
        self.cells = next;
        self.commits += 1;
    }

    fn content(&self, cell: &CellKey) -> Option<&TextNode> {
        self.cells.get(cell)
    }

    fn selection(&self) -> Option<(&CellKey, &LiveSelection)> {
        self.selection.as_ref().map(|(key, selection)| (key, selection))
    }

    fn set_selection(&mut self, cell: &CellKey, selection: LiveSelection) {
        self.selection = Some((cell.clone(), selection));
        self.selection_writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::EditMode;
    use crate::grid::{compute_slice, CellRenderer};
    use crate::model::{ColumnDef, ColumnSpec, Row, SelectionSet, ViewportState};

    fn commit(surface: &mut MemorySurface, value: &str) {
        let rows = vec![Row::new(1).with("a", value)];
        let columns = ColumnSpec::new().with("a", ColumnDef::text("A"));
        let slice = compute_slice(&rows, &columns, &ViewportState::new(1, 1));
        let grid = RenderedGrid::build(
            &slice,
            &columns,
            &CellRenderer::default(),
            &SelectionSet::new(),
            |_| EditMode::Editing,
        );
        surface.commit(&grid);
    }

    #[test]
    fn test_type_over_selection() {
        let key = CellKey::new(0, "a");
        let mut surface = MemorySurface::new();
        commit(&mut surface, "hello");
        surface.place_caret(&key, CaretOffsetPair::new(1, 4));

        assert!(surface.type_text(&key, "ipp").is_some());
        assert_eq!(surface.text(&key).as_deref(), Some("hippo"));
        assert_eq!(surface.caret(&key), Some(CaretOffsetPair::collapsed(4)));
    }

    #[test]
    fn test_commit_keeps_selection_only_if_text_unchanged() {
        let key = CellKey::new(0, "a");
        let mut surface = MemorySurface::new();
        commit(&mut surface, "abc");
        surface.place_caret(&key, CaretOffsetPair::collapsed(2));

        commit(&mut surface, "abc");
        assert_eq!(surface.caret(&key), Some(CaretOffsetPair::collapsed(2)));

        commit(&mut surface, "abcd");
        assert!(surface.selection().is_none());
        assert_eq!(surface.commits(), 3);
    }

    #[test]
    fn test_typing_without_selection_does_nothing() {
        let key = CellKey::new(0, "a");
        let mut surface = MemorySurface::new();
        commit(&mut surface, "abc");
        assert!(surface.type_text(&key, "x").is_none());
        assert_eq!(surface.text(&key).as_deref(), Some("abc"));
    }
}
