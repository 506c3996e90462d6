//! Grid runtime
//!
//! Owns the core's ephemeral state and runs the loop:
//!
//! ```text
//! host input ─► dispatch ─► update ─► Cmd ─┬─► callbacks ─► host state
//!                                          └─► caret tasks (queued)
//! host state ─► render ─► surface.commit ─► caret tasks (run)
//! ```
//!
//! Caret tasks only run after the surface has committed a render, so a
//! restore always sees the structure that reflects the upstream change.

use crate::caret::{place_at_end, restore, CaretOffsetPair};
use crate::commands::Cmd;
use crate::config::GridConfig;
use crate::formula::FormulaEvaluator;
use crate::grid::{compute_slice, validate, CellRenderer, ConfigIssue, RenderedGrid};
use crate::messages::{Msg, ScrollMsg};
use crate::model::{
    CellKey, ColumnSpec, DataType, Frame, GridModel, HostState, Row, SelectionSet, ViewportState,
};
use crate::scroll::{Orientation, ScrollInput};
use crate::update::update;

use super::callbacks::Callbacks;
use super::surface::TextSurface;

/// Immutable snapshot of host state for one render pass
#[derive(Debug, Clone, Copy)]
pub struct GridProps<'a> {
    pub rows: &'a [Row],
    pub columns: &'a ColumnSpec,
    pub viewport: ViewportState,
    pub selection: &'a SelectionSet,
}

impl<'a> GridProps<'a> {
    pub fn from_host(host: &'a HostState, columns: &'a ColumnSpec) -> Self {
        Self {
            rows: host.dataset.rows(),
            columns,
            viewport: host.viewport,
            selection: &host.selection,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum CaretTask {
    Restore(CellKey, CaretOffsetPair),
    AtEnd(CellKey),
}

#[derive(Debug)]
pub struct Grid {
    model: GridModel,
    callbacks: Callbacks,
    renderer: CellRenderer,
    caret_tasks: Vec<CaretTask>,
    issues: Vec<ConfigIssue>,
    last: RenderedGrid,
}

impl Grid {
    /// Set up a grid; configuration issues are logged and kept
    pub fn new(columns: &ColumnSpec, callbacks: Callbacks, config: GridConfig) -> Self {
        let handlers = callbacks.handlers();
        let issues = validate(columns, &handlers);
        Self {
            model: GridModel::new(config, handlers),
            callbacks,
            renderer: CellRenderer::default(),
            caret_tasks: Vec::new(),
            issues,
            last: RenderedGrid::default(),
        }
    }

    /// Replace the bundled formula evaluator
    pub fn with_evaluator(mut self, evaluator: impl FormulaEvaluator + 'static) -> Self {
        self.renderer = CellRenderer::new(evaluator);
        self
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn issues(&self) -> &[ConfigIssue] {
        &self.issues
    }

    /// The last committed render
    pub fn rendered(&self) -> &RenderedGrid {
        &self.last
    }

    pub fn frame(&self) -> &Frame {
        &self.model.frame
    }

    /// Render a snapshot, commit it to the surface, then run pending
    /// caret tasks against the committed structure
    pub fn render(&mut self, props: GridProps<'_>, surface: &mut dyn TextSurface) -> &RenderedGrid {
        let slice = compute_slice(props.rows, props.columns, &props.viewport);

        let text_cells = slice
            .rows
            .iter()
            .flat_map(|row| {
                row.cells
                    .iter()
                    .filter(|cell| cell.column.def.data_type == DataType::Text)
                    .map(move |cell| (row.cell_key(cell), row.row.id.clone()))
            })
            .collect();
        self.model.reconcile(text_cells);

        let model = &self.model;
        let grid = RenderedGrid::build(
            &slice,
            props.columns,
            &self.renderer,
            props.selection,
            |key| model.mode_of(key),
        );

        self.model.frame = Frame {
            viewport: props.viewport,
            total_rows: slice.total_rows,
            total_cols: slice.total_cols,
            row_ids: slice
                .rows
                .iter()
                .map(|row| (row.key, row.row.id.clone()))
                .collect(),
            select_columns: slice
                .columns
                .iter()
                .filter(|column| column.def.data_type == DataType::RowSelect)
                .map(|column| column.name.to_string())
                .collect(),
        };

        surface.commit(&grid);
        self.last = grid;
        self.run_caret_tasks(surface);
        &self.last
    }

    /// Feed one message through update and execute its commands
    ///
    /// Returns true if the host should render again.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let Some(cmd) = update(&mut self.model, msg) else {
            return false;
        };
        let needs_render = cmd.needs_render();
        for leaf in cmd.into_leaves() {
            self.execute(leaf);
        }
        needs_render
    }

    fn execute(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Render => {}
            Cmd::Emit(event) => {
                if !self.callbacks.deliver(&event) {
                    tracing::debug!("No handler for {:?}", event);
                }
            }
            Cmd::RestoreCaret { cell, caret } => {
                self.caret_tasks.push(CaretTask::Restore(cell, caret));
            }
            Cmd::FocusCaretAtEnd { cell } => self.caret_tasks.push(CaretTask::AtEnd(cell)),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                }
            }
        }
    }

    fn run_caret_tasks(&mut self, surface: &mut dyn TextSurface) {
        for task in std::mem::take(&mut self.caret_tasks) {
            let (cell, selection) = match &task {
                CaretTask::Restore(cell, caret) => {
                    (cell, surface.content(cell).map(|root| restore(root, *caret)))
                }
                CaretTask::AtEnd(cell) => (cell, surface.content(cell).map(place_at_end)),
            };
            // A cell that left editing or unmounted since no longer owns the caret
            let editing = self.model.cell(cell).is_some_and(|c| c.is_editing());
            match selection {
                Some(selection) if editing => surface.set_selection(cell, selection),
                _ => tracing::debug!("Dropping caret task {:?}", task),
            }
        }
    }

    /// Pending caret tasks, run by the next render
    pub fn pending_caret_tasks(&self) -> usize {
        self.caret_tasks.len()
    }

    /// A pointer down on a rendered cell
    pub fn click(&mut self, cell: &CellKey) -> bool {
        self.dispatch(Msg::click(cell.clone()))
    }

    /// A pointer down anywhere outside the rendered cells
    pub fn pointer_outside(&mut self) -> bool {
        self.dispatch(Msg::Pointer(crate::editable::PointerTarget::Outside))
    }

    /// A pointer down at an explicit target
    pub fn pointer_down(&mut self, target: crate::editable::PointerTarget) -> bool {
        self.dispatch(Msg::Pointer(target))
    }

    /// Report an input event on `cell`, reading content and selection
    /// from the surface right after the edit
    pub fn input(&mut self, cell: &CellKey, surface: &dyn TextSurface) -> bool {
        let Some(content) = surface.content(cell).cloned() else {
            tracing::debug!("Input on {} which is not on the surface", cell);
            return false;
        };
        let selection = surface.selection_in(cell).cloned();
        self.dispatch(Msg::text_changed(cell.clone(), content, selection))
    }

    /// Row-select checkbox changed
    pub fn toggle_row(&mut self, cell: &CellKey) -> bool {
        self.dispatch(Msg::toggle_select(cell.clone()))
    }

    pub fn scroll(&mut self, orientation: Orientation, input: ScrollInput) -> bool {
        self.dispatch(Msg::scroll(orientation, input))
    }

    pub fn wheel(&mut self, rows: i64, cols: i64) -> bool {
        self.dispatch(Msg::Scroll(ScrollMsg::Wheel { rows, cols }))
    }
}
