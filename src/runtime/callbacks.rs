//! Upstream callbacks
//!
//! The core never mutates host state. Every proposed change is handed to
//! one of these handlers; a missing handler turns the matching input
//! path into a no-op.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::grid::HandlerSet;
use crate::messages::GridEvent;
use crate::model::{CellKey, RowId, ViewportState};

/// Shared log of delivered events, see [`Callbacks::recording`]
pub type EventLog = Rc<RefCell<Vec<GridEvent>>>;

#[derive(Default)]
pub struct Callbacks {
    pub on_selection_toggled: Option<Box<dyn FnMut(&RowId)>>,
    /// `(row id, column name, new value)`
    pub on_cell_changed: Option<Box<dyn FnMut(&RowId, &str, &str)>>,
    pub on_viewport_changed: Option<Box<dyn FnMut(ViewportState)>>,
    /// Invoked when an editing cell loses focus
    pub on_cell_leave: Option<Box<dyn FnMut(&CellKey)>>,
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("handlers", &self.handlers())
            .finish()
    }
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every handler wired to push its event onto a shared log
    pub fn recording() -> (Self, EventLog) {
        let log: EventLog = Rc::default();
        let callbacks = Self {
            on_selection_toggled: Some(Box::new({
                let log = Rc::clone(&log);
                move |id: &RowId| {
                    log.borrow_mut()
                        .push(GridEvent::SelectionToggled(id.clone()))
                }
            })),
            on_cell_changed: Some(Box::new({
                let log = Rc::clone(&log);
                move |row_id: &RowId, column: &str, value: &str| {
                    log.borrow_mut().push(GridEvent::CellChanged {
                        row_id: row_id.clone(),
                        column: column.to_string(),
                        value: value.to_string(),
                    })
                }
            })),
            on_viewport_changed: Some(Box::new({
                let log = Rc::clone(&log);
                move |viewport: ViewportState| {
                    log.borrow_mut()
                        .push(GridEvent::ViewportChanged(viewport))
                }
            })),
            on_cell_leave: Some(Box::new({
                let log = Rc::clone(&log);
                move |cell: &CellKey| {
                    log.borrow_mut()
                        .push(GridEvent::CellLeft { cell: cell.clone() })
                }
            })),
        };
        (callbacks, log)
    }

    /// Which handlers are wired
    pub fn handlers(&self) -> HandlerSet {
        HandlerSet {
            selection_toggled: self.on_selection_toggled.is_some(),
            cell_changed: self.on_cell_changed.is_some(),
            viewport_changed: self.on_viewport_changed.is_some(),
            cell_leave: self.on_cell_leave.is_some(),
        }
    }

    /// Hand an event to its handler; returns false if none is wired
    pub fn deliver(&mut self, event: &GridEvent) -> bool {
        match event {
            GridEvent::SelectionToggled(id) => call(&mut self.on_selection_toggled, |f| f(id)),
            GridEvent::CellChanged {
                row_id,
                column,
                value,
            } => call(&mut self.on_cell_changed, |f| f(row_id, column, value)),
            GridEvent::ViewportChanged(viewport) => {
                call(&mut self.on_viewport_changed, |f| f(*viewport))
            }
            GridEvent::CellLeft { cell } => call(&mut self.on_cell_leave, |f| f(cell)),
        }
    }
}

fn call<F: ?Sized>(handler: &mut Option<Box<F>>, invoke: impl FnOnce(&mut F)) -> bool {
    match handler {
        Some(f) => {
            invoke(f.as_mut());
            true
        }
        None => false,
    }
}
