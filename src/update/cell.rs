//! Pointer and per-cell message handlers

use crate::commands::Cmd;
use crate::editable::PointerTarget;
use crate::messages::{CellMsg, GridEvent};
use crate::model::{CellKey, GridModel};

/// Route a process-wide pointer down
///
/// Every editing cell the target lies outside of leaves editing first;
/// then the target cell, if it is a mounted text cell, enters editing.
pub fn update_pointer(model: &mut GridModel, target: &PointerTarget) -> Option<Cmd> {
    let mut cmds: Vec<Cmd> = model
        .pointer
        .dispatch(target)
        .iter()
        .filter_map(|key| {
            model
                .cell_mut(key)
                .and_then(|cell| cell.on_focus_loss_outside())
        })
        .collect();

    if let PointerTarget::Cell(key) = target {
        if let Some(cmd) = model
            .cell_mut(key)
            .and_then(|cell| cell.on_primary_interaction())
        {
            cmds.push(cmd);
        }
    }

    match cmds.len() {
        0 => None,
        1 => cmds.pop(),
        _ => Some(Cmd::batch(cmds)),
    }
}

/// Handle a message addressed to one rendered cell
pub fn update_cell(model: &mut GridModel, key: &CellKey, msg: CellMsg) -> Option<Cmd> {
    match msg {
        CellMsg::PrimaryInteraction => model
            .cell_mut(key)
            .and_then(|cell| cell.on_primary_interaction()),

        CellMsg::TextChanged { content, selection } => {
            if !model.handlers.cell_changed {
                tracing::debug!("No change handler, dropping input on {}", key);
                return None;
            }
            let raw = content.flattened();
            model
                .cell_mut(key)
                .and_then(|cell| cell.on_text_changed(&raw, &content, selection.as_ref()))
        }

        CellMsg::FocusLossOutside => model
            .cell_mut(key)
            .and_then(|cell| cell.on_focus_loss_outside()),

        CellMsg::ToggleSelect => {
            if !model.handlers.selection_toggled {
                tracing::debug!("No selection handler, dropping toggle on {}", key);
                return None;
            }
            if !model.frame.is_row_select(&key.column) {
                tracing::warn!("Toggle on {} which is not a row-select cell", key);
                return None;
            }
            match model.frame.row_id(key.row) {
                Some(id) => Some(Cmd::emit(GridEvent::SelectionToggled(id.clone()))),
                None => {
                    tracing::warn!("Toggle on row {} which is not rendered", key.row);
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caret::{restore, CaretOffsetPair, TextNode};
    use crate::grid::HandlerSet;
    use crate::model::RowId;

    fn model(handlers: HandlerSet) -> GridModel {
        let mut model = GridModel {
            handlers,
            ..GridModel::default()
        };
        model.reconcile(vec![
            (CellKey::new(0, "a"), RowId::Int(10)),
            (CellKey::new(1, "a"), RowId::Int(11)),
        ]);
        model.frame.row_ids.insert(0, RowId::Int(10));
        model.frame.row_ids.insert(1, RowId::Int(11));
        model.frame.select_columns.insert("sel".to_string());
        model
    }

    #[test]
    fn test_click_moves_editing_between_cells() {
        let mut model = model(HandlerSet::all());
        let first = CellKey::new(0, "a");
        let second = CellKey::new(1, "a");

        update_pointer(&mut model, &PointerTarget::Cell(first.clone()));
        assert!(model.cell(&first).unwrap().is_editing());

        let cmd = update_pointer(&mut model, &PointerTarget::Cell(second.clone())).unwrap();
        let leaves = cmd.into_leaves();
        assert_eq!(
            leaves[0],
            Cmd::Emit(GridEvent::CellLeft {
                cell: first.clone()
            })
        );
        assert_eq!(leaves[1], Cmd::FocusCaretAtEnd { cell: second.clone() });
        assert!(!model.cell(&first).unwrap().is_editing());
        assert!(model.cell(&second).unwrap().is_editing());
    }

    #[test]
    fn test_click_inside_editing_cell_keeps_editing() {
        let mut model = model(HandlerSet::all());
        let first = CellKey::new(0, "a");
        update_pointer(&mut model, &PointerTarget::Cell(first.clone()));
        assert_eq!(update_pointer(&mut model, &PointerTarget::Cell(first.clone())), None);
        assert!(model.cell(&first).unwrap().is_editing());
    }

    #[test]
    fn test_click_outside_grid_ends_editing() {
        let mut model = model(HandlerSet::all());
        let first = CellKey::new(0, "a");
        update_pointer(&mut model, &PointerTarget::Cell(first.clone()));
        update_pointer(&mut model, &PointerTarget::Outside);
        assert!(model.editing_cells().is_empty());
    }

    #[test]
    fn test_input_without_change_handler_is_noop() {
        let handlers = HandlerSet {
            cell_changed: false,
            ..HandlerSet::all()
        };
        let mut model = model(handlers);
        let key = CellKey::new(0, "a");
        update_pointer(&mut model, &PointerTarget::Cell(key.clone()));

        let content = TextNode::from_text("x");
        let selection = restore(&content, CaretOffsetPair::collapsed(1));
        let msg = CellMsg::TextChanged {
            content,
            selection: Some(selection),
        };
        assert_eq!(update_cell(&mut model, &key, msg), None);
    }

    #[test]
    fn test_toggle_emits_row_identity() {
        let mut model = model(HandlerSet::all());
        let cmd = update_cell(&mut model, &CellKey::new(1, "sel"), CellMsg::ToggleSelect);
        assert_eq!(
            cmd,
            Some(Cmd::emit(GridEvent::SelectionToggled(RowId::Int(11))))
        );
        assert_eq!(
            update_cell(&mut model, &CellKey::new(5, "sel"), CellMsg::ToggleSelect),
            None
        );
    }

    #[test]
    fn test_toggle_ignored_outside_row_select_columns() {
        let mut model = model(HandlerSet::all());
        assert_eq!(
            update_cell(&mut model, &CellKey::new(1, "a"), CellMsg::ToggleSelect),
            None
        );
        assert_eq!(
            update_cell(&mut model, &CellKey::new(1, "total"), CellMsg::ToggleSelect),
            None
        );
    }
}
