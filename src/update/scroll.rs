//! Scrollbar and wheel handlers

use crate::commands::Cmd;
use crate::messages::{GridEvent, ScrollMsg};
use crate::model::{Frame, GridModel, ViewportState};
use crate::scroll::{wheel_offset, Orientation, ScrollBar};

/// Viewport a scroll input leads to, given the last rendered frame
pub fn next_viewport(
    frame: &Frame,
    msg: ScrollMsg,
    scroll_step: usize,
    wheel_step: usize,
) -> ViewportState {
    let viewport = frame.viewport;
    match msg {
        ScrollMsg::Bar { orientation, input } => {
            let bar = match orientation {
                Orientation::Vertical => {
                    ScrollBar::for_rows(frame.total_rows, &viewport, scroll_step)
                }
                Orientation::Horizontal => {
                    ScrollBar::for_cols(frame.total_cols, &viewport, scroll_step)
                }
            };
            let offset = bar.emit(bar.current(&viewport), input);
            bar.apply(viewport, offset)
        }
        ScrollMsg::Wheel { rows, cols } => {
            let step = i64::try_from(wheel_step).unwrap_or(i64::MAX);
            ViewportState {
                row_offset: wheel_offset(
                    viewport.row_offset,
                    rows.saturating_mul(step),
                    viewport.max_row_offset(frame.total_rows),
                ),
                col_offset: wheel_offset(
                    viewport.col_offset,
                    cols.saturating_mul(step),
                    viewport.max_col_offset(frame.total_cols),
                ),
                ..viewport
            }
        }
    }
}

/// Turn a scroll input into a viewport change proposal
pub fn update_scroll(model: &mut GridModel, msg: ScrollMsg) -> Option<Cmd> {
    let next = next_viewport(
        &model.frame,
        msg,
        model.config.scroll_step,
        model.config.wheel_step,
    );
    if next == model.frame.viewport {
        return None;
    }
    if !model.handlers.viewport_changed {
        tracing::debug!("No viewport handler, dropping scroll");
        return None;
    }
    tracing::debug!(
        "Viewport {},{} → {},{}",
        model.frame.viewport.row_offset,
        model.frame.viewport.col_offset,
        next.row_offset,
        next.col_offset
    );
    Some(Cmd::emit(GridEvent::ViewportChanged(next)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::HandlerSet;
    use crate::scroll::{ScrollInput, StepDirection};

    fn model() -> GridModel {
        let mut model = GridModel {
            handlers: HandlerSet::all(),
            ..GridModel::default()
        };
        model.frame = Frame {
            viewport: ViewportState::new(10, 3).at(85, 0),
            total_rows: 100,
            total_cols: 5,
            ..Frame::default()
        };
        model.config.scroll_step = 10;
        model
    }

    fn emitted(cmd: Option<Cmd>) -> Option<ViewportState> {
        match cmd {
            Some(Cmd::Emit(GridEvent::ViewportChanged(vp))) => Some(vp),
            _ => None,
        }
    }

    #[test]
    fn test_step_past_max_clamps() {
        let mut model = model();
        let msg = ScrollMsg::Bar {
            orientation: Orientation::Vertical,
            input: ScrollInput::Step(StepDirection::Next),
        };
        let vp = emitted(update_scroll(&mut model, msg)).unwrap();
        assert_eq!(vp.row_offset, 90);
        assert_eq!(vp.max_visible_rows, 10);
    }

    #[test]
    fn test_no_change_emits_nothing() {
        let mut model = model();
        model.frame.viewport.row_offset = 90;
        let msg = ScrollMsg::Bar {
            orientation: Orientation::Vertical,
            input: ScrollInput::Step(StepDirection::Next),
        };
        assert_eq!(update_scroll(&mut model, msg), None);
    }

    #[test]
    fn test_horizontal_drag() {
        let mut model = model();
        let msg = ScrollMsg::Bar {
            orientation: Orientation::Horizontal,
            input: ScrollInput::Drag(2),
        };
        let vp = emitted(update_scroll(&mut model, msg)).unwrap();
        assert_eq!((vp.row_offset, vp.col_offset), (85, 2));
    }

    #[test]
    fn test_wheel_uses_step_and_clamps() {
        let mut model = model();
        model.config.wheel_step = 3;
        let msg = ScrollMsg::Wheel { rows: -2, cols: 9 };
        let vp = emitted(update_scroll(&mut model, msg)).unwrap();
        assert_eq!((vp.row_offset, vp.col_offset), (79, 2));
    }

    #[test]
    fn test_without_handler_is_noop() {
        let mut model = model();
        model.handlers.viewport_changed = false;
        let msg = ScrollMsg::Wheel { rows: -1, cols: 0 };
        assert_eq!(update_scroll(&mut model, msg), None);
    }
}
