//! Scroll input adapter
//!
//! Translates drags and step keys on a bounded 1-D range control into
//! integer offsets for the viewport. The adapter owns no state: every
//! emission is a pure function of `(current, min, max, step, direction)`.

use crate::model::ViewportState;

/// Which viewport offset a control drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Columns (`col_offset`)
    Horizontal,
    /// Rows (`row_offset`)
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    Previous,
    Next,
}

impl StepDirection {
    /// Map a key name to a step; other keys do not step
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "ArrowUp" => Some(StepDirection::Previous),
            "ArrowRight" | "ArrowDown" => Some(StepDirection::Next),
            _ => None,
        }
    }
}

/// Raw input on a range control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollInput {
    /// The control's native value after a pointer drag
    Drag(i64),
    /// A stepping key
    Step(StepDirection),
}

/// New offset for a step; a step past either bound lands on the bound
pub fn step_offset(
    current: usize,
    min: usize,
    max: usize,
    step: usize,
    direction: StepDirection,
) -> usize {
    let next = match direction {
        StepDirection::Previous => current.saturating_sub(step),
        StepDirection::Next => current.saturating_add(step),
    };
    next.clamp(min, max.max(min))
}

/// Bounds of one range control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBar {
    pub orientation: Orientation,
    pub min: usize,
    pub max: usize,
    pub step: usize,
}

impl ScrollBar {
    /// Vertical control; the last offset still fills the window
    pub fn for_rows(total_rows: usize, viewport: &ViewportState, step: usize) -> Self {
        Self {
            orientation: Orientation::Vertical,
            min: 0,
            max: viewport.max_row_offset(total_rows),
            step: step.max(1),
        }
    }

    /// Horizontal control over the column sequence
    pub fn for_cols(total_cols: usize, viewport: &ViewportState, step: usize) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            min: 0,
            max: viewport.max_col_offset(total_cols),
            step: step.max(1),
        }
    }

    /// Offset the control emits for an input
    ///
    /// Drags pass the native value through; a native range control
    /// never reports a value outside its bounds, so the clamp only
    /// guards hosts that forward raw coordinates.
    pub fn emit(&self, current: usize, input: ScrollInput) -> usize {
        match input {
            ScrollInput::Drag(value) => {
                let value = usize::try_from(value.max(0)).unwrap_or(usize::MAX);
                value.clamp(self.min, self.max.max(self.min))
            }
            ScrollInput::Step(direction) => {
                step_offset(current, self.min, self.max, self.step, direction)
            }
        }
    }

    /// Current offset of this control in `viewport`
    pub fn current(&self, viewport: &ViewportState) -> usize {
        match self.orientation {
            Orientation::Horizontal => viewport.col_offset,
            Orientation::Vertical => viewport.row_offset,
        }
    }

    /// Viewport with this control's offset replaced
    pub fn apply(&self, viewport: ViewportState, offset: usize) -> ViewportState {
        match self.orientation {
            Orientation::Horizontal => ViewportState {
                col_offset: offset,
                ..viewport
            },
            Orientation::Vertical => ViewportState {
                row_offset: offset,
                ..viewport
            },
        }
    }
}

/// Shift an offset by a signed wheel delta, clamped to `[0, max]`
pub fn wheel_offset(current: usize, delta: i64, max: usize) -> usize {
    let magnitude = usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX);
    let next = if delta < 0 {
        current.saturating_sub(magnitude)
    } else {
        current.saturating_add(magnitude)
    };
    next.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_next_clamps_to_max() {
        assert_eq!(step_offset(9, 0, 10, 5, StepDirection::Next), 10);
        assert_eq!(step_offset(10, 0, 10, 5, StepDirection::Next), 10);
    }

    #[test]
    fn test_step_previous_clamps_to_min() {
        assert_eq!(step_offset(2, 0, 10, 5, StepDirection::Previous), 0);
        assert_eq!(step_offset(4, 3, 10, 5, StepDirection::Previous), 3);
    }

    #[test]
    fn test_step_within_bounds() {
        assert_eq!(step_offset(4, 0, 10, 2, StepDirection::Next), 6);
        assert_eq!(step_offset(4, 0, 10, 2, StepDirection::Previous), 2);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(StepDirection::from_key("ArrowRight"), Some(StepDirection::Next));
        assert_eq!(StepDirection::from_key("ArrowDown"), Some(StepDirection::Next));
        assert_eq!(StepDirection::from_key("ArrowLeft"), Some(StepDirection::Previous));
        assert_eq!(StepDirection::from_key("Enter"), None);
    }

    #[test]
    fn test_drag_passes_value() {
        let vp = ViewportState::new(10, 3);
        let bar = ScrollBar::for_rows(100, &vp, 1);
        assert_eq!(bar.max, 90);
        assert_eq!(bar.emit(0, ScrollInput::Drag(42)), 42);
        assert_eq!(bar.emit(0, ScrollInput::Drag(-3)), 0);
        assert_eq!(bar.emit(0, ScrollInput::Drag(500)), 90);
    }

    #[test]
    fn test_apply_horizontal() {
        let vp = ViewportState::new(10, 3).at(7, 1);
        let bar = ScrollBar::for_cols(8, &vp, 1);
        let next = bar.apply(vp, 4);
        assert_eq!(next.col_offset, 4);
        assert_eq!(next.row_offset, 7);
        assert_eq!(bar.current(&vp), 1);
    }

    #[test]
    fn test_wheel_offset() {
        assert_eq!(wheel_offset(5, 3, 6), 6);
        assert_eq!(wheel_offset(5, -9, 6), 0);
        assert_eq!(wheel_offset(5, -2, 6), 3);
    }

    #[test]
    fn test_dataset_smaller_than_window() {
        let vp = ViewportState::new(10, 3);
        let bar = ScrollBar::for_rows(4, &vp, 1);
        assert_eq!(bar.max, 0);
        assert_eq!(bar.emit(0, ScrollInput::Step(StepDirection::Next)), 0);
    }
}
