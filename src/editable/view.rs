//! Rendering contract for editable cells

use super::cell::EditMode;

/// Shown instead of an empty value while viewing, so the cell keeps a
/// clickable target
pub const EMPTY_PLACEHOLDER: &str = "\u{00A0}";

/// How overflowing text is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Single line, truncated with an ellipsis
    Ellipsis,
    /// Wraps onto further lines
    Wrap,
}

/// What the host should render for a text cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableView {
    pub mode: EditMode,
    /// Text to put into the cell's content tree
    pub text: String,
    /// Whether the content receives pointer events and is mutable;
    /// when false, pointer events pass through to the container
    pub interactive: bool,
    pub overflow: Overflow,
}

impl EditableView {
    pub fn new(mode: EditMode, value: &str) -> Self {
        match mode {
            EditMode::Viewing => Self {
                mode,
                text: if value.is_empty() {
                    EMPTY_PLACEHOLDER.to_string()
                } else {
                    value.to_string()
                },
                interactive: false,
                overflow: Overflow::Ellipsis,
            },
            EditMode::Editing => Self {
                mode,
                text: value.to_string(),
                interactive: true,
                overflow: Overflow::Wrap,
            },
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewing_empty_uses_placeholder() {
        let view = EditableView::new(EditMode::Viewing, "");
        assert_eq!(view.text, EMPTY_PLACEHOLDER);
        assert!(!view.interactive);
        assert_eq!(view.overflow, Overflow::Ellipsis);
    }

    #[test]
    fn test_editing_empty_stays_empty() {
        let view = EditableView::new(EditMode::Editing, "");
        assert_eq!(view.text, "");
        assert!(view.interactive);
        assert_eq!(view.overflow, Overflow::Wrap);
    }
}
