//! Caret tracking across re-renders
//!
//! A cell's rendered text is a small tree of [`TextNode`]s. Re-rendering
//! rebuilds that tree, which invalidates any live selection pointing
//! into it. The tracker converts a live selection into a
//! [`CaretOffsetPair`] (character offsets into the flattened text) and
//! back, so the caret survives the rebuild.
//!
//! Offsets come from a pre-order walk over text leaves, so they do not
//! depend on font metrics or wrapping.
//!
//! ```text
//! Element(div)
//! ├── Text("ab")        offsets 0..2
//! └── Element(span)
//!     └── Text("cd")    offsets 2..4
//! ```

mod node;
mod tracker;

pub use node::{Leaf, TextNode};
pub use tracker::{capture, place_at_end, restore, text_len, Anchor, CaretOffsetPair, LiveSelection};
