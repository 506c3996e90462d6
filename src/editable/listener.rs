//! Process-wide pointer listener with scoped subscriptions
//!
//! Every mounted editable cell attaches to the [`PointerHub`] and keeps
//! the returned [`Subscription`]. Dropping the subscription (when the
//! cell unmounts, e.g. scrolls out of the window) detaches it, so cells
//! that come and go while scrolling never leak listeners.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::model::CellKey;

/// Where a pointer interaction landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the subtree of a rendered cell
    Cell(CellKey),
    /// Anywhere else (headers, scrollbars, outside the grid)
    Outside,
}

impl PointerTarget {
    /// Whether the target lies within the subtree of `cell`
    pub fn is_within(&self, cell: &CellKey) -> bool {
        matches!(self, PointerTarget::Cell(key) if key == cell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<ListenerId, CellKey>,
}

/// Shared pointer listener registry (single-threaded)
#[derive(Debug, Clone, Default)]
pub struct PointerHub {
    registry: Rc<RefCell<Registry>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener for `cell`; it stays attached while the
    /// returned subscription lives
    pub fn attach(&self, cell: CellKey) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        tracing::trace!("Attach pointer listener {:?} for {}", id, cell);
        registry.listeners.insert(id, cell);
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Cells whose own subtree does not contain `target`, in attach order
    pub fn dispatch(&self, target: &PointerTarget) -> Vec<CellKey> {
        self.registry
            .borrow()
            .listeners
            .values()
            .filter(|cell| !target.is_within(cell))
            .cloned()
            .collect()
    }
}

/// Handle that keeps one pointer listener attached
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            tracing::trace!("Detach pointer listener {:?}", self.id);
            registry.borrow_mut().listeners.remove(&self.id);
        }
    }
}
