//! Viewport scroll locking.
//!
//! Views that fit on one screen hold a `ScrollLock` for as long as they are
//! mounted. The lock is a guard: dropping it releases the viewport, so a view
//! that is torn down for any reason leaves scrolling enabled again.

use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Shared scroll state of the terminal viewport
#[derive(Debug, Default, Clone)]
pub struct Viewport {
    locks: Rc<Cell<usize>>,
}

impl Viewport {
    /// Create an unlocked viewport
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable scrolling until the returned guard is dropped
    #[must_use = "scrolling is re-enabled as soon as the lock is dropped"]
    pub fn lock(&self) -> ScrollLock {
        self.locks.set(self.locks.get() + 1);
        debug!(holders = self.locks.get(), "Viewport scroll locked");
        ScrollLock {
            locks: Rc::clone(&self.locks),
        }
    }

    /// Whether any view currently holds a lock
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locks.get() > 0
    }
}

/// Guard that keeps the viewport from scrolling while alive
#[derive(Debug)]
pub struct ScrollLock {
    locks: Rc<Cell<usize>>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.locks.set(self.locks.get().saturating_sub(1));
        debug!(holders = self.locks.get(), "Viewport scroll lock released");
    }
}
