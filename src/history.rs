use crate::surface::{Snapshot, Surface};

/// Oldest entries are evicted beyond this many snapshots.
pub const MAX_HISTORY: usize = 50;

/// Linear undo/redo history of full-surface snapshots.
///
/// Entries are independent copies, so mutating the live surface never
/// changes recorded history. `index` always points at the entry the surface
/// last matched; committing while below the tail discards the redo branch.
pub struct History {
    entries: Vec<Snapshot>,
    index: usize,
}

impl History {
    /// Creates a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
        }
    }

    /// Record the surface as a new checkpoint.
    ///
    /// Called after every completed gesture (stroke end, shape end, text
    /// commit, clear, image import), never mid-gesture.
    pub fn commit(&mut self, surface: &Surface) {
        if !self.entries.is_empty() && self.index + 1 < self.entries.len() {
            // Redo branch is lost once a new edit lands.
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(surface.snapshot());
        if self.entries.len() > MAX_HISTORY {
            let excess = self.entries.len() - MAX_HISTORY;
            self.entries.drain(..excess);
        }
        self.index = self.entries.len() - 1;
        log::debug!(
            "history commit: {} entries, index {}",
            self.entries.len(),
            self.index
        );
    }

    /// Step back one checkpoint and restore the surface from it.
    ///
    /// At the first entry there is no more history: the initial (blank)
    /// entry is restored again and `false` is returned.
    pub fn undo(&mut self, surface: &mut Surface) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        if self.index > 0 {
            self.index -= 1;
            surface.restore(&self.entries[self.index]);
            true
        } else {
            surface.restore(&self.entries[0]);
            false
        }
    }

    /// Step forward one checkpoint if an undo left room to advance.
    pub fn redo(&mut self, surface: &mut Surface) -> bool {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            surface.restore(&self.entries[self.index]);
            true
        } else {
            false
        }
    }

    /// Returns true if there is a checkpoint to step back to.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Returns true if an undo left a checkpoint to step forward to.
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
