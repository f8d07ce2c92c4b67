//! Id Allocation
//!
//! List and card ids come from one allocator. Each id is the current
//! wall-clock time in milliseconds, bumped past the previous id when the
//! clock has not advanced, so ids stay time-based and never repeat.

use crate::domain::{CardId, ListId};

/// Source of wall-clock milliseconds
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

/// Strictly increasing id source
pub struct IdAllocator {
    last: u64,
    clock: Box<dyn Clock>,
}

impl IdAllocator {
    /// Start above `floor`, typically the largest id already in use
    pub fn seeded(floor: u64, clock: Box<dyn Clock>) -> Self {
        Self { last: floor, clock }
    }

    /// Last id handed out (or the seed)
    pub fn last(&self) -> u64 {
        self.last
    }

    pub fn next_raw(&mut self) -> u64 {
        let next = self.clock.now_millis().max(self.last.saturating_add(1));
        self.last = next;
        next
    }

    /// Record an id that entered the board from outside the allocator
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }

    pub fn next_list_id(&mut self) -> ListId {
        ListId(self.next_raw())
    }

    pub fn next_card_id(&mut self) -> CardId {
        CardId(self.next_raw())
    }
}

impl std::fmt::Debug for IdAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdAllocator").field("last", &self.last).finish()
    }
}
