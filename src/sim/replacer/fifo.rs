//! FIFO (First-In-First-Out) replacement policy.
//!
//! Evicts strictly in original admission order using a circular hand over the
//! frame set. Hits never refresh a page's position: the hand is authoritative
//! and ignores last-access times and access counts entirely.

use crate::common::{FrameId, PageId};
use crate::sim::page_table::PageTable;
use crate::sim::replacer::{Replacer, Victim};

/// FIFO eviction via a circular pointer into the frame set.
///
/// The hand starts at frame 0 and advances by one (mod frame count) after
/// each eviction, and only then. Because admissions fill empty frames in
/// ascending index order, the hand always points at the oldest-admitted
/// resident page when memory first fills, and keeps doing so as evictions
/// replace pages in the same circular order.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Next frame to evict from.
    hand: usize,
}

impl FifoReplacer {
    /// Create a new FIFO replacer with the hand at frame 0.
    pub fn new() -> Self {
        Self { hand: 0 }
    }
}

impl Replacer for FifoReplacer {
    fn victim(&mut self, frames: &[Option<PageId>], _table: &PageTable) -> Victim {
        let frame = FrameId::new(self.hand);
        let Some(page) = frames[frame.0] else {
            unreachable!("FIFO hand points at an empty frame with full memory");
        };
        self.hand = (self.hand + 1) % frames.len();

        Victim { page, frame }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_fifo_evicts_in_admission_order() {
        let refs = pages(&[1, 2, 3]);
        let mut table = PageTable::new(&refs);
        let mut frames = vec![
            Some(PageId::new(1)),
            Some(PageId::new(2)),
            Some(PageId::new(3)),
        ];
        table.admit(PageId::new(1), FrameId::new(0), 1);
        table.admit(PageId::new(2), FrameId::new(1), 2);
        table.admit(PageId::new(3), FrameId::new(2), 3);

        let mut replacer = FifoReplacer::new();

        let v = replacer.victim(&frames, &table);
        assert_eq!(v.page, PageId::new(1));
        assert_eq!(v.frame, FrameId::new(0));
        frames[0] = Some(PageId::new(4));

        let v = replacer.victim(&frames, &table);
        assert_eq!(v.page, PageId::new(2));
        assert_eq!(v.frame, FrameId::new(1));
    }

    #[test]
    fn test_fifo_ignores_access_metadata() {
        let refs = pages(&[1, 2]);
        let mut table = PageTable::new(&refs);
        let frames = vec![Some(PageId::new(1)), Some(PageId::new(2))];
        table.admit(PageId::new(1), FrameId::new(0), 1);
        table.admit(PageId::new(2), FrameId::new(1), 2);

        // Page 1 is hit repeatedly; FIFO must still evict it first.
        table.touch(PageId::new(1), 3);
        table.touch(PageId::new(1), 4);

        let mut replacer = FifoReplacer::new();
        assert_eq!(replacer.victim(&frames, &table).page, PageId::new(1));
    }

    #[test]
    fn test_fifo_hand_wraps() {
        let refs = pages(&[1, 2]);
        let mut table = PageTable::new(&refs);
        let frames = vec![Some(PageId::new(1)), Some(PageId::new(2))];
        table.admit(PageId::new(1), FrameId::new(0), 1);
        table.admit(PageId::new(2), FrameId::new(1), 2);

        let mut replacer = FifoReplacer::new();
        assert_eq!(replacer.victim(&frames, &table).frame, FrameId::new(0));
        assert_eq!(replacer.victim(&frames, &table).frame, FrameId::new(1));
        // Wrapped back around.
        assert_eq!(replacer.victim(&frames, &table).frame, FrameId::new(0));
    }
}
