//! LRU (Least Recently Used) replacement policy.

use crate::common::PageId;
use crate::sim::page_table::PageTable;
use crate::sim::replacer::{Replacer, Victim};

/// LRU eviction: the resident page with the minimum last-access time.
///
/// Exact ties (identical timestamps) are broken by lowest page id: residents
/// are scanned in ascending page-id order and the first minimum wins. With a
/// clock that ticks once per reference, ties cannot actually occur mid-run,
/// but the rule keeps selection deterministic regardless.
#[derive(Debug, Default)]
pub struct LruReplacer;

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for LruReplacer {
    fn victim(&mut self, _frames: &[Option<PageId>], table: &PageTable) -> Victim {
        let Some((page, frame, _)) = table.residents().min_by_key(|(_, _, e)| e.last_access)
        else {
            unreachable!("LRU victim requested with no resident pages");
        };

        Victim { page, frame }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FrameId;

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_lru_picks_oldest_access() {
        let refs = pages(&[1, 2, 3]);
        let mut table = PageTable::new(&refs);
        let frames = vec![
            Some(PageId::new(1)),
            Some(PageId::new(2)),
            Some(PageId::new(3)),
        ];
        table.admit(PageId::new(1), FrameId::new(0), 1);
        table.admit(PageId::new(2), FrameId::new(1), 2);
        table.admit(PageId::new(3), FrameId::new(2), 3);

        // Touch page 1 so page 2 becomes the least recently used.
        table.touch(PageId::new(1), 4);

        let mut replacer = LruReplacer::new();
        let v = replacer.victim(&frames, &table);
        assert_eq!(v.page, PageId::new(2));
        assert_eq!(v.frame, FrameId::new(1));
    }

    #[test]
    fn test_lru_tie_breaks_by_lowest_page_id() {
        let refs = pages(&[7, 3]);
        let mut table = PageTable::new(&refs);
        let frames = vec![Some(PageId::new(7)), Some(PageId::new(3))];
        // Same timestamp on purpose.
        table.admit(PageId::new(7), FrameId::new(0), 5);
        table.admit(PageId::new(3), FrameId::new(1), 5);

        let mut replacer = LruReplacer::new();
        assert_eq!(replacer.victim(&frames, &table).page, PageId::new(3));
    }
}
