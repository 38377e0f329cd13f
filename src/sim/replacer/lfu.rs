//! LFU (Least Frequently Used) replacement policy.

use crate::common::PageId;
use crate::sim::page_table::PageTable;
use crate::sim::replacer::{Replacer, Victim};

/// LFU eviction: the resident page with the minimum access count.
///
/// Counts are per-residency: admission resets a page's count to 1, so a page
/// that cycles out and back in competes as a newcomer, not on lifetime
/// history. Exact ties are broken by lowest page id, same rule as LRU.
#[derive(Debug, Default)]
pub struct LfuReplacer;

impl LfuReplacer {
    /// Create a new LFU replacer.
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for LfuReplacer {
    fn victim(&mut self, _frames: &[Option<PageId>], table: &PageTable) -> Victim {
        let Some((page, frame, _)) = table.residents().min_by_key(|(_, _, e)| e.access_count)
        else {
            unreachable!("LFU victim requested with no resident pages");
        };

        Victim { page, frame }
    }
}
