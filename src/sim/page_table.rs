//! Page table - per-page residency and access metadata.
//!
//! The page table holds one [`PageTableEntry`] for every distinct page in the
//! reference string. Entries exist for the whole simulation; residency is a
//! state of the entry, not its presence in the map.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::{FrameId, PageId};

/// Metadata tracked for one page.
///
/// Invariants (upheld by [`PageTable`]'s transition methods):
/// - `resident == true` iff `frame` is `Some`, and that frame slot holds this
///   page.
/// - `access_count >= 1` whenever the page is resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageTableEntry {
    /// Whether the page currently occupies a frame.
    pub resident: bool,

    /// The frame holding the page, if resident.
    pub frame: Option<FrameId>,

    /// Clock value of the most recent access, if ever accessed.
    pub last_access: Option<u64>,

    /// Number of accesses during the current residency (reset on admission).
    pub access_count: u64,
}

impl PageTableEntry {
    fn new() -> Self {
        Self {
            resident: false,
            frame: None,
            last_access: None,
            access_count: 0,
        }
    }
}

/// The page table: one entry per distinct page in the reference string.
///
/// Backed by a `BTreeMap` so iteration is in ascending page-id order. That
/// ordering is load-bearing: LRU/LFU break exact ties by lowest page id, which
/// falls out of scanning residents in key order and keeping the first strict
/// minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageTable {
    entries: BTreeMap<PageId, PageTableEntry>,
}

impl PageTable {
    /// Build a table with a fresh non-resident entry for every distinct page
    /// in `refs`.
    pub(crate) fn new(refs: &[PageId]) -> Self {
        let entries = refs
            .iter()
            .map(|&page| (page, PageTableEntry::new()))
            .collect();
        Self { entries }
    }

    /// Look up a page's entry.
    pub fn get(&self, page: PageId) -> Option<&PageTableEntry> {
        self.entries.get(&page)
    }

    /// Whether the page is currently resident.
    pub fn is_resident(&self, page: PageId) -> bool {
        self.entries.get(&page).is_some_and(|e| e.resident)
    }

    /// Number of entries (distinct pages in the reference string).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty. Never true for a constructed engine.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over resident pages in ascending page-id order.
    ///
    /// Yields the frame alongside the entry so callers never have to unwrap
    /// the `frame` field of a resident entry.
    pub fn residents(&self) -> impl Iterator<Item = (PageId, FrameId, &PageTableEntry)> + '_ {
        self.entries
            .iter()
            .filter(|(_, e)| e.resident)
            .filter_map(|(&page, e)| e.frame.map(|frame| (page, frame, e)))
    }

    /// Record a hit: bump the page's last-access time and access count.
    pub(crate) fn touch(&mut self, page: PageId, clock: u64) {
        if let Some(entry) = self.entries.get_mut(&page) {
            entry.last_access = Some(clock);
            entry.access_count += 1;
        }
    }

    /// Admit a page into `frame`.
    ///
    /// A freshly admitted page starts a new residency: its access count resets
    /// to 1 and does not carry over history from any prior residency.
    pub(crate) fn admit(&mut self, page: PageId, frame: FrameId, clock: u64) {
        if let Some(entry) = self.entries.get_mut(&page) {
            entry.resident = true;
            entry.frame = Some(frame);
            entry.last_access = Some(clock);
            entry.access_count = 1;
        }
    }

    /// Evict a page: mark non-resident and clear its frame pointer.
    ///
    /// Last-access time and access count are left as-is; they describe the
    /// residency that just ended and are overwritten on re-admission.
    pub(crate) fn evict(&mut self, page: PageId) {
        if let Some(entry) = self.entries.get_mut(&page) {
            entry.resident = false;
            entry.frame = None;
        }
    }
}
