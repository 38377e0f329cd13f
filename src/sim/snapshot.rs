//! Snapshots - read-only projections of engine state.

use serde::Serialize;

use crate::common::PageId;
use crate::sim::event::SimEvent;
use crate::sim::page_table::PageTable;
use crate::sim::stats::SimStats;

/// A point-in-time copy of the simulation state.
///
/// Unlike the engine, a snapshot is inert data: it can be printed, serialized,
/// compared, and held across steps without observing later mutations. Taking
/// a snapshot never exposes the engine's internal structures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Frame contents in frame-index order; `None` marks an empty slot.
    pub frames: Vec<Option<PageId>>,

    /// The full page table, one entry per distinct page.
    pub page_table: PageTable,

    /// References processed so far (hits and faults alike).
    pub clock: u64,

    /// The last step's outcome, or `None` before the first step.
    pub event: Option<SimEvent>,

    /// Hit/fault/eviction counters.
    pub stats: SimStats,
}

impl Snapshot {
    /// Number of resident pages across all frames.
    pub fn resident_count(&self) -> usize {
        self.frames.iter().filter(|slot| slot.is_some()).count()
    }

    /// The last event rendered for display, or an empty string before the
    /// first step.
    pub fn event_text(&self) -> String {
        self.event.map(|e| e.to_string()).unwrap_or_default()
    }
}

/// The result of one `step` (or of `run_to_completion`): whether the
/// simulation is finished, plus the state after the step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult {
    /// True once the reference string is exhausted.
    pub done: bool,

    /// The state after this step.
    pub state: Snapshot,
}
