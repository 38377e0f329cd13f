//! The simulation engine and its parts.
//!
//! # Components
//! - [`SimEngine`] - the stepping core: owns frames, page table, clock
//! - [`PageTable`] / [`PageTableEntry`] - per-page residency and metadata
//! - [`replacer`] - eviction policy implementations (FIFO, LRU, LFU)
//! - [`SimEvent`] - typed step outcomes with display rendering
//! - [`Snapshot`] / [`StepResult`] - read-only state projections
//! - [`SimStats`] - hit/fault/eviction counters

mod engine;
mod event;
mod page_table;
pub mod replacer;
mod snapshot;
mod stats;

pub use engine::SimEngine;
pub use event::SimEvent;
pub use page_table::{PageTable, PageTableEntry};
pub use replacer::{Policy, Replacer, Victim};
pub use snapshot::{Snapshot, StepResult};
pub use stats::SimStats;
