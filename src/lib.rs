//! pagesim - a page-replacement simulator with swappable eviction policies.
//!
//! Simulates the classic operating-systems page-replacement policies (FIFO,
//! LRU, LFU) over a reference string and a fixed set of memory frames,
//! one access at a time.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        pagesim                            │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │         Session Layer (session.rs)                  │  │
//! │  │   SimSession = Mutex<Option<SimEngine>>             │  │
//! │  │   (the only lock in the crate)                      │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                           ↓                               │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │         Simulation Engine (sim/)                    │  │
//! │  │   frames + PageTable + clock + cursor               │  │
//! │  │   ┌─────────────────────────────────────────────┐   │  │
//! │  │   │  Eviction Policies: FIFO | LRU | LFU        │   │  │
//! │  │   │        (selected at construction)           │   │  │
//! │  │   └─────────────────────────────────────────────┘   │  │
//! │  │   Snapshot / StepResult / SimEvent / SimStats       │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error)
//! - [`sim`] - The simulation engine and eviction policies
//! - [`session`] - Lock-guarded session handle for multi-threaded callers
//!
//! # Quick Start
//! ```
//! use pagesim::{PageId, Policy, SimEngine};
//!
//! let refs: Vec<PageId> = [1, 2, 3, 4, 1, 2, 5]
//!     .into_iter()
//!     .map(PageId::new)
//!     .collect();
//! let mut engine = SimEngine::new(refs, 3, Policy::Fifo).unwrap();
//!
//! let result = engine.step();
//! assert_eq!(result.state.frames[0], Some(PageId::new(1)));
//!
//! let final_state = engine.run_to_completion();
//! assert!(final_state.done);
//! ```
//!
//! # Concurrency
//! [`SimEngine`] is single-threaded and synchronous: no operation blocks,
//! retries, or performs I/O, and `step` is not atomic against interleaved
//! mutation. Callers sharing an engine across threads must serialize whole
//! operations; [`SimSession`] is the provided way to do that.

pub mod common;
pub mod session;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result};
pub use session::SimSession;
pub use sim::{
    PageTable, PageTableEntry, Policy, SimEngine, SimEvent, SimStats, Snapshot, StepResult,
};
