//! Simulation engine - the core stepping logic.
//!
//! The [`SimEngine`] owns the full frame/page-table state and advances
//! through the reference string one access at a time, classifying each as a
//! hit or a fault and applying the configured eviction policy when memory is
//! full.

use crate::common::{Error, FrameId, PageId, Result};
use crate::sim::event::SimEvent;
use crate::sim::page_table::PageTable;
use crate::sim::replacer::{Policy, Replacer};
use crate::sim::snapshot::{Snapshot, StepResult};
use crate::sim::stats::SimStats;

/// A single page-replacement simulation.
///
/// Constructed once per session from an immutable (reference string, frame
/// count, policy) triple; every field is mutated only by [`step`](Self::step).
/// A new session replaces the engine wholesale, never reconfigures it in
/// place.
///
/// # State machine
/// ```text
/// new() ──▶ RUNNING ──step()──▶ RUNNING   (cursor < refs.len())
///               │
///            step() exhausting the string
///               ▼
///           FINISHED ──step()──▶ FINISHED  (no-op, done = true)
/// ```
///
/// # Thread safety
/// The engine is deliberately *not* thread-safe: `step` mutates the frame set
/// and page table non-atomically. Callers that share an engine across threads
/// must serialize access for the duration of each call.
/// [`SimSession`](crate::SimSession) does exactly that with a mutex, but a
/// caller may pick any strategy (one lock, channel serialization, per-session
/// isolation).
///
/// # Example
/// ```
/// use pagesim::{PageId, Policy, SimEngine};
///
/// let refs = vec![1, 2, 1, 3].into_iter().map(PageId::new).collect();
/// let mut engine = SimEngine::new(refs, 2, Policy::Lru).unwrap();
///
/// let result = engine.run_to_completion();
/// assert!(result.done);
/// assert_eq!(result.state.clock, 4);
/// ```
pub struct SimEngine {
    /// The reference string; read-only after construction.
    refs: Vec<PageId>,

    /// Frame contents in frame-index order; `None` marks an empty slot.
    frames: Vec<Option<PageId>>,

    /// One entry per distinct page in the reference string.
    table: PageTable,

    /// References processed so far; ticks once per step, hit or fault.
    clock: u64,

    /// Index of the next unprocessed reference.
    cursor: usize,

    /// Set on the step that exhausts the reference string.
    finished: bool,

    /// Outcome of the most recent step.
    last_event: Option<SimEvent>,

    /// The configured eviction policy.
    policy: Policy,

    /// The policy implementation (FIFO's circular hand lives in here).
    replacer: Box<dyn Replacer>,

    /// Hit/fault/eviction counters.
    stats: SimStats,
}

impl SimEngine {
    /// Create a new engine.
    ///
    /// # Arguments
    /// * `refs` - the reference string (must be non-empty)
    /// * `frame_count` - number of memory frames (must be at least 1)
    /// * `policy` - the eviction policy (parse one with [`Policy::parse`])
    ///
    /// # Errors
    /// `Error::ZeroFrames` or `Error::EmptyReferenceString` when the
    /// configuration is invalid; no partial engine is produced.
    pub fn new(refs: Vec<PageId>, frame_count: usize, policy: Policy) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::ZeroFrames);
        }
        if refs.is_empty() {
            return Err(Error::EmptyReferenceString);
        }

        let table = PageTable::new(&refs);

        Ok(Self {
            refs,
            frames: vec![None; frame_count],
            table,
            clock: 0,
            cursor: 0,
            finished: false,
            last_event: None,
            policy,
            replacer: policy.build(),
            stats: SimStats::new(),
        })
    }

    // ========================================================================
    // Public API: Stepping
    // ========================================================================

    /// Process the next reference.
    ///
    /// Once the reference string is exhausted this is a no-op: it returns the
    /// unchanged state with `done = true`, idempotently.
    ///
    /// The step that processes the final reference still applies its hit or
    /// fault mutation in full, but reports [`SimEvent::Finished`] as the
    /// event — finishing takes precedence in the reported outcome.
    pub fn step(&mut self) -> StepResult {
        if self.finished {
            return StepResult {
                done: true,
                state: self.snapshot(),
            };
        }

        let page = self.refs[self.cursor];
        self.clock += 1;

        if self.table.is_resident(page) {
            self.table.touch(page, self.clock);
            self.stats.hits += 1;
            self.last_event = Some(SimEvent::Hit { page });
        } else {
            let (frame, evicted) = match self.lowest_free_frame() {
                Some(frame) => (frame, None),
                None => {
                    let victim = self.replacer.victim(&self.frames, &self.table);
                    self.table.evict(victim.page);
                    self.frames[victim.frame.0] = None;
                    self.stats.evictions += 1;
                    (victim.frame, Some(victim.page))
                }
            };

            self.frames[frame.0] = Some(page);
            self.table.admit(page, frame, self.clock);
            self.stats.faults += 1;
            self.last_event = Some(SimEvent::Fault {
                page,
                frame,
                evicted,
            });
        }

        self.cursor += 1;
        if self.cursor == self.refs.len() {
            self.finished = true;
            self.last_event = Some(SimEvent::Finished);
        }

        StepResult {
            done: self.finished,
            state: self.snapshot(),
        }
    }

    /// Step until the reference string is exhausted.
    ///
    /// Produces exactly the state an external caller would reach by invoking
    /// [`step`](Self::step) `refs.len()` times. Terminates in at most that
    /// many steps because the cursor strictly increases.
    pub fn run_to_completion(&mut self) -> StepResult {
        loop {
            let result = self.step();
            if result.done {
                return result;
            }
        }
    }

    // ========================================================================
    // Public API: State reads
    // ========================================================================

    /// Take a read-only snapshot of the current state (defensive copy).
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frames: self.frames.clone(),
            page_table: self.table.clone(),
            clock: self.clock,
            event: self.last_event,
            stats: self.stats,
        }
    }

    /// The configured eviction policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of memory frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Length of the reference string.
    pub fn ref_count(&self) -> usize {
        self.refs.len()
    }

    /// Whether the reference string is exhausted.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Hit/fault/eviction counters.
    pub fn stats(&self) -> SimStats {
        self.stats
    }

    // ========================================================================
    // Internal: Frame allocation
    // ========================================================================

    /// The lowest-indexed empty frame, if any (the deterministic fill order).
    fn lowest_free_frame(&self) -> Option<FrameId> {
        self.frames
            .iter()
            .position(|slot| slot.is_none())
            .map(FrameId::new)
    }
}

impl std::fmt::Debug for SimEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimEngine")
            .field("policy", &self.policy)
            .field("frames", &self.frames)
            .field("clock", &self.clock)
            .field("cursor", &self.cursor)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
