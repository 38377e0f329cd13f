//! Session handle - a caller-held, lock-guarded simulation slot.
//!
//! The engine itself is not thread-safe (see [`SimEngine`]'s docs). A
//! [`SimSession`] wraps one optional engine in a mutex so a transport layer
//! (an HTTP API, a REPL, a UI) can drive it from multiple threads: the lock
//! is held for the duration of one operation, making each `step` or full run
//! atomic with respect to concurrent callers.
//!
//! There is deliberately no process-global session; callers own the handle
//! and may hold as many independent sessions as they like.

use parking_lot::Mutex;

use crate::common::{Error, PageId, Result};
use crate::sim::{Policy, SimEngine, Snapshot, StepResult};

/// A lock-guarded slot holding at most one [`SimEngine`].
///
/// Every operation except [`init`](Self::init) fails with
/// `Error::NotInitialized` until an engine has been built. `init` replaces
/// any existing engine wholesale; there is no partial reconfiguration.
///
/// # Example
/// ```
/// use pagesim::{PageId, SimSession};
///
/// let session = SimSession::new();
/// let refs = vec![1, 2, 1, 3].into_iter().map(PageId::new).collect();
/// session.init(refs, 2, "lru").unwrap();
///
/// let result = session.run_to_completion().unwrap();
/// assert!(result.done);
/// ```
#[derive(Debug, Default)]
pub struct SimSession {
    engine: Mutex<Option<SimEngine>>,
}

impl SimSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self {
            engine: Mutex::new(None),
        }
    }

    /// Build a fresh engine from user input, replacing any existing one.
    ///
    /// The policy name is matched case-insensitively against FIFO/LRU/LFU.
    /// Returns the initial snapshot (empty frames, clock 0).
    ///
    /// # Errors
    /// Any of the `InvalidConfiguration` causes; on error the previous
    /// engine, if any, is left untouched.
    pub fn init(&self, refs: Vec<PageId>, frame_count: usize, policy: &str) -> Result<Snapshot> {
        let policy = Policy::parse(policy)?;
        let engine = SimEngine::new(refs, frame_count, policy)?;
        let snapshot = engine.snapshot();

        *self.engine.lock() = Some(engine);
        Ok(snapshot)
    }

    /// Process one reference.
    ///
    /// # Errors
    /// `Error::NotInitialized` if no engine exists.
    pub fn step(&self) -> Result<StepResult> {
        let mut guard = self.engine.lock();
        let engine = guard.as_mut().ok_or(Error::NotInitialized)?;
        Ok(engine.step())
    }

    /// Run the current simulation to completion.
    ///
    /// The lock is held for the whole run, so concurrent steppers never
    /// interleave with it.
    ///
    /// # Errors
    /// `Error::NotInitialized` if no engine exists.
    pub fn run_to_completion(&self) -> Result<StepResult> {
        let mut guard = self.engine.lock();
        let engine = guard.as_mut().ok_or(Error::NotInitialized)?;
        Ok(engine.run_to_completion())
    }

    /// Read the current state without advancing.
    ///
    /// # Errors
    /// `Error::NotInitialized` if no engine exists.
    pub fn snapshot(&self) -> Result<Snapshot> {
        let guard = self.engine.lock();
        let engine = guard.as_ref().ok_or(Error::NotInitialized)?;
        Ok(engine.snapshot())
    }

    /// Whether an engine has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.engine.lock().is_some()
    }
}
