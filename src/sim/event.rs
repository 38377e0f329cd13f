//! Simulation events - the human-readable outcome of a step.

use std::fmt;

use serde::Serialize;

use crate::common::{FrameId, PageId};

/// The outcome of the most recently processed step.
///
/// Derived state for display: the stepping algorithm never reads it back.
/// The `Display` rendering matches what a UI shows the user.
///
/// `Fault::evicted` is an `Option`, never a sentinel value, so evicting
/// page 0 reports `(Replaced 0)` like any other page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimEvent {
    /// The referenced page was already resident.
    Hit {
        /// The page that was hit.
        page: PageId,
    },

    /// The referenced page was not resident and was admitted.
    Fault {
        /// The page that was loaded.
        page: PageId,
        /// The frame it was loaded into.
        frame: FrameId,
        /// The page evicted to make room, if memory was full.
        evicted: Option<PageId>,
    },

    /// The reference string is exhausted.
    Finished,
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Hit { page } => {
                write!(f, "Page {} already in memory (hit)", page)
            }
            SimEvent::Fault {
                page,
                frame,
                evicted,
            } => {
                write!(f, "Page fault -> Loaded {} into frame {}", page, frame.0)?;
                if let Some(victim) = evicted {
                    write!(f, " (Replaced {})", victim)?;
                }
                Ok(())
            }
            SimEvent::Finished => write!(f, "Simulation finished"),
        }
    }
}
