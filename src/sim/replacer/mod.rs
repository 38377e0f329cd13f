//! Eviction policy implementations (replacers).
//!
//! Implements the three classic page-replacement policies:
//! - [`FifoReplacer`] - evict in original admission order via a circular hand
//! - [`LruReplacer`] - evict the least recently used resident page
//! - [`LfuReplacer`] - evict the least frequently used resident page
//!
//! All three are selected at construction through [`Policy`] and sit behind
//! the [`Replacer`] trait so the engine never branches on the policy itself.

mod fifo;
mod lfu;
mod lru;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use fifo::FifoReplacer;
pub use lfu::LfuReplacer;
pub use lru::LruReplacer;

use crate::common::{Error, FrameId, PageId, Result};
use crate::sim::page_table::PageTable;

/// The resident page chosen for eviction, together with the frame it frees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Victim {
    /// The page being evicted.
    pub page: PageId,
    /// The frame that becomes free.
    pub frame: FrameId,
}

/// An eviction policy.
///
/// The engine consults the replacer only on a miss with no free frame, so
/// implementations may assume every frame slot is occupied and at least one
/// page is resident.
pub trait Replacer: Send {
    /// Select the resident page to evict.
    fn victim(&mut self, frames: &[Option<PageId>], table: &PageTable) -> Victim;
}

/// Selector for the three supported eviction policies.
///
/// Parsed case-insensitively from the names `FIFO`, `LRU`, and `LFU`.
///
/// # Example
/// ```
/// use pagesim::Policy;
///
/// assert_eq!(Policy::parse("lru").unwrap(), Policy::Lru);
/// assert!(Policy::parse("MRU").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Policy {
    /// First-In-First-Out: evict in original admission order.
    Fifo,
    /// Least Recently Used: evict the page with the oldest last access.
    Lru,
    /// Least Frequently Used: evict the page with the fewest accesses.
    Lfu,
}

impl Policy {
    /// Parse a policy name, case-insensitively.
    ///
    /// # Errors
    /// `Error::UnknownPolicy` if the name matches none of the three policies.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().as_str() {
            "FIFO" => Ok(Policy::Fifo),
            "LRU" => Ok(Policy::Lru),
            "LFU" => Ok(Policy::Lfu),
            _ => Err(Error::UnknownPolicy(name.to_string())),
        }
    }

    /// Build the replacer implementing this policy.
    pub(crate) fn build(self) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new()),
            Policy::Lru => Box::new(LruReplacer::new()),
            Policy::Lfu => Box::new(LfuReplacer::new()),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Policy::parse(s)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Lfu => "LFU",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Policy::parse("FIFO").unwrap(), Policy::Fifo);
        assert_eq!(Policy::parse("fifo").unwrap(), Policy::Fifo);
        assert_eq!(Policy::parse("Lru").unwrap(), Policy::Lru);
        assert_eq!(Policy::parse("lFu").unwrap(), Policy::Lfu);
    }

    #[test]
    fn test_parse_unknown() {
        let err = Policy::parse("CLOCK").unwrap_err();
        assert_eq!(err, Error::UnknownPolicy("CLOCK".to_string()));
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_from_str() {
        let policy: Policy = "lfu".parse().unwrap();
        assert_eq!(policy, Policy::Lfu);
    }

    #[test]
    fn test_display_round_trips() {
        for policy in [Policy::Fifo, Policy::Lru, Policy::Lfu] {
            assert_eq!(Policy::parse(&policy.to_string()).unwrap(), policy);
        }
    }
}
