//! Simulation statistics tracking.

use std::fmt;

use serde::Serialize;

/// Counters tracked across a simulation run.
///
/// Plain fields, no atomics: the engine is single-threaded by contract, and
/// any cross-thread sharing is the caller's synchronization concern (see the
/// crate-level concurrency notes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// References that found their page resident.
    pub hits: u64,

    /// References that faulted (free-frame fills and evictions alike).
    pub faults: u64,

    /// Faults that had to evict a resident page.
    pub evictions: u64,
}

impl SimStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.faults;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = SimStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.faults, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let stats = SimStats {
            hits: 7,
            faults: 3,
            evictions: 1,
        };
        assert_eq!(stats.hit_rate(), 0.7);
    }

    #[test]
    fn test_stats_display() {
        let stats = SimStats {
            hits: 80,
            faults: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);
        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("80.00%"));
    }
}
