//! Page identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a page in the workload's virtual address space.
///
/// Page identifiers are opaque to the simulator: the engine only ever
/// compares them. `u32` is plenty for any reference string a workload
/// generator produces.
///
/// Note that `0` is a perfectly valid page identifier. Presence is always
/// tracked with `Option<PageId>` or an explicit flag, never by treating a
/// particular value as "no page".
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page = PageId::new(7);
/// assert_eq!(page.0, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
