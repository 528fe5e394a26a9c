use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable in-process identity of a graph-resident object.
///
/// A handle pairs an arena slot with the slot's generation at creation time.
/// Removing an object bumps its slot's generation, so every handle issued
/// for the old occupant stops resolving and is never revived within the
/// session. Handles are only ever assigned by the graph, never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Handle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}
