use core::fmt;

/// A position token for an entry of a [`VecMap`](crate::VecMap) or
/// [`IndexedVecMap`](crate::IndexedVecMap).
///
/// Entries are never removed one by one, so an entry keeps its position for as long as the
/// map lives. A handle therefore stays valid across any number of insertions and grants `O(1)`
/// access. Clearing the map, or overwriting it with `clone_from`, starts a new generation:
/// handles taken before become stale and are rejected with
/// [`Error::StaleHandle`](crate::Error::StaleHandle). The generation is a `u64`, so it cannot
/// wrap back to an old value within any realistic number of clears.
///
/// A handle carries no reference to its map; using it with a different map is not detected
/// unless the position is out of bounds there.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    pub(crate) position: usize,
    pub(crate) generation: u64,
}

impl Handle {
    pub(crate) const fn new(position: usize, generation: u64) -> Self {
        Self {
            position,
            generation,
        }
    }

    /// The insertion index of the entry this handle refers to.
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
