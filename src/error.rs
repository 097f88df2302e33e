use thiserror::Error;

/// Errors returned by the fail-on-miss accessors of [`VecMap`](crate::VecMap)
/// and [`IndexedVecMap`](crate::IndexedVecMap).
///
/// A missing key is reported as [`Error::KeyNotFound`]: the caller asked for a key the map
/// does not hold, which is an invalid argument rather than an out-of-range access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    #[error("key does not exist")]
    KeyNotFound,

    #[error("handle to position {position} is stale")]
    StaleHandle { position: usize },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
