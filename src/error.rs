use thiserror::Error;

/// Errors surfaced at the map API boundary.
///
/// Only indexed access reports an error; every other operation encodes its
/// outcome in the return value (`Option` for lookups and removals,
/// possibly-empty iterators for range scans).
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The requested key is not in the map.
    #[error("key not found")]
    KeyNotFound,
}
