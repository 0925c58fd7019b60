use thiserror::Error;

/// A [`RingBuffer::write`](crate::RingBuffer::write) was rejected because the
/// data does not fit in the free space.
///
/// Nothing was written: the buffer is exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("overflow: cannot write {requested} bytes, only {available} available")]
pub struct OverflowError {
    /// Length of the rejected write.
    pub requested: usize,
    /// Bytes a write could have accepted at the time of the call.
    pub available: usize,
}

/// A ring buffer was requested with zero slots.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("ring buffer capacity must be at least 1")]
pub struct CapacityError;

/// Any error produced by this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// See [`OverflowError`].
    #[error(transparent)]
    Overflow(#[from] OverflowError),
    /// See [`CapacityError`].
    #[error(transparent)]
    Capacity(#[from] CapacityError),
}
