//! A fixed-capacity byte ring buffer for staging bytes between a producer and
//! a consumer, such as a socket read and a parser, without allocating after
//! construction.
//!
//! See [`RingBuffer`] for the cursor model and the reserved-slot rule.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
#[cfg(feature = "std")]
mod io;
mod ring;

#[cfg(test)]
mod tests;

pub use error::{CapacityError, Error, OverflowError};
pub use ring::RingBuffer;
