//! `std::io` adapters.
//!
//! These keep the inherent semantics: a write is still all-or-nothing, and a
//! read from an empty ring still returns `Ok(0)`. Because `io::Read` treats
//! `Ok(0)` as end of stream, helpers such as `read_to_end` stop at the first
//! moment the ring is drained.

use std::io;

use crate::{OverflowError, RingBuffer};

impl From<OverflowError> for io::Error {
    fn from(err: OverflowError) -> Self {
        io::Error::other(err)
    }
}

impl io::Write for RingBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(RingBuffer::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for RingBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(RingBuffer::read(self, buf))
    }
}
