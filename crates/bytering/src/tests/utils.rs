use alloc::vec;

use crate::RingBuffer;

/// A fresh ring whose cursors both sit at `offset % capacity`.
///
/// Rings with a single slot cannot hold a byte, so their cursors stay at 0.
pub(crate) fn shifted(capacity: usize, offset: usize) -> RingBuffer {
    let mut ring = RingBuffer::new(capacity).unwrap();
    let mut scratch = vec![0u8; capacity];
    let mut remaining = offset % capacity;
    while remaining > 0 && ring.usable_capacity() > 0 {
        let step = remaining.min(ring.usable_capacity());
        ring.write(&scratch[..step]).unwrap();
        assert_eq!(ring.read(&mut scratch[..step]), step);
        remaining -= step;
    }
    ring
}

/// Number of cases for each quickcheck property.
pub(crate) fn quickcheck_tests() -> u64 {
    #[cfg(not(any(miri, feature = "test-fast")))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(any(miri, feature = "test-fast"))]
    let tests = 10;
    tests
}
