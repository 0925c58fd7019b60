use alloc::{boxed::Box, vec};
use core::fmt;

use bstr::BStr;
use log::{debug, trace};

use crate::error::{CapacityError, OverflowError};

/// A fixed-capacity circular byte buffer with independent read and write
/// cursors.
///
/// The unread bytes are the circular span from the head cursor (inclusive) to
/// the write cursor (exclusive). The write cursor never advances onto the head
/// cursor, so one slot is always left empty and a buffer of capacity `C` holds
/// at most `C - 1` bytes. That keeps `head == write` unambiguous: it always
/// means empty.
///
/// Storage is allocated once in [`new`](Self::new). Neither [`write`] nor
/// [`read`] allocate, block, or wait; each performs at most two bounded copies.
///
/// The buffer does no synchronization of its own. Sharing it between a
/// producer and a consumer thread requires an external lock.
///
/// [`write`]: Self::write
/// [`read`]: Self::read
///
/// # Examples
///
/// ```rust
/// use bytering::RingBuffer;
///
/// let mut ring = RingBuffer::new(10)?;
/// assert_eq!(ring.write(b"ABCDE")?, 5);
///
/// // Five free slots remain, but one of them is reserved.
/// assert!(ring.write(b"FGHIJ").is_err());
/// assert_eq!(ring.len(), 5);
///
/// let mut out = [0u8; 5];
/// assert_eq!(ring.read(&mut out), 5);
/// assert_eq!(&out, b"ABCDE");
/// # Ok::<(), bytering::Error>(())
/// ```
pub struct RingBuffer {
    storage: Box<[u8]>,
    write_pos: usize,
    head_pos: usize,
}

impl RingBuffer {
    /// Allocates a zeroed ring of `capacity` slots with both cursors at 0.
    ///
    /// The ring holds at most `capacity - 1` bytes at once.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError);
        }

        debug!("allocating ring buffer with {capacity} slots");
        Ok(Self {
            storage: vec![0u8; capacity].into_boxed_slice(),
            write_pos: 0,
            head_pos: 0,
        })
    }

    /// Number of slots in the underlying storage.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// The most bytes the ring can hold at once: `capacity() - 1`.
    #[inline]
    #[must_use]
    pub fn usable_capacity(&self) -> usize {
        self.capacity() - 1
    }

    /// Number of unread bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        if self.write_pos < self.head_pos {
            self.capacity() - self.head_pos + self.write_pos
        } else {
            self.write_pos - self.head_pos
        }
    }

    /// Whether there is nothing to read.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head_pos == self.write_pos
    }

    /// The longest write that would currently succeed.
    #[inline]
    #[must_use]
    pub fn available(&self) -> usize {
        self.usable_capacity() - self.len()
    }

    /// Whether every usable slot is occupied.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.available() == 0
    }

    /// Appends all of `data`, or nothing.
    ///
    /// On success the returned count is always `data.len()`. Writing an empty
    /// slice always succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`OverflowError`] if `data` is longer than
    /// [`available`](Self::available). No bytes are written and the buffer is
    /// left unchanged; drain it with [`read`](Self::read) before retrying.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, OverflowError> {
        let length = data.len();
        let cap = self.capacity();
        let wp = self.write_pos;
        let head = self.head_pos;

        // Forward distance from the write cursor to the head cursor. The last
        // slot of that distance is the reserved one.
        let gap = if wp < head { head - wp } else { cap - wp + head };
        if gap <= length {
            let err = OverflowError {
                requested: length,
                available: gap - 1,
            };
            trace!("rejecting write: {err}");
            return Err(err);
        }

        if wp < head || cap - wp >= length {
            self.storage[wp..wp + length].copy_from_slice(data);
        } else {
            let (right, left) = data.split_at(cap - wp);
            self.storage[wp..].copy_from_slice(right);
            self.storage[..left.len()].copy_from_slice(left);
        }

        self.write_pos = (wp + length) % cap;
        Ok(length)
    }

    /// Moves up to `buf.len()` of the oldest unread bytes into `buf`.
    ///
    /// Returns the number of bytes copied, which is 0 when the ring is empty.
    /// Reading from an empty ring is not an error.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        let head = self.head_pos;
        let write = self.write_pos;
        if head == write {
            return 0;
        }

        let cap = self.capacity();
        let size = buf.len().min(self.len());

        if head < write || cap - head >= size {
            buf[..size].copy_from_slice(&self.storage[head..head + size]);
        } else {
            let right = cap - head;
            buf[..right].copy_from_slice(&self.storage[head..]);
            buf[right..size].copy_from_slice(&self.storage[..size - right]);
        }

        self.head_pos = (head + size) % cap;
        size
    }

    /// The unread bytes in order, split at the end of storage.
    ///
    /// The second slice is empty unless the unread region wraps around.
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let head = self.head_pos;
        let write = self.write_pos;
        if head <= write {
            (&self.storage[head..write], &[])
        } else {
            (&self.storage[head..], &self.storage[..write])
        }
    }

    /// Discards every unread byte. Storage contents are left as they are.
    pub fn clear(&mut self) {
        self.head_pos = self.write_pos;
    }

    #[cfg(test)]
    pub(crate) fn cursors(&self) -> (usize, usize) {
        (self.head_pos, self.write_pos)
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &[u8] {
        &self.storage
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (front, back) = self.as_slices();
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("head", &self.head_pos)
            .field("write", &self.write_pos)
            .field("front", &BStr::new(front))
            .field("back", &BStr::new(back))
            .finish()
    }
}
