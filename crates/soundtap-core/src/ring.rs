//! Fixed-capacity sample history with oldest-first eviction.
//!
//! [`HistoryRing`] is a circular buffer over a preallocated `Vec<f32>`.
//! Appending never allocates: once the ring holds `capacity` samples each
//! new sample overwrites the oldest one. Logical index 0 is always the oldest
//! retained sample and `len() - 1` the newest.
//!
//! ```text
//!   buffer:  [ e | f | b | c | d ]      capacity 5, len 5
//!                    ^ write_pos
//!   logical: b c d e f                   at(0) == b, at(4) == f
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;

/// Circular buffer of `f32` samples with a fixed capacity.
///
/// # Memory
///
/// The storage is allocated once in the constructor and never reallocates.
///
/// # Example
///
/// ```rust
/// use soundtap_core::HistoryRing;
///
/// let mut ring = HistoryRing::new(3);
/// ring.extend_from_slice(&[1.0, 2.0, 3.0, 4.0]);
///
/// assert_eq!(ring.len(), 3);
/// assert_eq!(ring.get(0), 2.0);
/// assert_eq!(ring.newest(), Some(4.0));
/// ```
#[derive(Debug, Clone)]
pub struct HistoryRing {
    /// Circular storage, always `capacity` long
    buffer: Vec<f32>,
    /// Slot the next sample is written to
    write_pos: usize,
    /// Number of retained samples (<= capacity)
    len: usize,
}

impl HistoryRing {
    /// Creates an empty ring holding at most `capacity` samples.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Ring capacity must be > 0");

        Self {
            buffer: vec![0.0; capacity],
            write_pos: 0,
            len: 0,
        }
    }

    /// Creates a ring that is already full of silence.
    ///
    /// Consumers can read a whole `capacity` window before any real samples
    /// arrive.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn zeroed(capacity: usize) -> Self {
        let mut ring = Self::new(capacity);
        ring.len = capacity;
        ring
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of retained samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been retained yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the ring holds `capacity` samples.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.buffer.len()
    }

    /// Appends a sample, evicting the oldest one when full.
    #[inline]
    pub fn push(&mut self, sample: f32) {
        let capacity = self.buffer.len();
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % capacity;
        if self.len < capacity {
            self.len += 1;
        }
    }

    /// Appends a run of samples in order.
    ///
    /// Equivalent to calling [`push`](Self::push) for each sample, but copies
    /// in at most two chunks. When `samples` is longer than the capacity only
    /// its tail is written.
    pub fn extend_from_slice(&mut self, samples: &[f32]) {
        let capacity = self.buffer.len();

        if samples.len() >= capacity {
            let tail = &samples[samples.len() - capacity..];
            self.buffer.copy_from_slice(tail);
            self.write_pos = 0;
            self.len = capacity;
            return;
        }

        let first = samples.len().min(capacity - self.write_pos);
        let (head, rest) = samples.split_at(first);
        self.buffer[self.write_pos..self.write_pos + first].copy_from_slice(head);
        self.buffer[..rest.len()].copy_from_slice(rest);

        self.write_pos = (self.write_pos + samples.len()) % capacity;
        self.len = (self.len + samples.len()).min(capacity);
    }

    /// Returns the sample at logical position `index` (0 = oldest).
    ///
    /// `index` must be below [`len`](Self::len). This is checked in debug
    /// builds only; release builds wrap the index onto some slot of the
    /// storage without branching.
    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        debug_assert!(
            index < self.len,
            "index {index} out of range for history of length {}",
            self.len
        );
        self.buffer[self.physical(index)]
    }

    /// Returns the most recently appended sample.
    pub fn newest(&self) -> Option<f32> {
        if self.is_empty() {
            None
        } else {
            Some(self.get(self.len - 1))
        }
    }

    /// Returns the retained samples as two slices, oldest first.
    ///
    /// The second slice is empty unless the history wraps around the end of
    /// the storage.
    pub fn as_slices(&self) -> (&[f32], &[f32]) {
        let start = self.oldest_pos();
        if start + self.len <= self.buffer.len() {
            (&self.buffer[start..start + self.len], &self.buffer[..0])
        } else {
            (&self.buffer[start..], &self.buffer[..self.write_pos])
        }
    }

    /// Iterates over retained samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        let (a, b) = self.as_slices();
        a.iter().chain(b.iter()).copied()
    }

    /// Copies the newest `min(dst.len(), len())` samples into the front of
    /// `dst`, oldest first, and returns how many were copied.
    ///
    /// This is the snapshot half of a copy-out protocol: the analyzer holds
    /// its own window and refreshes it between ingestion calls.
    pub fn copy_latest(&self, dst: &mut [f32]) -> usize {
        let count = dst.len().min(self.len);
        let skip = self.len - count;
        for (slot, sample) in dst.iter_mut().zip(self.iter().skip(skip)) {
            *slot = sample;
        }
        count
    }

    /// Returns the retained samples as a new vector, oldest first.
    pub fn to_vec(&self) -> Vec<f32> {
        let (a, b) = self.as_slices();
        let mut out = Vec::with_capacity(self.len);
        out.extend_from_slice(a);
        out.extend_from_slice(b);
        out
    }

    #[inline]
    fn oldest_pos(&self) -> usize {
        let capacity = self.buffer.len();
        (self.write_pos + capacity - self.len) % capacity
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.oldest_pos() + index) % self.buffer.len()
    }
}

impl Index<usize> for HistoryRing {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        debug_assert!(
            index < self.len,
            "index {index} out of range for history of length {}",
            self.len
        );
        &self.buffer[self.physical(index)]
    }
}
