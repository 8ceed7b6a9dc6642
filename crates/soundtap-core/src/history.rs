//! Rolling sample history fed by interleaved capture blocks.
//!
//! [`SampleHistory`] is the ingestion side of a spectral analyzer. The
//! capture callback hands it interleaved blocks; it reduces them according
//! to the current [`InputMode`] and appends the result to two fixed-capacity
//! rings:
//!
//! - the **primary** ring holds the mono mix, the selected channel, or the
//!   left channel when splitting;
//! - the **secondary** ring holds the right channel and is only written in
//!   [`InputMode::Stereo`].
//!
//! A running count of every sample appended to the primary ring lets the
//! analyzer tell whether new data arrived since its last read.
//!
//! # Threading
//!
//! There is no internal locking. If the producer and the analyzer run on
//! different threads, wrap the history in a lock or copy windows out with
//! [`HistoryRing::copy_latest`] while holding one.
//!
//! # Example
//!
//! ```rust
//! use soundtap_core::{InputMode, SampleHistory};
//!
//! let mut history = SampleHistory::new(4);
//! history.put_samples(&mut [1.0, 3.0, 2.0, 4.0], 2);
//! assert_eq!(history.left().to_vec(), vec![2.0, 3.0]);
//!
//! history.set_input_mode(InputMode::Stereo);
//! history.put_samples(&mut [5.0, 6.0], 2);
//! assert_eq!(history.at(2), 5.0);
//! assert_eq!(history.at_right(0), 6.0);
//! assert_eq!(history.num_put_samples(), 3);
//! ```

use crate::input_mode::InputMode;
use crate::reduce::{Reduced, downmix_frame, frame_channel, frame_count, reduce_in_place};
use crate::ring::HistoryRing;

/// Fixed-capacity history of reduced capture samples.
#[derive(Debug, Clone)]
pub struct SampleHistory {
    /// Mono, selected-channel, or left-channel samples
    left: HistoryRing,
    /// Right-channel samples (stereo split only)
    right: HistoryRing,
    /// Samples ever appended to `left`; never decreases
    num_put_samples: u64,
    mode: InputMode,
}

impl SampleHistory {
    /// Creates an empty history retaining `capacity` samples per ring.
    ///
    /// `capacity` is normally the analyzer's FFT length. The input mode
    /// starts as [`InputMode::Mono`].
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        Self::from_rings(HistoryRing::new(capacity), HistoryRing::new(capacity))
    }

    /// Creates a history whose rings start full of silence.
    ///
    /// The prefill does not count towards [`num_put_samples`](Self::num_put_samples).
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn zeroed(capacity: usize) -> Self {
        Self::from_rings(HistoryRing::zeroed(capacity), HistoryRing::zeroed(capacity))
    }

    fn from_rings(left: HistoryRing, right: HistoryRing) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            capacity = left.capacity(),
            prefilled = left.is_full(),
            "sample history created"
        );

        Self {
            left,
            right,
            num_put_samples: 0,
            mode: InputMode::default(),
        }
    }

    /// Builder form of [`set_input_mode`](Self::set_input_mode).
    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.set_input_mode(mode);
        self
    }

    /// Sets how subsequent blocks are reduced.
    ///
    /// Samples already buffered are kept as they are.
    pub fn set_input_mode(&mut self, mode: InputMode) {
        #[cfg(feature = "tracing")]
        if mode != self.mode {
            tracing::debug!(from = %self.mode, to = %mode, "input mode changed");
        }

        self.mode = mode;
    }

    /// Returns the current input mode.
    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    /// Sets the input mode from its identifier.
    ///
    /// Matching ignores ASCII case; unknown identifiers select
    /// [`InputMode::Mono`].
    pub fn set_input_type(&mut self, name: &str) {
        self.set_input_mode(InputMode::from_name(name));
    }

    /// Returns the canonical identifier of the current input mode.
    pub fn input_type(&self) -> &'static str {
        self.mode.name()
    }

    /// Reduces an interleaved block and appends it to the history.
    ///
    /// `block` holds whole frames of `channels` samples each. For every mode
    /// except [`InputMode::Stereo`] the block is overwritten in place: its
    /// first `block.len() / channels` samples become the reduced stream and
    /// the rest is scratch.
    ///
    /// In stereo mode, channel 0 goes to the primary ring and channel 1 to
    /// the secondary ring; further channels are dropped. A single-channel
    /// block in stereo mode goes to the primary ring only.
    ///
    /// The running count grows by the number of frames in the block.
    pub fn put_samples(&mut self, block: &mut [f32], channels: usize) {
        match reduce_in_place(block, channels, self.mode) {
            Reduced::Mono(len) => {
                self.left.extend_from_slice(&block[..len]);
                self.num_put_samples += len as u64;
            }
            Reduced::Interleaved => self.split(block, channels),
        }
    }

    /// Same as [`put_samples`](Self::put_samples) for a block that must not
    /// be modified.
    pub fn put_interleaved(&mut self, block: &[f32], channels: usize) {
        let frames = frame_count(block.len(), channels);
        let frames_iter = block.chunks_exact(channels);
        match self.mode {
            InputMode::Mono => frames_iter.for_each(|f| self.left.push(downmix_frame(f))),
            InputMode::Left => frames_iter.for_each(|f| self.left.push(frame_channel(f, 0))),
            InputMode::Right => frames_iter.for_each(|f| self.left.push(frame_channel(f, 1))),
            InputMode::Stereo => {
                self.split(block, channels);
                return;
            }
        }
        self.num_put_samples += frames as u64;
    }

    fn split(&mut self, block: &[f32], channels: usize) {
        if channels == 1 {
            // Nothing to split; the secondary ring is left alone
            self.left.extend_from_slice(block);
            self.num_put_samples += block.len() as u64;
            return;
        }

        let mut frames = 0u64;
        for frame in block.chunks_exact(channels) {
            self.left.push(frame[0]);
            self.right.push(frame[1]);
            frames += 1;
        }
        self.num_put_samples += frames;
    }

    /// Returns the primary sample at `index` (0 = oldest).
    ///
    /// `index` must be below [`len`](Self::len); checked in debug builds only.
    #[inline]
    pub fn at(&self, index: usize) -> f32 {
        self.left.get(index)
    }

    /// Returns the secondary (right channel) sample at `index` (0 = oldest).
    ///
    /// `index` must be below [`right_len`](Self::right_len); checked in debug
    /// builds only.
    #[inline]
    pub fn at_right(&self, index: usize) -> f32 {
        self.right.get(index)
    }

    /// Returns the number of samples ever appended to the primary ring.
    #[inline]
    pub fn num_put_samples(&self) -> u64 {
        self.num_put_samples
    }

    /// Returns how many samples arrived after the analyzer saw `seen`.
    ///
    /// `seen` is a value previously returned by
    /// [`num_put_samples`](Self::num_put_samples).
    #[inline]
    pub fn samples_since(&self, seen: u64) -> u64 {
        self.num_put_samples.saturating_sub(seen)
    }

    /// Returns the fixed capacity of each ring.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.left.capacity()
    }

    /// Returns the number of samples retained in the primary ring.
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns the number of samples retained in the secondary ring.
    #[inline]
    pub fn right_len(&self) -> usize {
        self.right.len()
    }

    /// Returns true if the primary ring holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Returns true if the primary ring holds `capacity` samples.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.left.is_full()
    }

    /// The primary ring.
    pub fn left(&self) -> &HistoryRing {
        &self.left
    }

    /// The secondary ring.
    pub fn right(&self) -> &HistoryRing {
        &self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let history = SampleHistory::new(16);
        assert_eq!(history.capacity(), 16);
        assert_eq!(history.input_mode(), InputMode::Mono);
        assert_eq!(history.input_type(), "Mono");
        assert_eq!(history.num_put_samples(), 0);
        assert!(history.is_empty());
        assert_eq!(history.right_len(), 0);
    }

    #[test]
    fn test_mono_downmix_appends() {
        let mut history = SampleHistory::new(8);
        history.put_samples(&mut [1.0, 3.0, -1.0, 1.0], 2);
        assert_eq!(history.left().to_vec(), vec![2.0, 0.0]);
        assert_eq!(history.num_put_samples(), 2);
        assert_eq!(history.right_len(), 0);
    }

    #[test]
    fn test_put_samples_rewrites_block() {
        let mut history = SampleHistory::new(8);
        let mut block = vec![1.0, 3.0, 5.0, 7.0];
        history.put_samples(&mut block, 2);
        assert_eq!(&block[..2], &[2.0, 6.0]);
    }

    #[test]
    fn test_left_and_right_select() {
        let mut history = SampleHistory::new(8).with_input_mode(InputMode::Left);
        history.put_samples(&mut [1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(history.left().to_vec(), vec![1.0, 3.0]);

        history.set_input_type("right");
        history.put_samples(&mut [1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(history.left().to_vec(), vec![1.0, 3.0, 2.0, 4.0]);
        assert_eq!(history.num_put_samples(), 4);
        assert_eq!(history.right_len(), 0);
    }

    #[test]
    fn test_stereo_split() {
        let mut history = SampleHistory::new(2);
        history.set_input_type("stereo");
        history.put_samples(&mut [1.0, 2.0, 3.0, 4.0], 2);

        assert_eq!(history.left().to_vec(), vec![1.0, 3.0]);
        assert_eq!(history.right().to_vec(), vec![2.0, 4.0]);
        assert_eq!(history.num_put_samples(), 2);
    }

    #[test]
    fn test_stereo_drops_extra_channels() {
        let mut history = SampleHistory::new(4).with_input_mode(InputMode::Stereo);
        let mut block = [1.0, 2.0, 9.0, 3.0, 4.0, 9.0];
        history.put_samples(&mut block, 3);

        assert_eq!(history.left().to_vec(), vec![1.0, 3.0]);
        assert_eq!(history.right().to_vec(), vec![2.0, 4.0]);
        assert_eq!(history.num_put_samples(), 2);
        // Stereo leaves the block intact
        assert_eq!(block, [1.0, 2.0, 9.0, 3.0, 4.0, 9.0]);
    }

    #[test]
    fn test_stereo_single_channel_leaves_right_untouched() {
        let mut history = SampleHistory::new(4).with_input_mode(InputMode::Stereo);
        history.put_samples(&mut [1.0, 2.0, 3.0], 1);

        assert_eq!(history.left().to_vec(), vec![1.0, 2.0, 3.0]);
        assert!(history.right().is_empty());
        assert_eq!(history.num_put_samples(), 3);
    }

    #[test]
    fn test_mode_change_keeps_history() {
        let mut history = SampleHistory::new(8);
        history.put_samples(&mut [2.0, 4.0], 2);
        history.set_input_mode(InputMode::Stereo);
        history.put_samples(&mut [5.0, 6.0], 2);
        history.set_input_mode(InputMode::Mono);
        history.put_samples(&mut [7.0, 9.0], 2);

        assert_eq!(history.left().to_vec(), vec![3.0, 5.0, 8.0]);
        assert_eq!(history.right().to_vec(), vec![6.0]);
        assert_eq!(history.num_put_samples(), 3);
    }

    #[test]
    fn test_put_interleaved_matches_put_samples() {
        let block: Vec<f32> = (0..24).map(|i| i as f32 * 0.25 - 1.0).collect();

        for mode in InputMode::ALL {
            for channels in [1, 2, 3, 4] {
                let mut in_place = SampleHistory::new(5).with_input_mode(mode);
                let mut borrowed = SampleHistory::new(5).with_input_mode(mode);

                in_place.put_samples(&mut block.clone(), channels);
                borrowed.put_interleaved(&block, channels);

                assert_eq!(in_place.left().to_vec(), borrowed.left().to_vec());
                assert_eq!(in_place.right().to_vec(), borrowed.right().to_vec());
                assert_eq!(in_place.num_put_samples(), borrowed.num_put_samples());
            }
        }
    }

    #[test]
    fn test_counter_keeps_growing_after_full() {
        let mut history = SampleHistory::new(2);
        for _ in 0..10 {
            history.put_samples(&mut [1.0, 1.0, 1.0, 1.0], 2);
        }
        assert_eq!(history.len(), 2);
        assert_eq!(history.num_put_samples(), 20);
        assert_eq!(history.samples_since(15), 5);
        assert_eq!(history.samples_since(25), 0);
    }

    #[test]
    fn test_zeroed_history() {
        let mut history = SampleHistory::zeroed(3);
        assert!(history.is_full());
        assert_eq!(history.right_len(), 3);
        assert_eq!(history.num_put_samples(), 0);

        history.put_samples(&mut [4.0, 4.0], 2);
        assert_eq!(history.left().to_vec(), vec![0.0, 0.0, 4.0]);
        assert_eq!(history.at(2), 4.0);
        assert_eq!(history.at_right(2), 0.0);
        assert_eq!(history.num_put_samples(), 1);
    }

    #[test]
    fn test_unknown_type_resets_to_mono() {
        let mut history = SampleHistory::new(4).with_input_mode(InputMode::Stereo);
        history.set_input_type("quad");
        assert_eq!(history.input_mode(), InputMode::Mono);
        assert_eq!(history.input_type(), "Mono");
    }

    #[test]
    fn test_padded_type_resets_to_mono() {
        let mut history = SampleHistory::new(4).with_input_mode(InputMode::Left);
        history.set_input_type(" stereo ");
        assert_eq!(history.input_mode(), InputMode::Mono);
        assert_eq!(history.input_type(), "Mono");
    }
}
