//! Channel reduction for interleaved sample blocks.
//!
//! Blocks are interleaved with the channel index cycling fastest: sample `i`
//! belongs to channel `i % channels`, and `channels` consecutive samples form
//! one frame.
//!
//! All reductions work in place. The reduced stream is written to the front
//! of the block and its length is returned; samples past that length are
//! left as scratch. Frame `k` is read before index `k` is written, and
//! `k <= k * channels`, so no frame is overwritten before it is consumed.
//!
//! # Preconditions
//!
//! `channels >= 1` and `block.len() % channels == 0`. Both are checked with
//! `debug_assert!` only. In release builds a trailing partial frame is
//! ignored.

use crate::input_mode::InputMode;

/// Outcome of [`reduce_in_place`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reduced {
    /// The block now starts with this many single-stream samples.
    Mono(usize),
    /// The block was left interleaved for splitting.
    Interleaved,
}

/// Number of whole frames in a block of `len` interleaved samples.
#[inline]
pub fn frame_count(len: usize, channels: usize) -> usize {
    debug_assert_precondition(len, channels);
    len / channels
}

/// Average of one frame.
///
/// Two-channel frames take the `(a + b) / 2` fast path.
#[inline]
pub fn downmix_frame(frame: &[f32]) -> f32 {
    match *frame {
        [a] => a,
        [a, b] => (a + b) * 0.5,
        _ => frame.iter().sum::<f32>() / frame.len() as f32,
    }
}

/// Sample of `channel` within one frame.
///
/// Single-channel frames always yield their only sample.
#[inline]
pub fn frame_channel(frame: &[f32], channel: usize) -> f32 {
    if frame.len() == 1 { frame[0] } else { frame[channel] }
}

/// Averages every frame into one sample, in place.
///
/// Returns the reduced length (`block.len() / channels`).
///
/// # Example
///
/// ```rust
/// use soundtap_core::downmix_in_place;
///
/// let mut block = [1.0, 3.0, 2.0, 2.0];
/// let len = downmix_in_place(&mut block, 2);
/// assert_eq!(&block[..len], &[2.0, 2.0]);
/// ```
pub fn downmix_in_place(block: &mut [f32], channels: usize) -> usize {
    let frames = frame_count(block.len(), channels);
    match channels {
        1 => {}
        2 => {
            for k in 0..frames {
                block[k] = (block[2 * k] + block[2 * k + 1]) * 0.5;
            }
        }
        _ => {
            for k in 0..frames {
                let start = k * channels;
                let mono = downmix_frame(&block[start..start + channels]);
                block[k] = mono;
            }
        }
    }
    frames
}

/// Keeps one channel of every frame, in place.
///
/// `channel` is a zero-based index (`0` = left, `1` = right). Single-channel
/// blocks are left untouched regardless of `channel`.
///
/// Returns the reduced length (`block.len() / channels`).
pub fn select_channel_in_place(block: &mut [f32], channels: usize, channel: usize) -> usize {
    let frames = frame_count(block.len(), channels);
    if channels == 1 {
        return frames;
    }
    debug_assert!(
        channel < channels,
        "channel {channel} out of range for {channels}-channel block"
    );
    for k in 0..frames {
        block[k] = block[k * channels + channel];
    }
    frames
}

/// Reduces a block according to `mode`.
///
/// [`InputMode::Stereo`] leaves the block untouched and reports
/// [`Reduced::Interleaved`]; every other mode writes a single stream to the
/// front of the block.
pub fn reduce_in_place(block: &mut [f32], channels: usize, mode: InputMode) -> Reduced {
    match mode {
        InputMode::Mono => Reduced::Mono(downmix_in_place(block, channels)),
        InputMode::Left => Reduced::Mono(select_channel_in_place(block, channels, 0)),
        InputMode::Right => Reduced::Mono(select_channel_in_place(block, channels, 1)),
        InputMode::Stereo => {
            debug_assert_precondition(block.len(), channels);
            Reduced::Interleaved
        }
    }
}

#[inline]
fn debug_assert_precondition(len: usize, channels: usize) {
    debug_assert!(channels >= 1, "channel count must be >= 1");
    debug_assert!(
        len % channels.max(1) == 0,
        "block length {len} is not a multiple of {channels} channels"
    );
}
