//! Soundtap Core - sample ingestion for spectral analysis
//!
//! This crate sits between an audio capture callback and an FFT analyzer.
//! Capture hands over interleaved multichannel blocks; the history reduces
//! them to one or two streams and keeps a fixed-length window of the most
//! recent samples for the analyzer to read.
//!
//! # Core Abstractions
//!
//! - [`SampleHistory`] - Ingestion pipeline: reduce, append, count
//! - [`InputMode`] - Mono downmix, left/right selection, or stereo split
//! - [`HistoryRing`] - Fixed-capacity circular buffer with oldest-first eviction
//!
//! ## Channel Reduction
//!
//! In-place reducers over interleaved slices:
//!
//! - [`downmix_in_place`] - Average all channels of each frame
//! - [`select_channel_in_place`] - Keep one channel of each frame
//! - [`reduce_in_place`] - Dispatch on an [`InputMode`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for ring storage).
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! soundtap-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use soundtap_core::SampleHistory;
//!
//! // One FFT window worth of history
//! let mut history = SampleHistory::new(1024);
//! history.set_input_type("mono");
//!
//! // Called from the capture callback
//! let mut block = vec![0.25_f32; 512];
//! history.put_samples(&mut block, 2);
//!
//! // Analyzer side
//! assert_eq!(history.len(), 256);
//! let newest = history.at(history.len() - 1);
//! assert_eq!(newest, 0.25);
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations after construction
//! - **Unchecked hot path**: Caller preconditions are `debug_assert!`s only
//! - **Single owner**: No internal locking; synchronize externally if needed

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod history;
pub mod input_mode;
pub mod reduce;
pub mod ring;

// Re-export main types at crate root
pub use history::SampleHistory;
pub use input_mode::InputMode;
pub use reduce::{
    Reduced, downmix_frame, downmix_in_place, frame_channel, frame_count, reduce_in_place,
    select_channel_in_place,
};
pub use ring::HistoryRing;
