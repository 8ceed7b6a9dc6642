//! Configuration for soundtap sample histories.
//!
//! A history is described by a small TOML file: the ring capacity (normally
//! the analyzer's FFT length), the input mode identifier, and whether the
//! rings start full of silence.
//!
//! # Example
//!
//! ```rust,no_run
//! use soundtap_config::HistoryConfig;
//! use soundtap_core::InputMode;
//!
//! // Load from file and build the history
//! let history = HistoryConfig::load("history.toml")?.build()?;
//!
//! // Or describe one programmatically and save it
//! let config = HistoryConfig::new(2048).with_input_mode(InputMode::Stereo);
//! config.save("history.toml")?;
//! # Ok::<(), soundtap_config::ConfigError>(())
//! ```

mod error;
mod history_config;

pub use error::ConfigError;
pub use history_config::{DEFAULT_CAPACITY, HistoryConfig};
