//! Input mode selection for multichannel capture.
//!
//! The input mode decides how an interleaved block collapses into the
//! history: averaged to mono, a single channel picked out, or split into
//! left/right streams.
//!
//! | Mode | Identifier | Primary ring | Secondary ring |
//! |------|------------|--------------|----------------|
//! | [`InputMode::Mono`] | `"mono"` | mean of all channels | unused |
//! | [`InputMode::Stereo`] | `"stereo"` | channel 0 | channel 1 |
//! | [`InputMode::Left`] | `"left"` | channel 0 | unused |
//! | [`InputMode::Right`] | `"right"` | channel 1 | unused |
//!
//! Identifiers are matched case-insensitively. Anything unrecognized
//! resolves to [`InputMode::Mono`].

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

/// How an interleaved sample block is reduced before buffering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// Average all channels of each frame into one sample.
    #[default]
    Mono,
    /// Keep channel 0 and channel 1 as separate streams.
    Stereo,
    /// Keep channel 0 of each frame.
    Left,
    /// Keep channel 1 of each frame.
    ///
    /// For more than two channels this is still index 1, not the last channel.
    Right,
}

impl InputMode {
    /// All modes, in identifier order.
    pub const ALL: [InputMode; 4] = [
        InputMode::Mono,
        InputMode::Stereo,
        InputMode::Left,
        InputMode::Right,
    ];

    /// Resolves an identifier, ignoring ASCII case.
    ///
    /// Unknown identifiers fall back to [`InputMode::Mono`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use soundtap_core::InputMode;
    ///
    /// assert_eq!(InputMode::from_name("STEREO"), InputMode::Stereo);
    /// assert_eq!(InputMode::from_name("surround"), InputMode::Mono);
    /// ```
    pub fn from_name(name: &str) -> Self {
        Self::try_from_name(name).unwrap_or_default()
    }

    /// Resolves an identifier, returning `None` when it is not recognized.
    ///
    /// Callers that want to report a fallback (config loaders, UIs) use this;
    /// everything else goes through [`InputMode::from_name`].
    pub fn try_from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }

    /// Canonical identifier: `"Mono"`, `"Stereo"`, `"Left"` or `"Right"`.
    pub const fn name(self) -> &'static str {
        match self {
            InputMode::Mono => "Mono",
            InputMode::Stereo => "Stereo",
            InputMode::Left => "Left",
            InputMode::Right => "Right",
        }
    }

    /// Returns true if blocks are split into primary and secondary streams.
    #[inline]
    pub const fn is_split(self) -> bool {
        matches!(self, InputMode::Stereo)
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}
