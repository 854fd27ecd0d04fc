//! PCM audio format definitions.

use std::time::Duration;

use crate::FormatError;

/// Describes a 16-bit signed integer PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    /// Sample rate in Hz (e.g., 24000, 48000).
    pub sample_rate: u32,
    /// Number of channels (1 for mono).
    pub channels: u16,
}

impl Format {
    /// Creates a new format with the given sample rate and channel count.
    pub const fn new(sample_rate: u32, channels: u16) -> Self {
        Self { sample_rate, channels }
    }

    /// Creates a new format with the given sample rate and mono audio.
    pub const fn mono(sample_rate: u32) -> Self {
        Self::new(sample_rate, 1)
    }

    /// Checks that the sample rate is positive and there is at least one channel.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.sample_rate == 0 {
            return Err(FormatError::InvalidSampleRate(self.sample_rate));
        }
        if self.channels == 0 {
            return Err(FormatError::InvalidChannels(self.channels));
        }
        Ok(())
    }

    /// Returns the bit depth. Always 16.
    pub const fn depth(&self) -> u16 {
        16
    }

    /// Returns the number of bytes per sample frame.
    pub fn frame_bytes(&self) -> usize {
        2 * self.channels as usize
    }

    /// Returns the number of bytes per second.
    pub fn bytes_rate(&self) -> u64 {
        self.sample_rate as u64 * self.frame_bytes() as u64
    }

    /// Returns the playing time of `samples` interleaved samples.
    pub fn duration(&self, samples: usize) -> Duration {
        let per_second = self.sample_rate as u64 * self.channels as u64;
        if per_second == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos((samples as u128 * 1_000_000_000 / per_second as u128) as u64)
    }
}

// Common format presets
impl Format {
    /// 16kHz mono
    pub const MONO_16K: Format = Format::mono(16000);
    /// 24kHz mono (speech service output)
    pub const MONO_24K: Format = Format::mono(24000);
    /// 48kHz mono
    pub const MONO_48K: Format = Format::mono(48000);
}

impl Default for Format {
    fn default() -> Self {
        Self::MONO_24K
    }
}
