//! Normalized sample buffers.

use std::time::Duration;

use tracing::debug;

use super::Format;
use crate::output::{AudioOutput, PlayableBuffer};
use crate::{FormatError, InterpretError, OutputError};

/// Converts a signed 16-bit sample to a float in [-1.0, 1.0).
#[inline]
pub fn normalize(sample: i16) -> f32 {
    sample as f32 / 32768.0
}

/// Normalized audio samples tagged with their format.
///
/// Produced once per decode pass and never modified afterwards; the playable
/// buffer and the WAV container of an artifact are both derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    format: Format,
}

impl SampleBuffer {
    /// Interprets little-endian signed 16-bit PCM bytes.
    ///
    /// Every 2 bytes become one sample, normalized by 32768. A trailing odd
    /// byte is dropped.
    pub fn from_pcm16(bytes: &[u8], format: Format) -> Result<Self, FormatError> {
        format.validate()?;

        let chunks = bytes.chunks_exact(2);
        if !chunks.remainder().is_empty() {
            debug!(len = bytes.len(), "pcm: dropping trailing odd byte");
        }
        let samples = chunks
            .map(|b| normalize(i16::from_le_bytes([b[0], b[1]])))
            .collect();

        Ok(Self { samples, format })
    }

    /// Wraps already-normalized samples.
    ///
    /// Values are taken as-is; out-of-range values are clamped when encoded.
    pub fn from_samples(samples: Vec<f32>, format: Format) -> Result<Self, FormatError> {
        format.validate()?;
        Ok(Self { samples, format })
    }

    /// Returns the samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Consumes the buffer and returns the samples.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the format of the samples.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    /// Returns the channel count.
    pub fn channels(&self) -> u16 {
        self.format.channels
    }

    /// Returns the playing time.
    pub fn duration(&self) -> Duration {
        self.format.duration(self.samples.len())
    }

    /// Allocates a playable buffer on `output` and fills channel 0.
    ///
    /// Must be called where `output` lives.
    pub fn to_playable<O: AudioOutput>(&self, output: &O) -> Result<O::Buffer, OutputError> {
        let mut buffer =
            output.create_buffer(self.samples.len(), self.format.sample_rate, self.format.channels)?;
        buffer.copy_to_channel(0, &self.samples)?;
        Ok(buffer)
    }
}

/// Interprets PCM bytes and populates a playable buffer with the samples.
pub fn interpret<O: AudioOutput>(
    bytes: &[u8],
    format: Format,
    output: &O,
) -> Result<(SampleBuffer, O::Buffer), InterpretError> {
    let samples = SampleBuffer::from_pcm16(bytes, format)?;
    let buffer = samples.to_playable(output)?;
    Ok((samples, buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemoryOutput;

    #[test]
    fn test_normalize_bounds() {
        assert_eq!(normalize(i16::MIN), -1.0);
        assert_eq!(normalize(i16::MAX), 32767.0 / 32768.0);
        assert_eq!(normalize(0), 0.0);
        assert_eq!(normalize(16384), 0.5);
    }

    #[test]
    fn test_from_pcm16_boundaries() {
        let buf = SampleBuffer::from_pcm16(&[0x00, 0x80, 0xff, 0x7f], Format::MONO_24K).unwrap();
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.samples()[0], -1.0);
        assert!((buf.samples()[1] - 0.999969).abs() < 1e-6);
    }

    #[test]
    fn test_from_pcm16_length() {
        for n in 0..16usize {
            let bytes: Vec<u8> = (0..n as u8).collect();
            let buf = SampleBuffer::from_pcm16(&bytes, Format::MONO_24K).unwrap();
            assert_eq!(buf.len(), n / 2, "input of {n} bytes");
        }
    }

    #[test]
    fn test_from_pcm16_odd_drops_last_byte() {
        let even = SampleBuffer::from_pcm16(&[0x00, 0x40, 0x00, 0xc0], Format::MONO_24K).unwrap();
        let odd =
            SampleBuffer::from_pcm16(&[0x00, 0x40, 0x00, 0xc0, 0x7f], Format::MONO_24K).unwrap();
        assert_eq!(even, odd);
        assert_eq!(odd.samples(), &[0.5, -0.5]);
    }

    #[test]
    fn test_from_pcm16_empty() {
        let buf = SampleBuffer::from_pcm16(&[], Format::MONO_24K).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.duration(), Duration::ZERO);

        let buf = SampleBuffer::from_pcm16(&[0x01], Format::MONO_24K).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_from_pcm16_invalid_format() {
        let err = SampleBuffer::from_pcm16(&[0, 0], Format::new(0, 1)).unwrap_err();
        assert_eq!(err, FormatError::InvalidSampleRate(0));

        let err = SampleBuffer::from_pcm16(&[0, 0], Format::new(24000, 0)).unwrap_err();
        assert_eq!(err, FormatError::InvalidChannels(0));
    }

    #[test]
    fn test_from_pcm16_is_reproducible() {
        let bytes: Vec<u8> = (0..200u32).map(|i| (i * 37 % 256) as u8).collect();
        let a = SampleBuffer::from_pcm16(&bytes, Format::MONO_24K).unwrap();
        let b = SampleBuffer::from_pcm16(&bytes, Format::MONO_24K).unwrap();
        let bits_a: Vec<u32> = a.samples().iter().map(|s| s.to_bits()).collect();
        let bits_b: Vec<u32> = b.samples().iter().map(|s| s.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_sample_buffer_accessors() {
        let buf = SampleBuffer::from_samples(vec![0.0; 2400], Format::MONO_24K).unwrap();
        assert_eq!(buf.sample_rate(), 24000);
        assert_eq!(buf.channels(), 1);
        assert_eq!(buf.format(), Format::MONO_24K);
        assert_eq!(buf.duration(), Duration::from_millis(100));
        assert_eq!(buf.into_samples().len(), 2400);
    }

    #[test]
    fn test_interpret_populates_channel_zero() {
        let output = MemoryOutput::new();
        let (samples, buffer) =
            interpret(&[0x00, 0x40, 0x00, 0xc0, 0xff, 0x7f], Format::MONO_24K, &output).unwrap();

        assert_eq!(buffer.frames(), 3);
        assert_eq!(buffer.sample_rate(), 24000);
        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.channel(0), samples.samples());
        assert_eq!(output.buffers_created(), 1);
    }

    #[test]
    fn test_interpret_multi_channel_fills_only_first() {
        let output = MemoryOutput::new();
        let (samples, buffer) =
            interpret(&[0x00, 0x40, 0x00, 0xc0], Format::new(24000, 2), &output).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(buffer.channels(), 2);
        assert_eq!(buffer.channel(0), &[0.5, -0.5]);
        assert_eq!(buffer.channel(1), &[0.0, 0.0]);
    }

    #[test]
    fn test_interpret_invalid_format_allocates_nothing() {
        let output = MemoryOutput::new();
        let err = interpret(&[0, 0], Format::new(0, 1), &output).unwrap_err();
        assert_eq!(err, InterpretError::Format(FormatError::InvalidSampleRate(0)));
        assert_eq!(output.buffers_created(), 0);
    }

    #[test]
    fn test_interpret_output_error() {
        let output = MemoryOutput::new();
        output.close();
        let err = interpret(&[0, 0], Format::MONO_24K, &output).unwrap_err();
        assert_eq!(err, InterpretError::Output(OutputError::Closed));
    }
}
