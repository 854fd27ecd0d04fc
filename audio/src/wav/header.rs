//! The canonical 44-byte WAV header.

use std::time::Duration;

use crate::WavError;

/// Length of the canonical PCM WAV header in bytes.
pub const HEADER_LEN: usize = 44;

const RIFF_HEADER_SIZE: u32 = 36;
const MAX_DATA_SIZE: u32 = (u32::MAX - RIFF_HEADER_SIZE) & !1;
const FMT_CHUNK_SIZE: u32 = 16;
const AUDIO_FORMAT_PCM: u16 = 1;

/// Fields of a canonical PCM WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WavHeader {
    /// RIFF chunk size, `36 + data_size`.
    pub chunk_size: u32,
    /// Audio format tag, 1 for linear PCM.
    pub audio_format: u16,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Size of the sample data in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Builds the header for `samples` 16-bit mono samples.
    ///
    /// Sizes saturate at `u32::MAX`; payloads that large cannot be
    /// represented in a RIFF container. The saturated data size stays a
    /// whole number of samples.
    pub fn pcm16_mono(sample_rate: u32, samples: usize) -> Self {
        let data_size = u32::try_from(samples)
            .unwrap_or(u32::MAX)
            .saturating_mul(2)
            .min(MAX_DATA_SIZE);
        Self {
            chunk_size: RIFF_HEADER_SIZE + data_size,
            audio_format: AUDIO_FORMAT_PCM,
            channels: 1,
            sample_rate,
            byte_rate: sample_rate.saturating_mul(2),
            block_align: 2,
            bits_per_sample: 16,
            data_size,
        }
    }

    /// Serializes the header.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..4].copy_from_slice(b"RIFF");
        buf[4..8].copy_from_slice(&self.chunk_size.to_le_bytes());
        buf[8..12].copy_from_slice(b"WAVE");
        buf[12..16].copy_from_slice(b"fmt ");
        buf[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        buf[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
        buf[22..24].copy_from_slice(&self.channels.to_le_bytes());
        buf[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        buf[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        buf[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        buf[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        buf[36..40].copy_from_slice(b"data");
        buf[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        buf
    }

    /// Parses a canonical header from the start of `data`.
    ///
    /// Only the layout written by [`WavHeader::to_bytes`] is accepted: a
    /// 16-byte `fmt ` chunk immediately followed by the `data` chunk.
    pub fn parse(data: &[u8]) -> Result<Self, WavError> {
        if data.len() < HEADER_LEN {
            return Err(WavError::TooShort {
                expected: HEADER_LEN,
                actual: data.len(),
            });
        }

        expect_tag(data, 0, "RIFF")?;
        expect_tag(data, 8, "WAVE")?;
        expect_tag(data, 12, "fmt ")?;
        if read_u32(data, 16) != FMT_CHUNK_SIZE {
            return Err(WavError::BadTag {
                offset: 16,
                expected: "16-byte fmt chunk",
            });
        }
        expect_tag(data, 36, "data")?;

        let header = Self {
            chunk_size: read_u32(data, 4),
            audio_format: read_u16(data, 20),
            channels: read_u16(data, 22),
            sample_rate: read_u32(data, 24),
            byte_rate: read_u32(data, 28),
            block_align: read_u16(data, 32),
            bits_per_sample: read_u16(data, 34),
            data_size: read_u32(data, 40),
        };

        if header.audio_format != AUDIO_FORMAT_PCM {
            return Err(WavError::UnsupportedFormat(header.audio_format));
        }
        if header.bits_per_sample != 16 {
            return Err(WavError::UnsupportedDepth(header.bits_per_sample));
        }
        if header.chunk_size != RIFF_HEADER_SIZE.wrapping_add(header.data_size) {
            return Err(WavError::InconsistentSize {
                chunk_size: header.chunk_size,
                data_size: header.data_size,
            });
        }
        Ok(header)
    }

    /// Returns the number of 16-bit samples in the data chunk.
    pub fn samples(&self) -> usize {
        self.data_size as usize / 2
    }

    /// Returns the playing time of the data chunk.
    pub fn duration(&self) -> Duration {
        if self.byte_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos((self.data_size as u64 * 1_000_000_000) / self.byte_rate as u64)
    }
}

fn expect_tag(data: &[u8], offset: usize, tag: &'static str) -> Result<(), WavError> {
    if &data[offset..offset + 4] != tag.as_bytes() {
        return Err(WavError::BadTag {
            offset,
            expected: tag,
        });
    }
    Ok(())
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
