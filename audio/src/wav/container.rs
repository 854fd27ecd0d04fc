//! WAV container built from a sample buffer.

use std::io::{self, Write};

use tracing::warn;

use super::{HEADER_LEN, WavHeader, quantize};
use crate::WavError;
use crate::pcm::SampleBuffer;

/// Suggested filename when saving a container.
pub const WAV_FILENAME: &str = "speech.wav";

/// A complete 16-bit PCM mono WAV file.
///
/// The header always agrees with the data that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WavContainer {
    header: WavHeader,
    data: Vec<u8>,
}

/// Encodes `samples` as a WAV container.
///
/// Never fails. A buffer tagged with more than one channel is written as a
/// single mono stream.
pub fn encode(samples: &SampleBuffer) -> WavContainer {
    WavContainer::from_samples(samples)
}

impl WavContainer {
    /// Encodes `samples` as a WAV container. See [`encode`].
    pub fn from_samples(samples: &SampleBuffer) -> Self {
        if samples.channels() != 1 {
            warn!(
                channels = samples.channels(),
                "wav: multi-channel buffer written as mono"
            );
        }

        let header = WavHeader::pcm16_mono(samples.sample_rate(), samples.len());
        let mut data = Vec::with_capacity(HEADER_LEN + header.data_size as usize);
        data.extend_from_slice(&header.to_bytes());
        for &sample in samples.samples().iter().take(header.samples()) {
            data.extend_from_slice(&quantize(sample).to_le_bytes());
        }
        Self { header, data }
    }

    /// Validates and wraps an existing WAV file.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, WavError> {
        let header = WavHeader::parse(&data)?;
        let declared = header.data_size as usize;
        let actual = data.len() - HEADER_LEN;
        if actual != declared {
            return Err(WavError::Truncated { declared, actual });
        }
        Ok(Self { header, data })
    }

    /// Returns the parsed header.
    pub fn header(&self) -> WavHeader {
        self.header
    }

    /// Returns the sample data after the header.
    pub fn pcm(&self) -> &[u8] {
        &self.data[HEADER_LEN..]
    }

    /// Returns the quantized samples.
    pub fn samples(&self) -> Vec<i16> {
        self.pcm()
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect()
    }

    /// Returns the whole file as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the container and returns the file bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns the file length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the container holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.len() == HEADER_LEN
    }

    /// Writes the file to `w`.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<u64> {
        w.write_all(&self.data)?;
        Ok(self.data.len() as u64)
    }
}

impl AsRef<[u8]> for WavContainer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
