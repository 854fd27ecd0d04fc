//! Playable audio and its WAV file, produced together.
//!
//! A decode pass runs in two stages:
//!
//! 1. [`PreparedAudio::decode`] decodes the payload text, interprets the PCM
//!    and encodes the WAV container. It touches no audio output and its
//!    result is `Send`, so it can run on a worker thread.
//! 2. [`PreparedAudio::into_artifact`] allocates the playable buffer on the
//!    audio output and pairs it with the container.
//!
//! [`decode_payload`] runs both stages in one call.

use std::time::Duration;

use tracing::debug;
use voxwav_encoding as encoding;

use crate::output::{AudioOutput, PlayableBuffer};
use crate::pcm::{Format, SampleBuffer};
use crate::wav::WavContainer;
use crate::{OutputError, PipelineError};

/// Samples and WAV container from one decode pass, not yet bound to an output.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedAudio {
    samples: SampleBuffer,
    wav: WavContainer,
}

impl PreparedAudio {
    /// Decodes a Base64 PCM payload.
    pub fn decode(payload: &str, format: Format) -> Result<Self, PipelineError> {
        format.validate()?;
        let bytes = encoding::decode(payload)?;
        let samples = SampleBuffer::from_pcm16(&bytes, format)?;
        debug!(
            payload_len = payload.len(),
            bytes = bytes.len(),
            samples = samples.len(),
            "decoded audio payload"
        );
        Ok(Self::from_samples(samples))
    }

    /// Encodes the WAV container for `samples`.
    pub fn from_samples(samples: SampleBuffer) -> Self {
        let wav = WavContainer::from_samples(&samples);
        Self { samples, wav }
    }

    /// Returns the samples.
    pub fn samples(&self) -> &SampleBuffer {
        &self.samples
    }

    /// Returns the WAV container.
    pub fn wav(&self) -> &WavContainer {
        &self.wav
    }

    /// Allocates the playable buffer on `output` and builds the artifact.
    ///
    /// Must be called where `output` lives. On error nothing is returned and
    /// the prepared audio is dropped.
    pub fn into_artifact<O: AudioOutput>(
        self,
        output: &O,
    ) -> Result<AudioArtifact<O::Buffer>, OutputError> {
        let playable = self.samples.to_playable(output)?;
        Ok(AudioArtifact {
            playable,
            wav: self.wav,
            format: self.samples.format(),
            samples: self.samples.len(),
        })
    }
}

/// A playable buffer and a WAV container holding the same audio.
///
/// Only [`PreparedAudio::into_artifact`] creates artifacts, so both halves
/// always come from the same sample buffer. There are no mutable accessors.
#[derive(Debug)]
pub struct AudioArtifact<B> {
    playable: B,
    wav: WavContainer,
    format: Format,
    samples: usize,
}

impl<B: PlayableBuffer> AudioArtifact<B> {
    /// Builds an artifact from `samples`, allocating on `output`.
    pub fn from_samples<O>(samples: SampleBuffer, output: &O) -> Result<Self, OutputError>
    where
        O: AudioOutput<Buffer = B>,
    {
        PreparedAudio::from_samples(samples).into_artifact(output)
    }

    /// Returns the playable buffer.
    pub fn playable(&self) -> &B {
        &self.playable
    }

    /// Returns the WAV container.
    pub fn wav(&self) -> &WavContainer {
        &self.wav
    }

    /// Returns the format the samples were interpreted with.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples
    }

    /// Returns true if the artifact holds no audio.
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Returns the playing time.
    pub fn duration(&self) -> Duration {
        self.format.duration(self.samples)
    }

    /// Consumes the artifact and returns the playable buffer and the container.
    pub fn into_parts(self) -> (B, WavContainer) {
        (self.playable, self.wav)
    }
}

/// Decodes a Base64 PCM payload into an artifact allocated on `output`.
pub fn decode_payload<O: AudioOutput>(
    payload: &str,
    format: Format,
    output: &O,
) -> Result<AudioArtifact<O::Buffer>, PipelineError> {
    let prepared = PreparedAudio::decode(payload, format)?;
    Ok(prepared.into_artifact(output)?)
}
