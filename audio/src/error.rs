//! Error types for audio operations.

use thiserror::Error;
use voxwav_encoding::DecodeError;

/// Invalid format parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(u32),
    #[error("invalid channel count: {0}")]
    InvalidChannels(u16),
}

/// Error reported by the audio output collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutputError {
    #[error("channel {channel} out of range for {channels}-channel buffer")]
    ChannelOutOfRange { channel: u16, channels: u16 },
    #[error("{len} samples do not fit in {frames} frames")]
    TooManySamples { len: usize, frames: usize },
    #[error("audio output closed")]
    Closed,
    #[error("audio output: {0}")]
    Backend(String),
}

/// Error while interpreting PCM bytes into a playable buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Error while reading a WAV container back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WavError {
    #[error("wav: need at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("wav: expected {expected:?} tag at offset {offset}")]
    BadTag { offset: usize, expected: &'static str },
    #[error("wav: unsupported audio format {0}, only linear PCM is supported")]
    UnsupportedFormat(u16),
    #[error("wav: unsupported bit depth {0}")]
    UnsupportedDepth(u16),
    #[error("wav: chunk size {chunk_size} does not match data size {data_size}")]
    InconsistentSize { chunk_size: u32, data_size: u32 },
    #[error("wav: header declares {declared} data bytes, container holds {actual}")]
    Truncated { declared: usize, actual: usize },
}

/// Error from a full decode pass, from payload text to artifact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("decode payload: {0}")]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl From<InterpretError> for PipelineError {
    fn from(err: InterpretError) -> Self {
        match err {
            InterpretError::Format(e) => PipelineError::Format(e),
            InterpretError::Output(e) => PipelineError::Output(e),
        }
    }
}

/// Error from session playback control.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no audio loaded")]
    Empty,
    #[error(transparent)]
    Output(#[from] OutputError),
}
