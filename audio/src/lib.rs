//! Audio codec for generated speech.
//!
//! This crate turns raw PCM payloads into playable audio and WAV files:
//!
//! - `pcm`: Interpreting little-endian 16-bit PCM as normalized samples
//! - `output`: The audio output collaborator that owns playable buffers
//! - `wav`: Encoding samples into a RIFF/WAVE container, and reading it back
//! - `artifact`: The playable buffer and WAV container from one decode pass
//! - `session`: Replacing the current artifact and its playback
//!
//! # Example
//!
//! ```rust
//! use voxwav_audio::pcm::{Format, SampleBuffer};
//! use voxwav_audio::wav;
//!
//! // Two samples of -32768 and 32767 at 24kHz mono
//! let bytes = [0x00, 0x80, 0xff, 0x7f];
//! let samples = SampleBuffer::from_pcm16(&bytes, Format::MONO_24K).unwrap();
//! assert_eq!(samples.samples()[0], -1.0);
//!
//! // Encode as a WAV container
//! let container = wav::encode(&samples);
//! assert_eq!(container.len(), 48);
//! ```

pub mod artifact;
pub mod error;
pub mod output;
pub mod pcm;
pub mod session;
pub mod wav;

pub use artifact::{AudioArtifact, PreparedAudio, decode_payload};
pub use error::{FormatError, InterpretError, OutputError, PipelineError, SessionError, WavError};
pub use pcm::{Format, SampleBuffer};
pub use session::Session;
pub use wav::WavContainer;
