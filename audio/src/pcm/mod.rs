//! PCM (Pulse Code Modulation) audio handling.
//!
//! Payloads from the speech service are headerless little-endian signed
//! 16-bit PCM. This module interprets those bytes as normalized samples and
//! hands them to the audio output collaborator.
//!
//! # Key Types
//!
//! - [`Format`]: Sample rate and channel count of a PCM stream
//! - [`SampleBuffer`]: Normalized `f32` samples tagged with their format
//! - [`interpret`]: Bytes to samples plus a populated playable buffer
//!
//! # Example
//!
//! ```rust
//! use voxwav_audio::output::MemoryOutput;
//! use voxwav_audio::output::PlayableBuffer;
//! use voxwav_audio::pcm::{interpret, Format};
//!
//! let output = MemoryOutput::new();
//! let (samples, buffer) = interpret(&[0x00, 0x40, 0x00, 0xc0], Format::MONO_24K, &output).unwrap();
//! assert_eq!(samples.samples(), &[0.5, -0.5]);
//! assert_eq!(buffer.frames(), 2);
//! ```

mod format;
mod samples;

pub use format::Format;
pub use samples::{SampleBuffer, interpret, normalize};
