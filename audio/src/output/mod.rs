//! Audio output collaborator.
//!
//! Playable buffers belong to an audio subsystem that lives outside this
//! crate, usually on a single UI-affine thread. The traits here describe the
//! three things the codec needs from it: allocate a buffer, fill a channel,
//! and start or stop playing it.
//!
//! None of the traits require `Send` or `Sync`. The codec only borrows the
//! output for the duration of a call and never creates or closes it.
//!
//! [`MemoryOutput`] keeps everything in memory and is used by tests and the
//! command-line tool.

mod memory;

pub use memory::{MemoryBuffer, MemoryOutput, MemoryPlayback};

use crate::OutputError;

/// An audio subsystem able to allocate and play buffers.
pub trait AudioOutput {
    /// Buffer type allocated by this output.
    type Buffer: PlayableBuffer;
    /// Handle to a started playback.
    type Playback: Playback;

    /// Allocates a zero-filled buffer of `frames` frames.
    fn create_buffer(
        &self,
        frames: usize,
        sample_rate: u32,
        channels: u16,
    ) -> Result<Self::Buffer, OutputError>;

    /// Starts playing `buffer` from the beginning.
    fn play(&self, buffer: &Self::Buffer) -> Result<Self::Playback, OutputError>;
}

/// A buffer of float samples owned by an audio subsystem.
pub trait PlayableBuffer {
    /// Returns the number of frames.
    fn frames(&self) -> usize;

    /// Returns the sample rate in Hz.
    fn sample_rate(&self) -> u32;

    /// Returns the number of channels.
    fn channels(&self) -> u16;

    /// Copies `samples` into the start of `channel`.
    fn copy_to_channel(&mut self, channel: u16, samples: &[f32]) -> Result<(), OutputError>;
}

/// A running playback.
///
/// Stopping releases the playback; a stopped or completed playback never
/// restarts.
pub trait Playback {
    /// Stops playback. Calling it again has no effect.
    fn stop(&mut self);

    /// Returns true once playback has completed or was stopped.
    fn is_finished(&self) -> bool;
}
