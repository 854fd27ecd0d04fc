//! In-memory audio output.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{AudioOutput, PlayableBuffer, Playback};
use crate::OutputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayState {
    Playing,
    Stopped,
    Completed,
}

/// An audio output that keeps buffers in memory and plays nothing.
///
/// Playbacks stay active until stopped or until [`MemoryOutput::complete_all`]
/// simulates the end of the audio. The handle is deliberately `!Send`, like
/// the UI-bound audio contexts it stands in for.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    closed: Cell<bool>,
    buffers_created: Cell<usize>,
    playbacks: RefCell<Vec<Rc<Cell<PlayState>>>>,
}

impl MemoryOutput {
    /// Creates a new open output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the output. Later allocations and plays fail with [`OutputError::Closed`].
    pub fn close(&self) {
        self.closed.set(true);
        for state in self.playbacks.borrow_mut().drain(..) {
            if state.get() == PlayState::Playing {
                state.set(PlayState::Stopped);
            }
        }
    }

    /// Returns true if the output was closed.
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Returns the number of buffers allocated so far.
    pub fn buffers_created(&self) -> usize {
        self.buffers_created.get()
    }

    /// Returns the number of playbacks that are still playing.
    pub fn active_playbacks(&self) -> usize {
        self.playbacks
            .borrow()
            .iter()
            .filter(|s| s.get() == PlayState::Playing)
            .count()
    }

    /// Marks every active playback as completed.
    pub fn complete_all(&self) {
        for state in self.playbacks.borrow_mut().drain(..) {
            if state.get() == PlayState::Playing {
                state.set(PlayState::Completed);
            }
        }
    }

    fn check_open(&self) -> Result<(), OutputError> {
        if self.closed.get() {
            return Err(OutputError::Closed);
        }
        Ok(())
    }
}

impl AudioOutput for MemoryOutput {
    type Buffer = MemoryBuffer;
    type Playback = MemoryPlayback;

    fn create_buffer(
        &self,
        frames: usize,
        sample_rate: u32,
        channels: u16,
    ) -> Result<MemoryBuffer, OutputError> {
        self.check_open()?;
        if sample_rate == 0 {
            return Err(OutputError::Backend(format!(
                "unsupported sample rate {sample_rate}"
            )));
        }
        if channels == 0 {
            return Err(OutputError::Backend("buffer needs at least one channel".into()));
        }
        self.buffers_created.set(self.buffers_created.get() + 1);
        Ok(MemoryBuffer {
            data: vec![vec![0.0; frames]; channels as usize],
            frames,
            sample_rate,
        })
    }

    fn play(&self, _buffer: &MemoryBuffer) -> Result<MemoryPlayback, OutputError> {
        self.check_open()?;
        let state = Rc::new(Cell::new(PlayState::Playing));
        let mut playbacks = self.playbacks.borrow_mut();
        playbacks.retain(|s| s.get() == PlayState::Playing);
        playbacks.push(state.clone());
        Ok(MemoryPlayback { state })
    }
}

/// A buffer allocated by [`MemoryOutput`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryBuffer {
    data: Vec<Vec<f32>>,
    frames: usize,
    sample_rate: u32,
}

impl MemoryBuffer {
    /// Returns the samples of `channel`.
    ///
    /// # Panics
    ///
    /// Panics if `channel` is out of range.
    pub fn channel(&self, channel: u16) -> &[f32] {
        &self.data[channel as usize]
    }
}

impl PlayableBuffer for MemoryBuffer {
    fn frames(&self) -> usize {
        self.frames
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn channels(&self) -> u16 {
        self.data.len() as u16
    }

    fn copy_to_channel(&mut self, channel: u16, samples: &[f32]) -> Result<(), OutputError> {
        let channels = self.channels();
        let dst = self
            .data
            .get_mut(channel as usize)
            .ok_or(OutputError::ChannelOutOfRange { channel, channels })?;
        if samples.len() > dst.len() {
            return Err(OutputError::TooManySamples {
                len: samples.len(),
                frames: dst.len(),
            });
        }
        dst[..samples.len()].copy_from_slice(samples);
        Ok(())
    }
}

/// Playback handle returned by [`MemoryOutput::play`].
#[derive(Debug)]
pub struct MemoryPlayback {
    state: Rc<Cell<PlayState>>,
}

impl MemoryPlayback {
    /// Returns true if the playback ended on its own rather than being stopped.
    pub fn completed(&self) -> bool {
        self.state.get() == PlayState::Completed
    }
}

impl Playback for MemoryPlayback {
    fn stop(&mut self) {
        if self.state.get() == PlayState::Playing {
            self.state.set(PlayState::Stopped);
        }
    }

    fn is_finished(&self) -> bool {
        self.state.get() != PlayState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_buffer_zero_filled() {
        let output = MemoryOutput::new();
        let buf = output.create_buffer(4, 24000, 2).unwrap();
        assert_eq!(buf.frames(), 4);
        assert_eq!(buf.sample_rate(), 24000);
        assert_eq!(buf.channels(), 2);
        assert_eq!(buf.channel(0), &[0.0; 4]);
        assert_eq!(buf.channel(1), &[0.0; 4]);
        assert_eq!(output.buffers_created(), 1);
    }

    #[test]
    fn test_create_buffer_rejects_bad_params() {
        let output = MemoryOutput::new();
        assert!(matches!(
            output.create_buffer(4, 0, 1),
            Err(OutputError::Backend(_))
        ));
        assert!(matches!(
            output.create_buffer(4, 24000, 0),
            Err(OutputError::Backend(_))
        ));
        assert_eq!(output.buffers_created(), 0);
    }

    #[test]
    fn test_copy_to_channel() {
        let output = MemoryOutput::new();
        let mut buf = output.create_buffer(3, 24000, 1).unwrap();
        buf.copy_to_channel(0, &[0.25, -0.25]).unwrap();
        assert_eq!(buf.channel(0), &[0.25, -0.25, 0.0]);

        let err = buf.copy_to_channel(1, &[0.0]).unwrap_err();
        assert_eq!(err, OutputError::ChannelOutOfRange { channel: 1, channels: 1 });

        let err = buf.copy_to_channel(0, &[0.0; 4]).unwrap_err();
        assert_eq!(err, OutputError::TooManySamples { len: 4, frames: 3 });
    }

    #[test]
    fn test_play_and_stop() {
        let output = MemoryOutput::new();
        let buf = output.create_buffer(1, 24000, 1).unwrap();
        let mut playback = output.play(&buf).unwrap();
        assert!(!playback.is_finished());
        assert_eq!(output.active_playbacks(), 1);

        playback.stop();
        assert!(playback.is_finished());
        assert!(!playback.completed());
        assert_eq!(output.active_playbacks(), 0);

        playback.stop();
        assert!(playback.is_finished());
    }

    #[test]
    fn test_play_drops_finished_handles() {
        let output = MemoryOutput::new();
        let buf = output.create_buffer(1, 24000, 1).unwrap();
        for _ in 0..1000 {
            let mut playback = output.play(&buf).unwrap();
            playback.stop();
        }
        let _current = output.play(&buf).unwrap();
        assert_eq!(output.active_playbacks(), 1);
        assert_eq!(output.playbacks.borrow().len(), 1);
    }

    #[test]
    fn test_complete_all() {
        let output = MemoryOutput::new();
        let buf = output.create_buffer(1, 24000, 1).unwrap();
        let a = output.play(&buf).unwrap();
        let b = output.play(&buf).unwrap();
        assert_eq!(output.active_playbacks(), 2);

        output.complete_all();
        assert!(a.completed());
        assert!(b.is_finished());
        assert_eq!(output.active_playbacks(), 0);
    }

    #[test]
    fn test_closed_output() {
        let output = MemoryOutput::new();
        let buf = output.create_buffer(1, 24000, 1).unwrap();
        let playback = output.play(&buf).unwrap();

        output.close();
        assert!(output.is_closed());
        assert!(playback.is_finished());
        assert_eq!(output.create_buffer(1, 24000, 1).unwrap_err(), OutputError::Closed);
        assert_eq!(output.play(&buf).unwrap_err(), OutputError::Closed);
    }
}
