//! The current artifact and its playback.
//!
//! A session holds at most one artifact and at most one running playback.
//! Loading new audio decodes it completely first; only when that succeeds is
//! the running playback stopped and the artifact replaced. A failed load
//! leaves the session exactly as it was.

use tracing::debug;

use crate::artifact::{AudioArtifact, PreparedAudio, decode_payload};
use crate::output::{AudioOutput, Playback};
use crate::pcm::Format;
use crate::wav::WavContainer;
use crate::{OutputError, PipelineError, SessionError};

/// Current audio for one consumer, such as a page or a CLI invocation.
///
/// The audio output is passed into each call rather than stored, since the
/// session must not own it.
pub struct Session<O: AudioOutput> {
    current: Option<AudioArtifact<O::Buffer>>,
    playback: Option<O::Playback>,
    generation: u64,
}

impl<O: AudioOutput> Session<O> {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self {
            current: None,
            playback: None,
            generation: 0,
        }
    }

    /// Decodes `payload` and makes it the current artifact.
    pub fn load(
        &mut self,
        payload: &str,
        format: Format,
        output: &O,
    ) -> Result<&AudioArtifact<O::Buffer>, PipelineError> {
        let artifact = decode_payload(payload, format, output)?;
        Ok(self.replace(artifact))
    }

    /// Binds audio prepared elsewhere and makes it the current artifact.
    pub fn load_prepared(
        &mut self,
        prepared: PreparedAudio,
        output: &O,
    ) -> Result<&AudioArtifact<O::Buffer>, OutputError> {
        let artifact = prepared.into_artifact(output)?;
        Ok(self.replace(artifact))
    }

    /// Stops any playback and makes `artifact` current.
    pub fn replace(&mut self, artifact: AudioArtifact<O::Buffer>) -> &AudioArtifact<O::Buffer> {
        self.stop();
        self.generation += 1;
        debug!(
            generation = self.generation,
            samples = artifact.len(),
            "session: artifact replaced"
        );
        self.current.insert(artifact)
    }

    /// Plays the current artifact from the start, stopping any playback first.
    pub fn play(&mut self, output: &O) -> Result<(), SessionError> {
        self.stop();
        let artifact = self.current.as_ref().ok_or(SessionError::Empty)?;
        self.playback = Some(output.play(artifact.playable())?);
        Ok(())
    }

    /// Stops the running playback, if any.
    pub fn stop(&mut self) {
        if let Some(mut playback) = self.playback.take() {
            playback.stop();
            debug!(generation = self.generation, "session: playback stopped");
        }
    }

    /// Returns true while playback is running.
    pub fn is_playing(&self) -> bool {
        self.playback.as_ref().is_some_and(|p| !p.is_finished())
    }

    /// Returns the current artifact.
    pub fn current(&self) -> Option<&AudioArtifact<O::Buffer>> {
        self.current.as_ref()
    }

    /// Returns the WAV container of the current artifact, for saving.
    pub fn wav(&self) -> Option<&WavContainer> {
        self.current.as_ref().map(|a| a.wav())
    }

    /// Returns how many artifacts have been loaded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stops playback and removes the current artifact.
    pub fn clear(&mut self) -> Option<AudioArtifact<O::Buffer>> {
        self.stop();
        self.current.take()
    }
}

impl<O: AudioOutput> Default for Session<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: AudioOutput> Drop for Session<O> {
    fn drop(&mut self) {
        self.stop();
    }
}
