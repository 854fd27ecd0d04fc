//! WAV to payload command.

use anyhow::Context as _;
use clap::Args;

use voxwav_audio::WavContainer;
use voxwav_encoding::encode;

use super::print_success;
use crate::Cli;

/// Encode the samples of a WAV file as a Base64 payload.
///
/// Produces the headerless PCM text a speech service would return, which is
/// handy for building test fixtures for `voxwav decode`.
#[derive(Args)]
pub struct PayloadCommand {
    /// WAV file to read
    input: String,
}

impl PayloadCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let data = std::fs::read(&self.input)
            .with_context(|| format!("failed to read {}", self.input))?;
        let wav = WavContainer::from_bytes(data)
            .with_context(|| format!("invalid WAV file {}", self.input))?;
        let text = encode(wav.pcm());

        match cli.output.as_deref() {
            Some(path) => {
                std::fs::write(path, format!("{}\n", text))
                    .with_context(|| format!("failed to write {}", path))?;
                print_success(&format!("Payload saved to: {}", path));
            }
            None => println!("{}", text),
        }
        Ok(())
    }
}
