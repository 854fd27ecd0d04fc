//! Payload decoding command.

use anyhow::Context as _;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use voxwav_audio::output::{MemoryOutput, PlayableBuffer};
use voxwav_audio::PreparedAudio;
use voxwav_cli::{load_payload, payload_format};

use super::{format_bytes, get_config, output_bytes, output_result, print_success};
use crate::Cli;

/// Decode a Base64 PCM payload into a WAV file.
///
/// The input is either bare Base64 text or a JSON response document; use
/// --field to point at the payload inside the document.
#[derive(Args)]
pub struct DecodeCommand {
    /// Payload file, or - for stdin
    input: String,

    /// Sample rate of the PCM payload in Hz
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Channel count of the PCM payload (only 1 is supported)
    #[arg(long)]
    channels: Option<u16>,

    /// Dotted path of the payload inside a JSON document
    #[arg(long)]
    field: Option<String>,
}

#[derive(Serialize)]
struct DecodeResult {
    output_file: String,
    sample_rate: u32,
    channels: u16,
    samples: usize,
    frames: usize,
    duration_ms: u128,
    wav_size: usize,
}

impl DecodeCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let cfg = get_config(cli)?;

        let format = payload_format(
            self.sample_rate.unwrap_or(cfg.sample_rate),
            self.channels.unwrap_or(cfg.channels),
        )?;
        let field = self.field.clone().unwrap_or_else(|| cfg.json_field.clone());
        let output_path = cli.output.clone().unwrap_or_else(|| cfg.output.clone());

        debug!(input = %self.input, ?format, %field, "decoding payload");

        let input = self.input.clone();
        let prepared = tokio::task::spawn_blocking(move || -> anyhow::Result<PreparedAudio> {
            let payload = load_payload(&input, &field)
                .with_context(|| format!("failed to load payload from {}", input))?;
            PreparedAudio::decode(&payload, format).context("failed to decode payload")
        })
        .await??;

        // The playable buffer is allocated here, on the task that owns the output.
        let output = MemoryOutput::new();
        let artifact = prepared.into_artifact(&output)?;

        output_bytes(artifact.wav().as_bytes(), &output_path)
            .with_context(|| format!("failed to write {}", output_path))?;
        print_success(&format!(
            "Audio saved to: {} ({})",
            output_path,
            format_bytes(artifact.wav().len())
        ));

        let result = DecodeResult {
            output_file: output_path,
            sample_rate: format.sample_rate,
            channels: format.channels,
            samples: artifact.len(),
            frames: artifact.playable().frames(),
            duration_ms: artifact.duration().as_millis(),
            wav_size: artifact.wav().len(),
        };

        output_result(cli, &result)
    }
}
