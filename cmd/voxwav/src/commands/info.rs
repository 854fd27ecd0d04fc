//! WAV inspection command.

use anyhow::Context as _;
use clap::Args;
use serde::Serialize;

use voxwav_audio::WavContainer;

use super::{get_config, output_result};
use crate::Cli;

/// Show the header of a WAV file.
///
/// Only canonical 16-bit PCM files, as written by `voxwav decode`, are
/// accepted.
#[derive(Args)]
pub struct InfoCommand {
    /// WAV file (default from config, usually speech.wav)
    input: Option<String>,
}

#[derive(Serialize)]
struct InfoResult {
    file: String,
    chunk_size: u32,
    audio_format: u16,
    channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
    data_size: u32,
    samples: usize,
    duration_ms: u128,
}

impl InfoCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let path = match &self.input {
            Some(p) => p.clone(),
            None => get_config(cli)?.output,
        };

        let data = std::fs::read(&path).with_context(|| format!("failed to read {}", path))?;
        let wav = WavContainer::from_bytes(data).with_context(|| format!("invalid WAV file {}", path))?;
        let h = wav.header();

        let result = InfoResult {
            file: path,
            chunk_size: h.chunk_size,
            audio_format: h.audio_format,
            channels: h.channels,
            sample_rate: h.sample_rate,
            byte_rate: h.byte_rate,
            block_align: h.block_align,
            bits_per_sample: h.bits_per_sample,
            data_size: h.data_size,
            samples: h.samples(),
            duration_ms: h.duration().as_millis(),
        };

        output_result(cli, &result)
    }
}
