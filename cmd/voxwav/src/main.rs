//! voxwav CLI - turns speech service payloads into WAV files.

use clap::{Parser, Subcommand};

mod commands;

use commands::{ConfigCommand, DecodeCommand, InfoCommand, PayloadCommand};

/// voxwav CLI - turns speech service payloads into WAV files.
///
/// Speech services return raw 16-bit PCM as Base64 text. This tool decodes
/// such payloads, either bare or inside a JSON response, and saves them as
/// WAV files:
///   - decode: payload to WAV
///   - info: inspect a WAV file
///   - payload: WAV back to a Base64 payload
///
/// Configuration is stored in ~/.voxwav/config.yaml.
#[derive(Parser)]
#[command(name = "voxwav")]
#[command(about = "Speech payload to WAV converter")]
#[command(version)]
pub struct Cli {
    /// Config file (default is ~/.voxwav/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output file (default from config, usually speech.wav)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// Output as JSON (for piping)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage CLI configuration
    Config(ConfigCommand),
    /// Decode a Base64 PCM payload into a WAV file
    Decode(DecodeCommand),
    /// Show the header of a WAV file
    Info(InfoCommand),
    /// Encode the samples of a WAV file as a Base64 payload
    Payload(PayloadCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Config(cmd) => cmd.run(&cli).await,
        Commands::Decode(cmd) => cmd.run(&cli).await,
        Commands::Info(cmd) => cmd.run(&cli).await,
        Commands::Payload(cmd) => cmd.run(&cli).await,
    }
}
