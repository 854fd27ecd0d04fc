//! Shared helpers for commands.

use voxwav_cli::{Config, Output, OutputFormat, load_config};

use crate::Cli;

/// Loads the configuration selected by `--config`.
pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    load_config(cli.config.as_deref())
}

/// Prints a command result as YAML, or JSON with `--json`.
pub fn output_result<T: serde::Serialize>(cli: &Cli, result: &T) -> anyhow::Result<()> {
    Output::new(OutputFormat::from_flag(cli.json)).write(result)
}

/// Writes a binary file.
pub fn output_bytes(data: &[u8], path: &str) -> anyhow::Result<()> {
    Output::new(OutputFormat::default()).write_binary(data, path)
}

/// Prints success message.
pub fn print_success(msg: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", msg);
}

/// Formats a byte count for display.
pub fn format_bytes(n: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let f = n as f64;
    if f >= MB {
        format!("{:.2} MB", f / MB)
    } else if f >= KB {
        format!("{:.2} KB", f / KB)
    } else {
        format!("{} B", n)
    }
}
