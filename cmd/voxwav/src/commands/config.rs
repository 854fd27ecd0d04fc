//! Configuration management commands.

use clap::{Args, Subcommand};

use voxwav_cli::config::KEYS;

use super::{get_config, output_result, print_success};
use crate::Cli;

/// Manage CLI configuration.
///
/// Configuration is stored in ~/.voxwav/config.yaml
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// View the current configuration
    View,
    /// Print the config file path
    Path,
    /// Print a single value
    Get {
        /// Key name (sample_rate, channels, output, json_field)
        key: String,
    },
    /// Set a single value
    Set {
        /// Key name (sample_rate, channels, output, json_field)
        key: String,
        /// New value
        value: String,
    },
}

impl ConfigCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            ConfigSubcommand::View => {
                let cfg = get_config(cli)?;
                output_result(cli, &cfg)
            }

            ConfigSubcommand::Path => {
                let cfg = get_config(cli)?;
                println!("{}", cfg.path().display());
                Ok(())
            }

            ConfigSubcommand::Get { key } => {
                let cfg = get_config(cli)?;
                println!("{}", cfg.get(key)?);
                Ok(())
            }

            ConfigSubcommand::Set { key, value } => {
                if !KEYS.contains(&key.as_str()) {
                    anyhow::bail!("unknown key '{}', expected one of: {}", key, KEYS.join(", "));
                }
                let mut cfg = get_config(cli)?;
                cfg.set(key, value)?;
                cfg.save()?;
                print_success(&format!("Set {} = {}", key, value));
                Ok(())
            }
        }
    }
}
