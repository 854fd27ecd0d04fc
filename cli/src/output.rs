//! Output utilities for CLI tools.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// YAML format (default).
    #[default]
    Yaml,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Picks JSON when `json` is set, YAML otherwise.
    pub fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Yaml }
    }
}

/// Output configuration for command results.
pub struct Output {
    pub format: OutputFormat,
}

impl Output {
    /// Creates a new output configuration.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Renders a result as text.
    pub fn render<T: Serialize>(&self, value: &T) -> anyhow::Result<String> {
        Ok(match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
        })
    }

    /// Prints a result to stdout.
    pub fn write<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", self.render(value)?.trim_end());
        Ok(())
    }

    /// Writes binary data to a file, creating parent directories.
    pub fn write_binary(&self, data: &[u8], path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;
        file.write_all(data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Summary {
        samples: usize,
        sample_rate: u32,
    }

    #[test]
    fn test_render_yaml() {
        let out = Output::new(OutputFormat::Yaml);
        let text = out.render(&Summary { samples: 4, sample_rate: 24000 }).unwrap();
        assert_eq!(text, "samples: 4\nsample_rate: 24000\n");
    }

    #[test]
    fn test_render_json() {
        let out = Output::new(OutputFormat::from_flag(true));
        let text = out.render(&Summary { samples: 4, sample_rate: 24000 }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["samples"], 4);
        assert_eq!(value["sample_rate"], 24000);
    }

    #[test]
    fn test_write_binary_creates_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out").join("speech.wav");
        Output::new(OutputFormat::Yaml).write_binary(b"RIFF", &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"RIFF");
    }
}
