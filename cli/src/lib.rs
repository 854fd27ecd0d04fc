//! CLI utilities for voxwav.
//!
//! This crate provides configuration, payload loading and result output for
//! the `voxwav` command.

pub mod config;
pub mod output;
pub mod payload;

pub use config::{Config, load_config, payload_format};
pub use output::{Output, OutputFormat};
pub use payload::{PayloadError, load_payload, parse_payload};
