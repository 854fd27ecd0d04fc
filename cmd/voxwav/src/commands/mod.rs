//! CLI commands module.

mod config;
mod decode;
mod info;
mod payload;
mod util;

pub use config::ConfigCommand;
pub use decode::DecodeCommand;
pub use info::InfoCommand;
pub use payload::PayloadCommand;

pub(crate) use util::*;
