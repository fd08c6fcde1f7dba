//! JSON configuration for the command-line tools.

pub mod demo;

pub use demo::{load_config, DemoConfig, DemoOutputConfig, GridConfig};
