//! Configuration loading and parsing for inicopy.
//!
//! This module handles:
//! - TOML config file parsing
//! - Validation of paths and the encoding label

pub mod parser;
pub mod types;

pub use parser::{load_config_file, parse_config_str};
pub use types::{Config, DEFAULT_ENCODING, Files, SectionSelection};
