//! Inicopy - copy named sections from one INI-like file into another.
//!
//! This library provides the core functionality for inicopy, including:
//! - TOML configuration loading and validation
//! - Order-preserving parsing of INI-like files with raw line retention
//! - Section replacement and write-back in the target's original layout
//!
//! # Example
//!
//! ```no_run
//! use inicopy::config::load_config_file;
//! use std::path::Path;
//!
//! let config = load_config_file(Path::new("conf.toml")).unwrap();
//! let report = inicopy::copy::run(&config).unwrap();
//!
//! if !report.is_complete() {
//!     println!("not found: {:?}", report.missing);
//! }
//! ```

pub mod config;
pub mod copy;
pub mod error;
pub mod ini;

pub use error::{IniCopyError, Result};
