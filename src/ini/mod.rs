//! Reading, merging and writing INI-like files.
//!
//! This module handles:
//! - Parsing text into an order-preserving [`ParsedFile`]
//! - Decoding and encoding with a configurable single-byte encoding
//! - Replacing selected sections of one file with those of another

pub mod codec;
pub mod merge;
pub mod parsed;
pub mod reader;
pub mod writer;

pub use merge::{MergeReport, copy_sections};
pub use parsed::{ParsedFile, section_key, section_name};
pub use reader::read_ini_file;
pub use writer::write_ini_file;
