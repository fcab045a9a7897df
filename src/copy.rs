//! The read, merge, write pipeline driven by a [`Config`].

use crate::config::Config;
use crate::error::Result;
use crate::ini::{MergeReport, copy_sections, read_ini_file, write_ini_file};

/// Copy the configured sections from the input file into the target file.
///
/// The target is overwritten even when some sections were not found; those
/// names come back in [`MergeReport::missing`].
pub fn run(config: &Config) -> Result<MergeReport> {
	let encoding = config.files.encoding()?;

	let input = read_ini_file(&config.files.input, encoding)?;
	let target = read_ini_file(&config.files.target, encoding)?;

	let (output, report) = copy_sections(&target, config.sections(), &input);
	write_ini_file(&config.files.target, &output, encoding)?;

	Ok(report)
}
