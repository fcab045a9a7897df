use crate::error::{IniCopyError, Result};
use crate::ini::codec::encode;
use crate::ini::parsed::ParsedFile;
use encoding_rs::Encoding;
use std::path::Path;

/// Serialize `parsed` and overwrite `path` with it. No backup is made.
pub fn write_ini_file(path: &Path, parsed: &ParsedFile, encoding: &'static Encoding) -> Result<()> {
	let bytes = encode(&parsed.to_string(), encoding, path)?;

	std::fs::write(path, bytes).map_err(|source| IniCopyError::FileWriteError {
		path: path.to_path_buf(),
		source,
	})?;

	tracing::debug!(
		path = %path.display(),
		encoding = encoding.name(),
		sections = parsed.len(),
		"wrote INI file"
	);
	Ok(())
}
