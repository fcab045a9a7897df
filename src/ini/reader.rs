use crate::error::{IniCopyError, Result};
use crate::ini::codec::decode;
use crate::ini::parsed::ParsedFile;
use encoding_rs::Encoding;
use std::path::Path;

/// Read and parse an INI-like file.
pub fn read_ini_file(path: &Path, encoding: &'static Encoding) -> Result<ParsedFile> {
	let bytes = std::fs::read(path).map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound {
			IniCopyError::FileNotFound {
				path: path.to_path_buf(),
			}
		} else {
			IniCopyError::FileReadError {
				path: path.to_path_buf(),
				source,
			}
		}
	})?;

	let text = decode(&bytes, encoding, path)?;
	let parsed = ParsedFile::parse(&text);
	tracing::debug!(
		path = %path.display(),
		encoding = encoding.name(),
		sections = parsed.len(),
		"parsed INI file"
	);

	Ok(parsed)
}

#[cfg(test)]
mod tests {
	use super::*;
	use encoding_rs::WINDOWS_1252;

	#[test]
	fn test_read_missing_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("nope.ini");

		match read_ini_file(&path, WINDOWS_1252).unwrap_err() {
			IniCopyError::FileNotFound { path: reported } => assert_eq!(reported, path),
			other => panic!("Expected FileNotFound error, got {other:?}"),
		}
	}

	#[test]
	fn test_read_windows_1252_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("game.ini");
		std::fs::write(&path, b"[Names]\r\nhero=Andr\xe9\r\n").unwrap();

		let parsed = read_ini_file(&path, WINDOWS_1252).unwrap();
		assert_eq!(parsed.get("[Names]").unwrap(), ["hero=André"]);
	}
}
