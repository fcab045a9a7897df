//! Byte <-> text conversion for INI-like files.

use crate::error::{IniCopyError, Result};
use encoding_rs::{Encoding, WINDOWS_1252};
use std::path::Path;

/// Bytes with no character assigned in the Windows code page 1252.
///
/// WHATWG decodes these to C1 controls; Windows itself leaves them undefined.
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Decode file bytes, failing on any sequence invalid for `encoding`.
///
/// A byte order mark is treated as content, not stripped.
pub fn decode(bytes: &[u8], encoding: &'static Encoding, path: &Path) -> Result<String> {
	let decoding_error = || IniCopyError::DecodingError {
		path: path.to_path_buf(),
		encoding: encoding.name().to_string(),
	};

	if encoding == WINDOWS_1252 && bytes.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b)) {
		return Err(decoding_error());
	}

	encoding
		.decode_without_bom_handling_and_without_replacement(bytes)
		.map(|text| text.into_owned())
		.ok_or_else(decoding_error)
}

/// Encode text, failing if any character has no mapping in `encoding`.
pub fn encode(text: &str, encoding: &'static Encoding, path: &Path) -> Result<Vec<u8>> {
	let (bytes, _, had_unmappable) = encoding.encode(text);
	if had_unmappable {
		return Err(IniCopyError::EncodingError {
			path: path.to_path_buf(),
			encoding: encoding.name().to_string(),
		});
	}
	Ok(bytes.into_owned())
}
