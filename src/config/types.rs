use crate::error::{IniCopyError, Result};
use encoding_rs::Encoding;
use serde::Deserialize;
use std::path::PathBuf;

/// Encoding used for both INI-like files when `files.encoding` is not set.
pub const DEFAULT_ENCODING: &str = "windows-1252";

/// Top-level configuration from a `conf.toml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	/// Where to read from and what to overwrite.
	pub files: Files,

	/// Which sections to copy.
	pub sec: SectionSelection,
}

/// The `[files]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct Files {
	/// Source INI-like file. Sections are copied out of this file.
	pub input: PathBuf,

	/// INI-like file to update. Overwritten in place on success.
	pub target: PathBuf,

	/// Encoding label for reading and writing both files.
	#[serde(default = "default_encoding")]
	pub encoding: String,
}

/// The `[sec]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionSelection {
	/// Bare section names (no brackets) to copy from input into target.
	pub sections: Vec<String>,
}

fn default_encoding() -> String {
	DEFAULT_ENCODING.to_string()
}

impl Files {
	/// Resolve the configured encoding label.
	///
	/// Only encodings that `encoding_rs` can also write are accepted, since the
	/// target is written back in the encoding it was read with.
	pub fn encoding(&self) -> Result<&'static Encoding> {
		let encoding = Encoding::for_label(self.encoding.trim().as_bytes()).ok_or_else(|| {
			IniCopyError::UnknownEncoding {
				label: self.encoding.clone(),
			}
		})?;

		if encoding.output_encoding() != encoding {
			return Err(IniCopyError::UnsupportedEncoding {
				label: self.encoding.clone(),
				encoding: encoding.name().to_string(),
			});
		}

		Ok(encoding)
	}
}

impl Config {
	/// Check values that deserialization alone cannot.
	pub fn validate(&self) -> Result<()> {
		for (key, path) in [
			("files.input", &self.files.input),
			("files.target", &self.files.target),
		] {
			if path.as_os_str().is_empty() {
				return Err(IniCopyError::InvalidConfig {
					reason: format!("{key} must not be empty"),
				});
			}
		}

		self.files.encoding()?;
		Ok(())
	}

	/// Requested section names, in order.
	pub fn sections(&self) -> &[String] {
		&self.sec.sections
	}
}
