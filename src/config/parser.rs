use crate::config::types::Config;
use crate::error::{IniCopyError, Result};
use std::path::Path;

/// Load and validate the config file at `path`.
///
/// A missing file is reported as [`IniCopyError::ConfigNotFound`] so the CLI
/// can give it a dedicated message and exit code.
pub fn load_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound {
			IniCopyError::ConfigNotFound {
				path: path.to_path_buf(),
			}
		} else {
			IniCopyError::ConfigReadError {
				path: path.to_path_buf(),
				source,
			}
		}
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config =
		toml::from_str(content).map_err(|source| IniCopyError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	config.validate()?;

	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_full_config() {
		let content = r#"
[files]
input = "source.ini"
target = "game.ini"

[sec]
sections = ["Colors", "Sizes"]
"#;
		let path = PathBuf::from("conf.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.files.input, PathBuf::from("source.ini"));
		assert_eq!(config.files.target, PathBuf::from("game.ini"));
		assert_eq!(config.sections(), ["Colors", "Sizes"]);
		assert_eq!(config.files.encoding, "windows-1252");
		assert_eq!(config.files.encoding().unwrap(), encoding_rs::WINDOWS_1252);
	}

	#[test]
	fn test_parse_custom_encoding() {
		let content = r#"
[files]
input = "a.ini"
target = "b.ini"
encoding = "utf-8"

[sec]
sections = []
"#;
		let config = parse_config_str(content, Path::new("conf.toml")).unwrap();
		assert_eq!(config.files.encoding().unwrap(), encoding_rs::UTF_8);
		assert!(config.sections().is_empty());
	}

	#[test]
	fn test_unknown_encoding_rejected() {
		let content = r#"
[files]
input = "a.ini"
target = "b.ini"
encoding = "klingon"

[sec]
sections = ["A"]
"#;
		match parse_config_str(content, Path::new("conf.toml")).unwrap_err() {
			IniCopyError::UnknownEncoding { label } => assert_eq!(label, "klingon"),
			other => panic!("Expected UnknownEncoding error, got {other:?}"),
		}
	}

	#[test]
	fn test_utf16_encoding_rejected() {
		for label in ["utf-16le", "utf-16be", "utf-16", "iso-2022-kr"] {
			let content = format!(
				"[files]\ninput = \"a.ini\"\ntarget = \"b.ini\"\nencoding = \"{label}\"\n\n[sec]\nsections = [\"A\"]\n"
			);
			match parse_config_str(&content, Path::new("conf.toml")).unwrap_err() {
				IniCopyError::UnsupportedEncoding { label: reported, .. } => {
					assert_eq!(reported, label)
				}
				other => panic!("Expected UnsupportedEncoding error for {label}, got {other:?}"),
			}
		}
	}

	#[test]
	fn test_missing_sections_key() {
		let content = r#"
[files]
input = "a.ini"
target = "b.ini"
"#;
		let result = parse_config_str(content, Path::new("conf.toml"));
		assert!(matches!(
			result,
			Err(IniCopyError::ConfigParseError { .. })
		));
	}

	#[test]
	fn test_missing_target_key() {
		let content = r#"
[files]
input = "a.ini"

[sec]
sections = ["A"]
"#;
		let result = parse_config_str(content, Path::new("conf.toml"));
		assert!(matches!(
			result,
			Err(IniCopyError::ConfigParseError { .. })
		));
	}

	#[test]
	fn test_malformed_toml() {
		let result = parse_config_str("[files\ninput = ", Path::new("conf.toml"));
		assert!(matches!(
			result,
			Err(IniCopyError::ConfigParseError { .. })
		));
	}

	#[test]
	fn test_empty_input_path_rejected() {
		let content = r#"
[files]
input = ""
target = "b.ini"

[sec]
sections = ["A"]
"#;
		match parse_config_str(content, Path::new("conf.toml")).unwrap_err() {
			IniCopyError::InvalidConfig { reason } => assert!(reason.contains("files.input")),
			other => panic!("Expected InvalidConfig error, got {other:?}"),
		}
	}

	#[test]
	fn test_load_missing_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("conf.toml");

		match load_config_file(&path).unwrap_err() {
			IniCopyError::ConfigNotFound { path: reported } => assert_eq!(reported, path),
			other => panic!("Expected ConfigNotFound error, got {other:?}"),
		}
	}

	#[test]
	fn test_load_from_disk() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("conf.toml");
		std::fs::write(
			&path,
			"[files]\ninput = \"in.ini\"\ntarget = \"out.ini\"\n\n[sec]\nsections = [\"A\"]\n",
		)
		.unwrap();

		let config = load_config_file(&path).unwrap();
		assert_eq!(config.sections(), ["A"]);
	}
}
