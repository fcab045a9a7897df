use std::path::PathBuf;

/// Everything that can abort a copy run.
///
/// Sections that could not be found are not errors; see `MergeReport`.
/// The binary adds `anyhow` context on top of these.
#[derive(Debug, thiserror::Error)]
pub enum IniCopyError {
	#[error("Configuration file {path} not found.")]
	ConfigNotFound { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid configuration: {reason}")]
	InvalidConfig { reason: String },

	#[error("Unknown text encoding: {label}")]
	UnknownEncoding { label: String },

	#[error("Text encoding {label} cannot be written back as {encoding}")]
	UnsupportedEncoding { label: String, encoding: String },

	#[error("File not found: {path}")]
	FileNotFound { path: PathBuf },

	#[error("Failed to read file: {path}")]
	FileReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("File {path} is not valid {encoding} text")]
	DecodingError { path: PathBuf, encoding: String },

	#[error("Content for {path} cannot be represented in {encoding}")]
	EncodingError { path: PathBuf, encoding: String },

	#[error("Failed to write file: {path}")]
	FileWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using IniCopyError.
pub type Result<T> = std::result::Result<T, IniCopyError>;
