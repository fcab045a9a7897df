use indexmap::IndexMap;
use indexmap::map::Iter;
use std::fmt;

/// An INI-like file as an ordered mapping from section header to raw lines.
///
/// Keys are the literal header lines including brackets (`[Colors]`). Lines
/// are kept verbatim minus their terminator, blank and comment lines
/// included. Iteration follows the order sections first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
	sections: IndexMap<String, Vec<String>>,
}

/// Whether `line` is a section header: starts with `[` and ends with `]`.
pub fn is_section_header(line: &str) -> bool {
	line.starts_with('[') && line.ends_with(']')
}

/// Bracketed key for a bare section name.
pub fn section_key(name: &str) -> String {
	format!("[{name}]")
}

/// Bare name for a section key, with exactly one bracket stripped from each end.
pub fn section_name(key: &str) -> &str {
	let key = key.strip_prefix('[').unwrap_or(key);
	key.strip_suffix(']').unwrap_or(key)
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`.
///
/// A trailing terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
	let mut lines = Vec::new();
	let bytes = text.as_bytes();
	let mut start = 0;
	let mut i = 0;

	while i < bytes.len() {
		match bytes[i] {
			b'\n' => {
				lines.push(&text[start..i]);
				start = i + 1;
			}
			b'\r' => {
				lines.push(&text[start..i]);
				if bytes.get(i + 1) == Some(&b'\n') {
					i += 1;
				}
				start = i + 1;
			}
			_ => {}
		}
		i += 1;
	}

	if start < bytes.len() {
		lines.push(&text[start..]);
	}

	lines
}

impl ParsedFile {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build from decoded text.
	///
	/// Lines before the first header are dropped. A repeated header replaces
	/// the earlier section's lines but keeps its original position.
	pub fn parse(text: &str) -> Self {
		let mut parsed = Self::new();
		let mut current: Option<String> = None;

		for line in split_lines(text) {
			if is_section_header(line) {
				parsed.sections.insert(line.to_string(), Vec::new());
				current = Some(line.to_string());
				continue;
			}

			if let Some(ref key) = current
				&& let Some(lines) = parsed.sections.get_mut(key)
			{
				lines.push(line.to_string());
			}
		}

		parsed
	}

	/// Lines for a section key, if present.
	pub fn get(&self, key: &str) -> Option<&[String]> {
		self.sections.get(key).map(Vec::as_slice)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.sections.contains_key(key)
	}

	/// Set a section's lines. An existing key keeps its position.
	pub fn insert(&mut self, key: impl Into<String>, lines: Vec<String>) -> Option<Vec<String>> {
		self.sections.insert(key.into(), lines)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.sections.keys().map(String::as_str)
	}

	pub fn iter(&self) -> Iter<'_, String, Vec<String>> {
		self.sections.iter()
	}

	pub fn len(&self) -> usize {
		self.sections.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}
}

impl<'a> IntoIterator for &'a ParsedFile {
	type Item = (&'a String, &'a Vec<String>);
	type IntoIter = Iter<'a, String, Vec<String>>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Serializes back to file layout: each header, then each line, one `\n` apiece.
impl fmt::Display for ParsedFile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (key, lines) in &self.sections {
			writeln!(f, "{key}")?;
			for line in lines {
				writeln!(f, "{line}")?;
			}
		}
		Ok(())
	}
}
