use crate::ini::parsed::{ParsedFile, section_key, section_name};
use indexmap::IndexSet;

/// Outcome of copying sections into a target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
	/// Requested names that were replaced, in target order.
	pub copied: Vec<String>,

	/// Requested names that were not replaced, in request order.
	///
	/// A name lands here whether the target or the input lacks it.
	pub missing: Vec<String>,
}

impl MergeReport {
	/// True when every requested section was copied.
	pub fn is_complete(&self) -> bool {
		self.missing.is_empty()
	}
}

/// Replace target sections with the same-named sections from `input`.
///
/// Only sections already in `target` are considered, so output order is
/// always target order. A replacement swaps the whole line list.
pub fn copy_sections(
	target: &ParsedFile,
	sections: &[String],
	input: &ParsedFile,
) -> (ParsedFile, MergeReport) {
	let requested: IndexSet<&str> = sections.iter().map(String::as_str).collect();
	let mut output = target.clone();
	let mut found: IndexSet<&str> = IndexSet::new();

	for key in target.keys() {
		let name = section_name(key);
		if !requested.contains(name) {
			continue;
		}

		if let Some(lines) = input.get(&section_key(name)) {
			output.insert(key, lines.to_vec());
			found.insert(name);
			tracing::info!(section = name, lines = lines.len(), "copied section");
		}
	}

	let report = MergeReport {
		copied: found.iter().map(|name| name.to_string()).collect(),
		missing: requested
			.difference(&found)
			.map(|name| name.to_string())
			.collect(),
	};

	(output, report)
}
