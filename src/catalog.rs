//! The static list of names the search box filters.

use std::sync::Arc;

/// Names offered when no custom candidate list is configured.
pub const DEFAULT_NAMES: [&str; 10] = [
	"Vlad Reid",
	"Jermaine Denton",
	"Rayan Hunt",
	"Veronica Sullivan",
	"Huda King",
	"Kitty Carty",
	"Abbigail Neal",
	"Humphrey Needham",
	"Brandon-Lee Thompson",
	"Libbie Bennett",
];

/// Ordered, read-only sequence of candidate names.
///
/// Cloning is cheap: the entries are shared between the UI thread and the
/// search worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
	names: Arc<[String]>,
}

impl Catalog {
	/// Build a catalog from the provided names, preserving their order.
	pub fn new<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			names: names.into_iter().map(Into::into).collect(),
		}
	}

	/// Return the indices of every entry containing `query`, in catalog order.
	///
	/// Matching is plain case-sensitive substring containment.
	#[must_use]
	pub fn filter(&self, query: &str) -> Vec<usize> {
		self.names
			.iter()
			.enumerate()
			.filter(|(_, name)| name.contains(query))
			.map(|(index, _)| index)
			.collect()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&str> {
		self.names.get(index).map(String::as_str)
	}

	#[must_use]
	pub fn names(&self) -> &[String] {
		&self.names
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.names.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

impl Default for Catalog {
	fn default() -> Self {
		Self::new(DEFAULT_NAMES)
	}
}
