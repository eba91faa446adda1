//! Keyboard focus within the dropdown.

/// Index of the highlighted dropdown row.
///
/// Whenever results exist the index lies in `0..len`; with no results it is
/// always `0`. Movement wraps around at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusTracker {
	index: usize,
}

impl FocusTracker {
	#[must_use]
	pub fn index(&self) -> usize {
		self.index
	}

	/// Return the focused index if it addresses one of `len` results.
	#[must_use]
	pub fn focused(&self, len: usize) -> Option<usize> {
		(self.index < len).then_some(self.index)
	}

	/// Advance to the next result, wrapping from the last to the first.
	pub fn next(&mut self, len: usize) {
		self.index = match len {
			0 => 0,
			_ => (self.index + 1) % len,
		};
	}

	/// Retreat to the previous result, wrapping from the first to the last.
	pub fn prev(&mut self, len: usize) {
		self.index = match len {
			0 => 0,
			_ if self.index == 0 || self.index >= len => len - 1,
			_ => self.index - 1,
		};
	}

	/// Focus `index` directly. Out-of-range requests are ignored.
	pub fn set(&mut self, index: usize, len: usize) -> bool {
		if index < len {
			self.index = index;
			true
		} else {
			false
		}
	}

	/// Pull the index back into range after the result count changed.
	pub fn clamp(&mut self, len: usize) {
		if self.index >= len {
			self.index = len.saturating_sub(1);
		}
	}

	pub fn reset(&mut self) {
		self.index = 0;
	}
}
