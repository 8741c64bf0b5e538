use std::fmt;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Characters with structural meaning in the serialized form.
///
/// All of them must be backslash-escaped wherever they occur inside a
/// segment kind or value, so segment boundaries survive arbitrary content.
pub(crate) const STRUCTURAL: [char; 5] = ['[', ']', ':', '/', '\\'];

/// One `(kind, value)` element of a [`UniqueId`](crate::UniqueId) path.
///
/// The kind tags how the value is to be interpreted by a resolver
/// (for example `class`, `nested-class`, `method`). The kind must be
/// non-empty; the value may be any string, including the empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
	kind: Box<str>,
	value: Box<str>,
}

impl Segment {
	pub fn new(kind: impl Into<Box<str>>, value: impl Into<Box<str>>) -> Self {
		let kind = kind.into();
		debug_assert!(!kind.is_empty(), "segment kind must be non-empty");
		Self {
			kind,
			value: value.into(),
		}
	}

	pub fn kind(&self) -> &str {
		&self.kind
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	/// Returns true if this segment has the given kind.
	pub fn is_kind(&self, kind: &str) -> bool {
		&*self.kind == kind
	}
}

fn write_escaped(f: &mut fmt::Formatter<'_>, raw: &str) -> fmt::Result {
	for ch in raw.chars() {
		if STRUCTURAL.contains(&ch) {
			f.write_char('\\')?;
		}
		f.write_char(ch)?;
	}
	Ok(())
}

impl fmt::Display for Segment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_char('[')?;
		write_escaped(f, &self.kind)?;
		f.write_char(':')?;
		write_escaped(f, &self.value)?;
		f.write_char(']')
	}
}
