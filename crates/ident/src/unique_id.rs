use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::parse::{MalformedIdError, parse_segments};
use crate::segment::Segment;

/// Segment kind reserved for the root segment naming the owning engine.
pub const ENGINE_SEGMENT_KIND: &str = "engine";

/// Immutable path of segments uniquely addressing one container or case.
///
/// Always at least one segment long; the first segment names the owning
/// engine. Two identifiers are equal iff their segment sequences are equal
/// element-wise. The serialized form (`Display`) and [`UniqueId::parse`] are
/// mutual inverses.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UniqueId {
	segments: SmallVec<[Segment; 4]>,
}

impl UniqueId {
	/// Creates an identifier with a single root segment.
	pub fn root(kind: impl Into<Box<str>>, value: impl Into<Box<str>>) -> Self {
		let mut segments = SmallVec::new();
		segments.push(Segment::new(kind, value));
		Self { segments }
	}

	/// Creates the root identifier for an engine with the given name.
	pub fn for_engine(name: &str) -> Self {
		Self::root(ENGINE_SEGMENT_KIND, name)
	}

	/// Returns a new identifier with one more segment.
	///
	/// The receiver is left untouched; identifiers are persistent.
	#[must_use]
	pub fn append(&self, kind: impl Into<Box<str>>, value: impl Into<Box<str>>) -> Self {
		let mut segments = self.segments.clone();
		segments.push(Segment::new(kind, value));
		Self { segments }
	}

	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// The root segment naming the owning engine.
	pub fn engine_segment(&self) -> &Segment {
		&self.segments[0]
	}

	/// The segment addressing the leaf itself.
	pub fn last_segment(&self) -> &Segment {
		&self.segments[self.segments.len() - 1]
	}

	/// Parses the serialized text form back into an identifier.
	///
	/// Exact inverse of `Display`. Parsing restores segment structure only;
	/// it never decides what a segment refers to.
	pub fn parse(input: &str) -> Result<Self, MalformedIdError> {
		parse_segments(input).map(|segments| Self { segments })
	}
}

impl fmt::Display for UniqueId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, segment) in self.segments.iter().enumerate() {
			if i > 0 {
				f.write_str("/")?;
			}
			write!(f, "{segment}")?;
		}
		Ok(())
	}
}

impl fmt::Debug for UniqueId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "UniqueId({self})")
	}
}

impl FromStr for UniqueId {
	type Err = MalformedIdError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl Serialize for UniqueId {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for UniqueId {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let text = String::deserialize(deserializer)?;
		Self::parse(&text).map_err(D::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::UniqueId;

	#[test]
	fn test_append_is_persistent() {
		let engine = UniqueId::for_engine("crucible");
		let class = engine.append("class", "demo.Outer");

		assert_eq!(engine.segments().len(), 1);
		assert_eq!(class.segments().len(), 2);
		assert_eq!(class.engine_segment().value(), "crucible");
		assert_eq!(class.last_segment().value(), "demo.Outer");
	}

	#[test]
	fn test_structural_equality() {
		let a = UniqueId::for_engine("crucible").append("class", "demo.Outer");
		let b = UniqueId::for_engine("crucible").append("class", "demo.Outer");
		let c = UniqueId::for_engine("crucible").append("class", "demo.Other");

		assert_eq!(a, b);
		assert_ne!(a, c);
	}

	#[test]
	fn test_display_chain() {
		let id = UniqueId::for_engine("crucible")
			.append("class", "demo.Outer")
			.append("nested-class", "Inner")
			.append("method", "works()");
		assert_eq!(
			id.to_string(),
			"[engine:crucible]/[class:demo.Outer]/[nested-class:Inner]/[method:works()]"
		);
	}

	#[test]
	fn test_parse_display_roundtrip() {
		let id = UniqueId::for_engine("crucible")
			.append("class", "demo.Outer")
			.append("method", "works(TestInfo, i32)");
		let reparsed = UniqueId::parse(&id.to_string()).unwrap();
		assert_eq!(reparsed, id);
	}

	#[test]
	fn test_serde_string_form() {
		let id = UniqueId::for_engine("crucible").append("class", "demo.Outer");
		let json = serde_json::to_string(&id).unwrap();
		assert_eq!(json, "\"[engine:crucible]/[class:demo.Outer]\"");

		let back: UniqueId = serde_json::from_str(&json).unwrap();
		assert_eq!(back, id);
	}

	#[test]
	fn test_deserialize_rejects_malformed() {
		let err = serde_json::from_str::<UniqueId>("\"[oops\"");
		assert!(err.is_err());
	}

	proptest! {
		/// `parse(to_string(id))` yields the identical segment sequence,
		/// including values full of structural characters.
		#[test]
		fn prop_text_roundtrip(
			parts in proptest::collection::vec(
				("[a-z][a-z-]{0,11}", r"[\PC]{0,24}"),
				1..6,
			)
		) {
			let mut iter = parts.iter();
			let (kind, value) = iter.next().unwrap();
			let mut id = UniqueId::root(kind.as_str(), value.as_str());
			for (kind, value) in iter {
				id = id.append(kind.as_str(), value.as_str());
			}

			let reparsed = UniqueId::parse(&id.to_string()).unwrap();
			prop_assert_eq!(reparsed, id);
		}
	}
}
