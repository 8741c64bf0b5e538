use rustc_hash::FxHashMap;

/// A named marker attached to a declared element, with optional attributes.
///
/// Markers are the only metadata the engine reads off host elements. What a
/// marker means (test, suite, nested, a tag, a user extension's own cue) is
/// decided by configuration and by the resolvers, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
	name: Box<str>,
	attrs: FxHashMap<Box<str>, Box<str>>,
}

impl Marker {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			attrs: FxHashMap::default(),
		}
	}

	#[must_use]
	pub fn with_attr(mut self, key: impl Into<Box<str>>, value: impl Into<Box<str>>) -> Self {
		self.attrs.insert(key.into(), value.into());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn attr(&self, key: &str) -> Option<&str> {
		self.attrs.get(key).map(|v| &**v)
	}
}

/// Anything that carries markers.
pub trait Marked {
	fn markers(&self) -> &[Marker];

	fn marker(&self, name: &str) -> Option<&Marker> {
		self.markers().iter().find(|m| m.name() == name)
	}

	fn has_marker(&self, name: &str) -> bool {
		self.marker(name).is_some()
	}
}
