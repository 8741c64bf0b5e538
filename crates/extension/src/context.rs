use crucible_ident::UniqueId;

/// Read-only view of the hierarchy node an extension runs against.
///
/// Built by the execution driver from the discovered descriptor; the core
/// only defines the shape extensions consume.
#[derive(Debug, Clone)]
pub struct ExtensionContext {
	unique_id: UniqueId,
	display_name: Box<str>,
	tags: Vec<Box<str>>,
}

impl ExtensionContext {
	pub fn new(unique_id: UniqueId, display_name: impl Into<Box<str>>) -> Self {
		Self {
			unique_id,
			display_name: display_name.into(),
			tags: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_tag(mut self, tag: impl Into<Box<str>>) -> Self {
		self.tags.push(tag.into());
		self
	}

	pub fn unique_id(&self) -> &UniqueId {
		&self.unique_id
	}

	pub fn display_name(&self) -> &str {
		&self.display_name
	}

	pub fn tags(&self) -> &[Box<str>] {
		&self.tags
	}
}
