use std::fmt;

use crucible_ident::UniqueId;
use crucible_model::{MethodHandle, TypeHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
	Container,
	Test,
}

/// The declared element a descriptor was resolved from.
#[derive(Clone)]
pub enum DescriptorSource {
	/// The synthetic engine root; it has no declared element.
	Engine,
	Type(TypeHandle),
	Method { method: MethodHandle, owner: TypeHandle },
}

/// One node of the discovered hierarchy.
///
/// Descriptors are produced by element resolvers and linked into a tree by
/// the expander. After expansion the tree is read-only.
#[derive(Clone)]
pub struct Descriptor {
	pub unique_id: UniqueId,
	pub display_name: Box<str>,
	pub kind: DescriptorKind,
	pub source: DescriptorSource,
	pub children: Vec<Descriptor>,
}

impl Descriptor {
	pub fn new(
		unique_id: UniqueId,
		display_name: impl Into<Box<str>>,
		kind: DescriptorKind,
		source: DescriptorSource,
	) -> Self {
		Self {
			unique_id,
			display_name: display_name.into(),
			kind,
			source,
			children: Vec::new(),
		}
	}

	/// The root node every discovery pass hangs off.
	pub fn engine_root(unique_id: UniqueId, display_name: impl Into<Box<str>>) -> Self {
		Self::new(
			unique_id,
			display_name,
			DescriptorKind::Container,
			DescriptorSource::Engine,
		)
	}

	pub fn is_container(&self) -> bool {
		self.kind == DescriptorKind::Container
	}

	/// Depth-first visit of this node and every descendant.
	pub fn walk(&self, visit: &mut dyn FnMut(&Descriptor)) {
		visit(self);
		for child in &self.children {
			child.walk(visit);
		}
	}
}

impl fmt::Debug for Descriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Descriptor")
			.field("unique_id", &self.unique_id)
			.field("display_name", &self.display_name)
			.field("kind", &self.kind)
			.field("children", &self.children.len())
			.finish()
	}
}
