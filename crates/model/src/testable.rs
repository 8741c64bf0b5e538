use std::fmt;

use crucible_ident::UniqueId;

use crate::element::{MethodHandle, TypeHandle};

/// A top-level container: a type that independently qualifies as a suite.
#[derive(Clone)]
pub struct ContainerTestable {
	pub unique_id: UniqueId,
	pub ty: TypeHandle,
}

/// A nested container: a non-static inner type of another container.
///
/// `enclosing` is a relation back to the declaring container only; the
/// containment tree itself is built by discovery, not through this edge.
#[derive(Clone)]
pub struct NestedTestable {
	pub unique_id: UniqueId,
	pub ty: TypeHandle,
	pub enclosing: TypeHandle,
}

/// A single test case: a marked method of a container.
#[derive(Clone)]
pub struct CaseTestable {
	pub unique_id: UniqueId,
	pub method: MethodHandle,
	pub owner: TypeHandle,
}

/// The resolved representation of one addressable suite element.
///
/// `Unresolved` is the sentinel for anything resolution gave up on. It
/// carries no element and is meant to be skipped by callers ("nothing to
/// schedule"), never to crash them; the diagnostic explaining the failure
/// is emitted where resolution failed.
#[derive(Clone, Default)]
pub enum Testable {
	Container(ContainerTestable),
	Nested(NestedTestable),
	Case(CaseTestable),
	#[default]
	Unresolved,
}

impl Testable {
	pub fn unique_id(&self) -> Option<&UniqueId> {
		match self {
			Testable::Container(c) => Some(&c.unique_id),
			Testable::Nested(n) => Some(&n.unique_id),
			Testable::Case(c) => Some(&c.unique_id),
			Testable::Unresolved => None,
		}
	}

	pub fn is_unresolved(&self) -> bool {
		matches!(self, Testable::Unresolved)
	}

	/// The declared type if this testable can contain cases.
	pub fn container_type(&self) -> Option<&TypeHandle> {
		match self {
			Testable::Container(c) => Some(&c.ty),
			Testable::Nested(n) => Some(&n.ty),
			_ => None,
		}
	}
}

impl fmt::Debug for Testable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Testable::Container(c) => f
				.debug_struct("Container")
				.field("unique_id", &c.unique_id)
				.field("type", &c.ty.qualified_name())
				.finish(),
			Testable::Nested(n) => f
				.debug_struct("Nested")
				.field("unique_id", &n.unique_id)
				.field("type", &n.ty.qualified_name())
				.field("enclosing", &n.enclosing.qualified_name())
				.finish(),
			Testable::Case(c) => f
				.debug_struct("Case")
				.field("unique_id", &c.unique_id)
				.field("method", &c.method.name())
				.field("owner", &c.owner.qualified_name())
				.finish(),
			Testable::Unresolved => f.write_str("Unresolved"),
		}
	}
}
