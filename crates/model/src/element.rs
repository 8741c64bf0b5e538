use std::sync::Arc;

use crate::marker::{Marked, Marker};

/// Shared handle to a declared type. A lookup key into the host's world,
/// not ownership of the element itself.
pub type TypeHandle = Arc<dyn TypeDecl>;

/// Shared handle to a declared method.
pub type MethodHandle = Arc<dyn MethodDecl>;

/// Introspection capability for a declared type.
///
/// Implemented by the host (see [`crate::mem`] for the in-memory adapter).
/// The engine only ever reads through this trait; it never mutates the
/// underlying element.
pub trait TypeDecl: Marked + Send + Sync {
	/// Fully qualified name. Nested types use the binary-name convention
	/// `<enclosing-qualified-name>$<simple-name>`.
	fn qualified_name(&self) -> &str;

	fn simple_name(&self) -> &str;

	/// The type this one is declared inside, if any.
	fn enclosing_type(&self) -> Option<TypeHandle>;

	/// True for nested types that do not capture their enclosing instance.
	fn is_static(&self) -> bool;

	fn methods(&self) -> Vec<MethodHandle>;

	fn nested_types(&self) -> Vec<TypeHandle>;

	/// Looks up a declared method by name and exact parameter-type list.
	fn method(&self, name: &str, param_types: &[&str]) -> Option<MethodHandle> {
		self.methods().into_iter().find(|m| {
			m.name() == name
				&& m.parameters().len() == param_types.len()
				&& m.parameters()
					.iter()
					.zip(param_types)
					.all(|(p, want)| &*p.type_name == *want)
		})
	}

	/// Looks up a directly nested type by simple name.
	fn nested_type(&self, simple_name: &str) -> Option<TypeHandle> {
		self.nested_types()
			.into_iter()
			.find(|t| t.simple_name() == simple_name)
	}
}

/// Introspection capability for a declared method.
pub trait MethodDecl: Marked + Send + Sync {
	fn name(&self) -> &str;

	/// Qualified name of the declaring type.
	fn declaring_type_name(&self) -> &str;

	fn parameters(&self) -> &[ParamDecl];
}

/// Lookup capability from qualified type names to live declared types.
///
/// The reverse direction of identifier resolution depends on this: a
/// serialized identifier is only meaningful against a universe that can
/// still load the types it names.
pub trait DeclUniverse: Send + Sync {
	fn type_by_name(&self, qualified_name: &str) -> Option<TypeHandle>;
}

/// One formal parameter of a declared method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDecl {
	pub name: Box<str>,
	/// Declared type name, as the host renders it.
	pub type_name: Box<str>,
	/// Zero-based position in the parameter list.
	pub index: usize,
	/// `<declaring-type>#<method>`, used verbatim in diagnostics.
	pub declared_by: Box<str>,
	pub markers: Vec<Marker>,
}

impl ParamDecl {
	pub fn new(
		name: impl Into<Box<str>>,
		type_name: impl Into<Box<str>>,
		index: usize,
		declared_by: impl Into<Box<str>>,
	) -> Self {
		Self {
			name: name.into(),
			type_name: type_name.into(),
			index,
			declared_by: declared_by.into(),
			markers: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_marker(mut self, marker: Marker) -> Self {
		self.markers.push(marker);
		self
	}
}

impl Marked for ParamDecl {
	fn markers(&self) -> &[Marker] {
		&self.markers
	}
}
