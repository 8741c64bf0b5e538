use serde::{Deserialize, Serialize};

use crate::element::{MethodDecl, TypeDecl};
use crate::marker::Marked;

/// Marker names the classifier keys on.
///
/// Markers are configuration: a host that spells its test marker
/// differently swaps the names here instead of teaching the engine new
/// code paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
	pub suite_marker: Box<str>,
	pub test_marker: Box<str>,
	pub nested_marker: Box<str>,
}

impl Default for ClassifierConfig {
	fn default() -> Self {
		Self {
			suite_marker: "suite".into(),
			test_marker: "test".into(),
			nested_marker: "nested".into(),
		}
	}
}

/// Container/test predicates over declared elements.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
	config: ClassifierConfig,
}

impl Classifier {
	pub fn new(config: ClassifierConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &ClassifierConfig {
		&self.config
	}

	/// True if the type independently qualifies as a test container: it
	/// stands on its own (top-level, or a nested type that does not capture
	/// its enclosing instance) and either carries the suite marker or
	/// declares at least one test method.
	pub fn is_potential_container(&self, ty: &dyn TypeDecl) -> bool {
		let independent = ty.enclosing_type().is_none() || ty.is_static();
		independent
			&& (ty.has_marker(&self.config.suite_marker)
				|| ty.methods().iter().any(|m| self.is_test_method(&**m)))
	}

	/// True if the type is a nested container: a non-static inner type
	/// carrying the nested marker.
	pub fn is_nested_container(&self, ty: &dyn TypeDecl) -> bool {
		ty.enclosing_type().is_some() && !ty.is_static() && ty.has_marker(&self.config.nested_marker)
	}

	pub fn is_test_method(&self, method: &dyn MethodDecl) -> bool {
		method.has_marker(&self.config.test_marker)
	}
}
