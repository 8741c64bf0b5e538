use std::sync::Arc;

use thiserror::Error;

use crate::point::{Extension, ExtensionKind};
use crate::position::Position;

/// Illegal registration. Surfaced immediately; never deferred to
/// execution time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtensionConfigError {
	#[error("an extension with position Outermost is already registered for {kind}")]
	DuplicateOutermost { kind: ExtensionKind },
}

struct Entry {
	extension: Extension,
	position: Position,
}

/// Extension registrations for one scope, chained to the enclosing scopes.
///
/// A container's registry is the parent of its nested containers'
/// registries; reads through [`ExtensionRegistry::all_for`] see the whole
/// chain, ancestor entries first within each band. Entries are never
/// mutated after registration, only read in ordered traversal.
#[derive(Default)]
pub struct ExtensionRegistry {
	parent: Option<Arc<ExtensionRegistry>>,
	entries: Vec<Entry>,
}

impl ExtensionRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// A registry for a nested scope inheriting everything in `parent`.
	pub fn child_of(parent: Arc<ExtensionRegistry>) -> Self {
		Self {
			parent: Some(parent),
			entries: Vec::new(),
		}
	}

	/// Registers at [`Position::Default`].
	pub fn register(&mut self, extension: Extension) -> Result<(), ExtensionConfigError> {
		self.register_at(extension, Position::default())
	}

	/// Registers at an explicit position band.
	///
	/// The `Outermost` singleton constraint is checked against the whole
	/// visible chain: an `Outermost` inherited from an ancestor blocks a
	/// second one here just like a local entry would.
	pub fn register_at(
		&mut self,
		extension: Extension,
		position: Position,
	) -> Result<(), ExtensionConfigError> {
		if position == Position::Outermost && self.has_outermost(extension.kind()) {
			return Err(ExtensionConfigError::DuplicateOutermost {
				kind: extension.kind(),
			});
		}
		self.entries.push(Entry {
			extension,
			position,
		});
		Ok(())
	}

	/// Registers several extensions at [`Position::Default`], preserving
	/// their order.
	pub fn register_all(
		&mut self,
		extensions: impl IntoIterator<Item = Extension>,
	) -> Result<(), ExtensionConfigError> {
		for extension in extensions {
			self.register(extension)?;
		}
		Ok(())
	}

	fn has_outermost(&self, kind: ExtensionKind) -> bool {
		self.entries
			.iter()
			.any(|e| e.position == Position::Outermost && e.extension.kind() == kind)
			|| self
				.parent
				.as_ref()
				.is_some_and(|parent| parent.has_outermost(kind))
	}

	/// All registrations of one kind visible from this scope, first-applied
	/// first.
	///
	/// The chain is concatenated ancestor-first and stable-sorted by band,
	/// so within a band ancestors precede descendants and registration
	/// order is preserved. The result is deterministic for a given
	/// registration sequence.
	pub fn all_for(&self, kind: ExtensionKind) -> Vec<Extension> {
		let mut chain: Vec<&Entry> = Vec::new();
		self.collect_for(kind, &mut chain);
		chain.sort_by_key(|entry| entry.position);
		chain
			.into_iter()
			.map(|entry| entry.extension.clone())
			.collect()
	}

	fn collect_for<'a>(&'a self, kind: ExtensionKind, out: &mut Vec<&'a Entry>) {
		if let Some(parent) = &self.parent {
			parent.collect_for(kind, out);
		}
		out.extend(self.entries.iter().filter(|e| e.extension.kind() == kind));
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::{ExtensionConfigError, ExtensionRegistry};
	use crate::context::ExtensionContext;
	use crate::point::{CallbackResult, Extension, ExtensionKind};
	use crate::position::Position;

	/// A before-each callback distinguishable by label.
	fn labelled(label: &'static str) -> Extension {
		struct Labelled(&'static str);

		impl crate::point::BeforeEachCallback for Labelled {
			fn before_each(&self, _: &ExtensionContext) -> CallbackResult {
				Err(crate::point::CallbackError::new(self.0))
			}
		}

		Extension::before_each(Labelled(label))
	}

	fn labels(registry: &ExtensionRegistry, kind: ExtensionKind) -> Vec<String> {
		let context = ExtensionContext::new(
			crucible_ident::UniqueId::for_engine("crucible"),
			"crucible",
		);
		registry
			.all_for(kind)
			.iter()
			.map(|e| {
				e.as_before_each()
					.unwrap()
					.before_each(&context)
					.unwrap_err()
					.message()
					.to_string()
			})
			.collect()
	}

	#[test]
	fn test_registration_order_within_band() {
		let mut registry = ExtensionRegistry::new();
		registry
			.register_all([labelled("a"), labelled("b"), labelled("c")])
			.unwrap();

		assert_eq!(labels(&registry, ExtensionKind::BeforeEach), ["a", "b", "c"]);
	}

	#[test]
	fn test_band_sort_is_stable() {
		let mut registry = ExtensionRegistry::new();
		registry
			.register_at(labelled("inner"), Position::Innermost)
			.unwrap();
		registry.register(labelled("d1")).unwrap();
		registry
			.register_at(labelled("outer"), Position::Outermost)
			.unwrap();
		registry.register(labelled("d2")).unwrap();
		registry
			.register_at(labelled("outside"), Position::OutsideDefault)
			.unwrap();

		assert_eq!(
			labels(&registry, ExtensionKind::BeforeEach),
			["outer", "outside", "d1", "d2", "inner"]
		);
	}

	#[test]
	fn test_duplicate_outermost_fails_fast() {
		let mut registry = ExtensionRegistry::new();
		registry
			.register_at(labelled("first"), Position::Outermost)
			.unwrap();

		let err = registry
			.register_at(labelled("second"), Position::Outermost)
			.unwrap_err();
		assert_eq!(
			err,
			ExtensionConfigError::DuplicateOutermost {
				kind: ExtensionKind::BeforeEach,
			}
		);
	}

	#[test]
	fn test_outermost_singleton_is_per_kind() {
		let mut registry = ExtensionRegistry::new();
		registry
			.register_at(labelled("before"), Position::Outermost)
			.unwrap();

		// A different kind may still claim its own Outermost slot.
		registry
			.register_at(
				Extension::after_each(|_: &ExtensionContext| Ok(())),
				Position::Outermost,
			)
			.unwrap();

		// And the same kind may still use every other band.
		registry
			.register_at(labelled("outside"), Position::OutsideDefault)
			.unwrap();
		registry
			.register_at(labelled("inner"), Position::Innermost)
			.unwrap();
	}

	#[test]
	fn test_inherited_outermost_blocks_descendant() {
		let mut parent = ExtensionRegistry::new();
		parent
			.register_at(labelled("ancestor"), Position::Outermost)
			.unwrap();

		let mut child = ExtensionRegistry::child_of(Arc::new(parent));
		let err = child
			.register_at(labelled("descendant"), Position::Outermost)
			.unwrap_err();
		assert_eq!(
			err,
			ExtensionConfigError::DuplicateOutermost {
				kind: ExtensionKind::BeforeEach,
			}
		);
	}

	#[test]
	fn test_nested_scope_inherits_with_global_bands() {
		let mut parent = ExtensionRegistry::new();
		parent.register(labelled("A")).unwrap();

		let mut child = ExtensionRegistry::child_of(Arc::new(parent));
		child
			.register_at(labelled("B"), Position::OutsideDefault)
			.unwrap();

		// The descendant's OutsideDefault precedes the ancestor's Default.
		assert_eq!(labels(&child, ExtensionKind::BeforeEach), ["B", "A"]);
	}

	#[test]
	fn test_ancestors_precede_descendants_within_band() {
		let mut parent = ExtensionRegistry::new();
		parent.register(labelled("A1")).unwrap();
		parent.register(labelled("A2")).unwrap();

		let mut child = ExtensionRegistry::child_of(Arc::new(parent));
		child.register(labelled("B1")).unwrap();

		assert_eq!(
			labels(&child, ExtensionKind::BeforeEach),
			["A1", "A2", "B1"]
		);
	}

	#[test]
	fn test_all_for_filters_by_kind() {
		let mut registry = ExtensionRegistry::new();
		registry.register(labelled("before")).unwrap();
		registry
			.register(Extension::after_each(|_: &ExtensionContext| Ok(())))
			.unwrap();

		assert_eq!(registry.all_for(ExtensionKind::BeforeEach).len(), 1);
		assert_eq!(registry.all_for(ExtensionKind::AfterEach).len(), 1);
		assert!(registry.all_for(ExtensionKind::Condition).is_empty());
	}
}
