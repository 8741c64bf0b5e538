use std::sync::Arc;

use crucible_ident::{Segment, UniqueId};
use crucible_model::{
	CaseTestable, Classifier, ContainerTestable, DeclUniverse, MethodHandle, NestedTestable,
	Testable, TypeHandle,
};

use crate::signature::{find_method, method_signature};

/// Segment kind for a top-level container, valued with the qualified name.
pub const CLASS_SEGMENT: &str = "class";
/// Segment kind for a nested container, valued with the simple name.
pub const NESTED_CLASS_SEGMENT: &str = "nested-class";
/// Segment kind for a test case, valued with the method signature text.
pub const METHOD_SEGMENT: &str = "method";

/// Translates between declared elements and identifiers, both directions.
///
/// This is the only component that assigns meaning to parsed segments.
/// Everything else treats a [`UniqueId`] as opaque structure.
pub struct TestableResolver {
	engine_id: UniqueId,
	classifier: Classifier,
	universe: Arc<dyn DeclUniverse>,
}

impl TestableResolver {
	pub fn new(
		engine_id: UniqueId,
		classifier: Classifier,
		universe: Arc<dyn DeclUniverse>,
	) -> Self {
		Self {
			engine_id,
			classifier,
			universe,
		}
	}

	pub fn engine_id(&self) -> &UniqueId {
		&self.engine_id
	}

	/// Classifies a declared type and mints its identifier.
	///
	/// Nested containers resolve their enclosing type first and extend its
	/// identifier, so the minted path always spells out the full
	/// containment chain. Types that are neither kind of container degrade
	/// to [`Testable::Unresolved`] with a diagnostic.
	pub fn from_type(&self, ty: &TypeHandle) -> Testable {
		if self.classifier.is_potential_container(&**ty) {
			let unique_id = self.engine_id.append(CLASS_SEGMENT, ty.qualified_name());
			return Testable::Container(ContainerTestable {
				unique_id,
				ty: ty.clone(),
			});
		}
		if self.classifier.is_nested_container(&**ty) {
			return self.nested_from_type(ty);
		}
		tracing::warn!(
			domain = "discovery",
			ty = ty.qualified_name(),
			"type is not a test container",
		);
		Testable::Unresolved
	}

	fn nested_from_type(&self, ty: &TypeHandle) -> Testable {
		let Some(enclosing) = ty.enclosing_type() else {
			tracing::warn!(
				domain = "discovery",
				ty = ty.qualified_name(),
				"nested container has no enclosing type",
			);
			return Testable::Unresolved;
		};

		let enclosing_testable = self.from_type(&enclosing);
		let Some(parent_id) = enclosing_testable.unique_id() else {
			tracing::warn!(
				domain = "discovery",
				ty = ty.qualified_name(),
				enclosing = enclosing.qualified_name(),
				"enclosing type of nested container did not resolve",
			);
			return Testable::Unresolved;
		};

		let unique_id = parent_id.append(NESTED_CLASS_SEGMENT, ty.simple_name());
		Testable::Nested(NestedTestable {
			unique_id,
			ty: ty.clone(),
			enclosing,
		})
	}

	/// Classifies a declared method of `owner` and mints its identifier.
	///
	/// The method segment value carries the full signature text, so
	/// overloaded methods stay distinguishable.
	pub fn from_method(&self, method: &MethodHandle, owner: &TypeHandle) -> Testable {
		if !self.classifier.is_test_method(&**method) {
			tracing::warn!(
				domain = "discovery",
				owner = owner.qualified_name(),
				method = method.name(),
				"method is not a test method",
			);
			return Testable::Unresolved;
		}

		let owner_testable = self.from_type(owner);
		let Some(parent_id) = owner_testable.unique_id() else {
			tracing::warn!(
				domain = "discovery",
				owner = owner.qualified_name(),
				method = method.name(),
				"owning type of test method did not resolve",
			);
			return Testable::Unresolved;
		};

		let unique_id = parent_id.append(METHOD_SEGMENT, method_signature(&**method));
		Testable::Case(CaseTestable {
			unique_id,
			method: method.clone(),
			owner: owner.clone(),
		})
	}

	/// Re-resolves a previously recorded identifier against the live
	/// universe.
	///
	/// Folds the segments after the engine root left to right, carrying the
	/// last resolved testable as the accumulator. A segment whose required
	/// accumulator shape is missing, or whose referenced element can no
	/// longer be loaded (renamed, deleted), stops the fold early and yields
	/// `Unresolved`; it never propagates an error to the caller.
	pub fn from_unique_id(&self, id: &UniqueId) -> Testable {
		let segments = id.segments();
		if segments[0] != *self.engine_id.engine_segment() {
			tracing::warn!(
				domain = "discovery",
				id = %id,
				"identifier does not belong to this engine",
			);
			return Testable::Unresolved;
		}

		let mut current = Testable::Unresolved;
		for segment in &segments[1..] {
			current = match self.resolve_segment(segment, &current, id) {
				Some(next) if !next.is_unresolved() => next,
				_ => return Testable::Unresolved,
			};
		}
		current
	}

	fn resolve_segment(
		&self,
		segment: &Segment,
		current: &Testable,
		id: &UniqueId,
	) -> Option<Testable> {
		match segment.kind() {
			CLASS_SEGMENT => {
				let Some(ty) = self.universe.type_by_name(segment.value()) else {
					tracing::warn!(
						domain = "discovery",
						id = %id,
						ty = segment.value(),
						"cannot load top-level type named by segment",
					);
					return None;
				};
				Some(self.from_type(&ty))
			}
			NESTED_CLASS_SEGMENT => {
				let container = self.container_of(current, segment, id)?;
				let qualified = format!("{}${}", container.qualified_name(), segment.value());
				let Some(ty) = self.universe.type_by_name(&qualified) else {
					tracing::warn!(
						domain = "discovery",
						id = %id,
						ty = %qualified,
						"cannot load nested type named by segment",
					);
					return None;
				};
				Some(self.from_type(&ty))
			}
			METHOD_SEGMENT => {
				let container = self.container_of(current, segment, id)?;
				let Some(method) = find_method(&*container, segment.value()) else {
					tracing::warn!(
						domain = "discovery",
						id = %id,
						owner = container.qualified_name(),
						method = segment.value(),
						"cannot resolve method named by segment",
					);
					return None;
				};
				Some(self.from_method(&method, &container))
			}
			other => {
				tracing::warn!(
					domain = "discovery",
					id = %id,
					kind = other,
					"unknown segment kind",
				);
				None
			}
		}
	}

	fn container_of(
		&self,
		current: &Testable,
		segment: &Segment,
		id: &UniqueId,
	) -> Option<TypeHandle> {
		let Some(ty) = current.container_type() else {
			tracing::warn!(
				domain = "discovery",
				id = %id,
				segment = %segment,
				"segment requires a resolved container before it",
			);
			return None;
		};
		Some(ty.clone())
	}
}
