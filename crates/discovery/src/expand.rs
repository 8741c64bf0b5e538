use crucible_model::TypeHandle;

use crate::descriptor::Descriptor;
use crate::registry::{DeclElement, ElementResolverRegistry};

/// Expands root types into a descriptor tree under the engine root.
///
/// Each root that no resolver claims is skipped with a diagnostic; one
/// unresolvable root never aborts the others.
pub fn discover(
	registry: &ElementResolverRegistry,
	engine_root: Descriptor,
	roots: &[TypeHandle],
) -> Descriptor {
	let mut root = engine_root;
	for ty in roots {
		match expand_type(registry, &root, ty) {
			Some(child) => root.children.push(child),
			None => tracing::warn!(
				domain = "discovery",
				ty = ty.qualified_name(),
				"no resolver claimed root type; skipping",
			),
		}
	}
	root
}

/// Expands one declared type: the type itself, its methods, then its
/// nested types, depth first.
pub fn expand_type(
	registry: &ElementResolverRegistry,
	parent: &Descriptor,
	ty: &TypeHandle,
) -> Option<Descriptor> {
	let mut descriptor = registry.resolve(&DeclElement::Type(ty.clone()), parent)?;

	for method in ty.methods() {
		let element = DeclElement::Method {
			method,
			owner: ty.clone(),
		};
		match registry.resolve(&element, &descriptor) {
			Some(child) => descriptor.children.push(child),
			None => tracing::debug!(
				domain = "discovery",
				element = %element.display_name(),
				"element not claimed",
			),
		}
	}

	for nested in ty.nested_types() {
		if let Some(child) = expand_type(registry, &descriptor, &nested) {
			descriptor.children.push(child);
		}
	}

	Some(descriptor)
}

#[cfg(test)]
mod tests {
	use crucible_ident::UniqueId;
	use crucible_model::mem::{MemUniverse, MethodSpec, TypeSpec};
	use crucible_model::{Classifier, DeclUniverse, Marker};

	use super::discover;
	use crate::descriptor::Descriptor;
	use crate::registry::ElementResolverRegistry;

	#[test]
	fn test_discover_builds_nested_tree() {
		let mut universe = MemUniverse::new();
		universe.define(
			TypeSpec::new("demo.Outer")
				.marker(Marker::new("suite"))
				.method(MethodSpec::new("top").marker(Marker::new("test")))
				.method(MethodSpec::new("helper"))
				.nested(
					TypeSpec::new("Inner")
						.marker(Marker::new("nested"))
						.method(MethodSpec::new("works").marker(Marker::new("test"))),
				),
		);

		let registry = ElementResolverRegistry::with_builtins(&Classifier::default());
		let engine_root =
			Descriptor::engine_root(UniqueId::for_engine("crucible"), "crucible");
		let roots = vec![universe.type_by_name("demo.Outer").unwrap()];

		let tree = discover(&registry, engine_root, &roots);

		let mut ids = Vec::new();
		tree.walk(&mut |d| ids.push(d.unique_id.to_string()));
		assert_eq!(
			ids,
			vec![
				"[engine:crucible]",
				"[engine:crucible]/[class:demo.Outer]",
				"[engine:crucible]/[class:demo.Outer]/[method:top()]",
				"[engine:crucible]/[class:demo.Outer]/[nested-class:Inner]",
				"[engine:crucible]/[class:demo.Outer]/[nested-class:Inner]/[method:works()]",
			]
		);
	}

	#[test]
	fn test_unresolvable_root_is_isolated() {
		let mut universe = MemUniverse::new();
		universe.define(TypeSpec::new("demo.Plain"));
		universe.define(
			TypeSpec::new("demo.Suite")
				.marker(Marker::new("suite"))
				.method(MethodSpec::new("works").marker(Marker::new("test"))),
		);

		let registry = ElementResolverRegistry::with_builtins(&Classifier::default());
		let engine_root =
			Descriptor::engine_root(UniqueId::for_engine("crucible"), "crucible");
		let roots = vec![
			universe.type_by_name("demo.Plain").unwrap(),
			universe.type_by_name("demo.Suite").unwrap(),
		];

		let tree = discover(&registry, engine_root, &roots);
		assert_eq!(tree.children.len(), 1);
		assert_eq!(&*tree.children[0].display_name, "Suite");
	}
}
