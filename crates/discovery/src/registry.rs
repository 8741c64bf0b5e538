use std::sync::Arc;

use crucible_ident::UniqueId;
use crucible_model::{Classifier, MethodHandle, TypeHandle};

use crate::builtins::{ContainerResolver, NestedContainerResolver, TestMethodResolver};
use crate::descriptor::Descriptor;

/// A declared element offered to the resolver chain during expansion.
#[derive(Clone)]
pub enum DeclElement {
	Type(TypeHandle),
	Method { method: MethodHandle, owner: TypeHandle },
}

impl DeclElement {
	/// Stable human-readable rendering for diagnostics.
	pub fn display_name(&self) -> String {
		match self {
			DeclElement::Type(ty) => ty.qualified_name().to_string(),
			DeclElement::Method { method, owner } => {
				format!("{}#{}", owner.qualified_name(), method.name())
			}
		}
	}
}

/// A pluggable unit that claims declared elements during expansion.
///
/// When a resolver claims an element it alone decides the child's
/// identifier and descriptor. No two resolvers should claim the same
/// element; the registry does not enforce that, it resolves contested
/// claims by registration order and reports them.
pub trait ElementResolver: Send + Sync {
	/// Name used in contested-claim diagnostics.
	fn name(&self) -> &'static str;

	fn claims(&self, element: &DeclElement, parent: &Descriptor) -> bool;

	fn mint_unique_id(&self, element: &DeclElement, parent: &Descriptor) -> UniqueId;

	fn resolve(&self, element: &DeclElement, parent: &Descriptor, unique_id: UniqueId)
	-> Descriptor;
}

/// Ordered chain of element resolvers, queried in registration order.
#[derive(Default)]
pub struct ElementResolverRegistry {
	resolvers: Vec<Arc<dyn ElementResolver>>,
}

impl ElementResolverRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// A registry preloaded with the standard container, nested-container,
	/// and test-method resolvers driven by `classifier`.
	pub fn with_builtins(classifier: &Classifier) -> Self {
		let mut registry = Self::new();
		registry.register(Arc::new(ContainerResolver::new(classifier.clone())));
		registry.register(Arc::new(NestedContainerResolver::new(classifier.clone())));
		registry.register(Arc::new(TestMethodResolver::new(classifier.clone())));
		registry
	}

	pub fn register(&mut self, resolver: Arc<dyn ElementResolver>) {
		self.resolvers.push(resolver);
	}

	/// Offers `element` to the chain and returns the winning resolver's
	/// descriptor, or `None` when nobody claims it.
	///
	/// The first claiming resolver wins. Every further claimant is reported
	/// and ignored.
	pub fn resolve(&self, element: &DeclElement, parent: &Descriptor) -> Option<Descriptor> {
		let mut winner: Option<&Arc<dyn ElementResolver>> = None;
		for resolver in &self.resolvers {
			if !resolver.claims(element, parent) {
				continue;
			}
			match winner {
				None => winner = Some(resolver),
				Some(first) => tracing::warn!(
					domain = "discovery",
					winner = first.name(),
					contender = resolver.name(),
					element = %element.display_name(),
					"contested element claim; registration order wins",
				),
			}
		}

		let resolver = winner?;
		let unique_id = resolver.mint_unique_id(element, parent);
		Some(resolver.resolve(element, parent, unique_id))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use crucible_ident::UniqueId;
	use crucible_model::mem::{MemUniverse, MethodSpec, TypeSpec};
	use crucible_model::{Classifier, DeclUniverse, Marker};

	use super::{DeclElement, ElementResolver, ElementResolverRegistry};
	use crate::descriptor::{Descriptor, DescriptorKind, DescriptorSource};

	struct ClaimEverything(&'static str);

	impl ElementResolver for ClaimEverything {
		fn name(&self) -> &'static str {
			self.0
		}

		fn claims(&self, _: &DeclElement, _: &Descriptor) -> bool {
			true
		}

		fn mint_unique_id(&self, _: &DeclElement, parent: &Descriptor) -> UniqueId {
			parent.unique_id.append("claimed-by", self.0)
		}

		fn resolve(
			&self,
			_: &DeclElement,
			_: &Descriptor,
			unique_id: UniqueId,
		) -> Descriptor {
			Descriptor::new(
				unique_id,
				self.0,
				DescriptorKind::Container,
				DescriptorSource::Engine,
			)
		}
	}

	fn engine_root() -> Descriptor {
		Descriptor::engine_root(UniqueId::for_engine("crucible"), "crucible")
	}

	fn suite_element() -> DeclElement {
		let mut universe = MemUniverse::new();
		universe.define(
			TypeSpec::new("demo.Suite")
				.marker(Marker::new("suite"))
				.method(MethodSpec::new("works").marker(Marker::new("test"))),
		);
		DeclElement::Type(universe.type_by_name("demo.Suite").unwrap())
	}

	#[test]
	fn test_first_claiming_resolver_wins() {
		let mut registry = ElementResolverRegistry::new();
		registry.register(Arc::new(ClaimEverything("first")));
		registry.register(Arc::new(ClaimEverything("second")));

		let descriptor = registry.resolve(&suite_element(), &engine_root()).unwrap();
		assert_eq!(&*descriptor.display_name, "first");
		assert_eq!(descriptor.unique_id.last_segment().value(), "first");
	}

	#[test]
	fn test_unclaimed_element_resolves_to_none() {
		let registry = ElementResolverRegistry::new();
		assert!(registry.resolve(&suite_element(), &engine_root()).is_none());
	}

	#[test]
	fn test_builtins_claim_suite_type() {
		let registry = ElementResolverRegistry::with_builtins(&Classifier::default());
		let descriptor = registry.resolve(&suite_element(), &engine_root()).unwrap();
		assert!(descriptor.is_container());
		assert_eq!(
			descriptor.unique_id.to_string(),
			"[engine:crucible]/[class:demo.Suite]"
		);
	}
}
