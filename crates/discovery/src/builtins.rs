//! Standard element resolvers for marker-classified containers and tests.

use crucible_ident::UniqueId;
use crucible_model::{Classifier, TypeHandle};

use crate::descriptor::{Descriptor, DescriptorKind, DescriptorSource};
use crate::registry::{DeclElement, ElementResolver};
use crate::resolver::{CLASS_SEGMENT, METHOD_SEGMENT, NESTED_CLASS_SEGMENT};
use crate::signature::method_signature;

/// Claims types that independently qualify as containers.
pub struct ContainerResolver {
	classifier: Classifier,
}

impl ContainerResolver {
	pub fn new(classifier: Classifier) -> Self {
		Self { classifier }
	}
}

impl ElementResolver for ContainerResolver {
	fn name(&self) -> &'static str {
		"container"
	}

	fn claims(&self, element: &DeclElement, _parent: &Descriptor) -> bool {
		let DeclElement::Type(ty) = element else {
			return false;
		};
		self.classifier.is_potential_container(&**ty)
	}

	fn mint_unique_id(&self, element: &DeclElement, parent: &Descriptor) -> UniqueId {
		let DeclElement::Type(ty) = element else {
			unreachable!("claims() only accepts types");
		};
		parent.unique_id.append(CLASS_SEGMENT, ty.qualified_name())
	}

	fn resolve(
		&self,
		element: &DeclElement,
		_parent: &Descriptor,
		unique_id: UniqueId,
	) -> Descriptor {
		let DeclElement::Type(ty) = element else {
			unreachable!("claims() only accepts types");
		};
		container_descriptor(unique_id, ty)
	}
}

/// Claims non-static inner types nested in an already-resolved container.
pub struct NestedContainerResolver {
	classifier: Classifier,
}

impl NestedContainerResolver {
	pub fn new(classifier: Classifier) -> Self {
		Self { classifier }
	}
}

impl ElementResolver for NestedContainerResolver {
	fn name(&self) -> &'static str {
		"nested-container"
	}

	fn claims(&self, element: &DeclElement, parent: &Descriptor) -> bool {
		let DeclElement::Type(ty) = element else {
			return false;
		};
		if !self.classifier.is_nested_container(&**ty) {
			return false;
		}
		// The parent descriptor must be the declaring container.
		let DescriptorSource::Type(parent_ty) = &parent.source else {
			return false;
		};
		ty.enclosing_type()
			.is_some_and(|enc| enc.qualified_name() == parent_ty.qualified_name())
	}

	fn mint_unique_id(&self, element: &DeclElement, parent: &Descriptor) -> UniqueId {
		let DeclElement::Type(ty) = element else {
			unreachable!("claims() only accepts types");
		};
		parent
			.unique_id
			.append(NESTED_CLASS_SEGMENT, ty.simple_name())
	}

	fn resolve(
		&self,
		element: &DeclElement,
		_parent: &Descriptor,
		unique_id: UniqueId,
	) -> Descriptor {
		let DeclElement::Type(ty) = element else {
			unreachable!("claims() only accepts types");
		};
		container_descriptor(unique_id, ty)
	}
}

/// Claims marked test methods of resolved containers.
pub struct TestMethodResolver {
	classifier: Classifier,
}

impl TestMethodResolver {
	pub fn new(classifier: Classifier) -> Self {
		Self { classifier }
	}
}

impl ElementResolver for TestMethodResolver {
	fn name(&self) -> &'static str {
		"test-method"
	}

	fn claims(&self, element: &DeclElement, parent: &Descriptor) -> bool {
		let DeclElement::Method { method, .. } = element else {
			return false;
		};
		parent.is_container() && self.classifier.is_test_method(&**method)
	}

	fn mint_unique_id(&self, element: &DeclElement, parent: &Descriptor) -> UniqueId {
		let DeclElement::Method { method, .. } = element else {
			unreachable!("claims() only accepts methods");
		};
		parent
			.unique_id
			.append(METHOD_SEGMENT, method_signature(&**method))
	}

	fn resolve(
		&self,
		element: &DeclElement,
		_parent: &Descriptor,
		unique_id: UniqueId,
	) -> Descriptor {
		let DeclElement::Method { method, owner } = element else {
			unreachable!("claims() only accepts methods");
		};
		Descriptor::new(
			unique_id,
			method.name(),
			DescriptorKind::Test,
			DescriptorSource::Method {
				method: method.clone(),
				owner: owner.clone(),
			},
		)
	}
}

fn container_descriptor(unique_id: UniqueId, ty: &TypeHandle) -> Descriptor {
	Descriptor::new(
		unique_id,
		ty.simple_name(),
		DescriptorKind::Container,
		DescriptorSource::Type(ty.clone()),
	)
}
