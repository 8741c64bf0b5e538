//! Discovery: from declared elements to an addressed descriptor tree and
//! back.
//!
//! Two directions live here. Forward, the [`TestableResolver`] turns a
//! declared type or method into a [`Testable`](crucible_model::Testable)
//! with a freshly minted identifier, resolving enclosing containers first.
//! Reverse, it folds a parsed identifier segment by segment back into the
//! declared element it names, degrading to `Unresolved` (with a structured
//! diagnostic) on any stale or foreign segment instead of failing the whole
//! pass.
//!
//! Hierarchy expansion is pluggable: an [`ElementResolverRegistry`] holds
//! [`ElementResolver`]s queried in registration order, and the first one to
//! claim an element mints its identifier and descriptor. New container or
//! test shapes plug in as resolvers without touching the resolution core.

mod builtins;
mod descriptor;
mod expand;
mod registry;
mod resolver;
mod signature;

pub use builtins::{ContainerResolver, NestedContainerResolver, TestMethodResolver};
pub use descriptor::{Descriptor, DescriptorKind, DescriptorSource};
pub use expand::{discover, expand_type};
pub use registry::{DeclElement, ElementResolver, ElementResolverRegistry};
pub use resolver::{CLASS_SEGMENT, METHOD_SEGMENT, NESTED_CLASS_SEGMENT, TestableResolver};
pub use signature::{find_method, method_signature, parse_method_signature};
