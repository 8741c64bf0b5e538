//! Declared-element model for the engine core.
//!
//! The engine never introspects host programs itself. Hosts implement the
//! capability traits [`TypeDecl`], [`MethodDecl`], and [`DeclUniverse`] to
//! answer three questions about their declared
//! elements: which markers an element carries, what its formal parameters
//! are, and what its enclosing type is. The [`mem`] module is the canonical
//! in-memory implementation of that seam.
//!
//! On top of the capability sits the resolved model: [`Testable`] is the
//! polymorphic in-memory representation of a container or case, and
//! [`Classifier`] turns marker names (configuration, not code paths) into
//! the container/test predicates the resolvers use.

mod classify;
mod element;
mod marker;
pub mod mem;
mod testable;

pub use classify::{Classifier, ClassifierConfig};
pub use element::{DeclUniverse, MethodDecl, MethodHandle, ParamDecl, TypeDecl, TypeHandle};
pub use marker::{Marked, Marker};
pub use testable::{CaseTestable, ContainerTestable, NestedTestable, Testable};
