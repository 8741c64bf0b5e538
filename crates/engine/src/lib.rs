//! Aggregated engine core.
//!
//! This crate re-exports the engine sub-crates. Depend on this crate to
//! get the whole core, rather than depending on individual sub-crates.
//!
//! # Sub-crates
//!
//! - `crucible-ident` - serializable hierarchical identifiers
//! - `crucible-model` - declared-element capability and the testable model
//! - `crucible-discovery` - resolvers and hierarchy expansion
//! - `crucible-extension` - ordered extension points and parameter
//!   resolution
//!
//! What stays outside the core: invoking test bodies, reporting, and
//! scheduling belong to an execution driver implementing [`TestInvoker`].

mod config;
mod driver;

pub use config::EngineConfig;
pub use driver::{TestInvoker, extension_context};

pub use crucible_discovery::{
	CLASS_SEGMENT, ContainerResolver, DeclElement, Descriptor, DescriptorKind, DescriptorSource,
	ElementResolver, ElementResolverRegistry, METHOD_SEGMENT, NESTED_CLASS_SEGMENT,
	NestedContainerResolver, TestMethodResolver, TestableResolver, discover, expand_type,
	find_method, method_signature, parse_method_signature,
};
pub use crucible_extension::{
	AfterEachCallback, ArgumentValue, BeforeEachCallback, CallbackError, CallbackResult,
	ConditionOutcome, ExceptionHandler, ExecutionCondition, Extension, ExtensionConfigError,
	ExtensionContext, ExtensionKind, ExtensionRegistry, ParameterPipeline,
	ParameterResolutionError, ParameterResolver, Position, TestInfo, TestInfoResolver,
};
pub use crucible_ident::{ENGINE_SEGMENT_KIND, MalformedIdError, Segment, UniqueId};
pub use crucible_model::{
	CaseTestable, Classifier, ClassifierConfig, ContainerTestable, DeclUniverse, Marked, Marker,
	MethodDecl, MethodHandle, NestedTestable, ParamDecl, Testable, TypeDecl, TypeHandle, mem,
};
