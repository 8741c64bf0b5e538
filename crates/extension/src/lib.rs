//! Extension points: third-party behavior attached to the discovered
//! hierarchy in a deterministic order.
//!
//! An [`Extension`] is one registered implementation of one extension
//! point (condition, lifecycle callback, parameter resolver, exception
//! handler), carried as a tagged union so instances, bound functions, and
//! plain closures all register the same way. Registrations land in an
//! [`ExtensionRegistry`] at a [`Position`] band; `all_for` yields them
//! band-sorted with registration order preserved inside a band, across the
//! whole ancestor chain of a nested scope.
//!
//! [`ParameterPipeline`] consumes the ordered parameter-resolver chain to
//! supply argument values, with framework built-ins (such as
//! [`TestInfo`]) always consulted first.

mod context;
mod info;
mod params;
mod point;
mod position;
mod registry;

pub use context::ExtensionContext;
pub use info::{TestInfo, TestInfoResolver};
pub use params::{ParameterPipeline, ParameterResolutionError};
pub use point::{
	AfterEachCallback, ArgumentValue, BeforeEachCallback, CallbackError, CallbackResult,
	ConditionOutcome, ExceptionHandler, ExecutionCondition, Extension, ExtensionKind,
	ParameterResolver,
};
pub use position::Position;
pub use registry::{ExtensionConfigError, ExtensionRegistry};
