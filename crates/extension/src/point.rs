use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crucible_model::ParamDecl;
use thiserror::Error;

use crate::context::ExtensionContext;

/// Failure reported by a callback or resolver implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CallbackError {
	message: Box<str>,
}

impl CallbackError {
	pub fn new(message: impl Into<Box<str>>) -> Self {
		Self {
			message: message.into(),
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

pub type CallbackResult = Result<(), CallbackError>;

/// Type-erased resolved argument. The invocation driver downcasts it to
/// the concrete type the parameter asked for.
pub type ArgumentValue = Box<dyn Any + Send>;

/// Verdict of an execution condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionOutcome {
	enabled: bool,
	reason: Option<Box<str>>,
}

impl ConditionOutcome {
	pub fn enabled() -> Self {
		Self {
			enabled: true,
			reason: None,
		}
	}

	pub fn disabled(reason: impl Into<Box<str>>) -> Self {
		Self {
			enabled: false,
			reason: Some(reason.into()),
		}
	}

	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	pub fn reason(&self) -> Option<&str> {
		self.reason.as_deref()
	}
}

/// Decides whether a container or case should execute at all.
pub trait ExecutionCondition: Send + Sync {
	fn evaluate(&self, context: &ExtensionContext) -> ConditionOutcome;
}

/// Runs before each case in its scope.
pub trait BeforeEachCallback: Send + Sync {
	fn before_each(&self, context: &ExtensionContext) -> CallbackResult;
}

/// Runs after each case in its scope.
pub trait AfterEachCallback: Send + Sync {
	fn after_each(&self, context: &ExtensionContext) -> CallbackResult;
}

/// Intercepts a failure raised by a case or callback.
///
/// Returning `Ok(())` swallows the failure; returning `Err` rethrows it
/// (the original or a replacement) to the next handler in order.
pub trait ExceptionHandler: Send + Sync {
	fn handle(&self, context: &ExtensionContext, error: CallbackError) -> CallbackResult;
}

/// Supplies a value for one formal parameter.
pub trait ParameterResolver: Send + Sync {
	fn supports(&self, parameter: &ParamDecl, context: &ExtensionContext) -> bool;

	fn resolve(
		&self,
		parameter: &ParamDecl,
		context: &ExtensionContext,
	) -> Result<ArgumentValue, CallbackError>;
}

impl<F> ExecutionCondition for F
where
	F: Fn(&ExtensionContext) -> ConditionOutcome + Send + Sync,
{
	fn evaluate(&self, context: &ExtensionContext) -> ConditionOutcome {
		self(context)
	}
}

impl<F> BeforeEachCallback for F
where
	F: Fn(&ExtensionContext) -> CallbackResult + Send + Sync,
{
	fn before_each(&self, context: &ExtensionContext) -> CallbackResult {
		self(context)
	}
}

impl<F> AfterEachCallback for F
where
	F: Fn(&ExtensionContext) -> CallbackResult + Send + Sync,
{
	fn after_each(&self, context: &ExtensionContext) -> CallbackResult {
		self(context)
	}
}

impl<F> ExceptionHandler for F
where
	F: Fn(&ExtensionContext, CallbackError) -> CallbackResult + Send + Sync,
{
	fn handle(&self, context: &ExtensionContext, error: CallbackError) -> CallbackResult {
		self(context, error)
	}
}

/// The extension-point kinds the registry orders independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionKind {
	Condition,
	BeforeEach,
	AfterEach,
	ParameterResolver,
	ExceptionHandler,
}

impl fmt::Display for ExtensionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ExtensionKind::Condition => "condition",
			ExtensionKind::BeforeEach => "before-each",
			ExtensionKind::AfterEach => "after-each",
			ExtensionKind::ParameterResolver => "parameter-resolver",
			ExtensionKind::ExceptionHandler => "exception-handler",
		};
		f.write_str(name)
	}
}

/// One registered extension-point implementation.
///
/// The union carries its kind by construction, so a registration is always
/// associated with exactly one extension point no matter whether it started
/// life as a dedicated type, a bound function, or a closure.
#[derive(Clone)]
pub enum Extension {
	Condition(Arc<dyn ExecutionCondition>),
	BeforeEach(Arc<dyn BeforeEachCallback>),
	AfterEach(Arc<dyn AfterEachCallback>),
	ParameterResolver(Arc<dyn ParameterResolver>),
	ExceptionHandler(Arc<dyn ExceptionHandler>),
}

impl Extension {
	pub fn condition(implementation: impl ExecutionCondition + 'static) -> Self {
		Extension::Condition(Arc::new(implementation))
	}

	pub fn before_each(implementation: impl BeforeEachCallback + 'static) -> Self {
		Extension::BeforeEach(Arc::new(implementation))
	}

	pub fn after_each(implementation: impl AfterEachCallback + 'static) -> Self {
		Extension::AfterEach(Arc::new(implementation))
	}

	pub fn parameter_resolver(implementation: impl ParameterResolver + 'static) -> Self {
		Extension::ParameterResolver(Arc::new(implementation))
	}

	pub fn exception_handler(implementation: impl ExceptionHandler + 'static) -> Self {
		Extension::ExceptionHandler(Arc::new(implementation))
	}

	pub fn kind(&self) -> ExtensionKind {
		match self {
			Extension::Condition(_) => ExtensionKind::Condition,
			Extension::BeforeEach(_) => ExtensionKind::BeforeEach,
			Extension::AfterEach(_) => ExtensionKind::AfterEach,
			Extension::ParameterResolver(_) => ExtensionKind::ParameterResolver,
			Extension::ExceptionHandler(_) => ExtensionKind::ExceptionHandler,
		}
	}

	pub fn as_condition(&self) -> Option<&dyn ExecutionCondition> {
		match self {
			Extension::Condition(c) => Some(&**c),
			_ => None,
		}
	}

	pub fn as_before_each(&self) -> Option<&dyn BeforeEachCallback> {
		match self {
			Extension::BeforeEach(c) => Some(&**c),
			_ => None,
		}
	}

	pub fn as_after_each(&self) -> Option<&dyn AfterEachCallback> {
		match self {
			Extension::AfterEach(c) => Some(&**c),
			_ => None,
		}
	}

	pub fn as_parameter_resolver(&self) -> Option<&dyn ParameterResolver> {
		match self {
			Extension::ParameterResolver(r) => Some(&**r),
			_ => None,
		}
	}

	pub fn as_exception_handler(&self) -> Option<&dyn ExceptionHandler> {
		match self {
			Extension::ExceptionHandler(h) => Some(&**h),
			_ => None,
		}
	}
}

impl fmt::Debug for Extension {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Extension({})", self.kind())
	}
}
