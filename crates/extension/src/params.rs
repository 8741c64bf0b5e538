use std::sync::Arc;

use crucible_model::ParamDecl;
use thiserror::Error;

use crate::context::ExtensionContext;
use crate::info::TestInfoResolver;
use crate::point::{ArgumentValue, CallbackError, Extension, ExtensionKind, ParameterResolver};
use crate::registry::ExtensionRegistry;

/// Failure to supply a value for one formal parameter.
///
/// Fatal for that specific invocation only; sibling cases resolve their
/// own parameters independently.
#[derive(Debug, Error)]
pub enum ParameterResolutionError {
	#[error("no parameter resolver supports parameter '{parameter}' of {declared_by}")]
	NoResolver {
		parameter: Box<str>,
		declared_by: Box<str>,
	},
	#[error("resolver failed for parameter '{parameter}' of {declared_by}")]
	ResolverFailed {
		parameter: Box<str>,
		declared_by: Box<str>,
		#[source]
		source: CallbackError,
	},
}

/// Resolves arguments through the ordered parameter-resolver chain.
///
/// Built-in resolvers for framework-owned metadata types are consulted
/// before anything registered by users. The first resolver whose
/// `supports` returns true is committed to: if it then fails, that failure
/// surfaces instead of falling through to later resolvers.
pub struct ParameterPipeline {
	builtins: Vec<Arc<dyn ParameterResolver>>,
}

impl Default for ParameterPipeline {
	fn default() -> Self {
		Self {
			builtins: vec![Arc::new(TestInfoResolver)],
		}
	}
}

impl ParameterPipeline {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds another built-in, consulted after the standard ones but still
	/// before user registrations.
	#[must_use]
	pub fn with_builtin(mut self, resolver: Arc<dyn ParameterResolver>) -> Self {
		self.builtins.push(resolver);
		self
	}

	pub fn resolve(
		&self,
		registry: &ExtensionRegistry,
		parameter: &ParamDecl,
		context: &ExtensionContext,
	) -> Result<ArgumentValue, ParameterResolutionError> {
		let registered = registry.all_for(ExtensionKind::ParameterResolver);
		let user = registered.iter().filter_map(Extension::as_parameter_resolver);
		let builtins = self.builtins.iter().map(|r| &**r);

		for resolver in builtins.chain(user) {
			if !resolver.supports(parameter, context) {
				continue;
			}
			tracing::debug!(
				domain = "extension",
				parameter = &*parameter.name,
				declared_by = &*parameter.declared_by,
				"parameter resolver matched",
			);
			return resolver.resolve(parameter, context).map_err(|source| {
				ParameterResolutionError::ResolverFailed {
					parameter: parameter.name.clone(),
					declared_by: parameter.declared_by.clone(),
					source,
				}
			});
		}

		Err(ParameterResolutionError::NoResolver {
			parameter: parameter.name.clone(),
			declared_by: parameter.declared_by.clone(),
		})
	}
}
