use crucible_ident::UniqueId;
use crucible_model::ParamDecl;
use serde::{Deserialize, Serialize};

use crate::context::ExtensionContext;
use crate::point::{ArgumentValue, CallbackError, ParameterResolver};

/// Framework-owned metadata about the currently executing node, supplied
/// to any test method that declares a parameter of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestInfo {
	pub unique_id: UniqueId,
	pub display_name: Box<str>,
	pub tags: Vec<Box<str>>,
}

impl TestInfo {
	/// Declared-type name the built-in resolver matches on.
	pub const TYPE_NAME: &'static str = "TestInfo";

	pub fn from_context(context: &ExtensionContext) -> Self {
		Self {
			unique_id: context.unique_id().clone(),
			display_name: context.display_name().into(),
			tags: context.tags().to_vec(),
		}
	}
}

/// Built-in resolver for [`TestInfo`] parameters.
///
/// Always consulted before user-registered resolvers, so a test asking for
/// engine metadata never depends on registration state.
pub struct TestInfoResolver;

impl ParameterResolver for TestInfoResolver {
	fn supports(&self, parameter: &ParamDecl, _context: &ExtensionContext) -> bool {
		&*parameter.type_name == TestInfo::TYPE_NAME
	}

	fn resolve(
		&self,
		_parameter: &ParamDecl,
		context: &ExtensionContext,
	) -> Result<ArgumentValue, CallbackError> {
		Ok(Box::new(TestInfo::from_context(context)))
	}
}
