use std::sync::Arc;

use crucible_discovery::{Descriptor, ElementResolverRegistry, TestableResolver};
use crucible_ident::UniqueId;
use crucible_model::{Classifier, ClassifierConfig, DeclUniverse};
use serde::{Deserialize, Serialize};

/// Engine-wide configuration: the engine's own name plus the marker names
/// the classifier keys on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
	pub engine_name: Box<str>,
	pub classifier: ClassifierConfig,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			engine_name: "crucible".into(),
			classifier: ClassifierConfig::default(),
		}
	}
}

impl EngineConfig {
	/// The root identifier every minted identifier extends.
	pub fn engine_id(&self) -> UniqueId {
		UniqueId::for_engine(&self.engine_name)
	}

	/// The synthetic root descriptor a discovery pass hangs off.
	pub fn engine_descriptor(&self) -> Descriptor {
		Descriptor::engine_root(self.engine_id(), self.engine_name.clone())
	}

	pub fn classifier(&self) -> Classifier {
		Classifier::new(self.classifier.clone())
	}

	/// The identifier-to-element translator for this configuration.
	pub fn testable_resolver(&self, universe: Arc<dyn DeclUniverse>) -> TestableResolver {
		TestableResolver::new(self.engine_id(), self.classifier(), universe)
	}

	/// An element resolver registry preloaded with the standard resolvers.
	pub fn resolver_registry(&self) -> ElementResolverRegistry {
		ElementResolverRegistry::with_builtins(&self.classifier())
	}
}
