//! Thread-safe in-memory [`ConfigStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	config::{AuthWellKnownEndpoints, EffectiveConfiguration},
	store::ConfigStore,
};

#[derive(Debug, Default)]
struct State {
	configuration: Option<EffectiveConfiguration>,
	wellknown: Option<AuthWellKnownEndpoints>,
}

/// Storage backend that keeps the configuration and document in-process.
#[derive(Debug, Default)]
pub struct MemoryConfigStore(RwLock<State>);
impl MemoryConfigStore {
	/// Returns the currently registered configuration, if any.
	pub fn configuration(&self) -> Option<EffectiveConfiguration> {
		self.0.read().configuration.clone()
	}
}
impl ConfigStore for MemoryConfigStore {
	fn set_config(&self, config: EffectiveConfiguration) -> EffectiveConfiguration {
		self.0.write().configuration = Some(config.clone());

		config
	}

	fn cached_discovery_document(&self) -> Option<AuthWellKnownEndpoints> {
		self.0.read().wellknown.clone()
	}

	fn set_cached_discovery_document(&self, document: AuthWellKnownEndpoints) {
		self.0.write().wellknown = Some(document);
	}
}
