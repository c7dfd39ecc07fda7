//! Storage contract for the registered configuration and cached discovery document.

pub mod memory;

pub use memory::MemoryConfigStore;

// self
use crate::config::{AuthWellKnownEndpoints, EffectiveConfiguration};

/// Storage backend contract consumed by the resolver.
///
/// The store is the single source of truth for the cached discovery document
/// and is deliberately not synchronized by this crate beyond what its
/// implementation provides: the resolver reads and conditionally writes it in
/// one logical step per call, and the design assumes one active issuer
/// configuration at a time.
pub trait ConfigStore
where
	Self: Send + Sync,
{
	/// Registers the effective configuration, returning the copy the store
	/// will serve from now on (implementations may apply further defaults).
	fn set_config(&self, config: EffectiveConfiguration) -> EffectiveConfiguration;

	/// Returns the cached discovery document, if one is present.
	fn cached_discovery_document(&self) -> Option<AuthWellKnownEndpoints>;

	/// Persists the discovery document as the cached copy.
	fn set_cached_discovery_document(&self, document: AuthWellKnownEndpoints);
}
