//! Configuration data model and the discovery-metadata resolver.
//!
//! [`OpenIdConfiguration`] is what callers hand in, [`EffectiveConfiguration`]
//! is the normalized form every later protocol operation consumes, and
//! [`ConfigurationResolver`] turns the former into the latter exactly once per
//! resolution cycle using a cache-first, fetch-on-demand policy.

/// Caller-supplied and normalized configuration types.
pub mod openid;
/// Discovery document and notification payload types.
pub mod wellknown;

mod resolver;

pub use openid::*;
pub use resolver::*;
pub use wellknown::*;
