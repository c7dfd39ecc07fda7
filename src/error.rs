//! Crate-level error types shared by the resolver and the discovery transport.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// Builder operations never surface here: an incomplete configuration makes
/// [`RequestUriBuilder`](crate::request::RequestUriBuilder) return empty or partial
/// strings instead, leaving the reaction to the calling flow layer.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; the resolution is unusable.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Discovery document could not be fetched or decoded.
	#[error(transparent)]
	Discovery(#[from] DiscoveryFetchError),
}

/// Configuration and validation failures raised during resolution.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configuration omitted the required issuer base URL.
	#[error("Configuration is missing the required stsServer value.")]
	MissingStsServer,
	/// Well-known endpoint cannot be parsed as a URL.
	#[error("Well-known endpoint is not a valid URL.")]
	InvalidWellKnownUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Failures while fetching or decoding the provider's discovery document.
///
/// Fetch failures are terminal for the resolution call that triggered them;
/// retry policy, if any, belongs to the transport collaborator.
#[derive(Debug, ThisError)]
pub enum DiscoveryFetchError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while fetching the discovery document.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Discovery endpoint answered with a non-success status code.
	#[error("Discovery endpoint returned an unexpected HTTP status: {status}.")]
	UnexpectedStatus {
		/// HTTP status code returned by the provider.
		status: u16,
	},
	/// Discovery endpoint responded with JSON that could not be decoded.
	#[error("Discovery document contains malformed JSON.")]
	Parse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl DiscoveryFetchError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for DiscoveryFetchError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
