//! Transport seam for fetching the provider's discovery document.
//!
//! The resolver depends only on [`DiscoveryHttpClient`], a one-round-trip
//! contract with no retry or timeout policy of its own; both belong to the
//! transport. The default [`ReqwestDiscoveryClient`] lives behind the
//! `reqwest` feature so downstream crates can bring their own stack.

// self
use crate::{_prelude::*, config::AuthWellKnownEndpoints};
#[cfg(feature = "reqwest")]
use crate::error::{ConfigError, DiscoveryFetchError};

/// Boxed future returned by [`DiscoveryHttpClient`] implementations.
pub type DiscoveryFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// HTTP transport capable of retrieving a discovery document.
///
/// Implementations perform exactly one round trip per call. Failures map into
/// [`DiscoveryFetchError`](crate::error::DiscoveryFetchError) (or
/// [`ConfigError`](crate::error::ConfigError) for local URL problems) and are
/// terminal for the resolution that issued the fetch.
pub trait DiscoveryHttpClient
where
	Self: Send + Sync,
{
	/// Fetches and decodes the discovery document behind `wellknown_url`.
	fn fetch<'a>(&'a self, wellknown_url: &'a str) -> DiscoveryFuture<'a, AuthWellKnownEndpoints>;
}

/// Well-known path suffix defined by OIDC Discovery.
pub const WELL_KNOWN_SUFFIX: &str = "/.well-known/openid-configuration";

/// Builds the concrete document URL for a configured authority.
///
/// Authorities that already point into the well-known path are used verbatim;
/// anything else gets [`WELL_KNOWN_SUFFIX`] appended (trailing slashes on the
/// authority are collapsed first).
pub fn wellknown_document_url(authority: &str) -> String {
	if authority.contains(WELL_KNOWN_SUFFIX) {
		authority.to_owned()
	} else {
		format!("{}{WELL_KNOWN_SUFFIX}", authority.trim_end_matches('/'))
	}
}

/// Thin wrapper around [`ReqwestClient`] implementing [`DiscoveryHttpClient`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestDiscoveryClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestDiscoveryClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestDiscoveryClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl DiscoveryHttpClient for ReqwestDiscoveryClient {
	fn fetch<'a>(&'a self, wellknown_url: &'a str) -> DiscoveryFuture<'a, AuthWellKnownEndpoints> {
		Box::pin(async move {
			let target = Url::parse(&wellknown_document_url(wellknown_url))
				.map_err(|source| ConfigError::InvalidWellKnownUrl { source })?;
			let response =
				self.0.get(target).send().await.map_err(DiscoveryFetchError::from)?;
			let status = response.status();

			if !status.is_success() {
				return Err(
					DiscoveryFetchError::UnexpectedStatus { status: status.as_u16() }.into()
				);
			}

			let body = response.bytes().await.map_err(DiscoveryFetchError::from)?;
			let mut deserializer = serde_json::Deserializer::from_slice(&body);

			serde_path_to_error::deserialize(&mut deserializer)
				.map_err(|source| DiscoveryFetchError::Parse { source }.into())
		})
	}
}
