//! Discovery document shape and the resolution notification payload.

// self
use crate::{_prelude::*, config::EffectiveConfiguration};

/// Partial OIDC discovery document (`.well-known/openid-configuration`).
///
/// Every field is optional and unknown fields are ignored, because providers
/// publish far more metadata than this core consumes. Endpoint values stay raw
/// strings: non-conformant providers embed query parameters in them (Azure AD
/// B2C policy ids) and the builders must append to that text byte-exactly,
/// without URL normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthWellKnownEndpoints {
	/// Issuer identifier the document describes.
	pub issuer: Option<String>,
	/// JSON Web Key Set URL.
	pub jwks_uri: Option<String>,
	/// Authorization endpoint used to start interactive flows.
	pub authorization_endpoint: Option<String>,
	/// Token endpoint used for code and refresh exchanges.
	pub token_endpoint: Option<String>,
	/// UserInfo endpoint.
	pub userinfo_endpoint: Option<String>,
	/// RP-initiated logout endpoint.
	pub end_session_endpoint: Option<String>,
	/// Session-status iframe URL.
	pub check_session_iframe: Option<String>,
	/// Token revocation endpoint.
	pub revocation_endpoint: Option<String>,
	/// Token introspection endpoint.
	pub introspection_endpoint: Option<String>,
}
impl AuthWellKnownEndpoints {
	/// Creates a document containing only an authorization endpoint.
	pub fn with_authorization_endpoint(endpoint: impl Into<String>) -> Self {
		Self { authorization_endpoint: Some(endpoint.into()), ..Default::default() }
	}

	/// Creates a document containing only an end-session endpoint.
	pub fn with_end_session_endpoint(endpoint: impl Into<String>) -> Self {
		Self { end_session_endpoint: Some(endpoint.into()), ..Default::default() }
	}

	/// Creates a document containing only a revocation endpoint.
	pub fn with_revocation_endpoint(endpoint: impl Into<String>) -> Self {
		Self { revocation_endpoint: Some(endpoint.into()), ..Default::default() }
	}
}

/// Payload delivered to the event sink after a successful resolution.
///
/// Emitted at most once per resolution call and never on failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicConfiguration {
	/// Normalized caller configuration.
	pub configuration: EffectiveConfiguration,
	/// Discovery document the resolution settled on.
	pub wellknown: AuthWellKnownEndpoints,
}
