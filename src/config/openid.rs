//! Caller-supplied configuration and its normalized form.

// self
use crate::{_prelude::*, error::ConfigError};

/// Client configuration handed to the resolver.
///
/// Only `sts_server` is required in practice; everything else is optional and
/// degrades gracefully downstream. `custom_params` keeps insertion order
/// because the entries are echoed verbatim, in order, onto authorize URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenIdConfiguration {
	/// Base issuer URL of the security token service.
	pub sts_server: Option<String>,
	/// Authority to resolve the discovery document from; defaults to `sts_server`.
	pub auth_wellknown_endpoint: Option<String>,
	/// OAuth 2.0 client identifier.
	pub client_id: Option<String>,
	/// Redirect URI registered for the client.
	pub redirect_url: Option<String>,
	/// OAuth response type (`code`, `id_token token`, ...).
	pub response_type: Option<String>,
	/// Space-delimited scope string.
	pub scope: Option<String>,
	/// Redirect target after a provider-side logout.
	pub post_logout_redirect_uri: Option<String>,
	/// Hosted-domain hint forwarded as the `hd` parameter.
	pub hd_param: Option<String>,
	/// Extension query parameters appended to authorize URLs in insertion order.
	pub custom_params: Vec<(String, String)>,
	/// Fetches the discovery document during resolution instead of deferring it.
	pub eager_load_auth_wellknown_endpoints: bool,
}
impl OpenIdConfiguration {
	/// Creates a configuration for the provided issuer base URL.
	pub fn new(sts_server: impl Into<String>) -> Self {
		Self { sts_server: Some(sts_server.into()), ..Default::default() }
	}

	/// Sets the well-known authority explicitly.
	pub fn with_auth_wellknown_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.auth_wellknown_endpoint = Some(endpoint.into());

		self
	}

	/// Sets the client identifier.
	pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Sets the redirect URI.
	pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
		self.redirect_url = Some(redirect_url.into());

		self
	}

	/// Sets the OAuth response type.
	pub fn with_response_type(mut self, response_type: impl Into<String>) -> Self {
		self.response_type = Some(response_type.into());

		self
	}

	/// Sets the scope string.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Sets the post-logout redirect URI.
	pub fn with_post_logout_redirect_uri(mut self, uri: impl Into<String>) -> Self {
		self.post_logout_redirect_uri = Some(uri.into());

		self
	}

	/// Sets the hosted-domain hint.
	pub fn with_hd_param(mut self, hd_param: impl Into<String>) -> Self {
		self.hd_param = Some(hd_param.into());

		self
	}

	/// Appends one extension parameter, preserving insertion order.
	pub fn with_custom_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.custom_params.push((key.into(), value.into()));

		self
	}

	/// Overrides the eager-load flag.
	pub fn with_eager_load(mut self, eager: bool) -> Self {
		self.eager_load_auth_wellknown_endpoints = eager;

		self
	}
}

/// Normalized configuration used for all protocol operations of one issuer.
///
/// Produced only by [`normalize`](Self::normalize); immutable afterwards. A new
/// resolution with a different `sts_server` produces a new value instead of
/// mutating a prior one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfiguration {
	/// Base issuer URL of the security token service.
	pub sts_server: String,
	/// Authority the discovery document is resolved from; never empty.
	pub auth_wellknown_endpoint: String,
	/// OAuth 2.0 client identifier.
	pub client_id: Option<String>,
	/// Redirect URI registered for the client.
	pub redirect_url: Option<String>,
	/// OAuth response type (`code`, `id_token token`, ...).
	pub response_type: Option<String>,
	/// Space-delimited scope string.
	pub scope: Option<String>,
	/// Redirect target after a provider-side logout.
	pub post_logout_redirect_uri: Option<String>,
	/// Hosted-domain hint forwarded as the `hd` parameter.
	pub hd_param: Option<String>,
	/// Extension query parameters appended to authorize URLs in insertion order.
	pub custom_params: Vec<(String, String)>,
	/// Fetches the discovery document during resolution instead of deferring it.
	pub eager_load_auth_wellknown_endpoints: bool,
}
impl EffectiveConfiguration {
	/// Validates and normalizes a caller configuration.
	///
	/// Fails only when `sts_server` is absent or empty. An absent
	/// `auth_wellknown_endpoint` falls back to `sts_server`.
	pub fn normalize(config: &OpenIdConfiguration) -> Result<Self, ConfigError> {
		let sts_server = config
			.sts_server
			.as_deref()
			.filter(|server| !server.is_empty())
			.ok_or(ConfigError::MissingStsServer)?
			.to_owned();
		let auth_wellknown_endpoint = config
			.auth_wellknown_endpoint
			.as_deref()
			.filter(|endpoint| !endpoint.is_empty())
			.unwrap_or(&sts_server)
			.to_owned();

		Ok(Self {
			sts_server,
			auth_wellknown_endpoint,
			client_id: config.client_id.clone(),
			redirect_url: config.redirect_url.clone(),
			response_type: config.response_type.clone(),
			scope: config.scope.clone(),
			post_logout_redirect_uri: config.post_logout_redirect_uri.clone(),
			hd_param: config.hd_param.clone(),
			custom_params: config.custom_params.clone(),
			eager_load_auth_wellknown_endpoints: config.eager_load_auth_wellknown_endpoints,
		})
	}

	/// Whether the configured response type denotes the authorization-code flow.
	pub fn is_code_flow(&self) -> bool {
		self.response_type.as_deref() == Some("code")
	}
}
