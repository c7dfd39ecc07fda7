//! Pure construction of protocol request URIs and bodies.
//!
//! Every operation is a total function of the effective configuration, the
//! discovery document, and its explicit arguments: no I/O, no mutable state,
//! safe to call from any number of concurrent callers. Missing configuration
//! degrades to an empty or partial string instead of an error; deciding how to
//! react to an unusable endpoint belongs to the calling flow layer.

// self
use crate::{
	config::{AuthWellKnownEndpoints, EffectiveConfiguration, PublicConfiguration},
	encode::{QueryString, append_query_params},
};

/// RFC 7009 `token_type_hint` values accepted by revocation endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenTypeHint {
	/// Revoke an access token.
	AccessToken,
	/// Revoke a refresh token.
	RefreshToken,
}
impl TokenTypeHint {
	/// Returns the wire label for the hint.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenTypeHint::AccessToken => "access_token",
			TokenTypeHint::RefreshToken => "refresh_token",
		}
	}
}

/// Renders protocol-correct URIs and bodies from resolved configuration.
#[derive(Clone, Copy, Debug)]
pub struct RequestUriBuilder<'a> {
	configuration: &'a EffectiveConfiguration,
	wellknown: Option<&'a AuthWellKnownEndpoints>,
}
impl<'a> RequestUriBuilder<'a> {
	/// Creates a builder over the resolved configuration and document.
	pub fn new(
		configuration: &'a EffectiveConfiguration,
		wellknown: Option<&'a AuthWellKnownEndpoints>,
	) -> Self {
		Self { configuration, wellknown }
	}

	/// Creates a builder from a resolution notification payload.
	pub fn from_public(payload: &'a PublicConfiguration) -> Self {
		Self::new(&payload.configuration, Some(&payload.wellknown))
	}

	/// Builds the authorization request URL.
	///
	/// `code_challenge` is the already-computed PKCE value supplied by the
	/// external PKCE collaborator; it may be empty when no challenge was
	/// generated yet, and the `code_challenge`/`code_challenge_method` pair is
	/// appended only when the configured response type is the code flow.
	/// Returns the empty string when the discovery document lacks an
	/// authorization endpoint.
	pub fn authorize_url(
		&self,
		code_challenge: &str,
		redirect_url: &str,
		nonce: &str,
		state: &str,
		prompt: Option<&str>,
	) -> String {
		let Some(endpoint) = self.endpoint(|document| document.authorization_endpoint.as_deref())
		else {
			return String::new();
		};
		let config = self.configuration;
		let mut query = QueryString::new();

		query.push("client_id", config.client_id.as_deref().unwrap_or_default());
		query.push("redirect_uri", redirect_url);
		query.push("response_type", config.response_type.as_deref().unwrap_or_default());
		query.push("scope", config.scope.as_deref().unwrap_or_default());
		query.push("nonce", nonce);
		query.push("state", state);

		if config.is_code_flow() {
			query.push("code_challenge", code_challenge);
			query.push_raw("code_challenge_method", "S256");
		}
		if let Some(prompt) = prompt {
			query.push("prompt", prompt);
		}
		if let Some(hd_param) = config.hd_param.as_deref() {
			query.push("hd", hd_param);
		}

		for (key, value) in &config.custom_params {
			query.push(key, value);
		}

		append_query_params(endpoint, &query.finish())
	}

	/// Builds the RP-initiated logout URL.
	///
	/// Returns the empty string when the discovery document lacks an
	/// end-session endpoint. The `id_token_hint` is passed through verbatim;
	/// the post-logout redirect URI is percent-encoded.
	pub fn end_session_url(&self, id_token_hint: &str) -> String {
		let Some(endpoint) = self.endpoint(|document| document.end_session_endpoint.as_deref())
		else {
			return String::new();
		};
		let post_logout = self.configuration.post_logout_redirect_uri.as_deref().unwrap_or_default();
		let mut query = QueryString::new();

		query.push_raw("id_token_hint", id_token_hint);
		query.push("post_logout_redirect_uri", post_logout);

		append_query_params(endpoint, &query.finish())
	}

	/// Builds the form-encoded revocation request body (no leading `?`).
	pub fn revocation_body(&self, token: &str, hint: TokenTypeHint) -> String {
		let mut body = QueryString::new();

		body.push("client_id", self.configuration.client_id.as_deref().unwrap_or_default());
		body.push("token", token);
		body.push("token_type_hint", hint.as_str());

		body.finish()
	}

	/// Builds the revocation body for an access token.
	pub fn revocation_body_access_token(&self, token: &str) -> String {
		self.revocation_body(token, TokenTypeHint::AccessToken)
	}

	/// Builds the revocation body for a refresh token.
	pub fn revocation_body_refresh_token(&self, token: &str) -> String {
		self.revocation_body(token, TokenTypeHint::RefreshToken)
	}

	/// Returns the revocation endpoint with any query string stripped.
	///
	/// Revocation is a POST with a form body; provider-embedded query
	/// parameters on the discovery value carry no meaning for that call and
	/// must not leak into the target URI.
	pub fn revocation_endpoint(&self) -> String {
		let Some(endpoint) = self.endpoint(|document| document.revocation_endpoint.as_deref())
		else {
			return String::new();
		};

		endpoint.split('?').next().unwrap_or_default().to_owned()
	}

	fn endpoint(
		&self,
		select: impl Fn(&'a AuthWellKnownEndpoints) -> Option<&'a str>,
	) -> Option<&'a str> {
		self.wellknown.and_then(select)
	}
}
