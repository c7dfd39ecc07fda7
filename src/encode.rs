//! Component percent-encoding and raw query-string utilities.
//!
//! The encoding rule here is the wire contract for every URI this crate
//! renders: characters outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )` are
//! percent-encoded and space becomes `%20`, never `+`. Query strings are
//! handled as raw text on purpose; routing provider-supplied endpoints
//! through a URL type would normalize them and break byte-exact appends.

// std
use std::borrow::Cow;
// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// ASCII characters that stay unescaped in an encoded component.
///
/// Non-ASCII input is always percent-encoded as UTF-8.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// Percent-encodes a single query-parameter value.
pub fn encode_uri_component(value: &str) -> Cow<'_, str> {
	utf8_percent_encode(value, COMPONENT).into()
}

/// Appends a rendered query string to an endpoint.
///
/// Joins with `&` when the endpoint already carries a query string so
/// provider-embedded parameters (e.g. an Azure AD B2C policy id) stay ahead of
/// the generated ones, and with `?` otherwise.
pub fn append_query_params(endpoint: &str, params: &str) -> String {
	let separator = if endpoint.contains('?') { '&' } else { '?' };

	format!("{endpoint}{separator}{params}")
}

/// Incrementally rendered `key=value` list joined with `&`.
///
/// Keys are static protocol tokens and pass through verbatim; values are
/// encoded with [`encode_uri_component`] unless pushed raw.
#[derive(Clone, Debug, Default)]
pub struct QueryString(String);
impl QueryString {
	/// Creates an empty query string.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a parameter, percent-encoding its value.
	pub fn push(&mut self, key: &str, value: &str) {
		self.push_raw(key, &encode_uri_component(value));
	}

	/// Appends a parameter whose value is already wire-ready.
	pub fn push_raw(&mut self, key: &str, value: &str) {
		if !self.0.is_empty() {
			self.0.push('&');
		}

		self.0.push_str(key);
		self.0.push('=');
		self.0.push_str(value);
	}

	/// Returns the rendered query string without a leading `?`.
	pub fn finish(self) -> String {
		self.0
	}
}

/// Extracts the raw value of a named parameter from a URL's query and/or fragment.
///
/// Matching is performed on the undecoded text: the name must be introduced by
/// `?`, `&`, or `#`, and the value runs until the next `&`, `#`, or the end of
/// the input. Returns the empty string when either argument is empty or no
/// parameter matches, so values containing unescaped characters such as
/// `$-_.+!*(),` survive untouched.
pub fn parse_url_parameter(url: &str, name: &str) -> String {
	if url.is_empty() || name.is_empty() {
		return String::new();
	}

	let mut search = 0;

	while let Some(found) = url[search..].find(name) {
		let start = search + found;
		let introduced = url[..start].ends_with(['?', '&', '#']);
		let rest = &url[start + name.len()..];

		if let Some(value) = rest.strip_prefix('=').filter(|_| introduced) {
			let end = value.find(['&', '#']).unwrap_or(value.len());

			return value[..end].to_owned();
		}

		search = start + name.len();
	}

	String::new()
}
