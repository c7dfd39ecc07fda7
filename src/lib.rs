//! OpenID Connect discovery core—resolve provider well-known metadata once, cache it, and render
//! protocol-exact authorization, end-session, and revocation requests.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod encode;
pub mod error;
pub mod events;
pub mod http;
pub mod obs;
pub mod request;
pub mod store;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		config::{ConfigurationResolver, PublicConfiguration},
		events::EventSink,
		http::DiscoveryHttpClient,
		obs::LogSink,
		store::{ConfigStore, MemoryConfigStore},
	};
	#[cfg(feature = "reqwest")] use crate::http::ReqwestDiscoveryClient;

	/// Event sink that records every notification payload for later assertions.
	#[derive(Debug, Default)]
	pub struct RecordingEventSink(Mutex<Vec<PublicConfiguration>>);
	impl RecordingEventSink {
		/// Returns the payloads captured so far.
		pub fn payloads(&self) -> Vec<PublicConfiguration> {
			self.0.lock().clone()
		}
	}
	impl EventSink for RecordingEventSink {
		fn config_loaded(&self, payload: &PublicConfiguration) {
			self.0.lock().push(payload.clone());
		}
	}

	/// Log sink that records every error message for later assertions.
	#[derive(Debug, Default)]
	pub struct RecordingLogSink(Mutex<Vec<String>>);
	impl RecordingLogSink {
		/// Returns the messages captured so far.
		pub fn messages(&self) -> Vec<String> {
			self.0.lock().clone()
		}
	}
	impl LogSink for RecordingLogSink {
		fn log_error(&self, message: &str) {
			self.0.lock().push(message.to_owned());
		}
	}

	/// Constructs a resolver over an in-memory store, recording sinks, and the
	/// provided transport.
	pub fn build_test_resolver<C>(
		http_client: impl Into<Arc<C>>,
	) -> (
		ConfigurationResolver<C>,
		Arc<MemoryConfigStore>,
		Arc<RecordingEventSink>,
		Arc<RecordingLogSink>,
	)
	where
		C: ?Sized + DiscoveryHttpClient,
	{
		let store = Arc::new(MemoryConfigStore::default());
		let events = Arc::new(RecordingEventSink::default());
		let logger = Arc::new(RecordingLogSink::default());
		let resolver = ConfigurationResolver::with_http_client(
			store.clone() as Arc<dyn ConfigStore>,
			events.clone() as Arc<dyn EventSink>,
			logger.clone() as Arc<dyn LogSink>,
			http_client,
		);

		(resolver, store, events, logger)
	}

	#[cfg(feature = "reqwest")]
	/// Constructs a resolver backed by a plain reqwest transport.
	pub fn build_reqwest_test_resolver() -> (
		ConfigurationResolver<ReqwestDiscoveryClient>,
		Arc<MemoryConfigStore>,
		Arc<RecordingEventSink>,
		Arc<RecordingLogSink>,
	) {
		build_test_resolver(ReqwestDiscoveryClient::default())
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::{Mutex, RwLock};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use httpmock as _;
