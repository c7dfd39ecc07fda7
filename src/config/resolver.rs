//! Cache-first resolution of the effective configuration.

// self
use crate::{
	_prelude::*,
	config::{
		AuthWellKnownEndpoints, EffectiveConfiguration, OpenIdConfiguration, PublicConfiguration,
	},
	events::EventSink,
	http::DiscoveryHttpClient,
	obs::{LogSink, ResolveOutcome, ResolveSpan, record_resolve_outcome},
	store::ConfigStore,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestDiscoveryClient;

#[cfg(feature = "reqwest")]
/// Resolver specialized for the crate's default reqwest transport.
pub type ReqwestConfigurationResolver = ConfigurationResolver<ReqwestDiscoveryClient>;

/// Outcome of a successful [`ConfigurationResolver::resolve`] call.
///
/// The notification payload, when one exists, is both handed to the event sink
/// and returned here so the calling layer can decide whether to propagate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
	/// A discovery document is available; the sink was notified exactly once.
	Loaded(PublicConfiguration),
	/// No document yet; discovery is deferred to a later explicit fetch.
	Deferred,
}

/// Turns a caller configuration into one immutable effective configuration.
///
/// Collaborators are explicit constructor parameters so the resolver can be
/// built and unit-tested without any container: the config store is the single
/// source of truth for the cached discovery document, the HTTP client performs
/// at most one round trip per call, and the sinks receive the notification and
/// validation errors. Callers invoke [`resolve`](Self::resolve) once at
/// startup; concurrent calls racing on first discovery are an accepted
/// limitation, not guarded here.
#[derive(Clone)]
pub struct ConfigurationResolver<C>
where
	C: ?Sized + DiscoveryHttpClient,
{
	/// HTTP client used for the eager discovery fetch.
	pub http_client: Arc<C>,
	/// Store holding the registered configuration and cached discovery document.
	pub store: Arc<dyn ConfigStore>,
	/// Sink notified at most once per successful resolution.
	pub events: Arc<dyn EventSink>,
	/// Sink receiving the validation error message.
	pub logger: Arc<dyn LogSink>,
}
impl<C> ConfigurationResolver<C>
where
	C: ?Sized + DiscoveryHttpClient,
{
	/// Creates a resolver that reuses the caller-provided transport.
	pub fn with_http_client(
		store: Arc<dyn ConfigStore>,
		events: Arc<dyn EventSink>,
		logger: Arc<dyn LogSink>,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), store, events, logger }
	}

	/// Resolves the effective configuration for `config`.
	///
	/// First match wins: a cached discovery document completes the call
	/// immediately (an explicitly passed document is ignored in that branch),
	/// then a caller-supplied document, then an eager fetch when
	/// `eager_load_auth_wellknown_endpoints` is set, and otherwise discovery is
	/// deferred without firing the notification. The only fatal local condition
	/// is a missing `sts_server`; fetch failures propagate unchanged and fire
	/// nothing.
	pub async fn resolve(
		&self,
		config: OpenIdConfiguration,
		provided_wellknown: Option<AuthWellKnownEndpoints>,
	) -> Result<Resolution> {
		let effective = match EffectiveConfiguration::normalize(&config) {
			Ok(effective) => effective,
			Err(err) => {
				self.logger.log_error("please provide at least an stsServer");
				record_resolve_outcome(ResolveOutcome::Failure);

				return Err(err.into());
			},
		};
		let used = self.store.set_config(effective.clone());

		if let Some(cached) = self.store.cached_discovery_document() {
			return Ok(self.complete(effective, cached, false, ResolveOutcome::CacheHit));
		}
		if let Some(document) = provided_wellknown {
			return Ok(self.complete(effective, document, true, ResolveOutcome::Provided));
		}
		if used.eager_load_auth_wellknown_endpoints {
			let span = ResolveSpan::new("eager_fetch");
			let fetched = span
				.instrument(self.http_client.fetch(&used.auth_wellknown_endpoint))
				.await
				.inspect_err(|_| record_resolve_outcome(ResolveOutcome::Failure))?;

			return Ok(self.complete(effective, fetched, true, ResolveOutcome::Fetched));
		}

		record_resolve_outcome(ResolveOutcome::Deferred);

		Ok(Resolution::Deferred)
	}

	fn complete(
		&self,
		configuration: EffectiveConfiguration,
		wellknown: AuthWellKnownEndpoints,
		persist: bool,
		outcome: ResolveOutcome,
	) -> Resolution {
		if persist {
			self.store.set_cached_discovery_document(wellknown.clone());
		}

		let payload = PublicConfiguration { configuration, wellknown };

		self.events.config_loaded(&payload);
		record_resolve_outcome(outcome);

		Resolution::Loaded(payload)
	}
}
#[cfg(feature = "reqwest")]
impl ConfigurationResolver<ReqwestDiscoveryClient> {
	/// Creates a resolver with the crate's default reqwest-backed transport.
	pub fn new(
		store: Arc<dyn ConfigStore>,
		events: Arc<dyn EventSink>,
		logger: Arc<dyn LogSink>,
	) -> Self {
		Self::with_http_client(store, events, logger, ReqwestDiscoveryClient::default())
	}
}
impl<C> Debug for ConfigurationResolver<C>
where
	C: ?Sized + DiscoveryHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ConfigurationResolver").finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		_preludet::{RecordingEventSink, RecordingLogSink, build_test_resolver},
		error::{ConfigError, DiscoveryFetchError},
		http::DiscoveryFuture,
		store::MemoryConfigStore,
	};

	/// Discovery client that serves a canned response and counts invocations.
	struct StubDiscoveryClient {
		document: Result<AuthWellKnownEndpoints, ()>,
		calls: Mutex<Vec<String>>,
	}
	impl StubDiscoveryClient {
		fn serving(document: AuthWellKnownEndpoints) -> Self {
			Self { document: Ok(document), calls: Mutex::new(Vec::new()) }
		}

		fn failing() -> Self {
			Self { document: Err(()), calls: Mutex::new(Vec::new()) }
		}

		fn calls(&self) -> Vec<String> {
			self.calls.lock().clone()
		}
	}
	impl DiscoveryHttpClient for StubDiscoveryClient {
		fn fetch<'a>(
			&'a self,
			wellknown_url: &'a str,
		) -> DiscoveryFuture<'a, AuthWellKnownEndpoints> {
			self.calls.lock().push(wellknown_url.to_owned());

			let outcome = self
				.document
				.clone()
				.map_err(|()| Error::from(DiscoveryFetchError::UnexpectedStatus { status: 500 }));

			Box::pin(async move { outcome })
		}
	}

	struct Fixture {
		resolver: ConfigurationResolver<StubDiscoveryClient>,
		http_client: Arc<StubDiscoveryClient>,
		store: Arc<MemoryConfigStore>,
		events: Arc<RecordingEventSink>,
		logger: Arc<RecordingLogSink>,
	}

	fn fixture(client: StubDiscoveryClient) -> Fixture {
		let http_client = Arc::new(client);
		let (resolver, store, events, logger) = build_test_resolver(http_client.clone());

		Fixture { resolver, http_client, store, events, logger }
	}

	fn document(issuer: &str) -> AuthWellKnownEndpoints {
		AuthWellKnownEndpoints { issuer: Some(issuer.into()), ..Default::default() }
	}

	#[tokio::test]
	async fn missing_sts_server_fails_logs_and_fires_nothing() {
		let fixture = fixture(StubDiscoveryClient::serving(document("unused")));
		let outcome = fixture.resolver.resolve(OpenIdConfiguration::default(), None).await;

		assert!(matches!(outcome, Err(Error::Config(ConfigError::MissingStsServer))));
		assert_eq!(fixture.logger.messages(), ["please provide at least an stsServer"]);
		assert!(fixture.events.payloads().is_empty());
		assert!(fixture.store.configuration().is_none());
		assert!(fixture.http_client.calls().is_empty());
	}

	#[tokio::test]
	async fn cached_document_wins_even_over_an_explicit_one() {
		let fixture = fixture(StubDiscoveryClient::serving(document("unused")));

		fixture.store.set_cached_discovery_document(document("cached"));

		let outcome = fixture
			.resolver
			.resolve(OpenIdConfiguration::new("https://sts.example"), Some(document("passed")))
			.await
			.expect("Cache-hit resolution should succeed.");
		let payloads = fixture.events.payloads();

		assert!(matches!(outcome, Resolution::Loaded(_)));
		assert_eq!(payloads.len(), 1);
		assert_eq!(payloads[0].wellknown, document("cached"));
		assert_eq!(payloads[0].configuration.auth_wellknown_endpoint, "https://sts.example");
		// The cached copy is authoritative; the explicit document is not persisted.
		assert_eq!(fixture.store.cached_discovery_document(), Some(document("cached")));
		assert!(fixture.http_client.calls().is_empty());
	}

	#[tokio::test]
	async fn explicit_document_is_stored_and_announced() {
		let fixture = fixture(StubDiscoveryClient::serving(document("unused")));
		let outcome = fixture
			.resolver
			.resolve(OpenIdConfiguration::new("https://sts.example"), Some(document("passed")))
			.await
			.expect("Resolution with an explicit document should succeed.");

		match outcome {
			Resolution::Loaded(payload) => assert_eq!(payload.wellknown, document("passed")),
			Resolution::Deferred => panic!("Explicit document should complete the resolution."),
		}

		assert_eq!(fixture.store.cached_discovery_document(), Some(document("passed")));
		assert_eq!(fixture.events.payloads().len(), 1);
		assert!(fixture.http_client.calls().is_empty());
	}

	#[tokio::test]
	async fn eager_load_fetches_stores_and_announces() {
		let fixture = fixture(StubDiscoveryClient::serving(document("fetched")));
		let config = OpenIdConfiguration::new("https://sts.example").with_eager_load(true);
		let outcome = fixture
			.resolver
			.resolve(config, None)
			.await
			.expect("Eager resolution should succeed.");

		assert!(matches!(outcome, Resolution::Loaded(_)));
		assert_eq!(fixture.http_client.calls(), ["https://sts.example"]);
		assert_eq!(fixture.store.cached_discovery_document(), Some(document("fetched")));
		assert_eq!(fixture.events.payloads().len(), 1);
		assert_eq!(fixture.events.payloads()[0].wellknown, document("fetched"));
	}

	#[tokio::test]
	async fn eager_fetch_failure_propagates_without_event() {
		let fixture = fixture(StubDiscoveryClient::failing());
		let config = OpenIdConfiguration::new("https://sts.example").with_eager_load(true);
		let outcome = fixture.resolver.resolve(config, None).await;

		assert!(matches!(
			outcome,
			Err(Error::Discovery(DiscoveryFetchError::UnexpectedStatus { status: 500 }))
		));
		assert!(fixture.events.payloads().is_empty());
		assert_eq!(fixture.store.cached_discovery_document(), None);
	}

	#[tokio::test]
	async fn lazy_path_defers_without_event() {
		let fixture = fixture(StubDiscoveryClient::serving(document("unused")));
		let outcome = fixture
			.resolver
			.resolve(OpenIdConfiguration::new("https://sts.example"), None)
			.await
			.expect("Lazy resolution should succeed.");

		assert_eq!(outcome, Resolution::Deferred);
		assert!(fixture.events.payloads().is_empty());
		assert_eq!(fixture.store.cached_discovery_document(), None);
		assert!(fixture.http_client.calls().is_empty());
		// The configuration itself is still registered for later use.
		assert!(fixture.store.configuration().is_some());
	}

	#[tokio::test]
	async fn resolving_again_with_a_new_issuer_builds_a_fresh_configuration() {
		let fixture = fixture(StubDiscoveryClient::serving(document("unused")));

		fixture
			.resolver
			.resolve(OpenIdConfiguration::new("https://first.example"), Some(document("first")))
			.await
			.expect("First resolution should succeed.");

		let outcome = fixture
			.resolver
			.resolve(OpenIdConfiguration::new("https://second.example"), None)
			.await
			.expect("Second resolution should succeed.");

		// The cached document short-circuits; the registered configuration is new.
		assert!(matches!(outcome, Resolution::Loaded(_)));

		let registered = fixture
			.store
			.configuration()
			.expect("Second resolution should register its configuration.");

		assert_eq!(registered.sts_server, "https://second.example");
	}
}
