//! Optional observability helpers for configuration resolution.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oidc_discovery.resolve` with the `stage`
//!   field, and to route [`TracingLogSink`] errors to the active subscriber.
//! - Enable `metrics` to increment the `oidc_discovery_resolve_total` counter for every
//!   resolution, labeled by `outcome`.

// self
use crate::_prelude::*;

/// Error sink consumed by the resolver.
///
/// Receives exactly one message per failed validation; everything else the
/// resolver reports through its return value.
pub trait LogSink
where
	Self: Send + Sync,
{
	/// Records an error-level message.
	fn log_error(&self, message: &str);
}

/// Log sink that drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogSink;
impl LogSink for NoopLogSink {
	fn log_error(&self, _message: &str) {}
}

/// Log sink that forwards messages to the `tracing` subscriber.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogSink;
#[cfg(feature = "tracing")]
impl LogSink for TracingLogSink {
	fn log_error(&self, message: &str) {
		tracing::error!(target: "oidc_discovery", "{message}");
	}
}

/// Resolution outcomes observed per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveOutcome {
	/// A cached discovery document short-circuited the call.
	CacheHit,
	/// A caller-supplied document completed the call.
	Provided,
	/// The document was fetched eagerly from the provider.
	Fetched,
	/// Discovery was deferred to a later explicit fetch.
	Deferred,
	/// Validation or fetch failure ended the call.
	Failure,
}
impl ResolveOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolveOutcome::CacheHit => "cache_hit",
			ResolveOutcome::Provided => "provided",
			ResolveOutcome::Fetched => "fetched",
			ResolveOutcome::Deferred => "deferred",
			ResolveOutcome::Failure => "failure",
		}
	}
}
impl Display for ResolveOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records a resolution outcome via the global metrics recorder (when enabled).
pub fn record_resolve_outcome(outcome: ResolveOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("oidc_discovery_resolve_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedResolve<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedResolve<F> = F;

/// A span builder wrapping the resolver's asynchronous sections.
#[derive(Clone, Debug)]
pub struct ResolveSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ResolveSpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oidc_discovery.resolve", stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedResolve<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}
