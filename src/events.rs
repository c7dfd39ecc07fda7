//! Notification contract for completed resolutions.
//!
//! The resolver takes the sink as an explicit constructor parameter and calls
//! it at most once per successful resolution; there are no hidden global
//! subscribers. Callers that prefer a return value over a callback can ignore
//! the sink entirely and consume [`Resolution`](crate::config::Resolution).

// self
use crate::config::PublicConfiguration;

/// Fire-and-forget sink notified when a resolution settles on a document.
pub trait EventSink
where
	Self: Send + Sync,
{
	/// Receives the notification payload; invoked at most once per resolution.
	fn config_loaded(&self, payload: &PublicConfiguration);
}

/// Sink that drops every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEventSink;
impl EventSink for NoopEventSink {
	fn config_loaded(&self, _payload: &PublicConfiguration) {}
}
