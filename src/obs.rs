//! Optional observability helpers for client calls.
//!
//! # Feature Flags
//!
//! Enable `tracing` to emit structured spans named `authentik_oauth2.call` with a
//! `call` field naming the operation, and to log user-info rejections with their
//! status and body. Without the feature every helper compiles to a no-op.

// self
use crate::_prelude::*;

/// Provider calls observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Authorization URL construction.
	Authorize,
	/// Authorization-code token exchange.
	TokenExchange,
	/// User-info lookup.
	UserInfo,
}
impl CallKind {
	/// Returns a stable label suitable for span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::Authorize => "authorize",
			CallKind::TokenExchange => "token_exchange",
			CallKind::UserInfo => "user_info",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by client operations.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided call kind.
	pub fn new(kind: CallKind) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("authentik_oauth2.call", call = kind.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = kind;

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> CallSpanGuard {
		#[cfg(feature = "tracing")]
		{
			CallSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			CallSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
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

/// RAII guard returned by [`CallSpan::entered`].
pub struct CallSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for CallSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("CallSpanGuard(..)")
	}
}

/// Records a user-info rejection for diagnostics; the caller only receives the status.
pub(crate) fn log_user_info_failure(status: u16, body: &[u8]) {
	#[cfg(feature = "tracing")]
	{
		tracing::error!(
			status,
			body = %String::from_utf8_lossy(body),
			"User info request was rejected by the provider."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (status, body);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn call_span_noop_without_tracing() {
		let _guard = CallSpan::new(CallKind::TokenExchange).entered();
		// Compile-time smoke test ensures the guard exists even when tracing is disabled.
	}

	#[test]
	fn call_kinds_render_stable_labels() {
		assert_eq!(CallKind::Authorize.as_str(), "authorize");
		assert_eq!(CallKind::TokenExchange.to_string(), "token_exchange");
		assert_eq!(CallKind::UserInfo.to_string(), "user_info");
	}
}
