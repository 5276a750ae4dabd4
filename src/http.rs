//! Transport primitives shared by every provider call.
//!
//! The module exposes [`ReqwestHttpClient`], the single place transport
//! configuration lives. One instance is held per
//! [`AuthClient`](crate::client::AuthClient) and reused for every outbound
//! request, so connections are pooled instead of reopened per call. The crate
//! imposes no timeout and performs no retries of its own; callers needing either
//! configure them on the wrapped [`ReqwestClient`] before injection.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl Debug for ReqwestHttpClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ReqwestHttpClient").finish()
	}
}
