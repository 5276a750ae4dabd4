//! Minimal async OAuth 2.0 client for authentik deployments - authorization URL
//! construction, authorization-code token exchange, and user-info lookup over a
//! single shared transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod obs;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{client::AuthClient, http::ReqwestHttpClient};

	/// Builds an [`AuthClient`] pointed at a mock server's base URL with a fresh
	/// reqwest transport.
	pub fn build_test_auth_client(
		base_url: &str,
		client_id: &str,
		client_secret: &str,
	) -> AuthClient {
		let base = Url::parse(base_url).expect("Failed to parse mock server base URL.");

		AuthClient::with_http_client(base, client_id, client_secret, ReqwestHttpClient::default())
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
