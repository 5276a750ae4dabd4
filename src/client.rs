//! Single-provider OAuth 2.0 client operations.

// crates.io
use reqwest::multipart::Form;
// self
use crate::{
	_prelude::*,
	auth::{ScopeList, Token, TokenErrorBody, UserInfo},
	error::{AuthError, DecodeError, TransportError},
	http::ReqwestHttpClient,
	obs::{self, CallKind, CallSpan},
};

const AUTHORIZE_PATH: &str = "/application/o/authorize/";
const TOKEN_PATH: &str = "/application/o/token/";
const USERINFO_PATH: &str = "/application/o/userinfo/";
const AUTHORIZATION_CODE_GRANT: &str = "authorization_code";

/// OAuth 2.0 client bound to a single authentik deployment.
///
/// The client is an immutable configuration value plus one shared HTTP
/// transport. Every operation is a single stateless request/response round
/// trip with no caching, no retries, and no internal concurrency, so clones
/// and concurrent calls need no coordination. Response bodies are fully read
/// on every exit path, which releases the pooled connection even when the
/// provider rejects the request.
#[derive(Clone)]
pub struct AuthClient {
	/// HTTP client wrapper reused for every outbound provider request.
	pub http_client: ReqwestHttpClient,
	/// Provider base URL with any trailing slash trimmed.
	pub base_url: String,
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// Confidential client secret submitted during code exchanges; never logged.
	pub client_secret: String,
}
impl AuthClient {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(
		base_url: Url,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Self {
		Self::with_http_client(base_url, client_id, client_secret, ReqwestHttpClient::default())
	}

	/// Creates a client that reuses the caller-provided transport.
	///
	/// Timeouts, proxies, and TLS policy belong to the injected client; nothing
	/// here overrides them, and a transient network failure propagates to the
	/// caller immediately.
	pub fn with_http_client(
		base_url: Url,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		http_client: ReqwestHttpClient,
	) -> Self {
		let base_url = base_url.as_str().trim_end_matches('/').to_owned();

		Self {
			http_client,
			base_url,
			client_id: client_id.into(),
			client_secret: client_secret.into(),
		}
	}

	/// Builds the URL a user agent should visit to start the authorization-code flow.
	///
	/// Values are concatenated verbatim with no percent-encoding. Callers must
	/// pre-encode `redirect_uri` and scope entries that contain reserved
	/// characters. The URL is only constructed here, never fetched.
	pub fn authorize_url(&self, scope: &ScopeList, redirect_uri: &str) -> String {
		let _guard = CallSpan::new(CallKind::Authorize).entered();

		format!(
			"{}{}?client_id={}&scope={}&redirect_uri={}",
			self.base_url,
			AUTHORIZE_PATH,
			self.client_id,
			scope.joined(),
			redirect_uri,
		)
	}

	/// Exchanges an authorization code for issued tokens.
	///
	/// Submits the provider's expected `multipart/form-data` body and decodes the
	/// response into [`Token`] on HTTP 200. Any other status is decoded as the
	/// provider's error payload and surfaced as [`AuthError::TokenExchange`]; a
	/// 200 with a malformed body surfaces as [`DecodeError::Token`].
	pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<Token> {
		let span = CallSpan::new(CallKind::TokenExchange);

		span.instrument(async move {
			let form = Form::new()
				.text("client_id", self.client_id.clone())
				.text("client_secret", self.client_secret.clone())
				.text("code", code.to_owned())
				.text("redirect_uri", redirect_uri.to_owned())
				.text("grant_type", AUTHORIZATION_CODE_GRANT);
			let response = self
				.http_client
				.post(format!("{}{}", self.base_url, TOKEN_PATH))
				.multipart(form)
				.send()
				.await
				.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?;

			if status != 200 {
				let error_body =
					serde_json::from_slice::<TokenErrorBody>(&body).unwrap_or_default();

				return Err(AuthError::TokenExchange {
					status,
					error: error_body.error,
					description: error_body.error_description,
				}
				.into());
			}

			let mut deserializer = serde_json::Deserializer::from_slice(&body);
			let token: Token = serde_path_to_error::deserialize(&mut deserializer)
				.map_err(|source| Error::from(DecodeError::Token { source }))?;

			Ok(token)
		})
		.await
	}

	/// Fetches the profile claims the provider exposes for an access token.
	///
	/// Sends the token as a bearer credential. A non-200 response is logged with
	/// its body for diagnostics and surfaced as [`AuthError::UserInfo`] carrying
	/// only the status; a 200 with a malformed body surfaces as
	/// [`DecodeError::UserInfo`].
	pub async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfo> {
		let span = CallSpan::new(CallKind::UserInfo);

		span.instrument(async move {
			let response = self
				.http_client
				.get(format!("{}{}", self.base_url, USERINFO_PATH))
				.bearer_auth(access_token)
				.send()
				.await
				.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?;

			if status != 200 {
				obs::log_user_info_failure(status, &body);

				return Err(AuthError::UserInfo { status }.into());
			}

			let mut deserializer = serde_json::Deserializer::from_slice(&body);
			let user_info: UserInfo = serde_path_to_error::deserialize(&mut deserializer)
				.map_err(|source| Error::from(DecodeError::UserInfo { source }))?;

			Ok(user_info)
		})
		.await
	}
}
impl Debug for AuthClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthClient")
			.field("base_url", &self.base_url)
			.field("client_id", &self.client_id)
			.field("client_secret_set", &!self.client_secret.is_empty())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::build_test_auth_client;

	fn build_client(base: &str) -> AuthClient {
		build_test_auth_client(base, "client-123", "secret-456")
	}

	#[test]
	fn authorize_url_concatenates_without_encoding() {
		let client = build_client("https://sso.example.com");
		let scope = ScopeList::new(["a", "b"]);

		assert_eq!(
			client.authorize_url(&scope, "https://x/cb"),
			"https://sso.example.com/application/o/authorize/?client_id=client-123&scope=a b&redirect_uri=https://x/cb",
		);
	}

	#[test]
	fn authorize_url_keeps_scope_order() {
		let client = build_client("https://sso.example.com");
		let scope = ScopeList::new(["openid", "profile", "email"]);
		let url = client.authorize_url(&scope, "https://app.example.com/callback");

		assert!(url.contains("&scope=openid profile email&"));
	}

	#[test]
	fn base_url_trailing_slash_is_trimmed() {
		let client = build_client("https://sso.example.com/");
		let scope = ScopeList::new(["openid"]);
		let url = client.authorize_url(&scope, "https://x/cb");

		assert!(url.starts_with("https://sso.example.com/application/o/authorize/?"));
	}

	#[test]
	fn debug_redacts_the_client_secret() {
		let client = build_client("https://sso.example.com");
		let rendered = format!("{client:?}");

		assert!(rendered.contains("client_secret_set: true"));
		assert!(!rendered.contains("secret-456"));
	}
}
