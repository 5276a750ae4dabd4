//! Token models produced by the authorization-code exchange.

// self
use crate::_prelude::*;

/// Redacted token secret wrapper keeping sensitive material out of logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when the provider omitted this token from the response.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Tokens issued by a successful authorization-code exchange.
///
/// Every field defaults when absent so a well-formed partial body still
/// decodes; authentik omits `id_token` when the `openid` scope was not granted.
/// The record is consumed immediately by the caller and never persisted here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
	/// Bearer access token accepted by the user-info endpoint.
	pub access_token: TokenSecret,
	/// OpenID Connect identity token.
	pub id_token: TokenSecret,
	/// Token lifetime in seconds, relative to issuance.
	pub expires_in: u64,
	/// Token type reported by the provider, normally `Bearer`.
	pub token_type: String,
}
impl Token {
	/// Absolute expiry instant for a token issued at `issued_at`.
	pub fn expires_at(&self, issued_at: OffsetDateTime) -> OffsetDateTime {
		issued_at + Duration::seconds(i64::try_from(self.expires_in).unwrap_or(i64::MAX))
	}
}

/// Error payload returned by the token endpoint on non-success statuses.
///
/// Both fields default to empty strings when the response body does not match
/// this shape, so a rejection always surfaces even when the provider sends
/// garbage alongside it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenErrorBody {
	/// Machine-readable OAuth error code.
	pub error: String,
	/// Human-readable description of the rejection.
	pub error_description: String,
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = TokenSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "TokenSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(secret.expose(), "super-secret");
	}

	#[test]
	fn token_decodes_full_response() {
		let token: Token = serde_json::from_str(
			"{\"access_token\":\"t1\",\"id_token\":\"i1\",\"expires_in\":3600,\"token_type\":\"Bearer\"}",
		)
		.expect("Full token payload should decode successfully.");

		assert_eq!(token.access_token.expose(), "t1");
		assert_eq!(token.id_token.expose(), "i1");
		assert_eq!(token.expires_in, 3600);
		assert_eq!(token.token_type, "Bearer");
	}

	#[test]
	fn token_defaults_absent_fields() {
		let token: Token = serde_json::from_str("{\"access_token\":\"t1\",\"expires_in\":60}")
			.expect("Partial token payload should decode successfully.");

		assert_eq!(token.access_token.expose(), "t1");
		assert!(token.id_token.is_empty());
		assert!(token.token_type.is_empty());
	}

	#[test]
	fn expiry_is_relative_to_issuance() {
		let token = Token { expires_in: 3600, ..Token::default() };
		let issued = macros::datetime!(2025-01-01 00:00 UTC);

		assert_eq!(token.expires_at(issued), macros::datetime!(2025-01-01 01:00 UTC));
	}

	#[test]
	fn error_body_defaults_on_shape_mismatch() {
		let body = serde_json::from_str::<TokenErrorBody>("{\"unexpected\":true}")
			.expect("Unknown fields should be tolerated.");

		assert_eq!(body.error, "");
		assert_eq!(body.error_description, "");

		let body: TokenErrorBody = serde_json::from_str(
			"{\"error\":\"invalid_grant\",\"error_description\":\"bad code\"}",
		)
		.expect("Conforming error payload should decode successfully.");

		assert_eq!(body.error, "invalid_grant");
		assert_eq!(body.error_description, "bad code");
	}
}
