//! Open-schema user profile claims.

// std
use std::ops::Deref;
// crates.io
use serde_json::{Map, Value};
// self
use crate::_prelude::*;

/// Profile claims returned by the user-info endpoint.
///
/// The provider shapes the payload; no schema is enforced beyond "JSON object",
/// so claims are exposed as an open string-keyed mapping with typed accessors
/// for the common cases.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo(Map<String, Value>);
impl UserInfo {
	/// Wraps an existing claim mapping.
	pub fn new(claims: Map<String, Value>) -> Self {
		Self(claims)
	}

	/// Returns the raw claim value, if present.
	pub fn claim(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Returns a claim as a string slice when it holds a JSON string.
	pub fn string_claim(&self, key: &str) -> Option<&str> {
		self.claim(key).and_then(Value::as_str)
	}

	/// Standard OpenID Connect subject identifier.
	pub fn subject(&self) -> Option<&str> {
		self.string_claim("sub")
	}

	/// Email claim, when the provider exposes one.
	pub fn email(&self) -> Option<&str> {
		self.string_claim("email")
	}

	/// Consumes the wrapper and returns the underlying mapping.
	pub fn into_claims(self) -> Map<String, Value> {
		self.0
	}
}
impl Deref for UserInfo {
	type Target = Map<String, Value>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl From<Map<String, Value>> for UserInfo {
	fn from(claims: Map<String, Value>) -> Self {
		Self(claims)
	}
}
