//! Client-level error types shared across operations.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Every failure is terminal for its call; the client never retries. The three
/// variants stay distinguishable so callers can tell a dead network apart from
/// a provider rejection or a garbled body.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Provider answered with a non-success status.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Provider answered with a success status but a malformed body.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Non-success responses returned by the provider.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// Token endpoint rejected the authorization-code exchange.
	#[error("Token endpoint returned HTTP {status}: {description}.")]
	TokenExchange {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Machine-readable OAuth error code, empty when the body did not carry one.
		error: String,
		/// Provider-supplied `error_description`, empty when the body did not match
		/// the expected shape.
		description: String,
	},
	/// User-info endpoint rejected the bearer token.
	#[error("User info endpoint returned HTTP {status}.")]
	UserInfo {
		/// HTTP status code returned by the user-info endpoint.
		status: u16,
	},
}
impl AuthError {
	/// Provider-supplied description of the failure, empty when none was sent.
	pub fn description(&self) -> &str {
		match self {
			Self::TokenExchange { description, .. } => description,
			Self::UserInfo { .. } => "",
		}
	}

	/// HTTP status code the provider responded with.
	pub fn status(&self) -> u16 {
		match self {
			Self::TokenExchange { status, .. } | Self::UserInfo { status } => *status,
		}
	}
}

/// Success responses whose JSON body could not be decoded.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Token endpoint returned malformed JSON.
	#[error("Token endpoint returned malformed JSON.")]
	Token {
		/// Structured parsing failure, including the failing path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// User-info endpoint returned malformed JSON.
	#[error("User info endpoint returned malformed JSON.")]
	UserInfo {
		/// Structured parsing failure, including the failing path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn auth_error_accessors_cover_both_endpoints() {
		let exchange = AuthError::TokenExchange {
			status: 400,
			error: "invalid_grant".into(),
			description: "bad code".into(),
		};

		assert_eq!(exchange.status(), 400);
		assert_eq!(exchange.description(), "bad code");

		let user_info = AuthError::UserInfo { status: 401 };

		assert_eq!(user_info.status(), 401);
		assert_eq!(user_info.description(), "");
	}

	#[test]
	fn variants_stay_distinguishable_through_the_canonical_error() {
		let transport = Error::from(TransportError::network(std::io::Error::other("refused")));
		let auth = Error::from(AuthError::UserInfo { status: 401 });

		assert!(matches!(transport, Error::Transport(_)));
		assert!(matches!(auth, Error::Auth(_)));
	}
}
