//! Ordered scope lists passed straight into authorization URLs.

// std
use std::{convert::Infallible, slice::Iter, str::FromStr};
// self
use crate::_prelude::*;

/// Ordered list of OAuth scopes rendered space-joined into authorization URLs.
///
/// Entries keep their caller-supplied order and duplicates; nothing is
/// normalized, validated, or percent-encoded. Values pass through verbatim, so
/// callers must pre-encode scopes that contain reserved characters before
/// building a URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeList(Vec<String>);
impl ScopeList {
	/// Creates a scope list from any iterator, preserving order.
	pub fn new<I, S>(scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(scopes.into_iter().map(Into::into).collect())
	}

	/// Number of scope entries, duplicates included.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if no scopes are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over scope entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|s| s.as_str())
	}

	/// Space-joined rendering used in the authorization URL's `scope` parameter.
	pub fn joined(&self) -> String {
		self.0.join(" ")
	}

	/// Returns the underlying slice of scope strings.
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}
}
impl Display for ScopeList {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.joined())
	}
}
impl From<Vec<String>> for ScopeList {
	fn from(value: Vec<String>) -> Self {
		Self(value)
	}
}
impl<S> FromIterator<S> for ScopeList
where
	S: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter)
	}
}
impl FromStr for ScopeList {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::new(s.split_whitespace()))
	}
}

/// Iterator over scope strings.
pub struct ScopeListIter<'a> {
	inner: Iter<'a, String>,
}
impl<'a> Iterator for ScopeListIter<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|s| s.as_str())
	}
}
impl<'a> IntoIterator for &'a ScopeList {
	type IntoIter = ScopeListIter<'a>;
	type Item = &'a str;

	fn into_iter(self) -> Self::IntoIter {
		ScopeListIter { inner: self.0.iter() }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn scopes_keep_order_and_duplicates() {
		let scope = ScopeList::new(["profile", "email", "profile"]);

		assert_eq!(scope.len(), 3);
		assert_eq!(scope.joined(), "profile email profile");
		assert_eq!(scope.iter().collect::<Vec<_>>(), vec!["profile", "email", "profile"]);
	}

	#[test]
	fn values_pass_through_verbatim() {
		let scope = ScopeList::new(["openid", "goauthentik.io/api"]);

		assert_eq!(scope.joined(), "openid goauthentik.io/api");
		assert_eq!(scope.to_string(), scope.joined());
	}

	#[test]
	fn from_str_splits_on_whitespace() {
		let scope: ScopeList = "openid profile email".parse().expect("Parsing is infallible.");

		assert_eq!(scope.as_slice(), ["openid", "profile", "email"]);

		let empty: ScopeList = "".parse().expect("Parsing is infallible.");

		assert!(empty.is_empty());
	}
}
