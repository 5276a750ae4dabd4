//! Walks through the three-call login sequence: print the authorization URL, exchange the
//! code pasted back from the redirect, then look up the user's profile claims.

// std
use std::io::{BufRead, Write, stdin, stdout};
// crates.io
use color_eyre::Result;
use time::OffsetDateTime;
use url::Url;
// self
use authentik_oauth2::{auth::ScopeList, client::AuthClient};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let client = AuthClient::new(
		Url::parse("https://sso.example.com")?,
		"demo-client",
		"demo-secret",
	);
	let scope = ScopeList::new(["openid", "profile", "email"]);
	let redirect_uri = "https://app.example.com/callback";

	println!("Send your user to {}.", client.authorize_url(&scope, redirect_uri));
	print!("Paste the `code` query parameter from the redirect: ");
	stdout().flush()?;

	let mut code = String::new();

	stdin().lock().read_line(&mut code)?;

	let token = client.exchange_code(code.trim(), redirect_uri).await?;

	println!(
		"Received a {} token expiring at {}.",
		token.token_type,
		token.expires_at(OffsetDateTime::now_utc()),
	);

	let info = client.fetch_user_info(token.access_token.expose()).await?;

	println!(
		"Logged in as {} ({} claims returned).",
		info.subject().unwrap_or("<unknown>"),
		info.len(),
	);

	Ok(())
}
