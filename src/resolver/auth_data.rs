use crate::{Error, Result};
use reqwest::RequestBuilder;

/// The authentication material for the service.
///
/// Polymorphic over the supported authenticator schemes. `ApiKey` is the non-IAM
/// apikey form and is applied as basic auth with the fixed `apikey` username;
/// the IAM token exchange itself is performed by the platform, not by this SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthData {
	NoAuth,
	Basic { username: String, password: String },
	Bearer(String),
	ApiKey(String),
}

/// Constructors
impl AuthData {
	pub fn from_basic(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self::Basic {
			username: username.into(),
			password: password.into(),
		}
	}

	pub fn from_bearer(token: impl Into<String>) -> Self {
		Self::Bearer(token.into())
	}

	pub fn from_api_key(key: impl Into<String>) -> Self {
		Self::ApiKey(key.into())
	}

	/// Read an apikey from the given environment variable.
	/// Fails with `AuthMissing` when the variable is unset or empty.
	pub fn from_env(env_name: &str) -> Result<Self> {
		std::env::var(env_name)
			.ok()
			.filter(|value| !value.is_empty())
			.map(Self::ApiKey)
			.ok_or(Error::AuthMissing)
	}
}

impl AuthData {
	/// Validate that the authentication material is usable.
	pub fn validate(&self) -> Result<()> {
		match self {
			Self::NoAuth => Ok(()),
			Self::Basic { username, password } => {
				if username.is_empty() || password.is_empty() {
					Err(Error::AuthInvalid {
						cause: "basic auth requires a non-empty username and password",
					})
				} else {
					Ok(())
				}
			}
			Self::Bearer(token) => {
				if token.is_empty() {
					Err(Error::AuthInvalid {
						cause: "bearer auth requires a non-empty token",
					})
				} else {
					Ok(())
				}
			}
			Self::ApiKey(key) => {
				if key.is_empty() {
					Err(Error::AuthInvalid {
						cause: "apikey auth requires a non-empty key",
					})
				} else {
					Ok(())
				}
			}
		}
	}

	/// Apply the auth material to an outgoing request.
	pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
		match self {
			Self::NoAuth => builder,
			Self::Basic { username, password } => builder.basic_auth(username, Some(password)),
			Self::Bearer(token) => builder.bearer_auth(token),
			Self::ApiKey(key) => builder.basic_auth("apikey", Some(key)),
		}
	}
}

// region:    --- Tests


// endregion: --- Tests
