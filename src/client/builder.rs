use crate::resolver::{load_external_config, AuthData, Endpoint, DEFAULT_SERVICE_URL};
use crate::webc::{RetryPolicy, WebClient};
use crate::{Client, Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`Client`].
///
/// All validation happens in [`ClientBuilder::build`], synchronously, before any
/// network use: missing/invalid authenticator, missing account id, malformed URL,
/// and unknown region all fail at build time, never at first call.
#[derive(Debug, Default)]
pub struct ClientBuilder {
	auth: Option<AuthData>,
	account_id: Option<String>,
	service_url: Option<String>,
	region: Option<String>,
	default_headers: Vec<(String, String)>,
	enable_gzip: bool,
	retries: Option<(u32, Duration)>,
	external_config_service: Option<String>,
}

/// Chainable Setters
impl ClientBuilder {
	#[must_use]
	pub fn with_auth(mut self, auth: AuthData) -> Self {
		self.auth = Some(auth);
		self
	}

	/// Set the fixed account scope (required).
	#[must_use]
	pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
		self.account_id = Some(account_id.into());
		self
	}

	/// Set an explicit service URL (overrides region and any discovered URL).
	#[must_use]
	pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
		self.service_url = Some(url.into());
		self
	}

	/// Resolve the service URL from a region key (checked at build).
	#[must_use]
	pub fn with_region(mut self, region: impl Into<String>) -> Self {
		self.region = Some(region.into());
		self
	}

	/// Add a default header sent on every request.
	#[must_use]
	pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.default_headers.push((name.into(), value.into()));
		self
	}

	/// Replace the whole default header list.
	#[must_use]
	pub fn with_default_headers(mut self, headers: Vec<(String, String)>) -> Self {
		self.default_headers = headers;
		self
	}

	#[must_use]
	pub fn with_gzip(mut self, enable: bool) -> Self {
		self.enable_gzip = enable;
		self
	}

	/// Enable retries; zero for either argument means the internal default.
	#[must_use]
	pub fn with_retries(mut self, max_retries: u32, max_retry_interval: Duration) -> Self {
		self.retries = Some((max_retries, max_retry_interval));
		self
	}

	/// Disable retries (also the default).
	#[must_use]
	pub fn without_retries(mut self) -> Self {
		self.retries = None;
		self
	}

	/// Merge in configuration discovered from the environment / credentials file
	/// for `service_name` (e.g. `"configuration_governance"`).
	/// Explicit builder values always take precedence over discovered ones.
	#[must_use]
	pub fn with_external_config(mut self, service_name: impl Into<String>) -> Self {
		self.external_config_service = Some(service_name.into());
		self
	}
}

/// Build
impl ClientBuilder {
	pub fn build(self) -> Result<Client> {
		// -- Merge external configuration (discovered values never override explicit ones)
		let mut auth = self.auth;
		let mut service_url = self.service_url;
		if let Some(service_name) = &self.external_config_service {
			let external = load_external_config(service_name);
			if auth.is_none() {
				auth = external.auth;
			}
			if service_url.is_none() && self.region.is_none() {
				service_url = external.service_url;
			}
		}

		// -- Authenticator
		let auth = auth.ok_or(Error::AuthMissing)?;
		auth.validate()?;

		// -- Fixed service parameters
		let account_id = self
			.account_id
			.filter(|account_id| !account_id.is_empty())
			.ok_or(Error::AccountIdMissing)?;

		// -- Endpoint
		let endpoint = match (service_url, self.region) {
			(Some(url), _) => Endpoint::try_from_url(&url)?,
			(None, Some(region)) => Endpoint::for_region(&region)?,
			(None, None) => Endpoint::try_from_url(DEFAULT_SERVICE_URL)?,
		};

		// -- Transport
		let retry_policy = match self.retries {
			Some((max_retries, max_interval)) => RetryPolicy::enabled_with(max_retries, max_interval),
			None => RetryPolicy::default(),
		};
		let web_client = WebClient::new(Arc::new(auth), retry_policy, self.enable_gzip);

		Ok(Client {
			endpoint: Some(endpoint),
			account_id,
			default_headers: self.default_headers,
			web_client,
		})
	}
}

// region:    --- Tests


// endregion: --- Tests
