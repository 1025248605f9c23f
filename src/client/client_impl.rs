use crate::resolver::{AuthData, Endpoint};
use crate::webc::{RetryPolicy, WebClient, WebRequest};
use crate::{ClientBuilder, Error, Result};
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;

/// The Configuration Governance service client.
///
/// Holds the resolved endpoint, the fixed account scope, the shared authenticator,
/// and the transport handle. Create it with [`Client::builder`].
///
/// Configuration (URL, headers, retry policy) is not meant to be mutated concurrently
/// with in-flight calls; callers that need per-task configuration should `clone()`
/// first — a clone shares the authenticator but owns an independent transport handle.
#[derive(Debug)]
pub struct Client {
	pub(in crate::client) endpoint: Option<Endpoint>,
	pub(in crate::client) account_id: String,
	pub(in crate::client) default_headers: Vec<(String, String)>,
	pub(in crate::client) web_client: WebClient,
}

/// Constructors
impl Client {
	#[must_use]
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}
}

/// Getters & Setters
impl Client {
	/// The current service base URL, if set.
	#[must_use]
	pub fn service_url(&self) -> Option<&str> {
		self.endpoint.as_ref().map(Endpoint::base_url)
	}

	/// Set the service base URL.
	///
	/// An empty string clears the URL; subsequent operations fail with
	/// `ServiceUrlMissing` before any request is sent. A malformed URL fails
	/// with `ServiceUrlInvalid` here, synchronously.
	pub fn set_service_url(&mut self, url: &str) -> Result<()> {
		if url.is_empty() {
			self.endpoint = None;
			return Ok(());
		}
		self.endpoint = Some(Endpoint::try_from_url(url)?);
		Ok(())
	}

	/// The fixed account scope supplied at construction.
	#[must_use]
	pub fn account_id(&self) -> &str {
		&self.account_id
	}

	/// The authenticator shared by this client and its clones.
	#[must_use]
	pub fn auth(&self) -> &Arc<AuthData> {
		self.web_client.auth()
	}

	#[must_use]
	pub fn default_headers(&self) -> &[(String, String)] {
		&self.default_headers
	}

	pub fn set_default_headers(&mut self, headers: Vec<(String, String)>) {
		self.default_headers = headers;
	}

	#[must_use]
	pub fn gzip_enabled(&self) -> bool {
		self.web_client.enable_gzip
	}

	pub fn set_enable_gzip(&mut self, enable: bool) {
		self.web_client.enable_gzip = enable;
	}

	/// Enable retries for transient failures.
	///
	/// A zero `max_retries` or `max_retry_interval` means "use the internal default"
	/// (4 retries / 30s cap), not "disable".
	pub fn enable_retries(&mut self, max_retries: u32, max_retry_interval: Duration) {
		self.web_client.retry_policy = RetryPolicy::enabled_with(max_retries, max_retry_interval);
	}

	pub fn disable_retries(&mut self) {
		self.web_client.retry_policy.enabled = false;
	}

	#[must_use]
	pub fn retries_enabled(&self) -> bool {
		self.web_client.retry_policy.enabled
	}
}

/// Internals
impl Client {
	pub(crate) fn web_client(&self) -> &WebClient {
		&self.web_client
	}

	/// Start a request against the current endpoint, with the client default headers applied.
	pub(crate) fn request(
		&self,
		operation: &'static str,
		method: Method,
		path_template: &str,
		path_params: &[(&str, &str)],
	) -> Result<WebRequest> {
		let endpoint = self.endpoint.as_ref().ok_or(Error::ServiceUrlMissing)?;
		let request = WebRequest::new(method, endpoint.base_url(), path_template, path_params)
			.map_err(Error::from_webc(operation))?;
		Ok(request.with_headers(&self.default_headers))
	}
}

// region:    --- Clone

impl Clone for Client {
	/// The clone shares the authenticator (same `Arc`) but owns a fresh transport
	/// handle, so concurrent callers never share mutable transport state.
	fn clone(&self) -> Self {
		Self {
			endpoint: self.endpoint.clone(),
			account_id: self.account_id.clone(),
			default_headers: self.default_headers.clone(),
			web_client: self.web_client.fork(),
		}
	}
}

// endregion: --- Clone
