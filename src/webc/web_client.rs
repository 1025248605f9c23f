use crate::resolver::AuthData;
use crate::webc::{CallContext, Error, Result, WebRequest, WebResponse};
use flate2::write::GzEncoder;
use flate2::Compression;
use reqwest::header::{ACCEPT, CONTENT_ENCODING, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// SDK identification header value, sent on every request.
const SDK_USER_AGENT: &str = concat!("scc-sdk-rust/", env!("CARGO_PKG_VERSION"));

// region:    --- RetryPolicy

pub(crate) const DEFAULT_MAX_RETRIES: u32 = 4;
pub(crate) const DEFAULT_MAX_RETRY_INTERVAL: Duration = Duration::from_secs(30);
const BASE_RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Retry policy for transient transport failures.
///
/// Retries apply only to the transient set (connect errors, transport timeouts,
/// HTTP 429/502/503/504), never to validation or configuration failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
	pub enabled: bool,
	pub max_retries: u32,
	pub max_interval: Duration,
}

impl Default for RetryPolicy {
	fn default() -> Self {
		Self {
			enabled: false,
			max_retries: DEFAULT_MAX_RETRIES,
			max_interval: DEFAULT_MAX_RETRY_INTERVAL,
		}
	}
}

impl RetryPolicy {
	/// An enabled policy. A zero `max_retries` or `max_interval` means
	/// "use the internal default", not "disable".
	pub(crate) fn enabled_with(max_retries: u32, max_interval: Duration) -> Self {
		Self {
			enabled: true,
			max_retries: if max_retries == 0 { DEFAULT_MAX_RETRIES } else { max_retries },
			max_interval: if max_interval.is_zero() {
				DEFAULT_MAX_RETRY_INTERVAL
			} else {
				max_interval
			},
		}
	}

	/// Exponential backoff: `base * 2^attempt`, capped at `max_interval`.
	fn interval_for_attempt(&self, attempt: u32) -> Duration {
		BASE_RETRY_INTERVAL
			.saturating_mul(2u32.saturating_pow(attempt))
			.min(self.max_interval)
	}

	fn should_retry_status(status: StatusCode) -> bool {
		matches!(
			status,
			StatusCode::TOO_MANY_REQUESTS
				| StatusCode::BAD_GATEWAY
				| StatusCode::SERVICE_UNAVAILABLE
				| StatusCode::GATEWAY_TIMEOUT
		)
	}

	fn should_retry_transport(error: &reqwest::Error) -> bool {
		error.is_connect() || error.is_timeout()
	}
}

// endregion: --- RetryPolicy

// region:    --- WebClient

/// The transport handle: owns the `reqwest::Client`, the shared authenticator,
/// the retry policy, and the gzip flag.
///
/// Cloning the service `Client` forks this handle: the fork shares the same
/// `Arc<AuthData>` but gets a fresh connection pool.
#[derive(Debug, Clone)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
	auth: Arc<AuthData>,
	pub(crate) retry_policy: RetryPolicy,
	pub(crate) enable_gzip: bool,
}

/// Constructors
impl WebClient {
	pub(crate) fn new(auth: Arc<AuthData>, retry_policy: RetryPolicy, enable_gzip: bool) -> Self {
		Self {
			reqwest_client: reqwest::Client::new(),
			auth,
			retry_policy,
			enable_gzip,
		}
	}

	/// A new transport handle (fresh connection pool) sharing the same authenticator.
	pub(crate) fn fork(&self) -> Self {
		Self::new(self.auth.clone(), self.retry_policy.clone(), self.enable_gzip)
	}
}

/// Getters
impl WebClient {
	pub(crate) fn auth(&self) -> &Arc<AuthData> {
		&self.auth
	}
}

impl WebClient {
	/// Execute the request, applying auth, gzip, the retry policy, and the context deadline.
	///
	/// The deadline is honored at every attempt boundary and inside backoff sleeps:
	/// expiring aborts the whole operation with `DeadlineExceeded` immediately, it
	/// never consumes the remaining retry budget.
	pub async fn execute(&self, request: &WebRequest, ctx: &CallContext) -> Result<WebResponse> {
		let max_retries = if self.retry_policy.enabled {
			self.retry_policy.max_retries
		} else {
			0
		};
		let mut attempt: u32 = 0;

		loop {
			if ctx.is_expired() {
				return Err(Error::DeadlineExceeded);
			}

			debug!(method = %request.method, url = %request.url, attempt, "executing request");

			let builder = self.build_reqwest(request, ctx)?;
			match builder.send().await {
				Ok(response) => {
					let status = response.status();
					if status.is_success() {
						let headers = response.headers().clone();
						// The body read runs under the same per-attempt timeout as send(),
						// so the deadline can also fire here.
						let body = match response.bytes().await {
							Ok(bytes) => bytes.to_vec(),
							Err(err) if err.is_timeout() && ctx.deadline().is_some() => {
								return Err(Error::DeadlineExceeded);
							}
							Err(err) => return Err(Error::Reqwest(err)),
						};
						debug!(%status, body_len = body.len(), "request succeeded");
						return Ok(WebResponse { status, headers, body });
					}

					if attempt < max_retries && RetryPolicy::should_retry_status(status) {
						warn!(%status, attempt, "transient response status, retrying");
					} else {
						let headers = response.headers().clone();
						let body = response.text().await.unwrap_or_default();
						return Err(Error::ResponseFailedStatus { status, headers, body });
					}
				}
				Err(err) => {
					// The per-attempt timeout is only installed when a deadline exists,
					// so a timeout under a deadline is the deadline firing.
					if err.is_timeout() && ctx.deadline().is_some() {
						return Err(Error::DeadlineExceeded);
					}
					if attempt < max_retries && RetryPolicy::should_retry_transport(&err) {
						warn!(error = %err, attempt, "transient transport failure, retrying");
					} else {
						return Err(Error::Reqwest(err));
					}
				}
			}

			// -- Backoff before the next attempt, never sleeping past the deadline.
			let mut backoff = self.retry_policy.interval_for_attempt(attempt);
			if let Some(remaining) = ctx.remaining() {
				if remaining.is_zero() {
					return Err(Error::DeadlineExceeded);
				}
				backoff = backoff.min(remaining);
			}
			tokio::time::sleep(backoff).await;
			attempt += 1;
		}
	}

	/// Build the per-attempt reqwest request: standard headers, query, auth,
	/// (optionally gzip-compressed) JSON body, and the remaining-deadline timeout.
	fn build_reqwest(&self, request: &WebRequest, ctx: &CallContext) -> Result<reqwest::RequestBuilder> {
		let mut builder = self
			.reqwest_client
			.request(request.method.clone(), request.url.clone())
			.header(ACCEPT, "application/json")
			.header(USER_AGENT, SDK_USER_AGENT);

		if !request.query.is_empty() {
			builder = builder.query(&request.query);
		}

		for (name, value) in &request.headers {
			builder = builder.header(name, value);
		}

		if let Some(payload) = &request.payload {
			let body = serde_json::to_vec(payload).map_err(|e| Error::RequestBuildFailed {
				cause: format!("payload serialization failed: {e}"),
			})?;
			builder = builder.header(CONTENT_TYPE, "application/json");
			builder = if self.enable_gzip {
				builder.header(CONTENT_ENCODING, "gzip").body(gzip_compress(&body)?)
			} else {
				builder.body(body)
			};
		}

		builder = self.auth.apply(builder);

		// Per-attempt timeout, so an in-flight attempt cannot outlive the deadline.
		if let Some(remaining) = ctx.remaining() {
			builder = builder.timeout(remaining);
		}

		Ok(builder)
	}
}

fn gzip_compress(body: &[u8]) -> Result<Vec<u8>> {
	let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
	encoder.write_all(body).map_err(|e| Error::RequestBuildFailed {
		cause: format!("gzip compression failed: {e}"),
	})?;
	encoder.finish().map_err(|e| Error::RequestBuildFailed {
		cause: format!("gzip compression failed: {e}"),
	})
}

// endregion: --- WebClient

// region:    --- Tests


// endregion: --- Tests
