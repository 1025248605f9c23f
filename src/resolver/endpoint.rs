use crate::{Error, Result};
use reqwest::Url;
use std::sync::Arc;

/// The default service URL, used when neither an explicit URL nor a region is given.
pub const DEFAULT_SERVICE_URL: &str = "https://us.compliance.cloud.ibm.com";

/// Static region-to-URL mapping. Region keys outside this table are an error.
const REGION_URLS: &[(&str, &str)] = &[
	("us", "https://us.compliance.cloud.ibm.com"),
	("us-south", "https://us.compliance.cloud.ibm.com"),
	("us-east", "https://us.compliance.cloud.ibm.com"),
	("eu", "https://eu.compliance.cloud.ibm.com"),
	("eu-gb", "https://eu.compliance.cloud.ibm.com"),
	("eu-de", "https://eu.compliance.cloud.ibm.com"),
	("ap", "https://ap.compliance.cloud.ibm.com"),
];

/// A construct to store the base URL of the service.
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone)]
pub struct Endpoint {
	inner: Arc<str>,
}

/// Constructors
impl Endpoint {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}

	/// Validate and wrap a caller-supplied URL.
	/// The URL must parse and be usable as a base (scheme + host).
	pub fn try_from_url(url: &str) -> Result<Self> {
		let parsed = Url::parse(url).map_err(|e| Error::ServiceUrlInvalid {
			url: url.to_string(),
			cause: e.to_string(),
		})?;
		if parsed.cannot_be_a_base() {
			return Err(Error::ServiceUrlInvalid {
				url: url.to_string(),
				cause: "url cannot be used as a base".to_string(),
			});
		}
		Ok(Self::from_owned(url))
	}

	/// Resolve the base URL for a region key.
	pub fn for_region(region: &str) -> Result<Self> {
		REGION_URLS
			.iter()
			.find(|(key, _)| *key == region)
			.map(|(_, url)| Self::from_static(url))
			.ok_or_else(|| Error::RegionNotFound {
				region: region.to_string(),
			})
	}
}

/// Getters
impl Endpoint {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}
}

// region:    --- Tests


// endregion: --- Tests
