//! External configuration discovery.
//!
//! Values are discovered from `{SERVICE}_*` environment variables and, as a fallback,
//! from a `KEY=VALUE` credentials file located via [`CREDENTIALS_FILE_ENV`].
//! Discovery runs once at client construction, never mid-call.
//! Precedence: explicit builder values > process environment > credentials file.

use crate::resolver::AuthData;
use std::collections::HashMap;
use std::path::Path;

/// Environment variable pointing at an optional credentials file (`KEY=VALUE` lines).
pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";

/// The configuration values discoverable for a service.
#[derive(Debug, Default)]
pub struct ExternalConfig {
	pub service_url: Option<String>,
	pub auth: Option<AuthData>,
}

/// Load the external configuration for `service_name`
/// (e.g. `"configuration_governance"` resolves `CONFIGURATION_GOVERNANCE_URL`, ...).
pub fn load_external_config(service_name: &str) -> ExternalConfig {
	let prefix = service_name.to_uppercase().replace(['-', ' ', '.'], "_");

	let file_props = std::env::var(CREDENTIALS_FILE_ENV)
		.ok()
		.map(|path| read_credentials_file(Path::new(&path)))
		.unwrap_or_default();

	let prop = |key: &str| -> Option<String> {
		let full_key = format!("{prefix}_{key}");
		std::env::var(&full_key)
			.ok()
			.filter(|value| !value.is_empty())
			.or_else(|| file_props.get(&full_key).cloned())
	};

	let service_url = prop("URL");

	let auth_type = prop("AUTH_TYPE").map(|value| value.to_lowercase());
	let auth = match auth_type.as_deref() {
		Some("noauth") => Some(AuthData::NoAuth),
		Some("basic") => match (prop("USERNAME"), prop("PASSWORD")) {
			(Some(username), Some(password)) => Some(AuthData::Basic { username, password }),
			_ => None,
		},
		Some("bearer") | Some("bearertoken") => prop("BEARER_TOKEN").map(AuthData::Bearer),
		Some("iam") | Some("apikey") => prop("APIKEY").map(AuthData::ApiKey),
		Some(_) => None,
		// No explicit type; infer from whichever credential is present.
		None => prop("APIKEY")
			.map(AuthData::ApiKey)
			.or_else(|| prop("BEARER_TOKEN").map(AuthData::Bearer)),
	};

	ExternalConfig { service_url, auth }
}

fn read_credentials_file(path: &Path) -> HashMap<String, String> {
	let Ok(content) = std::fs::read_to_string(path) else {
		return HashMap::new();
	};
	content
		.lines()
		.filter_map(|line| {
			let line = line.trim();
			if line.is_empty() || line.starts_with('#') {
				return None;
			}
			let (key, value) = line.split_once('=')?;
			Some((key.trim().to_string(), value.trim().to_string()))
		})
		.collect()
}

// region:    --- Tests


// endregion: --- Tests
