use crate::webc::{Error, Result};
use reqwest::{Method, Url};
use serde_json::Value;

/// The transport-level request data: method, fully resolved URL, headers, query
/// parameters, and an optional JSON payload.
///
/// Path templates use `{name}` placeholders (`/config/v1/rules/{rule_id}`); each
/// substituted value is percent-encoded as a single path segment. Absent optional
/// query parameters are never appended (sparse queries, no empty values).
#[derive(Debug, Clone)]
pub struct WebRequest {
	pub method: Method,
	pub url: Url,
	pub headers: Vec<(String, String)>,
	pub query: Vec<(String, String)>,
	pub payload: Option<Value>,
}

/// Constructors
impl WebRequest {
	pub fn new(method: Method, base_url: &str, path_template: &str, path_params: &[(&str, &str)]) -> Result<Self> {
		let url = resolve_url(base_url, path_template, path_params)?;
		Ok(Self {
			method,
			url,
			headers: Vec::new(),
			query: Vec::new(),
			payload: None,
		})
	}
}

/// Chainable Setters
impl WebRequest {
	/// Set or replace a header (header keys are unique, case-insensitive).
	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		let name = name.into();
		self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
		self.headers.push((name, value.into()));
		self
	}

	/// Set the header only when a value is present.
	#[must_use]
	pub fn with_header_opt(self, name: impl Into<String>, value: Option<&str>) -> Self {
		match value {
			Some(value) => self.with_header(name, value),
			None => self,
		}
	}

	#[must_use]
	pub fn with_headers(mut self, headers: &[(String, String)]) -> Self {
		for (name, value) in headers {
			self = self.with_header(name.clone(), value.clone());
		}
		self
	}

	/// Append a query parameter.
	#[must_use]
	pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((name.into(), value.into()));
		self
	}

	/// Append the query parameter only when a value is present.
	#[must_use]
	pub fn with_query_opt(self, name: impl Into<String>, value: Option<String>) -> Self {
		match value {
			Some(value) => self.with_query(name, value),
			None => self,
		}
	}

	#[must_use]
	pub fn with_payload(mut self, payload: Value) -> Self {
		self.payload = Some(payload);
		self
	}
}

/// Resolve `path_template` against `base_url`, substituting each `{name}` segment
/// from `path_params`. Substituted values are pushed as whole segments, so they are
/// percent-encoded ('/' included) and cannot escape their position in the path.
fn resolve_url(base_url: &str, path_template: &str, path_params: &[(&str, &str)]) -> Result<Url> {
	let mut url = Url::parse(base_url).map_err(|e| Error::RequestBuildFailed {
		cause: format!("invalid base url '{base_url}': {e}"),
	})?;

	{
		let mut segments = url.path_segments_mut().map_err(|()| Error::RequestBuildFailed {
			cause: format!("base url '{base_url}' cannot be a base"),
		})?;
		segments.pop_if_empty();

		for segment in path_template.split('/').filter(|segment| !segment.is_empty()) {
			if let Some(name) = segment.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
				let value = path_params
					.iter()
					.find(|(param, _)| *param == name)
					.map(|(_, value)| *value)
					.ok_or_else(|| Error::RequestBuildFailed {
						cause: format!("no value for path parameter '{name}'"),
					})?;
				segments.push(value);
			} else {
				segments.push(segment);
			}
		}
	}

	Ok(url)
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve_url_simple() {
		let url = resolve_url(
			"https://host.test",
			"/config/v1/rules/{rule_id}",
			&[("rule_id", "rule-1")],
		)
		.unwrap();
		assert_eq!(url.as_str(), "https://host.test/config/v1/rules/rule-1");
	}

	#[test]
	fn test_resolve_url_escapes_param() {
		let url = resolve_url(
			"https://host.test",
			"/config/v1/rules/{rule_id}",
			&[("rule_id", "a b/../c")],
		)
		.unwrap();
		// The substituted value stays one segment; '/' and ' ' are percent-encoded.
		assert_eq!(url.as_str(), "https://host.test/config/v1/rules/a%20b%2F..%2Fc");
	}

	#[test]
	fn test_resolve_url_base_with_trailing_slash() {
		let url = resolve_url("https://host.test/", "/config/v1/rules", &[]).unwrap();
		assert_eq!(url.as_str(), "https://host.test/config/v1/rules");
	}

	#[test]
	fn test_resolve_url_missing_param() {
		let err = resolve_url("https://host.test", "/v1/{thing_id}", &[]).unwrap_err();
		assert!(matches!(err, Error::RequestBuildFailed { .. }));
	}

	#[test]
	fn test_with_header_replaces_case_insensitive() {
		let request = WebRequest::new(Method::GET, "https://host.test", "/v1/things", &[])
			.unwrap()
			.with_header("Transaction-Id", "one")
			.with_header("transaction-id", "two");
		assert_eq!(request.headers.len(), 1);
		assert_eq!(request.headers[0].1, "two");
	}
}

// endregion: --- Tests
