use crate::webc::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

// region:    --- WebResponse

/// The raw successful transport response: status, headers, and body bytes.
#[derive(Debug, Clone)]
pub struct WebResponse {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Vec<u8>,
}

impl WebResponse {
	/// Decode the body as JSON into `T`.
	///
	/// - An empty body yields `Ok(None)` — a valid success outcome for
	///   no-content operations (DELETE, and GET when the server returns nothing).
	/// - A present but undecodable body yields `ResponseFailedNotJson`, distinct
	///   from transport errors since the HTTP exchange itself succeeded.
	pub fn json_body<T: DeserializeOwned>(&self) -> Result<Option<T>> {
		if self.body.is_empty() {
			return Ok(None);
		}
		serde_json::from_slice::<T>(&self.body)
			.map(Some)
			.map_err(|e| Error::ResponseFailedNotJson {
				status: self.status,
				headers: self.headers.clone(),
				body: String::from_utf8_lossy(&self.body).into_owned(),
				cause: e.to_string(),
			})
	}
}

// endregion: --- WebResponse

// region:    --- DetailedResponse

/// The wrapper returned by every operation: transport metadata plus the decoded result.
///
/// `result` is `None` when the service returned a success status with an empty body.
/// Header lookup through [`DetailedResponse::header`] is case-insensitive.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
	pub status_code: u16,
	pub headers: HeaderMap,
	pub result: Option<T>,
}

impl<T: DeserializeOwned> DetailedResponse<T> {
	pub(crate) fn from_web_response(web_response: WebResponse) -> Result<Self> {
		let result = web_response.json_body::<T>()?;
		Ok(Self {
			status_code: web_response.status.as_u16(),
			headers: web_response.headers,
			result,
		})
	}
}

impl DetailedResponse<()> {
	/// For operations that never carry a response body (DELETE).
	pub(crate) fn no_content(web_response: WebResponse) -> Self {
		Self {
			status_code: web_response.status.as_u16(),
			headers: web_response.headers,
			result: None,
		}
	}
}

/// Getters
impl<T> DetailedResponse<T> {
	/// Single-value header lookup (case-insensitive).
	#[must_use]
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}
}

// endregion: --- DetailedResponse

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	fn web_response(body: &str) -> WebResponse {
		let mut headers = HeaderMap::new();
		headers.insert("content-type", "application/json".parse().unwrap());
		WebResponse {
			status: StatusCode::OK,
			headers,
			body: body.as_bytes().to_vec(),
		}
	}

	#[test]
	fn test_json_body_empty_is_none() {
		let res = web_response("");
		let decoded: Option<serde_json::Value> = res.json_body().unwrap();
		assert_eq!(decoded, None);
	}

	#[test]
	fn test_json_body_malformed() {
		let res = web_response("} not valid json {");
		let err = res.json_body::<serde_json::Value>().unwrap_err();
		match err {
			Error::ResponseFailedNotJson { status, headers, body, .. } => {
				assert_eq!(status, StatusCode::OK);
				assert_eq!(headers.get("content-type").and_then(|v| v.to_str().ok()), Some("application/json"));
				assert_eq!(body, "} not valid json {");
			}
			other => panic!("expected ResponseFailedNotJson, got {other:?}"),
		}
	}
}

// endregion: --- Tests
