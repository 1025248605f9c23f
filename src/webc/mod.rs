//! The internal web layer (the "base service"): request construction, authentication
//! injection, retries, gzip, deadlines, and raw HTTP execution.
//!
//! Everything in this module is service-agnostic; the operation bindings live in
//! `crate::governance`.

// region:    --- Modules

mod call_context;
mod web_client;
mod web_request;
mod web_response;

pub use call_context::*;
pub use web_client::*;
pub use web_request::*;
pub use web_response::*;

// endregion: --- Modules

// region:    --- Error

use derive_more::From;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

pub type Result<T> = core::result::Result<T, Error>;

/// Transport-layer error for a single executed request.
#[derive(Debug, From)]
pub enum Error {
	/// The request could not be constructed (bad base URL, unresolved path template,
	/// or a body that failed to serialize/compress).
	RequestBuildFailed {
		cause: String,
	},

	/// The HTTP exchange completed with a non-success status (after any retries).
	/// Carries the partial response for diagnostics.
	ResponseFailedStatus {
		status: StatusCode,
		headers: HeaderMap,
		body: String,
	},

	/// The HTTP exchange succeeded but the body could not be decoded as the expected JSON.
	/// Carries the full response metadata for diagnostics, like `ResponseFailedStatus`.
	ResponseFailedNotJson {
		status: StatusCode,
		headers: HeaderMap,
		body: String,
		cause: String,
	},

	/// The call (or its pending retry backoff) outlived the caller-supplied deadline.
	DeadlineExceeded,

	// -- Externals
	#[from]
	Reqwest(reqwest::Error),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

// endregion: --- Error
