use crate::webc;
use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

/// Main `scc-sdk` error type.
///
/// The variants fall into four groups:
/// - Configuration errors, raised synchronously at client construction or reconfiguration.
/// - Authentication errors, raised when the authenticator fails its own validation.
/// - Option validation errors, raised before any network I/O is performed.
/// - `WebCall`, wrapping the transport/processing error of a single operation
///   (the `webc::Error` inside carries status, headers, and body for diagnostics).
#[derive(Debug, From)]
pub enum Error {
	// -- Configuration (client construction / reconfiguration)
	AccountIdMissing,
	ServiceUrlMissing,
	ServiceUrlInvalid {
		url: String,
		cause: String,
	},
	RegionNotFound {
		region: String,
	},

	// -- Authentication
	AuthMissing,
	AuthInvalid {
		cause: &'static str,
	},

	// -- Option validation (always before any network I/O)
	OptionRequired {
		options: &'static str,
		field: &'static str,
	},

	// -- Operation execution (transport or response processing)
	WebCall {
		operation: &'static str,
		webc_error: webc::Error,
	},

	// -- Externals
	#[from]
	SerdeJson(serde_json::Error),
}

/// Internals
impl Error {
	pub(crate) fn from_webc(operation: &'static str) -> impl FnOnce(webc::Error) -> Self {
		move |webc_error| Self::WebCall { operation, webc_error }
	}
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
