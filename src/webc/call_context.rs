use std::time::{Duration, Instant};

/// Deadline-bearing context for a single call.
///
/// Every operation has a convenience form that is defined purely as the `_ctx` form
/// called with [`CallContext::background`]. A deadline bounds the whole logical call:
/// every attempt and every retry backoff sleep, not each attempt individually.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
	deadline: Option<Instant>,
}

/// Constructors
impl CallContext {
	/// A context with no deadline.
	#[must_use]
	pub fn background() -> Self {
		Self::default()
	}

	/// A context that expires `timeout` from now.
	#[must_use]
	pub fn with_timeout(timeout: Duration) -> Self {
		Self {
			deadline: Some(Instant::now() + timeout),
		}
	}
}

/// Getters
impl CallContext {
	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	/// Time left before the deadline. `None` when no deadline was set.
	#[must_use]
	pub fn remaining(&self) -> Option<Duration> {
		self.deadline.map(|deadline| deadline.saturating_duration_since(Instant::now()))
	}

	#[must_use]
	pub fn is_expired(&self) -> bool {
		self.remaining().is_some_and(|remaining| remaining.is_zero())
	}
}

// region:    --- Tests


// endregion: --- Tests
