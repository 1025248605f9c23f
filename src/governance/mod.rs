//! The Configuration Governance service surface: rule and attachment models,
//! per-operation options, and the operations themselves (implemented on [`crate::Client`]).

// region:    --- Modules

mod attachment;
mod options;
mod ops;
mod rule;

pub use attachment::*;
pub use options::*;
pub use rule::*;

// endregion: --- Modules
