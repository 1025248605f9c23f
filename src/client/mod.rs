// region:    --- Modules

mod builder;
mod client_impl;

pub use builder::*;
pub use client_impl::*;

// endregion: --- Modules
