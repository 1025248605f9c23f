//! Resolution of the service endpoint, the authentication material,
//! and externally discovered configuration (environment / credentials file).

// region:    --- Modules

mod auth_data;
mod endpoint;
mod external_config;

pub use auth_data::*;
pub use endpoint::*;
pub use external_config::*;

// endregion: --- Modules
