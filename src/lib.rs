//! Security and Compliance Center client SDK (Configuration Governance service).
//!
//! A thin typed binding over the service REST API:
//! - per-operation options models carry the required/optional parameters and custom headers,
//! - the internal [`webc`] layer applies authentication, retries, gzip, and deadlines,
//! - responses decode into typed models wrapped in a [`DetailedResponse`]
//!   (status code, headers, and an optional result — `None` on an empty success body).
//!
//! ```no_run
//! use scc_sdk::governance::GetRuleOptions;
//! use scc_sdk::resolver::AuthData;
//! use scc_sdk::Client;
//!
//! #[tokio::main]
//! async fn main() -> scc_sdk::Result<()> {
//! 	let client = Client::builder()
//! 		.with_auth(AuthData::Bearer("my-token".to_string()))
//! 		.with_account_id("my-account-id")
//! 		.build()?;
//!
//! 	let res = client.get_rule(GetRuleOptions::new("rule-81f3db5e")).await?;
//! 	println!("status: {}", res.status_code);
//!
//! 	Ok(())
//! }
//! ```

// region:    --- Modules

mod client;
mod error;

pub mod governance;
pub mod resolver;
pub mod webc;

pub use client::*;
pub use error::{Error, Result};
pub use webc::{CallContext, DetailedResponse};

// endregion: --- Modules
