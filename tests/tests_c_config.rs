//! External configuration discovery tests.
//!
//! These tests mutate process environment variables, so they are `#[serial]`
//! and each one restores a clean slate first.

mod support;

use scc_sdk::resolver::{AuthData, CREDENTIALS_FILE_ENV};
use scc_sdk::{Client, Error};
use serial_test::serial;
use std::io::Write;
use support::{Result, TEST_ACCOUNT_ID};

const SERVICE_NAME: &str = "configuration_governance";

fn clear_env() {
	for key in [
		"CONFIGURATION_GOVERNANCE_URL",
		"CONFIGURATION_GOVERNANCE_AUTH_TYPE",
		"CONFIGURATION_GOVERNANCE_APIKEY",
		"CONFIGURATION_GOVERNANCE_BEARER_TOKEN",
		"CONFIGURATION_GOVERNANCE_USERNAME",
		"CONFIGURATION_GOVERNANCE_PASSWORD",
		CREDENTIALS_FILE_ENV,
	] {
		std::env::remove_var(key);
	}
}

#[test]
#[serial]
fn test_config_from_env() -> Result<()> {
	clear_env();
	std::env::set_var("CONFIGURATION_GOVERNANCE_URL", "https://env.compliance.test");
	std::env::set_var("CONFIGURATION_GOVERNANCE_AUTH_TYPE", "bearer");
	std::env::set_var("CONFIGURATION_GOVERNANCE_BEARER_TOKEN", "env-token");

	let client = Client::builder()
		.with_account_id(TEST_ACCOUNT_ID)
		.with_external_config(SERVICE_NAME)
		.build()?;

	assert_eq!(client.service_url(), Some("https://env.compliance.test"));
	assert_eq!(**client.auth(), AuthData::Bearer("env-token".to_string()));

	clear_env();
	Ok(())
}

#[test]
#[serial]
fn test_config_infers_apikey_without_auth_type() -> Result<()> {
	clear_env();
	std::env::set_var("CONFIGURATION_GOVERNANCE_APIKEY", "env-apikey");

	let client = Client::builder()
		.with_account_id(TEST_ACCOUNT_ID)
		.with_external_config(SERVICE_NAME)
		.build()?;

	assert_eq!(**client.auth(), AuthData::ApiKey("env-apikey".to_string()));

	clear_env();
	Ok(())
}

#[test]
#[serial]
fn test_config_explicit_values_win() -> Result<()> {
	clear_env();
	std::env::set_var("CONFIGURATION_GOVERNANCE_URL", "https://env.compliance.test");
	std::env::set_var("CONFIGURATION_GOVERNANCE_AUTH_TYPE", "bearer");
	std::env::set_var("CONFIGURATION_GOVERNANCE_BEARER_TOKEN", "env-token");

	let client = Client::builder()
		.with_auth(AuthData::from_bearer("explicit-token"))
		.with_account_id(TEST_ACCOUNT_ID)
		.with_service_url("https://explicit.compliance.test")
		.with_external_config(SERVICE_NAME)
		.build()?;

	assert_eq!(client.service_url(), Some("https://explicit.compliance.test"));
	assert_eq!(**client.auth(), AuthData::Bearer("explicit-token".to_string()));

	clear_env();
	Ok(())
}

#[test]
#[serial]
fn test_config_from_credentials_file() -> Result<()> {
	clear_env();
	let mut file = tempfile::NamedTempFile::new()?;
	writeln!(file, "# credentials for the governance service")?;
	writeln!(file, "CONFIGURATION_GOVERNANCE_URL=https://file.compliance.test")?;
	writeln!(file, "CONFIGURATION_GOVERNANCE_AUTH_TYPE=iam")?;
	writeln!(file, "CONFIGURATION_GOVERNANCE_APIKEY=file-apikey")?;
	std::env::set_var(CREDENTIALS_FILE_ENV, file.path());

	let client = Client::builder()
		.with_account_id(TEST_ACCOUNT_ID)
		.with_external_config(SERVICE_NAME)
		.build()?;

	assert_eq!(client.service_url(), Some("https://file.compliance.test"));
	assert_eq!(**client.auth(), AuthData::ApiKey("file-apikey".to_string()));

	clear_env();
	Ok(())
}

#[test]
#[serial]
fn test_config_env_wins_over_file() -> Result<()> {
	clear_env();
	let mut file = tempfile::NamedTempFile::new()?;
	writeln!(file, "CONFIGURATION_GOVERNANCE_URL=https://file.compliance.test")?;
	writeln!(file, "CONFIGURATION_GOVERNANCE_APIKEY=file-apikey")?;
	std::env::set_var(CREDENTIALS_FILE_ENV, file.path());
	std::env::set_var("CONFIGURATION_GOVERNANCE_APIKEY", "env-apikey");

	let client = Client::builder()
		.with_account_id(TEST_ACCOUNT_ID)
		.with_external_config(SERVICE_NAME)
		.build()?;

	// URL comes from the file, the api key from the environment.
	assert_eq!(client.service_url(), Some("https://file.compliance.test"));
	assert_eq!(**client.auth(), AuthData::ApiKey("env-apikey".to_string()));

	clear_env();
	Ok(())
}

#[test]
#[serial]
fn test_config_missing_auth_still_fails() {
	clear_env();
	std::env::set_var("CONFIGURATION_GOVERNANCE_URL", "https://env.compliance.test");

	let err = Client::builder()
		.with_account_id(TEST_ACCOUNT_ID)
		.with_external_config(SERVICE_NAME)
		.build()
		.unwrap_err();

	assert!(matches!(err, Error::AuthMissing));

	clear_env();
}
