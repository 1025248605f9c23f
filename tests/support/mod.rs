//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

use httpmock::MockServer;
use scc_sdk::resolver::AuthData;
use scc_sdk::Client;
use serde_json::{json, Value};
use std::time::Duration;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

pub const TEST_ACCOUNT_ID: &str = "test-account-id";

// region:    --- Clients

/// A client pointed at the mock server, retries disabled.
pub fn client_for(server: &MockServer) -> Client {
	Client::builder()
		.with_auth(AuthData::from_bearer("test-token"))
		.with_account_id(TEST_ACCOUNT_ID)
		.with_service_url(server.base_url())
		.build()
		.expect("test client should build")
}

/// A client pointed at the mock server with retries enabled
/// (2 retries, 50ms interval cap, so tests stay fast).
pub fn client_for_with_retries(server: &MockServer) -> Client {
	Client::builder()
		.with_auth(AuthData::from_bearer("test-token"))
		.with_account_id(TEST_ACCOUNT_ID)
		.with_service_url(server.base_url())
		.with_retries(2, Duration::from_millis(50))
		.build()
		.expect("test client should build")
}

// endregion: --- Clients

// region:    --- Sample Payloads

/// A complete rule body, as the service would return it.
pub fn sample_rule_json(rule_id: &str) -> Value {
	json!({
		"account_id": TEST_ACCOUNT_ID,
		"name": "Disable public access",
		"description": "Ensure public access is disabled.",
		"rule_type": "user_defined",
		"target": {
			"service_name": "iam-groups",
			"resource_kind": "service",
			"additional_target_attributes": []
		},
		"required_config": {
			"description": "public access check",
			"and": [
				{ "property": "public_access_enabled", "operator": "is_false" }
			]
		},
		"enforcement_actions": [ { "action": "disallow" }, { "action": "audit_log" } ],
		"labels": ["access", "governance"],
		"rule_id": rule_id,
		"creation_date": "2020-01-10T05:23:19Z",
		"created_by": "tester",
		"modification_date": "2020-01-10T05:23:19Z",
		"modified_by": "tester",
		"number_of_attachments": 1
	})
}

/// A complete attachment body, as the service would return it.
pub fn sample_attachment_json(rule_id: &str, attachment_id: &str) -> Value {
	json!({
		"attachment_id": attachment_id,
		"rule_id": rule_id,
		"account_id": TEST_ACCOUNT_ID,
		"included_scope": {
			"note": "whole account",
			"scope_id": TEST_ACCOUNT_ID,
			"scope_type": "account"
		},
		"excluded_scopes": [
			{
				"note": "dev group",
				"scope_id": "dev-group-id",
				"scope_type": "account.account_group"
			}
		]
	})
}

/// A caller-side rule request matching [`sample_rule_json`].
pub fn sample_rule_request() -> scc_sdk::governance::RuleRequest {
	use scc_sdk::governance::{
		EnforcementAction, RuleCondition, RuleConditionAnd, RuleRequest, RuleSingleProperty, TargetResource,
	};

	RuleRequest::new(
		"Disable public access",
		"Ensure public access is disabled.",
		TargetResource::new("iam-groups", "service"),
		RuleCondition::And(RuleConditionAnd::new(vec![RuleSingleProperty::new(
			"public_access_enabled",
			RuleSingleProperty::OPERATOR_IS_FALSE,
		)])),
		vec![
			EnforcementAction::new(EnforcementAction::ACTION_DISALLOW),
			EnforcementAction::new(EnforcementAction::ACTION_AUDIT_LOG),
		],
	)
	.with_account_id(TEST_ACCOUNT_ID)
	.with_labels(vec!["access".to_string(), "governance".to_string()])
}

// endregion: --- Sample Payloads
