mod support;

use httpmock::prelude::*;
use scc_sdk::governance::{
	CreateRuleRequest, CreateRulesOptions, DeleteRuleOptions, GetRuleOptions, ListRulesOptions, RuleCondition,
	UpdateRuleOptions,
};
use scc_sdk::Error;
use serde_json::json;
use support::{client_for, sample_rule_json, sample_rule_request, Result, TEST_ACCOUNT_ID};

#[tokio::test]
async fn test_create_rules_ok() -> Result<()> {
	// -- Setup & Fixtures
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(POST)
			.path("/config/v1/rules")
			.header("content-type", "application/json")
			.json_body_partial(
				json!({
					"rules": [ { "request_id": "req-1" } ]
				})
				.to_string(),
			);
		then.status(201).json_body(json!({
			"rules": [
				{
					"request_id": "req-1",
					"status_code": 201,
					"rule": sample_rule_json("rule-1")
				}
			]
		}));
	});
	let client = client_for(&server);

	// -- Exec
	let options = CreateRulesOptions::new(vec![
		CreateRuleRequest::new(sample_rule_request()).with_request_id("req-1"),
	]);
	let res = client.create_rules(options).await?;

	// -- Check
	mock.assert();
	assert_eq!(res.status_code, 201);
	let result = res.result.ok_or("should have a result")?;
	assert_eq!(result.rules.len(), 1);
	let item = &result.rules[0];
	assert_eq!(item.request_id.as_deref(), Some("req-1"));
	assert_eq!(item.status_code, Some(201));
	let rule = item.rule.as_ref().ok_or("item should carry the rule")?;
	assert_eq!(rule.rule_id, "rule-1");
	assert!(matches!(rule.required_config, RuleCondition::And(_)));

	Ok(())
}

#[tokio::test]
async fn test_create_rules_empty_batch_no_call() -> Result<()> {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(POST).path("/config/v1/rules");
		then.status(201);
	});
	let client = client_for(&server);

	let err = client.create_rules(CreateRulesOptions::new(Vec::new())).await.unwrap_err();

	// Validation failures never reach the wire.
	assert!(matches!(err, Error::OptionRequired { field: "rules", .. }));
	assert_eq!(mock.hits(), 0);

	Ok(())
}

#[tokio::test]
async fn test_list_rules_default_account_scope() -> Result<()> {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET)
			.path("/config/v1/rules")
			.query_param("account_id", TEST_ACCOUNT_ID);
		then.status(200).json_body(json!({
			"offset": 0,
			"limit": 100,
			"total_count": 1,
			"first": { "href": format!("{}/config/v1/rules?offset=0", server.base_url()) },
			"rules": [ sample_rule_json("rule-1") ]
		}));
	});
	let client = client_for(&server);

	let res = client.list_rules(ListRulesOptions::new()).await?;

	mock.assert();
	let list = res.result.ok_or("should have a result")?;
	assert_eq!(list.total_count, 1);
	assert_eq!(list.rules[0].rule_id, "rule-1");
	assert!(list.last.is_none());

	Ok(())
}

#[tokio::test]
async fn test_list_rules_with_filters() -> Result<()> {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET)
			.path("/config/v1/rules")
			.query_param("account_id", "other-account")
			.query_param("attached", "true")
			.query_param("labels", "access,governance")
			.query_param("limit", "10")
			.query_param("offset", "20");
		then.status(200).json_body(json!({
			"offset": 20,
			"limit": 10,
			"total_count": 0,
			"rules": []
		}));
	});
	let client = client_for(&server);

	let options = ListRulesOptions::new()
		.with_account_id("other-account")
		.with_attached(true)
		.with_labels("access,governance")
		.with_limit(10)
		.with_offset(20);
	let res = client.list_rules(options).await?;

	mock.assert();
	assert_eq!(res.result.ok_or("should have a result")?.rules.len(), 0);

	Ok(())
}

#[tokio::test]
async fn test_get_rule_ok() -> Result<()> {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(GET)
			.path("/config/v1/rules/rule-1")
			.header("transaction-id", "txn-42");
		then.status(200)
			.header("etag", "\"abc123\"")
			.json_body(sample_rule_json("rule-1"));
	});
	let client = client_for(&server);

	let res = client
		.get_rule(GetRuleOptions::new("rule-1").with_transaction_id("txn-42"))
		.await?;

	mock.assert();
	assert_eq!(res.status_code, 200);
	assert_eq!(res.header("Etag"), Some("\"abc123\""));
	let rule = res.result.ok_or("should have a result")?;
	assert_eq!(rule.rule_id, "rule-1");
	assert_eq!(rule.labels.as_deref(), Some(["access".to_string(), "governance".to_string()].as_slice()));

	Ok(())
}

#[tokio::test]
async fn test_get_rule_id_is_path_escaped() -> Result<()> {
	let server = MockServer::start();
	// The substituted id stays a single path segment; '/' and ' ' are percent-encoded.
	let mock = server.mock(|when, then| {
		when.method(GET).path("/config/v1/rules/a%20b%2Fc");
		then.status(200).json_body(sample_rule_json("a b/c"));
	});
	let client = client_for(&server);

	let res = client.get_rule(GetRuleOptions::new("a b/c")).await?;

	mock.assert();
	assert_eq!(res.status_code, 200);

	Ok(())
}

#[tokio::test]
async fn test_get_rule_empty_id_no_call() -> Result<()> {
	let server = MockServer::start();
	let client = client_for(&server);

	let err = client.get_rule(GetRuleOptions::new("")).await.unwrap_err();

	assert!(matches!(
		err,
		Error::OptionRequired {
			options: "GetRuleOptions",
			field: "rule_id"
		}
	));

	Ok(())
}

#[tokio::test]
async fn test_update_rule_sends_if_match() -> Result<()> {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(PUT)
			.path("/config/v1/rules/rule-1")
			.header("if-match", "\"abc123\"")
			.json_body_partial(json!({ "name": "Disable public access" }).to_string());
		then.status(200).json_body(sample_rule_json("rule-1"));
	});
	let client = client_for(&server);

	let options = UpdateRuleOptions::new("rule-1", "\"abc123\"", sample_rule_request());
	let res = client.update_rule(options).await?;

	mock.assert();
	assert_eq!(res.result.ok_or("should have a result")?.rule_id, "rule-1");

	Ok(())
}

#[tokio::test]
async fn test_update_rule_requires_if_match() -> Result<()> {
	let server = MockServer::start();
	let client = client_for(&server);

	let err = client
		.update_rule(UpdateRuleOptions::new("rule-1", "", sample_rule_request()))
		.await
		.unwrap_err();

	assert!(matches!(err, Error::OptionRequired { field: "if_match", .. }));

	Ok(())
}

#[tokio::test]
async fn test_delete_rule_no_content() -> Result<()> {
	let server = MockServer::start();
	let mock = server.mock(|when, then| {
		when.method(DELETE).path("/config/v1/rules/rule-1");
		then.status(204);
	});
	let client = client_for(&server);

	let res = client.delete_rule(DeleteRuleOptions::new("rule-1")).await?;

	mock.assert();
	assert_eq!(res.status_code, 204);
	assert!(res.result.is_none());

	Ok(())
}

#[test]
fn test_rule_decode_is_deterministic() -> Result<()> {
	use scc_sdk::governance::Rule;

	// Decoding the same raw body twice yields equal instances.
	let raw = sample_rule_json("rule-1");
	let first: Rule = serde_json::from_value(raw.clone())?;
	let second: Rule = serde_json::from_value(raw)?;

	assert_eq!(first, second);

	Ok(())
}

#[tokio::test]
async fn test_rule_not_found_carries_diagnostics() -> Result<()> {
	let server = MockServer::start();
	server.mock(|when, then| {
		when.method(GET).path("/config/v1/rules/missing");
		then.status(404).json_body(json!({
			"errors": [ { "code": "not_found", "message": "rule not found" } ]
		}));
	});
	let client = client_for(&server);

	let err = client.get_rule(GetRuleOptions::new("missing")).await.unwrap_err();

	match err {
		Error::WebCall {
			operation,
			webc_error: scc_sdk::webc::Error::ResponseFailedStatus { status, body, .. },
		} => {
			assert_eq!(operation, "get_rule");
			assert_eq!(status.as_u16(), 404);
			assert!(body.contains("rule not found"), "body should carry the service message");
		}
		other => panic!("expected ResponseFailedStatus, got {other:?}"),
	}

	Ok(())
}
