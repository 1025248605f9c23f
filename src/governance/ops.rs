//! The Configuration Governance operations, implemented on [`Client`].
//!
//! Every operation follows the same contract:
//! 1. validate the options synchronously (no I/O on failure),
//! 2. build the request from the path template, options, and client defaults,
//! 3. execute through the shared transport (retries/deadline handled there),
//! 4. decode the success body into the typed result.
//!
//! Each operation has two forms: the plain form runs with no deadline, and the
//! `_ctx` form honors the deadline of the supplied [`CallContext`].

use crate::governance::{
	CreateRuleAttachmentsOptions, CreateRuleAttachmentsResponse, CreateRulesOptions, CreateRulesResponse,
	DeleteRuleAttachmentOptions, DeleteRuleOptions, GetRuleAttachmentOptions, GetRuleOptions,
	ListRuleAttachmentsOptions, ListRulesOptions, Rule, RuleAttachment, RuleAttachmentList, RuleList,
	UpdateRuleAttachmentOptions, UpdateRuleOptions,
};
use crate::webc::{CallContext, DetailedResponse, WebRequest};
use crate::{Client, Error, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::json;

const HEADER_TRANSACTION_ID: &str = "Transaction-Id";
const HEADER_IF_MATCH: &str = "If-Match";

const PATH_RULES: &str = "/config/v1/rules";
const PATH_RULE: &str = "/config/v1/rules/{rule_id}";
const PATH_ATTACHMENTS: &str = "/config/v1/rules/{rule_id}/attachments";
const PATH_ATTACHMENT: &str = "/config/v1/rules/{rule_id}/attachments/{attachment_id}";

// region:    --- Rule Operations

impl Client {
	/// Create one or more rules in a single call.
	///
	/// The service applies the batch item by item; per-item outcomes (including
	/// per-item failures under a 207) are reported in the response entries.
	pub async fn create_rules(&self, options: CreateRulesOptions) -> Result<DetailedResponse<CreateRulesResponse>> {
		self.create_rules_ctx(options, &CallContext::background()).await
	}

	pub async fn create_rules_ctx(
		&self,
		options: CreateRulesOptions,
		ctx: &CallContext,
	) -> Result<DetailedResponse<CreateRulesResponse>> {
		const OPERATION: &str = "create_rules";
		options.validate()?;

		let request = self
			.request(OPERATION, Method::POST, PATH_RULES, &[])?
			.with_headers(&options.headers)
			.with_header_opt(HEADER_TRANSACTION_ID, options.transaction_id.as_deref())
			.with_payload(json!({ "rules": options.rules }));

		self.dispatch(OPERATION, &request, ctx).await
	}

	/// List rules in the client's account scope (or the per-call override).
	pub async fn list_rules(&self, options: ListRulesOptions) -> Result<DetailedResponse<RuleList>> {
		self.list_rules_ctx(options, &CallContext::background()).await
	}

	pub async fn list_rules_ctx(
		&self,
		options: ListRulesOptions,
		ctx: &CallContext,
	) -> Result<DetailedResponse<RuleList>> {
		const OPERATION: &str = "list_rules";
		options.validate()?;

		let account_id = options.account_id.as_deref().unwrap_or(self.account_id());
		let request = self
			.request(OPERATION, Method::GET, PATH_RULES, &[])?
			.with_headers(&options.headers)
			.with_header_opt(HEADER_TRANSACTION_ID, options.transaction_id.as_deref())
			.with_query("account_id", account_id)
			.with_query_opt("attached", options.attached.map(|v| v.to_string()))
			.with_query_opt("labels", options.labels.clone())
			.with_query_opt("limit", options.limit.map(|v| v.to_string()))
			.with_query_opt("offset", options.offset.map(|v| v.to_string()));

		self.dispatch(OPERATION, &request, ctx).await
	}

	/// Retrieve a single rule by id.
	pub async fn get_rule(&self, options: GetRuleOptions) -> Result<DetailedResponse<Rule>> {
		self.get_rule_ctx(options, &CallContext::background()).await
	}

	pub async fn get_rule_ctx(&self, options: GetRuleOptions, ctx: &CallContext) -> Result<DetailedResponse<Rule>> {
		const OPERATION: &str = "get_rule";
		options.validate()?;

		let request = self
			.request(OPERATION, Method::GET, PATH_RULE, &[("rule_id", &options.rule_id)])?
			.with_headers(&options.headers)
			.with_header_opt(HEADER_TRANSACTION_ID, options.transaction_id.as_deref());

		self.dispatch(OPERATION, &request, ctx).await
	}

	/// Replace a rule. `if_match` carries the etag from the last read; the service
	/// rejects the update when the rule changed since (optimistic concurrency).
	pub async fn update_rule(&self, options: UpdateRuleOptions) -> Result<DetailedResponse<Rule>> {
		self.update_rule_ctx(options, &CallContext::background()).await
	}

	pub async fn update_rule_ctx(
		&self,
		options: UpdateRuleOptions,
		ctx: &CallContext,
	) -> Result<DetailedResponse<Rule>> {
		const OPERATION: &str = "update_rule";
		options.validate()?;

		let payload = serde_json::to_value(&options.rule)?;
		let request = self
			.request(OPERATION, Method::PUT, PATH_RULE, &[("rule_id", &options.rule_id)])?
			.with_headers(&options.headers)
			.with_header(HEADER_IF_MATCH, &options.if_match)
			.with_header_opt(HEADER_TRANSACTION_ID, options.transaction_id.as_deref())
			.with_payload(payload);

		self.dispatch(OPERATION, &request, ctx).await
	}

	/// Delete a rule. Success carries no body.
	pub async fn delete_rule(&self, options: DeleteRuleOptions) -> Result<DetailedResponse<()>> {
		self.delete_rule_ctx(options, &CallContext::background()).await
	}

	pub async fn delete_rule_ctx(&self, options: DeleteRuleOptions, ctx: &CallContext) -> Result<DetailedResponse<()>> {
		const OPERATION: &str = "delete_rule";
		options.validate()?;

		let request = self
			.request(OPERATION, Method::DELETE, PATH_RULE, &[("rule_id", &options.rule_id)])?
			.with_headers(&options.headers)
			.with_header_opt(HEADER_TRANSACTION_ID, options.transaction_id.as_deref());

		let web_response = self
			.web_client()
			.execute(&request, ctx)
			.await
			.map_err(Error::from_webc(OPERATION))?;
		Ok(DetailedResponse::no_content(web_response))
	}
}

// endregion: --- Rule Operations

// region:    --- Attachment Operations

impl Client {
	/// Attach a rule to one or more scopes in a single call.
	pub async fn create_rule_attachments(
		&self,
		options: CreateRuleAttachmentsOptions,
	) -> Result<DetailedResponse<CreateRuleAttachmentsResponse>> {
		self.create_rule_attachments_ctx(options, &CallContext::background()).await
	}

	pub async fn create_rule_attachments_ctx(
		&self,
		options: CreateRuleAttachmentsOptions,
		ctx: &CallContext,
	) -> Result<DetailedResponse<CreateRuleAttachmentsResponse>> {
		const OPERATION: &str = "create_rule_attachments";
		options.validate()?;

		let request = self
			.request(OPERATION, Method::POST, PATH_ATTACHMENTS, &[("rule_id", &options.rule_id)])?
			.with_headers(&options.headers)
			.with_header_opt(HEADER_TRANSACTION_ID, options.transaction_id.as_deref())
			.with_payload(json!({ "attachments": options.attachments }));

		self.dispatch(OPERATION, &request, ctx).await
	}

	/// List the attachments of a rule.
	pub async fn list_rule_attachments(
		&self,
		options: ListRuleAttachmentsOptions,
	) -> Result<DetailedResponse<RuleAttachmentList>> {
		self.list_rule_attachments_ctx(options, &CallContext::background()).await
	}

	pub async fn list_rule_attachments_ctx(
		&self,
		options: ListRuleAttachmentsOptions,
		ctx: &CallContext,
	) -> Result<DetailedResponse<RuleAttachmentList>> {
		const OPERATION: &str = "list_rule_attachments";
		options.validate()?;

		let request = self
			.request(OPERATION, Method::GET, PATH_ATTACHMENTS, &[("rule_id", &options.rule_id)])?
			.with_headers(&options.headers)
			.with_header_opt(HEADER_TRANSACTION_ID, options.transaction_id.as_deref())
			.with_query_opt("limit", options.limit.map(|v| v.to_string()))
			.with_query_opt("offset", options.offset.map(|v| v.to_string()));

		self.dispatch(OPERATION, &request, ctx).await
	}

	/// Retrieve a single attachment of a rule.
	pub async fn get_rule_attachment(
		&self,
		options: GetRuleAttachmentOptions,
	) -> Result<DetailedResponse<RuleAttachment>> {
		self.get_rule_attachment_ctx(options, &CallContext::background()).await
	}

	pub async fn get_rule_attachment_ctx(
		&self,
		options: GetRuleAttachmentOptions,
		ctx: &CallContext,
	) -> Result<DetailedResponse<RuleAttachment>> {
		const OPERATION: &str = "get_rule_attachment";
		options.validate()?;

		let request = self
			.request(
				OPERATION,
				Method::GET,
				PATH_ATTACHMENT,
				&[("rule_id", &options.rule_id), ("attachment_id", &options.attachment_id)],
			)?
			.with_headers(&options.headers)
			.with_header_opt(HEADER_TRANSACTION_ID, options.transaction_id.as_deref());

		self.dispatch(OPERATION, &request, ctx).await
	}

	/// Replace an attachment, guarded by its etag.
	pub async fn update_rule_attachment(
		&self,
		options: UpdateRuleAttachmentOptions,
	) -> Result<DetailedResponse<RuleAttachment>> {
		self.update_rule_attachment_ctx(options, &CallContext::background()).await
	}

	pub async fn update_rule_attachment_ctx(
		&self,
		options: UpdateRuleAttachmentOptions,
		ctx: &CallContext,
	) -> Result<DetailedResponse<RuleAttachment>> {
		const OPERATION: &str = "update_rule_attachment";
		options.validate()?;

		let payload = serde_json::to_value(&options.attachment)?;
		let request = self
			.request(
				OPERATION,
				Method::PUT,
				PATH_ATTACHMENT,
				&[("rule_id", &options.rule_id), ("attachment_id", &options.attachment_id)],
			)?
			.with_headers(&options.headers)
			.with_header(HEADER_IF_MATCH, &options.if_match)
			.with_header_opt(HEADER_TRANSACTION_ID, options.transaction_id.as_deref())
			.with_payload(payload);

		self.dispatch(OPERATION, &request, ctx).await
	}

	/// Detach a rule from a scope. Success carries no body.
	pub async fn delete_rule_attachment(&self, options: DeleteRuleAttachmentOptions) -> Result<DetailedResponse<()>> {
		self.delete_rule_attachment_ctx(options, &CallContext::background()).await
	}

	pub async fn delete_rule_attachment_ctx(
		&self,
		options: DeleteRuleAttachmentOptions,
		ctx: &CallContext,
	) -> Result<DetailedResponse<()>> {
		const OPERATION: &str = "delete_rule_attachment";
		options.validate()?;

		let request = self
			.request(
				OPERATION,
				Method::DELETE,
				PATH_ATTACHMENT,
				&[("rule_id", &options.rule_id), ("attachment_id", &options.attachment_id)],
			)?
			.with_headers(&options.headers)
			.with_header_opt(HEADER_TRANSACTION_ID, options.transaction_id.as_deref());

		let web_response = self
			.web_client()
			.execute(&request, ctx)
			.await
			.map_err(Error::from_webc(OPERATION))?;
		Ok(DetailedResponse::no_content(web_response))
	}
}

// endregion: --- Attachment Operations

// region:    --- Dispatch

impl Client {
	/// Execute the request and decode the success body into `T`.
	async fn dispatch<T: DeserializeOwned>(
		&self,
		operation: &'static str,
		request: &WebRequest,
		ctx: &CallContext,
	) -> Result<DetailedResponse<T>> {
		let web_response = self
			.web_client()
			.execute(request, ctx)
			.await
			.map_err(Error::from_webc(operation))?;
		DetailedResponse::from_web_response(web_response).map_err(Error::from_webc(operation))
	}
}

// endregion: --- Dispatch
