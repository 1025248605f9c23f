//! Per-operation options models.
//!
//! Required parameters are constructor arguments; optional parameters are chainable
//! `with_*` setters. Each options model is a plain value object, created per call and
//! never retained by the client. `validate()` runs before any network I/O and rejects
//! empty required values with [`Error::OptionRequired`].
//!
//! Every options model also carries:
//! - a free-form custom header list (unique keys, replacing on re-set),
//! - an optional `Transaction-Id` correlation header.

use crate::governance::{AttachmentRequest, CreateRuleRequest, RuleRequest};
use crate::{Error, Result};

fn require(options: &'static str, field: &'static str, value: &str) -> Result<()> {
	if value.is_empty() {
		Err(Error::OptionRequired { options, field })
	} else {
		Ok(())
	}
}

fn set_unique_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
	headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
	headers.push((name, value));
}

// region:    --- Rule Options

/// Options for [`crate::Client::create_rules`].
#[derive(Debug, Clone)]
pub struct CreateRulesOptions {
	pub rules: Vec<CreateRuleRequest>,
	pub transaction_id: Option<String>,
	pub headers: Vec<(String, String)>,
}

/// Constructors
impl CreateRulesOptions {
	pub fn new(rules: Vec<CreateRuleRequest>) -> Self {
		Self {
			rules,
			transaction_id: None,
			headers: Vec::new(),
		}
	}
}

/// Chainable Setters
impl CreateRulesOptions {
	#[must_use]
	pub fn with_transaction_id(mut self, value: impl Into<String>) -> Self {
		self.transaction_id = Some(value.into());
		self
	}

	/// Add or replace a custom header.
	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		set_unique_header(&mut self.headers, name.into(), value.into());
		self
	}
}

impl CreateRulesOptions {
	pub(crate) fn validate(&self) -> Result<()> {
		if self.rules.is_empty() {
			return Err(Error::OptionRequired {
				options: "CreateRulesOptions",
				field: "rules",
			});
		}
		Ok(())
	}
}

/// Options for [`crate::Client::list_rules`]. All parameters are optional;
/// the account scope defaults to the client's fixed `account_id`.
#[derive(Debug, Clone, Default)]
pub struct ListRulesOptions {
	/// Override the client-level account scope for this call.
	pub account_id: Option<String>,
	pub attached: Option<bool>,
	/// Comma-separated label filter.
	pub labels: Option<String>,
	pub limit: Option<u32>,
	pub offset: Option<u32>,
	pub transaction_id: Option<String>,
	pub headers: Vec<(String, String)>,
}

/// Constructors
impl ListRulesOptions {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

/// Chainable Setters
impl ListRulesOptions {
	#[must_use]
	pub fn with_account_id(mut self, value: impl Into<String>) -> Self {
		self.account_id = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_attached(mut self, value: bool) -> Self {
		self.attached = Some(value);
		self
	}

	#[must_use]
	pub fn with_labels(mut self, value: impl Into<String>) -> Self {
		self.labels = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_limit(mut self, value: u32) -> Self {
		self.limit = Some(value);
		self
	}

	#[must_use]
	pub fn with_offset(mut self, value: u32) -> Self {
		self.offset = Some(value);
		self
	}

	#[must_use]
	pub fn with_transaction_id(mut self, value: impl Into<String>) -> Self {
		self.transaction_id = Some(value.into());
		self
	}

	/// Add or replace a custom header.
	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		set_unique_header(&mut self.headers, name.into(), value.into());
		self
	}
}

impl ListRulesOptions {
	pub(crate) fn validate(&self) -> Result<()> {
		Ok(())
	}
}

/// Options for [`crate::Client::get_rule`].
#[derive(Debug, Clone)]
pub struct GetRuleOptions {
	pub rule_id: String,
	pub transaction_id: Option<String>,
	pub headers: Vec<(String, String)>,
}

/// Constructors
impl GetRuleOptions {
	pub fn new(rule_id: impl Into<String>) -> Self {
		Self {
			rule_id: rule_id.into(),
			transaction_id: None,
			headers: Vec::new(),
		}
	}
}

/// Chainable Setters
impl GetRuleOptions {
	#[must_use]
	pub fn with_transaction_id(mut self, value: impl Into<String>) -> Self {
		self.transaction_id = Some(value.into());
		self
	}

	/// Add or replace a custom header.
	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		set_unique_header(&mut self.headers, name.into(), value.into());
		self
	}
}

impl GetRuleOptions {
	pub(crate) fn validate(&self) -> Result<()> {
		require("GetRuleOptions", "rule_id", &self.rule_id)
	}
}

/// Options for [`crate::Client::update_rule`].
/// `if_match` must carry the etag returned by the last read of the rule.
#[derive(Debug, Clone)]
pub struct UpdateRuleOptions {
	pub rule_id: String,
	pub if_match: String,
	pub rule: RuleRequest,
	pub transaction_id: Option<String>,
	pub headers: Vec<(String, String)>,
}

/// Constructors
impl UpdateRuleOptions {
	pub fn new(rule_id: impl Into<String>, if_match: impl Into<String>, rule: RuleRequest) -> Self {
		Self {
			rule_id: rule_id.into(),
			if_match: if_match.into(),
			rule,
			transaction_id: None,
			headers: Vec::new(),
		}
	}
}

/// Chainable Setters
impl UpdateRuleOptions {
	#[must_use]
	pub fn with_transaction_id(mut self, value: impl Into<String>) -> Self {
		self.transaction_id = Some(value.into());
		self
	}

	/// Add or replace a custom header.
	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		set_unique_header(&mut self.headers, name.into(), value.into());
		self
	}
}

impl UpdateRuleOptions {
	pub(crate) fn validate(&self) -> Result<()> {
		require("UpdateRuleOptions", "rule_id", &self.rule_id)?;
		require("UpdateRuleOptions", "if_match", &self.if_match)
	}
}

/// Options for [`crate::Client::delete_rule`].
#[derive(Debug, Clone)]
pub struct DeleteRuleOptions {
	pub rule_id: String,
	pub transaction_id: Option<String>,
	pub headers: Vec<(String, String)>,
}

/// Constructors
impl DeleteRuleOptions {
	pub fn new(rule_id: impl Into<String>) -> Self {
		Self {
			rule_id: rule_id.into(),
			transaction_id: None,
			headers: Vec::new(),
		}
	}
}

/// Chainable Setters
impl DeleteRuleOptions {
	#[must_use]
	pub fn with_transaction_id(mut self, value: impl Into<String>) -> Self {
		self.transaction_id = Some(value.into());
		self
	}

	/// Add or replace a custom header.
	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		set_unique_header(&mut self.headers, name.into(), value.into());
		self
	}
}

impl DeleteRuleOptions {
	pub(crate) fn validate(&self) -> Result<()> {
		require("DeleteRuleOptions", "rule_id", &self.rule_id)
	}
}

// endregion: --- Rule Options

// region:    --- Attachment Options

/// Options for [`crate::Client::create_rule_attachments`].
#[derive(Debug, Clone)]
pub struct CreateRuleAttachmentsOptions {
	pub rule_id: String,
	pub attachments: Vec<AttachmentRequest>,
	pub transaction_id: Option<String>,
	pub headers: Vec<(String, String)>,
}

/// Constructors
impl CreateRuleAttachmentsOptions {
	pub fn new(rule_id: impl Into<String>, attachments: Vec<AttachmentRequest>) -> Self {
		Self {
			rule_id: rule_id.into(),
			attachments,
			transaction_id: None,
			headers: Vec::new(),
		}
	}
}

/// Chainable Setters
impl CreateRuleAttachmentsOptions {
	#[must_use]
	pub fn with_transaction_id(mut self, value: impl Into<String>) -> Self {
		self.transaction_id = Some(value.into());
		self
	}

	/// Add or replace a custom header.
	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		set_unique_header(&mut self.headers, name.into(), value.into());
		self
	}
}

impl CreateRuleAttachmentsOptions {
	pub(crate) fn validate(&self) -> Result<()> {
		require("CreateRuleAttachmentsOptions", "rule_id", &self.rule_id)?;
		if self.attachments.is_empty() {
			return Err(Error::OptionRequired {
				options: "CreateRuleAttachmentsOptions",
				field: "attachments",
			});
		}
		Ok(())
	}
}

/// Options for [`crate::Client::list_rule_attachments`].
#[derive(Debug, Clone)]
pub struct ListRuleAttachmentsOptions {
	pub rule_id: String,
	pub limit: Option<u32>,
	pub offset: Option<u32>,
	pub transaction_id: Option<String>,
	pub headers: Vec<(String, String)>,
}

/// Constructors
impl ListRuleAttachmentsOptions {
	pub fn new(rule_id: impl Into<String>) -> Self {
		Self {
			rule_id: rule_id.into(),
			limit: None,
			offset: None,
			transaction_id: None,
			headers: Vec::new(),
		}
	}
}

/// Chainable Setters
impl ListRuleAttachmentsOptions {
	#[must_use]
	pub fn with_limit(mut self, value: u32) -> Self {
		self.limit = Some(value);
		self
	}

	#[must_use]
	pub fn with_offset(mut self, value: u32) -> Self {
		self.offset = Some(value);
		self
	}

	#[must_use]
	pub fn with_transaction_id(mut self, value: impl Into<String>) -> Self {
		self.transaction_id = Some(value.into());
		self
	}

	/// Add or replace a custom header.
	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		set_unique_header(&mut self.headers, name.into(), value.into());
		self
	}
}

impl ListRuleAttachmentsOptions {
	pub(crate) fn validate(&self) -> Result<()> {
		require("ListRuleAttachmentsOptions", "rule_id", &self.rule_id)
	}
}

/// Options for [`crate::Client::get_rule_attachment`].
#[derive(Debug, Clone)]
pub struct GetRuleAttachmentOptions {
	pub rule_id: String,
	pub attachment_id: String,
	pub transaction_id: Option<String>,
	pub headers: Vec<(String, String)>,
}

/// Constructors
impl GetRuleAttachmentOptions {
	pub fn new(rule_id: impl Into<String>, attachment_id: impl Into<String>) -> Self {
		Self {
			rule_id: rule_id.into(),
			attachment_id: attachment_id.into(),
			transaction_id: None,
			headers: Vec::new(),
		}
	}
}

/// Chainable Setters
impl GetRuleAttachmentOptions {
	#[must_use]
	pub fn with_transaction_id(mut self, value: impl Into<String>) -> Self {
		self.transaction_id = Some(value.into());
		self
	}

	/// Add or replace a custom header.
	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		set_unique_header(&mut self.headers, name.into(), value.into());
		self
	}
}

impl GetRuleAttachmentOptions {
	pub(crate) fn validate(&self) -> Result<()> {
		require("GetRuleAttachmentOptions", "rule_id", &self.rule_id)?;
		require("GetRuleAttachmentOptions", "attachment_id", &self.attachment_id)
	}
}

/// Options for [`crate::Client::update_rule_attachment`].
/// `if_match` must carry the etag returned by the last read of the attachment.
#[derive(Debug, Clone)]
pub struct UpdateRuleAttachmentOptions {
	pub rule_id: String,
	pub attachment_id: String,
	pub if_match: String,
	pub attachment: AttachmentRequest,
	pub transaction_id: Option<String>,
	pub headers: Vec<(String, String)>,
}

/// Constructors
impl UpdateRuleAttachmentOptions {
	pub fn new(
		rule_id: impl Into<String>,
		attachment_id: impl Into<String>,
		if_match: impl Into<String>,
		attachment: AttachmentRequest,
	) -> Self {
		Self {
			rule_id: rule_id.into(),
			attachment_id: attachment_id.into(),
			if_match: if_match.into(),
			attachment,
			transaction_id: None,
			headers: Vec::new(),
		}
	}
}

/// Chainable Setters
impl UpdateRuleAttachmentOptions {
	#[must_use]
	pub fn with_transaction_id(mut self, value: impl Into<String>) -> Self {
		self.transaction_id = Some(value.into());
		self
	}

	/// Add or replace a custom header.
	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		set_unique_header(&mut self.headers, name.into(), value.into());
		self
	}
}

impl UpdateRuleAttachmentOptions {
	pub(crate) fn validate(&self) -> Result<()> {
		require("UpdateRuleAttachmentOptions", "rule_id", &self.rule_id)?;
		require("UpdateRuleAttachmentOptions", "attachment_id", &self.attachment_id)?;
		require("UpdateRuleAttachmentOptions", "if_match", &self.if_match)
	}
}

/// Options for [`crate::Client::delete_rule_attachment`].
#[derive(Debug, Clone)]
pub struct DeleteRuleAttachmentOptions {
	pub rule_id: String,
	pub attachment_id: String,
	pub transaction_id: Option<String>,
	pub headers: Vec<(String, String)>,
}

/// Constructors
impl DeleteRuleAttachmentOptions {
	pub fn new(rule_id: impl Into<String>, attachment_id: impl Into<String>) -> Self {
		Self {
			rule_id: rule_id.into(),
			attachment_id: attachment_id.into(),
			transaction_id: None,
			headers: Vec::new(),
		}
	}
}

/// Chainable Setters
impl DeleteRuleAttachmentOptions {
	#[must_use]
	pub fn with_transaction_id(mut self, value: impl Into<String>) -> Self {
		self.transaction_id = Some(value.into());
		self
	}

	/// Add or replace a custom header.
	#[must_use]
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		set_unique_header(&mut self.headers, name.into(), value.into());
		self
	}
}

impl DeleteRuleAttachmentOptions {
	pub(crate) fn validate(&self) -> Result<()> {
		require("DeleteRuleAttachmentOptions", "rule_id", &self.rule_id)?;
		require("DeleteRuleAttachmentOptions", "attachment_id", &self.attachment_id)
	}
}

// endregion: --- Attachment Options

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use crate::governance::RuleScope;

	#[test]
	fn test_validate_empty_required() {
		let err = GetRuleOptions::new("").validate().unwrap_err();
		assert!(matches!(
			err,
			Error::OptionRequired {
				options: "GetRuleOptions",
				field: "rule_id"
			}
		));

		let err = CreateRulesOptions::new(Vec::new()).validate().unwrap_err();
		assert!(matches!(err, Error::OptionRequired { field: "rules", .. }));

		let err = CreateRuleAttachmentsOptions::new("rule-1", Vec::new())
			.validate()
			.unwrap_err();
		assert!(matches!(err, Error::OptionRequired { field: "attachments", .. }));
	}

	#[test]
	fn test_validate_ok() {
		assert!(GetRuleOptions::new("rule-1").validate().is_ok());
		assert!(ListRulesOptions::new().validate().is_ok());

		let attachment = AttachmentRequest::new("acc", RuleScope::new("acc", RuleScope::SCOPE_TYPE_ACCOUNT));
		assert!(CreateRuleAttachmentsOptions::new("rule-1", vec![attachment])
			.validate()
			.is_ok());
	}

	#[test]
	fn test_with_header_unique_keys() {
		let options = GetRuleOptions::new("rule-1")
			.with_header("X-Custom", "one")
			.with_header("x-custom", "two");
		assert_eq!(options.headers.len(), 1);
		assert_eq!(options.headers[0].1, "two");
	}
}

// endregion: --- Tests
