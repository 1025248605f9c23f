//! Rule attachment models: an attachment binds a rule to one included scope and
//! zero or more excluded sub-scopes.

use crate::governance::Link;
use serde::{Deserialize, Serialize};

// region:    --- RuleScope

/// A scope an attachment applies to (or excludes).
/// Known `scope_type` values are the `SCOPE_TYPE_*` constants; any string is accepted on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleScope {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
	pub scope_id: String,
	pub scope_type: String,
}

impl RuleScope {
	pub const SCOPE_TYPE_ACCOUNT: &'static str = "account";
	pub const SCOPE_TYPE_ACCOUNT_GROUP: &'static str = "account.account_group";
	pub const SCOPE_TYPE_ENTERPRISE: &'static str = "enterprise";
	pub const SCOPE_TYPE_ENTERPRISE_ACCOUNT: &'static str = "enterprise.account";
	pub const SCOPE_TYPE_ENTERPRISE_ACCOUNT_GROUP: &'static str = "enterprise.account_group";
}

/// Constructors
impl RuleScope {
	pub fn new(scope_id: impl Into<String>, scope_type: impl Into<String>) -> Self {
		Self {
			note: None,
			scope_id: scope_id.into(),
			scope_type: scope_type.into(),
		}
	}
}

/// Chainable Setters
impl RuleScope {
	#[must_use]
	pub fn with_note(mut self, value: impl Into<String>) -> Self {
		self.note = Some(value.into());
		self
	}
}

// endregion: --- RuleScope

// region:    --- Attachments

/// The caller-supplied shape of an attachment (create and update requests).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentRequest {
	pub account_id: String,
	pub included_scope: RuleScope,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub excluded_scopes: Option<Vec<RuleScope>>,
}

/// Constructors
impl AttachmentRequest {
	pub fn new(account_id: impl Into<String>, included_scope: RuleScope) -> Self {
		Self {
			account_id: account_id.into(),
			included_scope,
			excluded_scopes: None,
		}
	}
}

/// Chainable Setters
impl AttachmentRequest {
	#[must_use]
	pub fn with_excluded_scopes(mut self, values: Vec<RuleScope>) -> Self {
		self.excluded_scopes = Some(values);
		self
	}
}

/// A rule attachment, as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleAttachment {
	pub attachment_id: String,
	pub rule_id: String,
	pub account_id: String,
	pub included_scope: RuleScope,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub excluded_scopes: Option<Vec<RuleScope>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRuleAttachmentsResponse {
	pub attachments: Vec<RuleAttachment>,
}

/// A page of rule attachments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleAttachmentList {
	pub offset: u32,
	pub limit: u32,
	pub total_count: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub first: Option<Link>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last: Option<Link>,
	pub attachments: Vec<RuleAttachment>,
}

// endregion: --- Attachments
