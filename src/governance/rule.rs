//! Rule models for the Configuration Governance service.
//!
//! Serialization notes:
//! - Optional fields are skipped when absent (sparse bodies, no null-filling);
//!   required fields are plain typed fields, so decoding fails fast when a required
//!   key is missing or mistyped, and never produces partial objects.
//! - Enumerated string fields (`rule_type`, `operator`, `action`) are deliberately
//!   kept as free-form strings; the known values are exposed as associated constants.
//!   The service may grow the value domains without breaking decoding.

use serde::{Deserialize, Serialize};

// region:    --- Rule

/// A governance rule, as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
	pub account_id: String,
	pub name: String,
	pub description: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rule_type: Option<String>,
	pub target: TargetResource,
	pub required_config: RuleCondition,
	pub enforcement_actions: Vec<EnforcementAction>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub labels: Option<Vec<String>>,
	pub rule_id: String,
	pub creation_date: String,
	pub created_by: String,
	pub modification_date: String,
	pub modified_by: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub number_of_attachments: Option<u32>,
}

impl Rule {
	/// Known `rule_type` value.
	pub const RULE_TYPE_USER_DEFINED: &'static str = "user_defined";
}

/// The caller-supplied shape of a rule (create and update requests).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRequest {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub account_id: Option<String>,
	pub name: String,
	pub description: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rule_type: Option<String>,
	pub target: TargetResource,
	pub required_config: RuleCondition,
	pub enforcement_actions: Vec<EnforcementAction>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub labels: Option<Vec<String>>,
}

/// Constructors
impl RuleRequest {
	pub fn new(
		name: impl Into<String>,
		description: impl Into<String>,
		target: TargetResource,
		required_config: RuleCondition,
		enforcement_actions: Vec<EnforcementAction>,
	) -> Self {
		Self {
			account_id: None,
			name: name.into(),
			description: description.into(),
			rule_type: None,
			target,
			required_config,
			enforcement_actions,
			labels: None,
		}
	}
}

/// Chainable Setters
impl RuleRequest {
	#[must_use]
	pub fn with_account_id(mut self, value: impl Into<String>) -> Self {
		self.account_id = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_rule_type(mut self, value: impl Into<String>) -> Self {
		self.rule_type = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_labels(mut self, values: Vec<String>) -> Self {
		self.labels = Some(values);
		self
	}
}

// endregion: --- Rule

// region:    --- TargetResource

/// The resource kind a rule targets, optionally narrowed by attribute checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetResource {
	pub service_name: String,
	pub resource_kind: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additional_target_attributes: Option<Vec<TargetAttribute>>,
}

/// Constructors
impl TargetResource {
	pub fn new(service_name: impl Into<String>, resource_kind: impl Into<String>) -> Self {
		Self {
			service_name: service_name.into(),
			resource_kind: resource_kind.into(),
			additional_target_attributes: None,
		}
	}
}

/// Chainable Setters
impl TargetResource {
	#[must_use]
	pub fn with_additional_target_attributes(mut self, values: Vec<TargetAttribute>) -> Self {
		self.additional_target_attributes = Some(values);
		self
	}
}

/// One attribute check narrowing a [`TargetResource`].
/// Known `operator` values are the [`RuleSingleProperty`] `OPERATOR_*` constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetAttribute {
	pub name: String,
	pub operator: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
}

/// Constructors
impl TargetAttribute {
	pub fn new(name: impl Into<String>, operator: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			operator: operator.into(),
			value: None,
		}
	}
}

/// Chainable Setters
impl TargetAttribute {
	#[must_use]
	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}
}

// endregion: --- TargetResource

// region:    --- RuleCondition

/// The `required_config` condition of a rule.
///
/// Polymorphic over three shapes, discriminated by which key the JSON object carries:
/// - `property` — a single property check,
/// - `and` — all listed conditions must hold,
/// - `or` — at least one listed condition must hold.
///
/// An object carrying none of these keys fails to decode.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleCondition {
	SingleProperty(RuleSingleProperty),
	And(RuleConditionAnd),
	Or(RuleConditionOr),
}

impl Serialize for RuleCondition {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
		match self {
			Self::SingleProperty(inner) => inner.serialize(serializer),
			Self::And(inner) => inner.serialize(serializer),
			Self::Or(inner) => inner.serialize(serializer),
		}
	}
}

impl<'de> Deserialize<'de> for RuleCondition {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
		use serde::de::Error as _;

		let value = serde_json::Value::deserialize(deserializer)?;
		let Some(object) = value.as_object() else {
			return Err(D::Error::custom("rule condition must be a JSON object"));
		};

		if object.contains_key("and") {
			serde_json::from_value(value).map(Self::And).map_err(D::Error::custom)
		} else if object.contains_key("or") {
			serde_json::from_value(value).map(Self::Or).map_err(D::Error::custom)
		} else if object.contains_key("property") {
			serde_json::from_value(value)
				.map(Self::SingleProperty)
				.map_err(D::Error::custom)
		} else {
			Err(D::Error::custom(
				"rule condition has no recognized shape (expected 'property', 'and', or 'or')",
			))
		}
	}
}

impl From<RuleSingleProperty> for RuleCondition {
	fn from(value: RuleSingleProperty) -> Self {
		Self::SingleProperty(value)
	}
}

/// A conjunction of property checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConditionAnd {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub and: Vec<RuleSingleProperty>,
}

/// Constructors
impl RuleConditionAnd {
	pub fn new(conditions: Vec<RuleSingleProperty>) -> Self {
		Self {
			description: None,
			and: conditions,
		}
	}
}

/// A disjunction of property checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConditionOr {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub or: Vec<RuleSingleProperty>,
}

/// Constructors
impl RuleConditionOr {
	pub fn new(conditions: Vec<RuleSingleProperty>) -> Self {
		Self {
			description: None,
			or: conditions,
		}
	}
}

/// A single property check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSingleProperty {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub property: String,
	pub operator: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
}

/// Known `operator` values.
impl RuleSingleProperty {
	pub const OPERATOR_IS_TRUE: &'static str = "is_true";
	pub const OPERATOR_IS_FALSE: &'static str = "is_false";
	pub const OPERATOR_IS_EMPTY: &'static str = "is_empty";
	pub const OPERATOR_IS_NOT_EMPTY: &'static str = "is_not_empty";
	pub const OPERATOR_STRING_EQUALS: &'static str = "string_equals";
	pub const OPERATOR_STRING_NOT_EQUALS: &'static str = "string_not_equals";
	pub const OPERATOR_STRING_MATCH: &'static str = "string_match";
	pub const OPERATOR_STRING_NOT_MATCH: &'static str = "string_not_match";
	pub const OPERATOR_NUM_EQUALS: &'static str = "num_equals";
	pub const OPERATOR_NUM_NOT_EQUALS: &'static str = "num_not_equals";
	pub const OPERATOR_NUM_LESS_THAN: &'static str = "num_less_than";
	pub const OPERATOR_NUM_GREATER_THAN: &'static str = "num_greater_than";
	pub const OPERATOR_IPS_IN_RANGE: &'static str = "ips_in_range";
	pub const OPERATOR_STRINGS_IN_LIST: &'static str = "strings_in_list";
}

/// Constructors
impl RuleSingleProperty {
	pub fn new(property: impl Into<String>, operator: impl Into<String>) -> Self {
		Self {
			description: None,
			property: property.into(),
			operator: operator.into(),
			value: None,
		}
	}
}

/// Chainable Setters
impl RuleSingleProperty {
	#[must_use]
	pub fn with_description(mut self, value: impl Into<String>) -> Self {
		self.description = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}
}

// endregion: --- RuleCondition

// region:    --- EnforcementAction

/// What the service does when a rule is violated.
/// Known `action` values are the `ACTION_*` constants; any string is accepted on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnforcementAction {
	pub action: String,
}

impl EnforcementAction {
	pub const ACTION_AUDIT_LOG: &'static str = "audit_log";
	pub const ACTION_DISALLOW: &'static str = "disallow";
}

/// Constructors
impl EnforcementAction {
	pub fn new(action: impl Into<String>) -> Self {
		Self { action: action.into() }
	}
}

// endregion: --- EnforcementAction

// region:    --- Create / List Shapes

/// One rule within a [`crate::governance::CreateRulesOptions`] request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRuleRequest {
	/// Caller-chosen correlation id, echoed back per item in the multi-status response.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub request_id: Option<String>,
	pub rule: RuleRequest,
}

/// Constructors
impl CreateRuleRequest {
	pub fn new(rule: RuleRequest) -> Self {
		Self { request_id: None, rule }
	}
}

/// Chainable Setters
impl CreateRuleRequest {
	#[must_use]
	pub fn with_request_id(mut self, value: impl Into<String>) -> Self {
		self.request_id = Some(value.into());
		self
	}
}

/// Per-item outcome of a create-rules call (the call is multi-status: each
/// submitted rule succeeds or fails independently).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRuleResponse {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub request_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status_code: Option<u16>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub rule: Option<Rule>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub errors: Option<Vec<RuleResponseError>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResponseError {
	pub code: String,
	pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRulesResponse {
	pub rules: Vec<CreateRuleResponse>,
}

/// A page of rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleList {
	pub offset: u32,
	pub limit: u32,
	pub total_count: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub first: Option<Link>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last: Option<Link>,
	pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
	pub href: String,
}

// endregion: --- Create / List Shapes

// region:    --- Tests


// endregion: --- Tests
