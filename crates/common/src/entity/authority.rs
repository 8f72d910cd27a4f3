use serde::{Deserialize, Serialize};

use super::impl_rule_entity;

pub const AUTHORITY_WHITE: i32 = 0;
pub const AUTHORITY_BLACK: i32 = 1;

/// Caller allow/deny list for one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorityRuleEntity {
    pub id: Option<i64>,
    pub app: String,
    pub ip: Option<String>,
    pub port: Option<i32>,
    pub rule: Option<AuthorityRule>,
    pub gmt_create: Option<i64>,
    pub gmt_modified: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorityRule {
    pub resource: String,
    /// Comma-separated caller app names the strategy applies to.
    pub limit_app: String,
    /// [`AUTHORITY_WHITE`] (allow) or [`AUTHORITY_BLACK`] (deny).
    pub strategy: i32,
}

impl AuthorityRuleEntity {
    pub fn resource(&self) -> Option<&str> {
        self.rule.as_ref().map(|r| r.resource.as_str())
    }
}

impl_rule_entity!(AuthorityRuleEntity);
