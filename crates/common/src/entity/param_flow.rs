use serde::{Deserialize, Serialize};

use super::impl_rule_entity;

/// The only throttling mode supported for parameter flow control.
pub const FLOW_GRADE_QPS: i32 = 1;

/// Parameter-level flow limit for one resource, owned by one application.
///
/// `ip`/`port` identify the node the rule was authored against; the limit
/// itself lives in the nested [`ParamFlowRule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ParamFlowRuleEntity {
    pub id: Option<i64>,
    pub app: String,
    pub ip: Option<String>,
    pub port: Option<i32>,
    pub rule: Option<ParamFlowRule>,
    pub gmt_create: Option<i64>,
    pub gmt_modified: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParamFlowRule {
    pub resource: String,
    pub grade: i32,
    pub param_idx: Option<i32>,
    pub count: f64,
    pub duration_in_sec: i64,
    pub control_behavior: i32,
    pub burst_count: i64,
}

impl Default for ParamFlowRule {
    fn default() -> Self {
        Self {
            resource: String::new(),
            grade: FLOW_GRADE_QPS,
            param_idx: None,
            count: 0.0,
            duration_in_sec: 1,
            control_behavior: 0,
            burst_count: 0,
        }
    }
}

impl ParamFlowRuleEntity {
    pub fn resource(&self) -> Option<&str> {
        self.rule.as_ref().map(|r| r.resource.as_str())
    }
}

impl_rule_entity!(ParamFlowRuleEntity);
