use serde::{Deserialize, Serialize};

use super::impl_rule_entity;
use crate::wire;

/// Whole-application protection thresholds.
///
/// Exactly one of the five thresholds is meant to be active per rule; the
/// others stay unset. Unset thresholds appear as `-1` on the wire (the
/// sentinel the consuming applications already expect) but are `None` here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemRuleEntity {
    pub id: Option<i64>,
    pub app: String,
    pub ip: Option<String>,
    pub port: Option<i32>,
    #[serde(with = "wire::f64_sentinel")]
    pub highest_system_load: Option<f64>,
    #[serde(with = "wire::i64_sentinel")]
    pub avg_rt: Option<i64>,
    #[serde(with = "wire::i64_sentinel")]
    pub max_thread: Option<i64>,
    #[serde(with = "wire::f64_sentinel")]
    pub qps: Option<f64>,
    #[serde(with = "wire::f64_sentinel")]
    pub highest_cpu_usage: Option<f64>,
    pub gmt_create: Option<i64>,
    pub gmt_modified: Option<i64>,
}

impl_rule_entity!(SystemRuleEntity);
