use serde::{Deserialize, Serialize};

use super::impl_rule_entity;

pub const DEGRADE_GRADE_RT: i32 = 0;
pub const DEGRADE_GRADE_EXCEPTION_RATIO: i32 = 1;
pub const DEGRADE_GRADE_EXCEPTION_COUNT: i32 = 2;

/// Circuit-breaker rule for one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DegradeRuleEntity {
    pub id: Option<i64>,
    pub app: String,
    pub ip: Option<String>,
    pub port: Option<i32>,
    pub resource: String,
    /// One of the `DEGRADE_GRADE_*` constants.
    pub grade: i32,
    pub count: f64,
    /// Recovery window in seconds once the breaker opens.
    pub time_window: i64,
    pub min_request_amount: i64,
    pub stat_interval_ms: i64,
    pub slow_ratio_threshold: Option<f64>,
    pub gmt_create: Option<i64>,
    pub gmt_modified: Option<i64>,
}

impl Default for DegradeRuleEntity {
    fn default() -> Self {
        Self {
            id: None,
            app: String::new(),
            ip: None,
            port: None,
            resource: String::new(),
            grade: DEGRADE_GRADE_RT,
            count: 0.0,
            time_window: 0,
            min_request_amount: 5,
            stat_interval_ms: 1000,
            slow_ratio_threshold: None,
            gmt_create: None,
            gmt_modified: None,
        }
    }
}

impl_rule_entity!(DegradeRuleEntity);
