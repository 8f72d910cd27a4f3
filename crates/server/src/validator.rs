//! Structural and semantic checks gating every rule mutation.
//!
//! Pure functions, no I/O. Create and update run the same checks for every
//! kind except system rules: the create path requires exactly one threshold
//! to be set, while the update path checks each field independently. That
//! asymmetry is the existing contract and the two paths stay separate.

use flowgate_common::entity::{
    AuthorityRuleEntity, DegradeRuleEntity, ParamFlowRuleEntity, SystemRuleEntity,
    AUTHORITY_BLACK, AUTHORITY_WHITE, DEGRADE_GRADE_EXCEPTION_COUNT, DEGRADE_GRADE_RT,
    FLOW_GRADE_QPS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError(pub String);

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation: {}", self.0)
    }
}

impl std::error::Error for ValidationError {}

fn fail(msg: &str) -> Result<(), ValidationError> {
    Err(ValidationError(msg.to_string()))
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn opt_blank(s: &Option<String>) -> bool {
    s.as_deref().is_none_or(is_blank)
}

pub fn validate_param_flow(entity: &ParamFlowRuleEntity) -> Result<(), ValidationError> {
    if is_blank(&entity.app) {
        return fail("app can't be null or empty");
    }
    if opt_blank(&entity.ip) {
        return fail("ip can't be null or empty");
    }
    if entity.port.is_none_or(|p| p <= 0) {
        return fail("port can't be null");
    }
    let Some(rule) = &entity.rule else {
        return fail("rule can't be null");
    };
    if is_blank(&rule.resource) {
        return fail("resource name cannot be null or empty");
    }
    if rule.count < 0.0 {
        return fail("count should be valid");
    }
    if rule.grade != FLOW_GRADE_QPS {
        return fail("Unknown mode (blockGrade) for parameter flow control");
    }
    if rule.param_idx.is_none_or(|idx| idx < 0) {
        return fail("paramIdx should be valid");
    }
    if rule.duration_in_sec <= 0 {
        return fail("durationInSec should be valid");
    }
    if rule.control_behavior < 0 {
        return fail("controlBehavior should be valid");
    }
    Ok(())
}

fn count_set_and_non_negative(values: &[Option<f64>]) -> usize {
    values
        .iter()
        .filter(|v| v.is_some_and(|x| x >= 0.0))
        .count()
}

/// Create-path check: exactly one of the five thresholds must be active.
pub fn validate_system_create(entity: &SystemRuleEntity) -> Result<(), ValidationError> {
    if is_blank(&entity.app) {
        return fail("app can't be null or empty");
    }
    let set = count_set_and_non_negative(&[
        entity.highest_system_load,
        entity.avg_rt.map(|v| v as f64),
        entity.max_thread.map(|v| v as f64),
        entity.qps,
        entity.highest_cpu_usage,
    ]);
    if set != 1 {
        return Err(ValidationError(format!(
            "only one of [highestSystemLoad, avgRt, maxThread, qps, highestCpuUsage] \
             value must be set > 0, but {set} values get"
        )));
    }
    if entity.highest_cpu_usage.is_some_and(|v| v > 1.0) {
        return fail("highestCpuUsage must between [0.0, 1.0]");
    }
    Ok(())
}

/// Update-path check: each threshold independently, no exclusivity rule.
pub fn validate_system_update(entity: &SystemRuleEntity) -> Result<(), ValidationError> {
    if let Some(v) = entity.highest_system_load {
        if v < 0.0 {
            return fail("highestSystemLoad must >= 0");
        }
    }
    if let Some(v) = entity.highest_cpu_usage {
        if v < 0.0 {
            return fail("highestCpuUsage must >= 0");
        }
        if v > 1.0 {
            return fail("highestCpuUsage must <= 1");
        }
    }
    if let Some(v) = entity.avg_rt {
        if v < 0 {
            return fail("avgRt must >= 0");
        }
    }
    if let Some(v) = entity.max_thread {
        if v < 0 {
            return fail("maxThread must >= 0");
        }
    }
    if let Some(v) = entity.qps {
        if v < 0.0 {
            return fail("qps must >= 0");
        }
    }
    Ok(())
}

pub fn validate_authority(entity: &AuthorityRuleEntity) -> Result<(), ValidationError> {
    if is_blank(&entity.app) {
        return fail("app can't be null or empty");
    }
    if opt_blank(&entity.ip) {
        return fail("ip can't be null or empty");
    }
    if entity.port.is_none_or(|p| p <= 0) {
        return fail("port can't be null");
    }
    let Some(rule) = &entity.rule else {
        return fail("rule can't be null");
    };
    if is_blank(&rule.resource) {
        return fail("resource name cannot be null or empty");
    }
    if is_blank(&rule.limit_app) {
        return fail("limitApp should be valid");
    }
    if rule.strategy != AUTHORITY_WHITE && rule.strategy != AUTHORITY_BLACK {
        return fail("Invalid authority strategy");
    }
    Ok(())
}

pub fn validate_degrade(entity: &DegradeRuleEntity) -> Result<(), ValidationError> {
    if is_blank(&entity.app) {
        return fail("app can't be null or empty");
    }
    if opt_blank(&entity.ip) {
        return fail("ip can't be null or empty");
    }
    if entity.port.is_none_or(|p| p <= 0) {
        return fail("port can't be null");
    }
    if is_blank(&entity.resource) {
        return fail("resource name cannot be null or empty");
    }
    if entity.count < 0.0 {
        return fail("count should be valid");
    }
    if entity.time_window <= 0 {
        return fail("timeWindow should be valid");
    }
    if entity.grade < DEGRADE_GRADE_RT || entity.grade > DEGRADE_GRADE_EXCEPTION_COUNT {
        return fail("Invalid degrade strategy");
    }
    Ok(())
}
