use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use flowgate_common::entity::ParamFlowRuleEntity;

use super::{ApiResult, AppState};
use crate::validator;

#[derive(Deserialize)]
pub struct AppQuery {
    #[serde(default)]
    pub app: String,
}

pub async fn query_rules(
    State(state): State<AppState>,
    Query(q): Query<AppQuery>,
) -> Json<ApiResult<Vec<ParamFlowRuleEntity>>> {
    if q.app.trim().is_empty() {
        return Json(ApiResult::of_fail("app can't be null or empty"));
    }
    tracing::info!(app = %q.app, "query param flow rules");
    match state.param_flow.query_rules(&q.app).await {
        Ok(rules) => Json(ApiResult::of_success(rules)),
        Err(e) => {
            tracing::error!(error = %e, "error when querying param flow rules");
            Json(ApiResult::of_error(&e))
        }
    }
}

pub async fn add_rule(
    State(state): State<AppState>,
    Json(mut entity): Json<ParamFlowRuleEntity>,
) -> Json<ApiResult<ParamFlowRuleEntity>> {
    tracing::info!(app = %entity.app, "adding param flow rule");
    if let Err(e) = validator::validate_param_flow(&entity) {
        return Json(ApiResult::of_fail(e.0));
    }
    if let Some(rule) = entity.rule.as_mut() {
        rule.resource = rule.resource.trim().to_string();
    }
    match state.param_flow.create(entity).await {
        Ok(saved) => Json(ApiResult::of_success(saved)),
        Err(e) => {
            tracing::error!(error = %e, "failed to add param flow rule");
            Json(ApiResult::of_error(&e))
        }
    }
}

pub async fn update_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut entity): Json<ParamFlowRuleEntity>,
) -> Json<ApiResult<ParamFlowRuleEntity>> {
    tracing::info!(id, "updating param flow rule");
    if id <= 0 {
        return Json(ApiResult::of_fail("Invalid id"));
    }
    if let Err(e) = validator::validate_param_flow(&entity) {
        return Json(ApiResult::of_fail(e.0));
    }
    if let Some(rule) = entity.rule.as_mut() {
        rule.resource = rule.resource.trim().to_string();
    }
    match state.param_flow.update(id, entity).await {
        Ok(saved) => Json(ApiResult::of_success(saved)),
        Err(e) => {
            tracing::error!(error = %e, id, "failed to update param flow rule");
            Json(ApiResult::of_error(&e))
        }
    }
}

pub async fn delete_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<ApiResult<i64>> {
    tracing::info!(id, "removing param flow rule");
    match state.param_flow.delete(id).await {
        Ok(deleted) => Json(ApiResult::of_success_opt(deleted)),
        Err(e) => {
            tracing::error!(error = %e, id, "failed to delete param flow rule");
            Json(ApiResult::of_error(&e))
        }
    }
}
