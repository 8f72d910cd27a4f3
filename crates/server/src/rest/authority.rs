use axum::extract::{Path, Query, State};
use axum::Json;

use flowgate_common::entity::AuthorityRuleEntity;

use super::param_flow::AppQuery;
use super::{ApiResult, AppState};
use crate::validator;

pub async fn query_rules(
    State(state): State<AppState>,
    Query(q): Query<AppQuery>,
) -> Json<ApiResult<Vec<AuthorityRuleEntity>>> {
    if q.app.trim().is_empty() {
        return Json(ApiResult::of_fail("app can't be null or empty"));
    }
    tracing::info!(app = %q.app, "query authority rules");
    match state.authority.query_rules(&q.app).await {
        Ok(rules) => Json(ApiResult::of_success(rules)),
        Err(e) => {
            tracing::error!(error = %e, "error when querying authority rules");
            Json(ApiResult::of_error(&e))
        }
    }
}

pub async fn add_rule(
    State(state): State<AppState>,
    Json(mut entity): Json<AuthorityRuleEntity>,
) -> Json<ApiResult<AuthorityRuleEntity>> {
    tracing::info!(app = %entity.app, "adding authority rule");
    if let Err(e) = validator::validate_authority(&entity) {
        return Json(ApiResult::of_fail(e.0));
    }
    if let Some(rule) = entity.rule.as_mut() {
        rule.resource = rule.resource.trim().to_string();
    }
    match state.authority.create(entity).await {
        Ok(saved) => Json(ApiResult::of_success(saved)),
        Err(e) => {
            tracing::error!(error = %e, "failed to add authority rule");
            Json(ApiResult::of_error(&e))
        }
    }
}

pub async fn update_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut entity): Json<AuthorityRuleEntity>,
) -> Json<ApiResult<AuthorityRuleEntity>> {
    tracing::info!(id, "updating authority rule");
    if id <= 0 {
        return Json(ApiResult::of_fail("Invalid id"));
    }
    if let Err(e) = validator::validate_authority(&entity) {
        return Json(ApiResult::of_fail(e.0));
    }
    if let Some(rule) = entity.rule.as_mut() {
        rule.resource = rule.resource.trim().to_string();
    }
    match state.authority.update(id, entity).await {
        Ok(saved) => Json(ApiResult::of_success(saved)),
        Err(e) => {
            tracing::error!(error = %e, id, "failed to update authority rule");
            Json(ApiResult::of_error(&e))
        }
    }
}

pub async fn delete_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<ApiResult<i64>> {
    tracing::info!(id, "removing authority rule");
    match state.authority.delete(id).await {
        Ok(deleted) => Json(ApiResult::of_success_opt(deleted)),
        Err(e) => {
            tracing::error!(error = %e, id, "failed to delete authority rule");
            Json(ApiResult::of_error(&e))
        }
    }
}
