use axum::extract::{Path, Query, State};
use axum::Json;

use flowgate_common::entity::SystemRuleEntity;

use super::param_flow::AppQuery;
use super::{ApiResult, AppState};
use crate::validator;

pub async fn query_rules(
    State(state): State<AppState>,
    Query(q): Query<AppQuery>,
) -> Json<ApiResult<Vec<SystemRuleEntity>>> {
    if q.app.trim().is_empty() {
        return Json(ApiResult::of_fail("app can't be null or empty"));
    }
    tracing::info!(app = %q.app, "query system rules");
    match state.system.query_rules(&q.app).await {
        Ok(rules) => Json(ApiResult::of_success(rules)),
        Err(e) => {
            tracing::error!(error = %e, "error when querying system rules");
            Json(ApiResult::of_error(&e))
        }
    }
}

pub async fn add_rule(
    State(state): State<AppState>,
    Json(entity): Json<SystemRuleEntity>,
) -> Json<ApiResult<SystemRuleEntity>> {
    tracing::info!(app = %entity.app, "adding system rule");
    if let Err(e) = validator::validate_system_create(&entity) {
        return Json(ApiResult::of_fail(e.0));
    }
    match state.system.create(entity).await {
        Ok(saved) => Json(ApiResult::of_success(saved)),
        Err(e) => {
            tracing::error!(error = %e, "failed to add system rule");
            Json(ApiResult::of_error(&e))
        }
    }
}

/// The update path deliberately skips the exactly-one-threshold rule that
/// gates creation; each present field is checked on its own.
pub async fn update_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(entity): Json<SystemRuleEntity>,
) -> Json<ApiResult<SystemRuleEntity>> {
    tracing::info!(id, "updating system rule");
    if let Err(e) = validator::validate_system_update(&entity) {
        return Json(ApiResult::of_fail(e.0));
    }
    match state.system.update(id, entity).await {
        Ok(saved) => Json(ApiResult::of_success(saved)),
        Err(e) => {
            tracing::error!(error = %e, id, "failed to update system rule");
            Json(ApiResult::of_error(&e))
        }
    }
}

pub async fn delete_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<ApiResult<i64>> {
    tracing::info!(id, "removing system rule");
    match state.system.delete(id).await {
        Ok(deleted) => Json(ApiResult::of_success_opt(deleted)),
        Err(e) => {
            tracing::error!(error = %e, id, "failed to delete system rule");
            Json(ApiResult::of_error(&e))
        }
    }
}
