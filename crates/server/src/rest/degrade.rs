use axum::extract::{Path, Query, State};
use axum::Json;

use flowgate_common::entity::DegradeRuleEntity;

use super::param_flow::AppQuery;
use super::{ApiResult, AppState};
use crate::validator;

pub async fn query_rules(
    State(state): State<AppState>,
    Query(q): Query<AppQuery>,
) -> Json<ApiResult<Vec<DegradeRuleEntity>>> {
    if q.app.trim().is_empty() {
        return Json(ApiResult::of_fail("app can't be null or empty"));
    }
    tracing::info!(app = %q.app, "query degrade rules");
    match state.degrade.query_rules(&q.app).await {
        Ok(rules) => Json(ApiResult::of_success(rules)),
        Err(e) => {
            tracing::error!(error = %e, "error when querying degrade rules");
            Json(ApiResult::of_error(&e))
        }
    }
}

pub async fn add_rule(
    State(state): State<AppState>,
    Json(mut entity): Json<DegradeRuleEntity>,
) -> Json<ApiResult<DegradeRuleEntity>> {
    tracing::info!(app = %entity.app, "adding degrade rule");
    if let Err(e) = validator::validate_degrade(&entity) {
        return Json(ApiResult::of_fail(e.0));
    }
    entity.resource = entity.resource.trim().to_string();
    match state.degrade.create(entity).await {
        Ok(saved) => Json(ApiResult::of_success(saved)),
        Err(e) => {
            tracing::error!(error = %e, "failed to add degrade rule");
            Json(ApiResult::of_error(&e))
        }
    }
}

pub async fn update_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut entity): Json<DegradeRuleEntity>,
) -> Json<ApiResult<DegradeRuleEntity>> {
    tracing::info!(id, "updating degrade rule");
    if id <= 0 {
        return Json(ApiResult::of_fail("Invalid id"));
    }
    if let Err(e) = validator::validate_degrade(&entity) {
        return Json(ApiResult::of_fail(e.0));
    }
    entity.resource = entity.resource.trim().to_string();
    match state.degrade.update(id, entity).await {
        Ok(saved) => Json(ApiResult::of_success(saved)),
        Err(e) => {
            tracing::error!(error = %e, id, "failed to update degrade rule");
            Json(ApiResult::of_error(&e))
        }
    }
}

pub async fn delete_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<ApiResult<i64>> {
    tracing::info!(id, "removing degrade rule");
    match state.degrade.delete(id).await {
        Ok(deleted) => Json(ApiResult::of_success_opt(deleted)),
        Err(e) => {
            tracing::error!(error = %e, id, "failed to delete degrade rule");
            Json(ApiResult::of_error(&e))
        }
    }
}
