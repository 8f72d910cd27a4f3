use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;

use flowgate_common::entity::{
    AuthorityRuleEntity, DegradeRuleEntity, ParamFlowRuleEntity, RuleEntity, SystemRuleEntity,
};
use flowgate_common::keys;

use super::{authority, degrade, health, param_flow, system};
use crate::remote::{ConfigClient, ConfigRuleProvider, ConfigRulePublisher};
use crate::repository::InMemoryRuleRepository;
use crate::sync::RuleService;

#[derive(Clone)]
pub struct AppState {
    pub param_flow: RuleService<ParamFlowRuleEntity>,
    pub system: RuleService<SystemRuleEntity>,
    pub authority: RuleService<AuthorityRuleEntity>,
    pub degrade: RuleService<DegradeRuleEntity>,
}

fn service<T>(client: &Arc<dyn ConfigClient>, suffix: &'static str) -> RuleService<T>
where
    T: RuleEntity + Serialize + DeserializeOwned,
{
    RuleService::new(
        Arc::new(InMemoryRuleRepository::new()),
        Arc::new(ConfigRuleProvider::new(Arc::clone(client), suffix)),
        Arc::new(ConfigRulePublisher::new(Arc::clone(client), suffix)),
    )
}

impl AppState {
    /// Wires one service per rule kind, all sharing the same config-store
    /// client. Each kind gets its own repository and id sequence.
    pub fn new(client: Arc<dyn ConfigClient>) -> Self {
        Self {
            param_flow: service(&client, keys::PARAM_FLOW_DATA_ID_SUFFIX),
            system: service(&client, keys::SYSTEM_DATA_ID_SUFFIX),
            authority: service(&client, keys::AUTHORITY_DATA_ID_SUFFIX),
            degrade: service(&client, keys::DEGRADE_DATA_ID_SUFFIX),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/paramFlow/rules", get(param_flow::query_rules))
        .route("/paramFlow/rule", post(param_flow::add_rule))
        .route(
            "/paramFlow/rule/{id}",
            put(param_flow::update_rule).delete(param_flow::delete_rule),
        )
        .route("/system/rules", get(system::query_rules))
        .route("/system/rule", post(system::add_rule))
        .route(
            "/system/rule/{id}",
            put(system::update_rule).delete(system::delete_rule),
        )
        .route("/authority/rules", get(authority::query_rules))
        .route("/authority/rule", post(authority::add_rule))
        .route(
            "/authority/rule/{id}",
            put(authority::update_rule).delete(authority::delete_rule),
        )
        .route("/degrade/rules", get(degrade::query_rules))
        .route("/degrade/rule", post(degrade::add_rule))
        .route(
            "/degrade/rule/{id}",
            put(degrade::update_rule).delete(degrade::delete_rule),
        )
        .with_state(state)
}
