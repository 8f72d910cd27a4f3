//! Typed records for each rule kind.
//!
//! All kinds share the same envelope: a repository-assigned numeric id
//! (absent until first save), the owning application name, and the two
//! repository-managed timestamps. The [`RuleEntity`] trait exposes that
//! envelope so the repository and the synchronizer stay generic over kind.
//!
//! Field names serialize in camelCase; that is the format the applications
//! consuming the remote records already parse.

mod authority;
mod degrade;
mod param_flow;
mod system;

pub use authority::{AuthorityRule, AuthorityRuleEntity, AUTHORITY_BLACK, AUTHORITY_WHITE};
pub use degrade::{
    DegradeRuleEntity, DEGRADE_GRADE_EXCEPTION_COUNT, DEGRADE_GRADE_EXCEPTION_RATIO,
    DEGRADE_GRADE_RT,
};
pub use param_flow::{ParamFlowRule, ParamFlowRuleEntity, FLOW_GRADE_QPS};
pub use system::SystemRuleEntity;

/// Envelope shared by every rule kind.
pub trait RuleEntity: Clone + Send + Sync + 'static {
    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: Option<i64>);
    fn app(&self) -> &str;
    fn set_app(&mut self, app: &str);
    fn gmt_create(&self) -> Option<i64>;
    fn set_gmt_create(&mut self, ms: Option<i64>);
    fn gmt_modified(&self) -> Option<i64>;
    fn set_gmt_modified(&mut self, ms: Option<i64>);
}

macro_rules! impl_rule_entity {
    ($ty:ty) => {
        impl crate::entity::RuleEntity for $ty {
            fn id(&self) -> Option<i64> {
                self.id
            }
            fn set_id(&mut self, id: Option<i64>) {
                self.id = id;
            }
            fn app(&self) -> &str {
                &self.app
            }
            fn set_app(&mut self, app: &str) {
                self.app = app.to_string();
            }
            fn gmt_create(&self) -> Option<i64> {
                self.gmt_create
            }
            fn set_gmt_create(&mut self, ms: Option<i64>) {
                self.gmt_create = ms;
            }
            fn gmt_modified(&self) -> Option<i64> {
                self.gmt_modified
            }
            fn set_gmt_modified(&mut self, ms: Option<i64>) {
                self.gmt_modified = ms;
            }
        }
    };
}

pub(crate) use impl_rule_entity;
