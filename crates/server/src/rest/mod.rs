mod authority;
mod degrade;
mod health;
mod param_flow;
pub mod result;
mod router;
mod system;

pub use result::ApiResult;
pub use router::{router, AppState};
