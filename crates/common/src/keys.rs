//! Deterministic naming for rule records in the shared config store.
//!
//! Every (app, rule kind) pair maps to exactly one record: the data id is
//! the app name followed by the kind suffix, always inside [`GROUP_ID`].

pub const GROUP_ID: &str = "FLOWGATE_GROUP";

pub const PARAM_FLOW_DATA_ID_SUFFIX: &str = "-param-rules";
pub const SYSTEM_DATA_ID_SUFFIX: &str = "-system-rules";
pub const AUTHORITY_DATA_ID_SUFFIX: &str = "-authority-rules";
pub const DEGRADE_DATA_ID_SUFFIX: &str = "-degrade-rules";

pub fn data_id(app: &str, suffix: &str) -> String {
    format!("{app}{suffix}")
}
