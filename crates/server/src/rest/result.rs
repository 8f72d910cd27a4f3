//! Tagged success/failure envelope returned by every rule endpoint.

use serde::Serialize;

use crate::error::RuleError;

pub const FAIL_CODE: i32 = -1;

/// Reserved for clients lacking a required capability. Not produced by the
/// synchronization core today, but part of the result vocabulary.
pub const UNSUPPORTED_VERSION_CODE: i32 = 4041;

#[derive(Debug, Serialize)]
pub struct ApiResult<T> {
    pub success: bool,
    pub code: i32,
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResult<T> {
    pub fn of_success(data: T) -> Self {
        Self::of_success_opt(Some(data))
    }

    pub fn of_success_opt(data: Option<T>) -> Self {
        Self {
            success: true,
            code: 0,
            msg: None,
            data,
        }
    }

    pub fn of_fail(msg: impl Into<String>) -> Self {
        Self::of_fail_code(FAIL_CODE, msg)
    }

    pub fn of_fail_code(code: i32, msg: impl Into<String>) -> Self {
        Self {
            success: false,
            code,
            msg: Some(msg.into()),
            data: None,
        }
    }

    pub fn of_error(err: &RuleError) -> Self {
        Self::of_fail(err.to_string())
    }
}
