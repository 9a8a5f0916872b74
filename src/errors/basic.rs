use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::ApiError;

/// Minimal coded error: a code and a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct BasicError {
    code: i32,
    message: String,
}

impl BasicError {
    /// Create an error with an arbitrary code
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// 404, with "Not found" when no message is given
    pub fn not_found(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = "Not found".to_string();
        }
        Self::new(i32::from(StatusCode::NOT_FOUND.as_u16()), message)
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(i32::from(StatusCode::NOT_IMPLEMENTED.as_u16()), message)
    }

    /// 401 for a request that failed the given authentication scheme
    pub fn unauthenticated(scheme: &str) -> Self {
        Self::new(
            i32::from(StatusCode::UNAUTHORIZED.as_u16()),
            format!("unauthenticated for {}", scheme),
        )
    }
}

impl ApiError for BasicError {
    fn code(&self) -> i32 {
        self.code
    }

    fn message(&self) -> String {
        self.message.clone()
    }
}
