use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::ApiError;

/// 405 listing the methods the route does accept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct MethodNotAllowedError {
    code: i32,
    message: String,
    allowed: Vec<String>,
}

impl MethodNotAllowedError {
    pub fn new<I, S>(requested: &str, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        let message = format!(
            "method {} is not allowed, but [{}] are",
            requested,
            allowed.join(",")
        );
        Self {
            code: i32::from(StatusCode::METHOD_NOT_ALLOWED.as_u16()),
            message,
            allowed,
        }
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    /// Value for the `Allow` response header
    pub fn allow_header(&self) -> String {
        self.allowed.join(",")
    }
}

impl ApiError for MethodNotAllowedError {
    fn code(&self) -> i32 {
        self.code
    }

    fn message(&self) -> String {
        self.message.clone()
    }
}
