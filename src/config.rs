use anyhow::{bail, Context, Result};
use axum::http::StatusCode;
use std::env;
use tracing::info;

use crate::errors::codes::{http_status, DEFAULT_HTTP_CODE};

/// Environment variable overriding the status used for application codes
pub const DEFAULT_HTTP_CODE_VAR: &str = "API_ERRORS_DEFAULT_HTTP_CODE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Status line used for codes that are not standard HTTP statuses
    pub default_http_code: StatusCode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_http_code: DEFAULT_HTTP_CODE,
        }
    }
}

impl RenderConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Self::from_value(env::var(DEFAULT_HTTP_CODE_VAR).ok().as_deref())?;
        info!(
            default_http_code = config.default_http_code.as_u16(),
            "Error rendering configuration loaded"
        );
        Ok(config)
    }

    /// Build from the raw setting; `None` keeps the default of 422
    pub fn from_value(default_http_code: Option<&str>) -> Result<Self> {
        let Some(raw) = default_http_code else {
            return Ok(Self::default());
        };

        let code: i32 = raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", DEFAULT_HTTP_CODE_VAR))?;
        match http_status(code) {
            Some(status) => Ok(Self {
                default_http_code: status,
            }),
            None => bail!(
                "{} must be a standard HTTP status below 600, got {}",
                DEFAULT_HTTP_CODE_VAR,
                code
            ),
        }
    }
}
