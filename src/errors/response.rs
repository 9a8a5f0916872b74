use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::ToSchema;

use super::codes::{http_status, ValidationCode, DEFAULT_HTTP_CODE};
use super::{ApiError, Error};
use crate::config::RenderConfig;

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Error code: an HTTP status, or an application code from 600 upwards
    pub code: i32,
    /// Human-readable error message
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Body served when there is nothing to report
    pub fn unknown() -> Self {
        Self::new(500, "Unknown error")
    }
}

/// Outcome of classifying an error, before it is written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub status: StatusCode,
    /// `Allow` header value, only for method-not-allowed
    pub allow: Option<String>,
    pub body: ErrorBody,
}

impl Rendered {
    fn unknown() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            allow: None,
            body: ErrorBody::unknown(),
        }
    }
}

/// Picks the status, headers and body for an error at the HTTP boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorRenderer {
    default_http_code: StatusCode,
}

impl Default for ErrorRenderer {
    fn default() -> Self {
        Self::with_default_http_code(DEFAULT_HTTP_CODE)
    }
}

impl ErrorRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self::with_default_http_code(config.default_http_code)
    }

    pub fn with_default_http_code(default_http_code: StatusCode) -> Self {
        Self { default_http_code }
    }

    pub fn default_http_code(&self) -> StatusCode {
        self.default_http_code
    }

    /// Status line for `code`: standard statuses verbatim, anything else the default
    pub fn as_http_code(&self, code: i32) -> StatusCode {
        http_status(code).unwrap_or(self.default_http_code)
    }

    /// Classify `err`.
    ///
    /// Method-not-allowed is checked first, then composites (only the first leaf
    /// error is surfaced), then uncoded errors, then every other coded error.
    /// A missing error, or a composite whose first error is (or leads to) an empty
    /// composite, yields the unknown-error body.
    pub fn render(&self, err: Option<&Error>) -> Rendered {
        let Some(err) = err else {
            return Rendered::unknown();
        };

        match err {
            Error::MethodNotAllowed(e) => Rendered {
                status: self.as_http_code(e.code()),
                allow: Some(e.allow_header()),
                body: ErrorBody::new(e.code(), e.message()),
            },
            Error::Composite(composite) => match composite.first_leaf() {
                Some(first) => {
                    let dropped = composite.leaves().len().saturating_sub(1);
                    if dropped > 0 {
                        debug!(dropped, "Serving first error of composite");
                    }
                    self.render(Some(first))
                }
                None => {
                    debug!("Composite error with nothing to serve first");
                    Rendered::unknown()
                }
            },
            Error::Foreign(e) => {
                warn!(error = %e, "Serving uncoded error as internal error");
                Rendered {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    allow: None,
                    body: ErrorBody::new(500, e.to_string()),
                }
            }
            coded => {
                let code = coded.code();
                let status = self.as_http_code(code);
                if let Some(kind) = ValidationCode::from_code(code) {
                    debug!(%kind, code, status = status.as_u16(), "Mapping validation code");
                }
                Rendered {
                    status,
                    allow: None,
                    body: ErrorBody::new(code, coded.message()),
                }
            }
        }
    }

    /// Write `err` as a JSON response; HEAD requests get no body
    pub fn serve_error(&self, method: Option<&Method>, err: Option<&Error>) -> Response {
        let rendered = self.render(err);
        debug!(
            status = rendered.status.as_u16(),
            code = rendered.body.code,
            "Serving error response"
        );

        let mut response = if method == Some(&Method::HEAD) {
            (
                rendered.status,
                [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            )
                .into_response()
        } else {
            (rendered.status, Json(rendered.body)).into_response()
        };

        if let Some(allow) = rendered.allow {
            match HeaderValue::from_str(&allow) {
                Ok(value) => {
                    response.headers_mut().insert(header::ALLOW, value);
                }
                Err(e) => warn!(allow = %allow, error = %e, "Dropping invalid Allow header"),
            }
        }

        response
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        ErrorRenderer::default().serve_error(None, Some(&self))
    }
}
