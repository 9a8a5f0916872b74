//! Structured error values for API responses

pub mod basic;
pub mod codes;
pub mod composite;
mod format;
pub mod headers;
pub mod method;
pub mod middleware;
pub mod parsing;
pub mod response;
pub mod schema;
pub mod validation;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error as StdError;
use std::sync::Arc;

pub use basic::BasicError;
pub use codes::{
    http_status, is_valid_http_code, ValidationCode, COMPOSITE_ERROR_CODE, DEFAULT_HTTP_CODE,
    MAXIMUM_VALID_HTTP_CODE,
};
pub use composite::CompositeError;
pub use method::MethodNotAllowedError;
pub use middleware::ApiVerificationFailed;
pub use parsing::ParseError;
pub use response::{ErrorBody, ErrorRenderer, Rendered};
pub use validation::Validation;

/// Any error exposing a numeric code next to its message
pub trait ApiError: StdError {
    /// Numeric code, either an HTTP status or an application code (600 and above)
    fn code(&self) -> i32;

    /// Human-readable message; the `Display` text unless overridden
    fn message(&self) -> String {
        self.to_string()
    }
}

/// An error from outside this crate, carried without a code
pub type ForeignError = Arc<dyn StdError + Send + Sync + 'static>;

/// The closed set of error kinds the renderer knows how to serve
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Composite(#[from] CompositeError),

    #[error(transparent)]
    MethodNotAllowed(#[from] MethodNotAllowedError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] Validation),

    #[error(transparent)]
    VerificationFailed(#[from] ApiVerificationFailed),

    #[error(transparent)]
    Basic(#[from] BasicError),

    /// Error without the code capability; served as an internal failure
    #[error(transparent)]
    Foreign(ForeignError),
}

impl Error {
    /// Wrap an arbitrary error that has no code of its own
    pub fn foreign<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Foreign(Arc::new(err))
    }

    /// Whether this error carries the code capability
    pub fn is_coded(&self) -> bool {
        !matches!(self, Self::Foreign(_))
    }

    /// Prefix the field name of every validation error reachable from here
    pub fn validate_name(self, prefix: &str) -> Self {
        match self {
            Self::Validation(v) => Self::Validation(v.validate_name(prefix)),
            Self::Composite(c) => Self::Composite(c.validate_name(prefix)),
            other => other,
        }
    }
}

impl ApiError for Error {
    fn code(&self) -> i32 {
        match self {
            Self::Composite(e) => e.code(),
            Self::MethodNotAllowed(e) => e.code(),
            Self::Parse(e) => e.code(),
            Self::Validation(e) => e.code(),
            Self::VerificationFailed(e) => e.code(),
            Self::Basic(e) => e.code(),
            Self::Foreign(_) => 500,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        let boxed: Box<dyn StdError + Send + Sync + 'static> = err.into();
        Self::Foreign(Arc::from(boxed))
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Composite(a), Self::Composite(b)) => a == b,
            (Self::MethodNotAllowed(a), Self::MethodNotAllowed(b)) => a == b,
            (Self::Parse(a), Self::Parse(b)) => a == b,
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::VerificationFailed(a), Self::VerificationFailed(b)) => a == b,
            (Self::Basic(a), Self::Basic(b)) => a == b,
            (Self::Foreign(a), Self::Foreign(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Composite(e) => e.serialize(serializer),
            Self::MethodNotAllowed(e) => e.serialize(serializer),
            Self::Parse(e) => e.serialize(serializer),
            Self::Validation(e) => e.serialize(serializer),
            Self::VerificationFailed(e) => e.serialize(serializer),
            Self::Basic(e) => e.serialize(serializer),
            Self::Foreign(e) => ErrorBody::new(500, e.to_string()).serialize(serializer),
        }
    }
}

/// Wire shapes, tried in order; each requires the fields that set it apart
#[derive(Deserialize)]
#[serde(untagged)]
enum WireError {
    Composite(CompositeError),
    MethodNotAllowed(MethodNotAllowedError),
    Parse(ParseError),
    Validation(Validation),
    VerificationFailed(ApiVerificationFailed),
    Basic(BasicError),
}

impl<'de> Deserialize<'de> for Error {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match WireError::deserialize(deserializer)? {
            WireError::Composite(e) => Self::Composite(e),
            WireError::MethodNotAllowed(e) => Self::MethodNotAllowed(e),
            WireError::Parse(e) => Self::Parse(e),
            WireError::Validation(e) => Self::Validation(e),
            WireError::VerificationFailed(e) => Self::VerificationFailed(e),
            WireError::Basic(e) => Self::Basic(e),
        })
    }
}
