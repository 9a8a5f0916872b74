use axum::http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error as StdError;
use std::sync::Arc;

use super::{ApiError, ForeignError};

/// A request value that could not be parsed into its declared type
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    code: i32,
    message: String,
    name: String,
    #[serde(rename = "in")]
    in_: String,
    value: String,
    #[source]
    #[serde(serialize_with = "reason_as_text", deserialize_with = "reason_from_text")]
    reason: ForeignError,
}

impl ParseError {
    /// 400 for `value` of `name` failing to parse because of `reason`
    pub fn new(
        name: &str,
        in_: &str,
        value: &str,
        reason: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        let reason: ForeignError = Arc::from(reason.into());
        let message = if in_.is_empty() {
            format!("parsing {} from {:?} failed, because {}", name, value, reason)
        } else {
            format!(
                "parsing {} {} from {:?} failed, because {}",
                name, in_, value, reason
            )
        };
        Self {
            code: i32::from(StatusCode::BAD_REQUEST.as_u16()),
            message,
            name: name.to_string(),
            in_: in_.to_string(),
            value: value.to_string(),
            reason,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.in_
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn reason(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.reason.as_ref()
    }
}

impl ApiError for ParseError {
    fn code(&self) -> i32 {
        self.code
    }

    fn message(&self) -> String {
        self.message.clone()
    }
}

impl PartialEq for ParseError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.message == other.message
            && self.name == other.name
            && self.in_ == other.in_
            && self.value == other.value
            && self.reason.to_string() == other.reason.to_string()
    }
}

fn reason_as_text<S: Serializer>(reason: &ForeignError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

fn reason_from_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ForeignError, D::Error> {
    let text = String::deserialize(deserializer)?;
    let boxed: Box<dyn StdError + Send + Sync + 'static> = text.into();
    Ok(Arc::from(boxed))
}
