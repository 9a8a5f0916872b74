use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ApiError;

/// A failed validation rule on a named field.
///
/// `name` and `in` locate the field (`in` is `body`, `query`, `header`, ... or
/// empty); `value` is the offending value and `values` the allowed ones when
/// the rule has a closed list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct Validation {
    pub(crate) code: i32,
    pub(crate) message: String,
    pub(crate) name: String,
    #[serde(rename = "in")]
    pub(crate) in_: String,
    #[serde(default)]
    pub(crate) value: Value,
    #[serde(default)]
    pub(crate) values: Option<Vec<Value>>,
}

impl Validation {
    /// Create a validation error with a pre-rendered message
    pub fn new(
        code: i32,
        name: impl Into<String>,
        in_: impl Into<String>,
        value: impl Into<Value>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            name: name.into(),
            in_: in_.into(),
            value: value.into(),
            values: None,
        }
    }

    pub(crate) fn with_values(mut self, values: Vec<Value>) -> Self {
        self.values = Some(values);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the field, empty when unknown
    pub fn location(&self) -> &str {
        &self.in_
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn values(&self) -> Option<&[Value]> {
        self.values.as_deref()
    }

    /// Qualify the field name with the path of its container.
    ///
    /// An empty name takes the prefix as-is and the message is prefixed with no
    /// separator; otherwise both get `prefix.` in front. Calling it twice stacks
    /// the prefixes.
    pub fn validate_name(mut self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self;
        }
        if self.name.is_empty() {
            self.name = prefix.to_string();
            self.message = format!("{}{}", prefix, self.message);
        } else {
            self.name = format!("{}.{}", prefix, self.name);
            self.message = format!("{}.{}", prefix, self.message);
        }
        self
    }
}

impl ApiError for Validation {
    fn code(&self) -> i32 {
        self.code
    }

    fn message(&self) -> String {
        self.message.clone()
    }
}
