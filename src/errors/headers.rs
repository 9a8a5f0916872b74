//! Content negotiation failures

use axum::http::StatusCode;
use serde_json::Value;

use super::format::display_strings;
use super::validation::Validation;

impl Validation {
    /// 415: request body media type is not one the operation consumes
    pub fn invalid_content_type<S: AsRef<str>>(value: &str, allowed: &[S]) -> Self {
        let message = format!(
            "unsupported media type {:?}, only {} are allowed",
            value,
            display_strings(allowed)
        );
        Self::new(
            i32::from(StatusCode::UNSUPPORTED_MEDIA_TYPE.as_u16()),
            "Content-Type",
            "header",
            value,
            message,
        )
        .with_values(as_values(allowed))
    }

    /// 406: none of the accepted media types can be produced
    pub fn invalid_response_format<S: AsRef<str>>(value: &str, allowed: &[S]) -> Self {
        let message = format!(
            "unsupported media type requested, only {} are available",
            display_strings(allowed)
        );
        Self::new(
            i32::from(StatusCode::NOT_ACCEPTABLE.as_u16()),
            "Accept",
            "header",
            value,
            message,
        )
        .with_values(as_values(allowed))
    }
}

fn as_values<S: AsRef<str>>(items: &[S]) -> Vec<Value> {
    items
        .iter()
        .map(|s| Value::String(s.as_ref().to_string()))
        .collect()
}
