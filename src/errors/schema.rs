//! Factories for schema validation failures

use serde_json::Value;
use std::error::Error as StdError;

use super::codes::ValidationCode;
use super::format::{display_list, display_value, quote_value};
use super::validation::Validation;

/// "name in location", or just "name" when the location is unknown
fn subject(name: &str, in_: &str) -> String {
    if in_.is_empty() {
        name.to_string()
    } else {
        format!("{} in {}", name, in_)
    }
}

fn rule(code: ValidationCode, name: &str, in_: &str, value: Value, rest: &str) -> Validation {
    let message = format!("{} {}", subject(name, in_), rest);
    Validation::new(code.code(), name, in_, value, message)
}

impl Validation {
    /// The declared type name itself is not recognized
    pub fn invalid_type_name(type_name: &str) -> Self {
        Self::new(
            ValidationCode::InvalidType.code(),
            "",
            "",
            type_name,
            format!("{} is an invalid type name", type_name),
        )
    }

    /// Value does not have the expected type; a non-null value is echoed quoted
    pub fn invalid_type(name: &str, in_: &str, type_name: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        let mut message = format!("{} must be of type {}", subject(name, in_), type_name);
        if !value.is_null() {
            message = format!("{}: {}", message, quote_value(&value));
        }
        Self::new(ValidationCode::InvalidType.code(), name, in_, value, message)
    }

    /// Value could not be converted to the expected type
    pub fn invalid_type_because(
        name: &str,
        in_: &str,
        type_name: &str,
        cause: &(dyn StdError + 'static),
    ) -> Self {
        let cause = cause.to_string();
        let message = format!(
            "{} must be of type {}, because: {}",
            subject(name, in_),
            type_name,
            cause
        );
        Self::new(ValidationCode::InvalidType.code(), name, in_, cause, message)
    }

    pub fn invalid_collection_format(name: &str, in_: &str, format: &str) -> Self {
        Self::new(
            ValidationCode::InvalidType.code(),
            name,
            in_,
            format,
            format!(
                "the collection format {:?} is not supported for the {} param {:?}",
                format, in_, name
            ),
        )
    }

    pub fn required(name: &str, in_: &str, value: impl Into<Value>) -> Self {
        rule(ValidationCode::RequiredFail, name, in_, value.into(), "is required")
    }

    pub fn read_only(name: &str, in_: &str, value: impl Into<Value>) -> Self {
        rule(ValidationCode::ReadOnlyFail, name, in_, value.into(), "is readOnly")
    }

    pub fn too_long(name: &str, in_: &str, max: i64, value: impl Into<Value>) -> Self {
        rule(
            ValidationCode::TooLongFail,
            name,
            in_,
            value.into(),
            &format!("should be at most {} chars long", max),
        )
    }

    pub fn too_short(name: &str, in_: &str, min: i64, value: impl Into<Value>) -> Self {
        rule(
            ValidationCode::TooShortFail,
            name,
            in_,
            value.into(),
            &format!("should be at least {} chars long", min),
        )
    }

    pub fn failed_pattern(name: &str, in_: &str, pattern: &str, value: impl Into<Value>) -> Self {
        rule(
            ValidationCode::PatternFail,
            name,
            in_,
            value.into(),
            &format!("should match '{}'", pattern),
        )
    }

    /// Value is not one of `values`, which are kept on the error
    pub fn enum_fail(name: &str, in_: &str, value: impl Into<Value>, values: Vec<Value>) -> Self {
        rule(
            ValidationCode::EnumFail,
            name,
            in_,
            value.into(),
            &format!("should be one of {}", display_list(&values)),
        )
        .with_values(values)
    }

    pub fn not_multiple_of(
        name: &str,
        in_: &str,
        multiple: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Self {
        rule(
            ValidationCode::MultipleOfFail,
            name,
            in_,
            value.into(),
            &format!("should be a multiple of {}", display_value(&multiple.into())),
        )
    }

    pub fn exceeds_maximum_int(
        name: &str,
        in_: &str,
        max: i64,
        exclusive: bool,
        value: impl Into<Value>,
    ) -> Self {
        maximum(name, in_, &max.to_string(), exclusive, value.into())
    }

    pub fn exceeds_maximum_uint(
        name: &str,
        in_: &str,
        max: u64,
        exclusive: bool,
        value: impl Into<Value>,
    ) -> Self {
        maximum(name, in_, &max.to_string(), exclusive, value.into())
    }

    pub fn exceeds_maximum(
        name: &str,
        in_: &str,
        max: f64,
        exclusive: bool,
        value: impl Into<Value>,
    ) -> Self {
        maximum(name, in_, &max.to_string(), exclusive, value.into())
    }

    pub fn exceeds_minimum_int(
        name: &str,
        in_: &str,
        min: i64,
        exclusive: bool,
        value: impl Into<Value>,
    ) -> Self {
        minimum(name, in_, &min.to_string(), exclusive, value.into())
    }

    pub fn exceeds_minimum_uint(
        name: &str,
        in_: &str,
        min: u64,
        exclusive: bool,
        value: impl Into<Value>,
    ) -> Self {
        minimum(name, in_, &min.to_string(), exclusive, value.into())
    }

    pub fn exceeds_minimum(
        name: &str,
        in_: &str,
        min: f64,
        exclusive: bool,
        value: impl Into<Value>,
    ) -> Self {
        minimum(name, in_, &min.to_string(), exclusive, value.into())
    }

    pub fn duplicate_items(name: &str, in_: &str) -> Self {
        rule(
            ValidationCode::UniqueFail,
            name,
            in_,
            Value::Null,
            "shouldn't contain duplicates",
        )
    }

    pub fn too_many_items(name: &str, in_: &str, max: i64, value: impl Into<Value>) -> Self {
        rule(
            ValidationCode::MaxItemsFail,
            name,
            in_,
            value.into(),
            &format!("should have at most {} items", max),
        )
    }

    pub fn too_few_items(name: &str, in_: &str, min: i64, value: impl Into<Value>) -> Self {
        rule(
            ValidationCode::MinItemsFail,
            name,
            in_,
            value.into(),
            &format!("should have at least {} items", min),
        )
    }

    pub fn additional_items_not_allowed(name: &str, in_: &str) -> Self {
        rule(
            ValidationCode::NoAdditionalItems,
            name,
            in_,
            Value::Null,
            "can't have additional items",
        )
    }

    pub fn too_few_properties(name: &str, in_: &str, min: i64) -> Self {
        rule(
            ValidationCode::TooFewProperties,
            name,
            in_,
            Value::Null,
            &format!("should have at least {} properties", min),
        )
    }

    pub fn too_many_properties(name: &str, in_: &str, max: i64) -> Self {
        rule(
            ValidationCode::TooManyProperties,
            name,
            in_,
            Value::Null,
            &format!("should have at most {} properties", max),
        )
    }

    /// Object at `name` carries the forbidden property `key`
    pub fn property_not_allowed(name: &str, in_: &str, key: &str) -> Self {
        let path = format!("{}.{}", name, key);
        Self::new(
            ValidationCode::UnallowedProperty.code(),
            name,
            in_,
            key,
            format!("{} is a forbidden property", subject(&path, in_)),
        )
    }

    /// Property `key` of `name` matched none of the pattern properties
    pub fn failed_all_pattern_properties(name: &str, in_: &str, key: &str) -> Self {
        let path = format!("{}.{}", name, key);
        Self::new(
            ValidationCode::FailedAllPatternProps.code(),
            name,
            in_,
            key,
            format!("{} failed all pattern properties", subject(&path, in_)),
        )
    }

    /// The schema declares a MultipleOf factor that is zero or negative
    pub fn multiple_of_must_be_positive(name: &str, in_: &str, factor: impl Into<Value>) -> Self {
        let factor = factor.into();
        let message = format!(
            "factor MultipleOf declared for {} must be positive: {}",
            name,
            display_value(&factor)
        );
        Self::new(
            ValidationCode::MultipleOfMustBePositive.code(),
            name,
            in_,
            factor,
            message,
        )
    }
}

fn maximum(name: &str, in_: &str, max: &str, exclusive: bool, value: Value) -> Validation {
    let rest = if exclusive {
        format!("should be less than {}", max)
    } else {
        format!("should be less than or equal to {}", max)
    };
    rule(ValidationCode::MaxFail, name, in_, value, &rest)
}

fn minimum(name: &str, in_: &str, min: &str, exclusive: bool, value: Value) -> Validation {
    let rest = if exclusive {
        format!("should be greater than {}", min)
    } else {
        format!("should be greater than or equal to {}", min)
    };
    rule(ValidationCode::MinFail, name, in_, value, &rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use serde_json::json;

    #[derive(Debug, thiserror::Error)]
    #[error("hello")]
    struct Hello;

    #[test]
    fn test_invalid_type() {
        let err = Validation::invalid_type("confirmed", "query", "boolean", Value::Null);
        assert_eq!(err.code(), ValidationCode::InvalidType.code());
        assert_eq!(err.to_string(), "confirmed in query must be of type boolean");

        let err = Validation::invalid_type("confirmed", "", "boolean", Value::Null);
        assert_eq!(err.to_string(), "confirmed must be of type boolean");

        let err = Validation::invalid_type("confirmed", "query", "boolean", "hello");
        assert_eq!(
            err.to_string(),
            "confirmed in query must be of type boolean: \"hello\""
        );

        let err = Validation::invalid_type("confirmed", "", "boolean", "hello");
        assert_eq!(err.to_string(), "confirmed must be of type boolean: \"hello\"");
    }

    #[test]
    fn test_invalid_type_because() {
        let err = Validation::invalid_type_because("confirmed", "query", "boolean", &Hello);
        assert_eq!(err.code(), 601);
        assert_eq!(
            err.to_string(),
            "confirmed in query must be of type boolean, because: hello"
        );

        let err = Validation::invalid_type_because("confirmed", "", "boolean", &Hello);
        assert_eq!(
            err.to_string(),
            "confirmed must be of type boolean, because: hello"
        );
        assert_eq!(err.value(), &json!("hello"));
    }

    #[test]
    fn test_invalid_type_name_and_collection_format() {
        let err = Validation::invalid_type_name("something");
        assert_eq!(err.code(), 601);
        assert_eq!(err.to_string(), "something is an invalid type name");
        assert_eq!(err.name(), "");

        let err = Validation::invalid_collection_format("something", "query", "yada");
        assert_eq!(err.code(), 601);
        assert_eq!(
            err.to_string(),
            "the collection format \"yada\" is not supported for the query param \"something\""
        );
    }

    #[test]
    fn test_duplicate_items() {
        let err = Validation::duplicate_items("uniques", "query");
        assert_eq!(err.code(), ValidationCode::UniqueFail.code());
        assert_eq!(err.to_string(), "uniques in query shouldn't contain duplicates");

        let err = Validation::duplicate_items("uniques", "");
        assert_eq!(err.to_string(), "uniques shouldn't contain duplicates");
    }

    #[test]
    fn test_item_counts() {
        let err = Validation::too_many_items("something", "query", 5, 6);
        assert_eq!(err.code(), ValidationCode::MaxItemsFail.code());
        assert_eq!(err.to_string(), "something in query should have at most 5 items");
        assert_eq!(err.value(), &json!(6));

        let err = Validation::too_many_items("something", "", 5, 6);
        assert_eq!(err.to_string(), "something should have at most 5 items");

        let err = Validation::too_few_items("something", "", 5, 4);
        assert_eq!(err.code(), ValidationCode::MinItemsFail.code());
        assert_eq!(err.to_string(), "something should have at least 5 items");
        assert_eq!(err.value(), &json!(4));
    }

    #[test]
    fn test_exceeds_maximum() {
        let cases = [
            (Validation::exceeds_maximum_int("something", "query", 5, false, 6), "something in query should be less than or equal to 5"),
            (Validation::exceeds_maximum_int("something", "", 5, false, 6), "something should be less than or equal to 5"),
            (Validation::exceeds_maximum_int("something", "query", 5, true, 6), "something in query should be less than 5"),
            (Validation::exceeds_maximum_uint("something", "", 5, true, 6), "something should be less than 5"),
            (Validation::exceeds_maximum_uint("something", "query", 5, false, 6), "something in query should be less than or equal to 5"),
            (Validation::exceeds_maximum("something", "query", 5.0, false, 6), "something in query should be less than or equal to 5"),
            (Validation::exceeds_maximum("something", "", 5.5, true, 6), "something should be less than 5.5"),
        ];
        for (err, expected) in cases {
            assert_eq!(err.code(), ValidationCode::MaxFail.code());
            assert_eq!(err.to_string(), expected);
            assert_eq!(err.value(), &json!(6));
        }
    }

    #[test]
    fn test_exceeds_minimum() {
        let cases = [
            (Validation::exceeds_minimum_int("something", "query", 5, false, 4), "something in query should be greater than or equal to 5"),
            (Validation::exceeds_minimum_int("something", "", 5, true, 4), "something should be greater than 5"),
            (Validation::exceeds_minimum_uint("something", "query", 5, true, 4), "something in query should be greater than 5"),
            (Validation::exceeds_minimum_uint("something", "", 5, false, 4), "something should be greater than or equal to 5"),
            (Validation::exceeds_minimum("something", "query", 5.0, true, 4), "something in query should be greater than 5"),
            (Validation::exceeds_minimum("something", "", 5.0, false, 4), "something should be greater than or equal to 5"),
        ];
        for (err, expected) in cases {
            assert_eq!(err.code(), ValidationCode::MinFail.code());
            assert_eq!(err.to_string(), expected);
            assert_eq!(err.value(), &json!(4));
        }
    }

    #[test]
    fn test_multiple_of() {
        let err = Validation::not_multiple_of("something", "query", 5, 1);
        assert_eq!(err.code(), ValidationCode::MultipleOfFail.code());
        assert_eq!(err.to_string(), "something in query should be a multiple of 5");
        assert_eq!(err.value(), &json!(1));

        let err = Validation::not_multiple_of("something", "query", 5.0, 1.0);
        assert_eq!(err.to_string(), "something in query should be a multiple of 5");

        let err = Validation::not_multiple_of("something", "", 5u64, 1u64);
        assert_eq!(err.to_string(), "something should be a multiple of 5");
    }

    #[test]
    fn test_multiple_of_must_be_positive() {
        let err = Validation::multiple_of_must_be_positive("path", "body", -10.0);
        assert_eq!(err.code(), ValidationCode::MultipleOfMustBePositive.code());
        assert_eq!(
            err.to_string(),
            "factor MultipleOf declared for path must be positive: -10"
        );

        let err = Validation::multiple_of_must_be_positive("path", "body", -10i64);
        assert_eq!(
            err.to_string(),
            "factor MultipleOf declared for path must be positive: -10"
        );
        assert_eq!(err.value(), &json!(-10));
    }

    #[test]
    fn test_enum_fail() {
        let err = Validation::enum_fail(
            "something",
            "query",
            "yada",
            vec![json!("hello"), json!("world")],
        );
        assert_eq!(err.code(), ValidationCode::EnumFail.code());
        assert_eq!(err.to_string(), "something in query should be one of [hello world]");
        assert_eq!(err.value(), &json!("yada"));
        assert_eq!(err.values().map(<[Value]>::len), Some(2));

        let err = Validation::enum_fail("something", "", "yada", vec![json!("hello"), json!("world")]);
        assert_eq!(err.to_string(), "something should be one of [hello world]");
    }

    #[test]
    fn test_required_and_read_only() {
        let err = Validation::required("something", "query", Value::Null);
        assert_eq!(err.code(), ValidationCode::RequiredFail.code());
        assert_eq!(err.to_string(), "something in query is required");
        assert!(err.value().is_null());

        let err = Validation::required("something", "", Value::Null);
        assert_eq!(err.to_string(), "something is required");

        let err = Validation::read_only("something", "query", Value::Null);
        assert_eq!(err.code(), ValidationCode::ReadOnlyFail.code());
        assert_eq!(err.to_string(), "something in query is readOnly");

        let err = Validation::read_only("something", "", Value::Null);
        assert_eq!(err.to_string(), "something is readOnly");
    }

    #[test]
    fn test_string_length() {
        let err = Validation::too_long("something", "query", 5, "abcdef");
        assert_eq!(err.code(), ValidationCode::TooLongFail.code());
        assert_eq!(err.to_string(), "something in query should be at most 5 chars long");
        assert_eq!(err.value(), &json!("abcdef"));

        let err = Validation::too_long("something", "", 5, "abcdef");
        assert_eq!(err.to_string(), "something should be at most 5 chars long");

        let err = Validation::too_short("something", "query", 5, "a");
        assert_eq!(err.code(), ValidationCode::TooShortFail.code());
        assert_eq!(err.to_string(), "something in query should be at least 5 chars long");

        let err = Validation::too_short("something", "", 5, "a");
        assert_eq!(err.to_string(), "something should be at least 5 chars long");
    }

    #[test]
    fn test_failed_pattern() {
        let err = Validation::failed_pattern("something", "query", "\\d+", "a");
        assert_eq!(err.code(), ValidationCode::PatternFail.code());
        assert_eq!(err.to_string(), "something in query should match '\\d+'");

        let err = Validation::failed_pattern("something", "", "\\d+", "a");
        assert_eq!(err.to_string(), "something should match '\\d+'");
    }

    #[test]
    fn test_additional_items() {
        let err = Validation::additional_items_not_allowed("something", "query");
        assert_eq!(err.code(), ValidationCode::NoAdditionalItems.code());
        assert_eq!(err.to_string(), "something in query can't have additional items");

        let err = Validation::additional_items_not_allowed("something", "");
        assert_eq!(err.to_string(), "something can't have additional items");
    }

    #[test]
    fn test_properties() {
        let err = Validation::property_not_allowed("path", "body", "key");
        assert_eq!(err.code(), ValidationCode::UnallowedProperty.code());
        assert_eq!(err.to_string(), "path.key in body is a forbidden property");

        let err = Validation::property_not_allowed("path", "", "key");
        assert_eq!(err.to_string(), "path.key is a forbidden property");

        let err = Validation::too_many_properties("path", "body", 10);
        assert_eq!(err.code(), ValidationCode::TooManyProperties.code());
        assert_eq!(err.to_string(), "path in body should have at most 10 properties");

        let err = Validation::too_many_properties("path", "", 10);
        assert_eq!(err.to_string(), "path should have at most 10 properties");

        let err = Validation::too_few_properties("path", "body", 10);
        assert_eq!(err.code(), ValidationCode::TooFewProperties.code());
        assert_eq!(err.to_string(), "path in body should have at least 10 properties");

        let err = Validation::too_few_properties("path", "", 10);
        assert_eq!(err.to_string(), "path should have at least 10 properties");

        let err = Validation::failed_all_pattern_properties("path", "body", "key");
        assert_eq!(err.code(), ValidationCode::FailedAllPatternProps.code());
        assert_eq!(err.to_string(), "path.key in body failed all pattern properties");

        let err = Validation::failed_all_pattern_properties("path", "", "key");
        assert_eq!(err.to_string(), "path.key failed all pattern properties");
    }
}
