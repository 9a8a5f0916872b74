use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Codes at or above this value are application-defined, not HTTP statuses
pub const MAXIMUM_VALID_HTTP_CODE: i32 = 600;

/// Status used for application codes that have no HTTP mapping
pub const DEFAULT_HTTP_CODE: StatusCode = StatusCode::UNPROCESSABLE_ENTITY;

/// Code carried by composite errors
pub const COMPOSITE_ERROR_CODE: i32 = 422;

/// Application-defined validation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ValidationCode {
    /// Value has the wrong type, or the type name itself is invalid
    InvalidType = 601,
    /// Required value is missing
    RequiredFail,
    /// String is longer than allowed
    TooLongFail,
    /// String is shorter than allowed
    TooShortFail,
    /// String does not match the declared pattern
    PatternFail,
    /// Value is not one of the enumerated values
    EnumFail,
    /// Number is not a multiple of the declared factor
    MultipleOfFail,
    /// Number is above the maximum
    MaxFail,
    /// Number is below the minimum
    MinFail,
    /// Collection contains duplicates
    UniqueFail,
    /// Collection has too many items
    MaxItemsFail,
    /// Collection has too few items
    MinItemsFail,
    /// Tuple has items beyond the declared ones
    NoAdditionalItems,
    /// Object has too few properties
    TooFewProperties,
    /// Object has too many properties
    TooManyProperties,
    /// Object carries a property that is not allowed
    UnallowedProperty,
    /// Property name matched none of the pattern properties
    FailedAllPatternProps,
    /// Declared MultipleOf factor is not positive
    MultipleOfMustBePositive,
    /// Read-only property was supplied
    ReadOnlyFail,
}

const ALL_CODES: [ValidationCode; 19] = [
    ValidationCode::InvalidType,
    ValidationCode::RequiredFail,
    ValidationCode::TooLongFail,
    ValidationCode::TooShortFail,
    ValidationCode::PatternFail,
    ValidationCode::EnumFail,
    ValidationCode::MultipleOfFail,
    ValidationCode::MaxFail,
    ValidationCode::MinFail,
    ValidationCode::UniqueFail,
    ValidationCode::MaxItemsFail,
    ValidationCode::MinItemsFail,
    ValidationCode::NoAdditionalItems,
    ValidationCode::TooFewProperties,
    ValidationCode::TooManyProperties,
    ValidationCode::UnallowedProperty,
    ValidationCode::FailedAllPatternProps,
    ValidationCode::MultipleOfMustBePositive,
    ValidationCode::ReadOnlyFail,
];

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType => write!(f, "INVALID_TYPE"),
            Self::RequiredFail => write!(f, "REQUIRED_FAIL"),
            Self::TooLongFail => write!(f, "TOO_LONG_FAIL"),
            Self::TooShortFail => write!(f, "TOO_SHORT_FAIL"),
            Self::PatternFail => write!(f, "PATTERN_FAIL"),
            Self::EnumFail => write!(f, "ENUM_FAIL"),
            Self::MultipleOfFail => write!(f, "MULTIPLE_OF_FAIL"),
            Self::MaxFail => write!(f, "MAX_FAIL"),
            Self::MinFail => write!(f, "MIN_FAIL"),
            Self::UniqueFail => write!(f, "UNIQUE_FAIL"),
            Self::MaxItemsFail => write!(f, "MAX_ITEMS_FAIL"),
            Self::MinItemsFail => write!(f, "MIN_ITEMS_FAIL"),
            Self::NoAdditionalItems => write!(f, "NO_ADDITIONAL_ITEMS"),
            Self::TooFewProperties => write!(f, "TOO_FEW_PROPERTIES"),
            Self::TooManyProperties => write!(f, "TOO_MANY_PROPERTIES"),
            Self::UnallowedProperty => write!(f, "UNALLOWED_PROPERTY"),
            Self::FailedAllPatternProps => write!(f, "FAILED_ALL_PATTERN_PROPS"),
            Self::MultipleOfMustBePositive => write!(f, "MULTIPLE_OF_MUST_BE_POSITIVE"),
            Self::ReadOnlyFail => write!(f, "READ_ONLY_FAIL"),
        }
    }
}

impl ValidationCode {
    /// Numeric code carried on the wire
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up the validation code for a numeric value
    pub fn from_code(code: i32) -> Option<Self> {
        ALL_CODES.iter().copied().find(|c| c.code() == code)
    }
}

/// Whether `code` is a standard HTTP status usable verbatim on the status line
pub fn is_valid_http_code(code: i32) -> bool {
    http_status(code).is_some()
}

/// The standard HTTP status for `code`, if it is one below 600
pub fn http_status(code: i32) -> Option<StatusCode> {
    if !(100..MAXIMUM_VALID_HTTP_CODE).contains(&code) {
        return None;
    }
    let status = u16::try_from(code)
        .ok()
        .and_then(|c| StatusCode::from_u16(c).ok())?;
    status.canonical_reason().map(|_| status)
}
