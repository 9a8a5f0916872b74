use serde::{Deserialize, Serialize};
use std::fmt;

use super::ApiError;

/// Mismatch between the media types an API declares and the handlers registered for them.
///
/// Raised while wiring a server, so it is served as an internal error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVerificationFailed {
    pub section: String,
    #[serde(default)]
    pub missing_specification: Vec<String>,
    #[serde(default)]
    pub missing_registration: Vec<String>,
}

impl fmt::Display for ApiVerificationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_registration = !self.missing_registration.is_empty();
        let has_specification = !self.missing_specification.is_empty();

        if has_registration {
            write!(
                f,
                "missing [{}] {} registrations",
                self.missing_registration.join(", "),
                self.section
            )?;
        }
        if has_registration && has_specification {
            writeln!(f)?;
        }
        if has_specification {
            write!(
                f,
                "missing from spec file [{}] {}",
                self.missing_specification.join(", "),
                self.section
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiVerificationFailed {}

impl ApiError for ApiVerificationFailed {
    fn code(&self) -> i32 {
        500
    }
}
