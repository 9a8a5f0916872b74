use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;

use super::codes::COMPOSITE_ERROR_CODE;
use super::{ApiError, Error};

const COMPOSITE_MESSAGE: &str = "validation failure list";

/// Several errors reported as one failure.
///
/// [`CompositeError::new`] inlines nested composites. [`CompositeError::unflattened`]
/// keeps the list as given, so consumers must not assume a flat list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeError {
    code: i32,
    message: String,
    errors: Vec<Error>,
}

impl CompositeError {
    /// Aggregate `errors`, inlining the children of any nested composite
    pub fn new<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>,
    {
        let mut flat = Vec::new();
        for err in errors {
            match err.into() {
                Error::Composite(nested) => flat.extend(Self::new(nested.errors).errors),
                other => flat.push(other),
            }
        }
        Self::unflattened(flat)
    }

    /// Aggregate `errors` exactly as given
    pub fn unflattened(errors: Vec<Error>) -> Self {
        Self {
            code: COMPOSITE_ERROR_CODE,
            message: COMPOSITE_MESSAGE.to_string(),
            errors,
        }
    }

    /// The stored errors, nested composites included
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Non-composite errors at any depth, left to right
    pub fn leaves(&self) -> Vec<&Error> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Error>) {
        for err in &self.errors {
            match err {
                Error::Composite(nested) => nested.collect_leaves(out),
                other => out.push(other),
            }
        }
    }

    /// Follows the first error down through nested composites.
    ///
    /// `None` as soon as a level is empty; later siblings are never consulted.
    pub fn first_leaf(&self) -> Option<&Error> {
        match self.errors.first()? {
            Error::Composite(nested) => nested.first_leaf(),
            other => Some(other),
        }
    }

    /// Whether `target` is one of the causes, searching nested composites
    pub fn contains(&self, target: &Error) -> bool {
        self.errors.iter().any(|err| {
            err == target
                || match err {
                    Error::Composite(nested) => nested.contains(target),
                    _ => false,
                }
        })
    }

    /// Prefix the field name of every contained validation error
    pub fn validate_name(mut self, prefix: &str) -> Self {
        self.errors = self
            .errors
            .into_iter()
            .map(|err| err.validate_name(prefix))
            .collect();
        self
    }
}

impl Default for CompositeError {
    fn default() -> Self {
        Self::unflattened(Vec::new())
    }
}

/// Lists the children as they are now, so the text reflects any later
/// `validate_name` qualification.
impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str(&self.message);
        }
        write!(f, "{}:", self.message)?;
        for err in &self.errors {
            write!(f, "\n{}", err)?;
        }
        Ok(())
    }
}

impl StdError for CompositeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.errors.first().map(|err| err as &(dyn StdError + 'static))
    }
}

impl ApiError for CompositeError {
    fn code(&self) -> i32 {
        self.code
    }
}

impl FromIterator<Error> for CompositeError {
    fn from_iter<T: IntoIterator<Item = Error>>(iter: T) -> Self {
        Self::new(iter)
    }
}
