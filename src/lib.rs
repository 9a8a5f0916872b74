// Library exports
pub mod config;
pub mod errors;
pub mod openapi;

pub use config::RenderConfig;
pub use errors::{
    ApiError, ApiVerificationFailed, BasicError, CompositeError, Error, ErrorBody, ErrorRenderer,
    MethodNotAllowedError, ParseError, Rendered, Validation, ValidationCode,
};
