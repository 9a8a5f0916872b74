use utoipa::OpenApi;

use crate::errors::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Errors",
        version = "0.1.0",
        description = "Error response bodies served by ErrorRenderer. `code` is the HTTP status, or an application validation code (600 and above) served with the configured default status.",
    ),
    components(schemas(ErrorBody)),
    tags(
        (name = "errors", description = "Error responses"),
    )
)]
pub struct ApiDoc;
