//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates the handler annotations from the inbound layer into
//! one specification, served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::applications::{
    ApplicationBody, CreateApplicationBody, CreateApplicationResponseBody, NotFoundBody,
    SubmitApplicationResponseBody, UpdateApplicationBody, ValidationErrorsBody,
};
use crate::inbound::http::health::PingBody;

/// OpenAPI document for the intake REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Insurance application intake API",
        description = "Create, review, and update insurance applications, then request a quote."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::applications::create_application,
        crate::inbound::http::applications::get_application,
        crate::inbound::http::applications::update_application,
        crate::inbound::http::applications::submit_application,
        crate::inbound::http::health::ping,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ApplicationBody,
        CreateApplicationBody,
        UpdateApplicationBody,
        CreateApplicationResponseBody,
        SubmitApplicationResponseBody,
        ValidationErrorsBody,
        NotFoundBody,
        PingBody,
    )),
    tags(
        (name = "applications", description = "Insurance application intake"),
        (name = "health", description = "Probes and connectivity checks")
    )
)]
pub struct ApiDoc;
