//! Application HTTP handlers.
//!
//! ```text
//! POST /applications
//! GET  /applications/{id}
//! PUT  /applications/{id}
//! POST /applications/{id}/submit
//! ```

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::application::{Application, NewApplication};
use crate::domain::ports::{
    CreateApplicationRequest, GetApplicationRequest, SubmitApplicationRequest,
    UpdateApplicationRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for creating an application. Missing fields default to
/// empty strings so the create-path validator reports them as violations
/// instead of the decoder rejecting the body.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateApplicationBody {
    pub first_name: String,
    pub last_name: String,
    /// ISO 8601 date of birth.
    pub dob: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// JSON-encoded vehicle list, stored verbatim.
    pub vehicles: String,
}

impl From<CreateApplicationBody> for NewApplication {
    fn from(body: CreateApplicationBody) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            dob: body.dob,
            street: body.street,
            city: body.city,
            state: body.state,
            zip_code: body.zip_code,
            vehicles: body.vehicles,
        }
    }
}

/// Stored application record as returned on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationBody {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub vehicles: String,
}

impl From<Application> for ApplicationBody {
    fn from(application: Application) -> Self {
        Self {
            id: application.id,
            first_name: application.first_name,
            last_name: application.last_name,
            dob: application.dob,
            street: application.street,
            city: application.city,
            state: application.state,
            zip_code: application.zip_code,
            vehicles: application.vehicles,
        }
    }
}

/// Response payload for application creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateApplicationResponseBody {
    pub id: i32,
    pub message: String,
    pub application: ApplicationBody,
}

/// Response payload for quote submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitApplicationResponseBody {
    pub quote: i32,
    pub message: String,
}

/// Partial update payload as documented; the handler accepts raw JSON so the
/// update-path validator can distinguish absent fields from ill-typed ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicles: Option<String>,
}

/// Create-path validation failure shape.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorsBody {
    pub errors: Vec<String>,
}

/// Missing-record failure shape.
#[derive(Debug, Serialize, ToSchema)]
pub struct NotFoundBody {
    pub message: String,
}

/// Create a new insurance application.
#[utoipa::path(
    post,
    path = "/applications",
    request_body = CreateApplicationBody,
    responses(
        (status = 200, description = "Application created", body = CreateApplicationResponseBody),
        (status = 400, description = "Validation failure", body = ValidationErrorsBody),
        (status = 500, description = "Store failure")
    ),
    tags = ["applications"],
    operation_id = "createApplication"
)]
#[post("/applications")]
pub async fn create_application(
    state: web::Data<HttpState>,
    payload: web::Json<CreateApplicationBody>,
) -> ApiResult<web::Json<CreateApplicationResponseBody>> {
    let response = state
        .applications
        .create_application(CreateApplicationRequest {
            application: payload.into_inner().into(),
        })
        .await?;

    let application = ApplicationBody::from(response.application);
    Ok(web::Json(CreateApplicationResponseBody {
        id: application.id,
        message: format!(
            "Start a new insurance application with id {}",
            application.id
        ),
        application,
    }))
}

/// Fetch a stored application by id.
#[utoipa::path(
    get,
    path = "/applications/{id}",
    params(("id" = i32, Path, description = "Application id")),
    responses(
        (status = 200, description = "Stored application", body = ApplicationBody),
        (status = 404, description = "No application with that id", body = NotFoundBody),
        (status = 500, description = "Store failure")
    ),
    tags = ["applications"],
    operation_id = "getApplication"
)]
#[get("/applications/{id}")]
pub async fn get_application(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<ApplicationBody>> {
    let response = state
        .applications_query
        .get_application(GetApplicationRequest {
            id: path.into_inner(),
        })
        .await?;

    Ok(web::Json(ApplicationBody::from(response.application)))
}

/// Apply a partial update to a stored application.
///
/// The body is accepted as raw JSON: the update-path validator distinguishes
/// absent fields from ill-typed ones and reports the first violation in a
/// validation-library-style error object.
#[utoipa::path(
    put,
    path = "/applications/{id}",
    params(("id" = i32, Path, description = "Application id")),
    request_body = UpdateApplicationBody,
    responses(
        (status = 200, description = "Updated application", body = ApplicationBody),
        (status = 400, description = "First field violation"),
        (status = 404, description = "No application with that id", body = NotFoundBody),
        (status = 500, description = "Store failure")
    ),
    tags = ["applications"],
    operation_id = "updateApplication"
)]
#[put("/applications/{id}")]
pub async fn update_application(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<serde_json::Value>,
) -> ApiResult<web::Json<ApplicationBody>> {
    let response = state
        .applications
        .update_application(UpdateApplicationRequest {
            id: path.into_inner(),
            body: payload.into_inner(),
        })
        .await?;

    Ok(web::Json(ApplicationBody::from(response.application)))
}

/// Submit an application and receive the fixed quote.
#[utoipa::path(
    post,
    path = "/applications/{id}/submit",
    params(("id" = i32, Path, description = "Application id")),
    responses(
        (status = 200, description = "Quote confirmation", body = SubmitApplicationResponseBody)
    ),
    tags = ["applications"],
    operation_id = "submitApplication"
)]
#[post("/applications/{id}/submit")]
pub async fn submit_application(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<SubmitApplicationResponseBody>> {
    let response = state
        .applications
        .submit_application(SubmitApplicationRequest {
            id: path.into_inner(),
        })
        .await?;

    Ok(web::Json(SubmitApplicationResponseBody {
        quote: response.quote,
        message: response.message,
    }))
}

#[cfg(test)]
#[path = "applications_tests.rs"]
mod tests;
