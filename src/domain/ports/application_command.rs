//! Driving ports for application intake mutations.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::application::{Application, NewApplication};

/// Request payload for creating an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateApplicationRequest {
    pub application: NewApplication,
}

/// Stored record returned by a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateApplicationResponse {
    pub application: Application,
}

/// Request payload for a partial update. The body is kept as raw JSON so the
/// update-path validator can distinguish absent fields from ill-typed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateApplicationRequest {
    pub id: i32,
    pub body: serde_json::Value,
}

/// Updated full record returned by a successful update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateApplicationResponse {
    pub application: Application,
}

/// Request payload for submitting an application for a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitApplicationRequest {
    pub id: i32,
}

/// Quote confirmation. The quote is a fixed placeholder, never computed from
/// application data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitApplicationResponse {
    pub quote: i32,
    pub message: String,
}

/// Port for application mutations: create, partial update, and quote submit.
#[async_trait]
pub trait ApplicationCommand: Send + Sync {
    /// Validate and persist a complete candidate record.
    async fn create_application(
        &self,
        request: CreateApplicationRequest,
    ) -> Result<CreateApplicationResponse, Error>;

    /// Validate and apply a partial update.
    async fn update_application(
        &self,
        request: UpdateApplicationRequest,
    ) -> Result<UpdateApplicationResponse, Error>;

    /// Produce the fixed quote confirmation. No validation, lookup, or state
    /// change takes place.
    async fn submit_application(
        &self,
        request: SubmitApplicationRequest,
    ) -> Result<SubmitApplicationResponse, Error>;
}
