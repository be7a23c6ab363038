//! Driving port for application reads.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::application::Application;

/// Request payload for reading an application by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetApplicationRequest {
    pub id: i32,
}

/// Stored record returned by a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetApplicationResponse {
    pub application: Application,
}

/// Port for application reads.
#[async_trait]
pub trait ApplicationQuery: Send + Sync {
    /// Look up an application by id.
    async fn get_application(
        &self,
        request: GetApplicationRequest,
    ) -> Result<GetApplicationResponse, Error>;
}
