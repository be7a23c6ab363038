//! Application intake domain services.
//!
//! These services implement the driving ports: validate → persist →
//! shape-response for writes, and a plain lookup for reads. Validation-time
//! "today" comes from an injected clock so the age cutoff is testable.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::Error;
use crate::domain::application::{
    FIXED_QUOTE, validate_application_patch, validate_new_application,
};
use crate::domain::ports::{
    ApplicationCommand, ApplicationQuery, ApplicationRepository, ApplicationRepositoryError,
    CreateApplicationRequest, CreateApplicationResponse, GetApplicationRequest,
    GetApplicationResponse, SubmitApplicationRequest, SubmitApplicationResponse,
    UpdateApplicationRequest, UpdateApplicationResponse,
};

fn map_repository_error(error: ApplicationRepositoryError) -> Error {
    match error {
        ApplicationRepositoryError::Connection { message }
        | ApplicationRepositoryError::Query { message } => Error::persistence(message),
    }
}

/// Application service implementing the command driving port.
#[derive(Clone)]
pub struct ApplicationCommandService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ApplicationCommandService<R> {
    /// Create a command service over the repository and clock.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl<R> ApplicationCommand for ApplicationCommandService<R>
where
    R: ApplicationRepository,
{
    async fn create_application(
        &self,
        request: CreateApplicationRequest,
    ) -> Result<CreateApplicationResponse, Error> {
        let today = self.clock.utc().date_naive();
        let errors = validate_new_application(&request.application, today);
        if !errors.is_empty() {
            return Err(Error::validation(errors));
        }

        let application = self
            .repo
            .create(&request.application)
            .await
            .map_err(map_repository_error)?;

        Ok(CreateApplicationResponse { application })
    }

    async fn update_application(
        &self,
        request: UpdateApplicationRequest,
    ) -> Result<UpdateApplicationResponse, Error> {
        let today = self.clock.utc().date_naive();
        let patch = validate_application_patch(&request.body, today).map_err(Error::from)?;

        // An empty patch writes nothing; degenerate to a lookup so the
        // missing-id outcome still surfaces.
        let updated = if patch.is_empty() {
            self.repo.find_by_id(request.id).await
        } else {
            self.repo.update(request.id, &patch).await
        };

        let application = updated
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(request.id))?;

        Ok(UpdateApplicationResponse { application })
    }

    async fn submit_application(
        &self,
        request: SubmitApplicationRequest,
    ) -> Result<SubmitApplicationResponse, Error> {
        Ok(SubmitApplicationResponse {
            quote: FIXED_QUOTE,
            message: format!("Submit insurance application with id {}", request.id),
        })
    }
}

/// Application service implementing the query driving port.
#[derive(Clone)]
pub struct ApplicationQueryService<R> {
    repo: Arc<R>,
}

impl<R> ApplicationQueryService<R> {
    /// Create a query service over the repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ApplicationQuery for ApplicationQueryService<R>
where
    R: ApplicationRepository,
{
    async fn get_application(
        &self,
        request: GetApplicationRequest,
    ) -> Result<GetApplicationResponse, Error> {
        let application = self
            .repo
            .find_by_id(request.id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(request.id))?;

        Ok(GetApplicationResponse { application })
    }
}

#[cfg(test)]
#[path = "application_service_tests.rs"]
mod tests;
