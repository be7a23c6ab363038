//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod application_command;
mod application_query;
mod application_repository;

pub use application_command::{
    ApplicationCommand, CreateApplicationRequest, CreateApplicationResponse,
    SubmitApplicationRequest, SubmitApplicationResponse, UpdateApplicationRequest,
    UpdateApplicationResponse,
};
pub use application_query::{ApplicationQuery, GetApplicationRequest, GetApplicationResponse};
#[cfg(test)]
pub use application_repository::MockApplicationRepository;
pub use application_repository::{
    ApplicationRepository, ApplicationRepositoryError, InMemoryApplicationRepository,
};
