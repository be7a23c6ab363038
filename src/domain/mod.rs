//! Domain core: the application entity, its validation contract, the error
//! taxonomy, the hexagonal ports, and the services implementing them.
//!
//! Public surface:
//! - [`application`] — entity, draft, patch, vehicle, and the two validators.
//! - [`Error`] — transport-agnostic failure outcomes.
//! - [`ports`] — driving and driven port traits.
//! - [`ApplicationCommandService`] / [`ApplicationQueryService`] — port
//!   implementations generic over the repository.

pub mod application;
mod application_service;
pub mod error;
pub mod ports;

pub use self::application_service::{ApplicationCommandService, ApplicationQueryService};
pub use self::error::Error;
