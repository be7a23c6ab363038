//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ApplicationCommand, ApplicationQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub applications: Arc<dyn ApplicationCommand>,
    pub applications_query: Arc<dyn ApplicationQuery>,
}

impl HttpState {
    /// Construct state from the application ports.
    pub fn new(
        applications: Arc<dyn ApplicationCommand>,
        applications_query: Arc<dyn ApplicationQuery>,
    ) -> Self {
        Self {
            applications,
            applications_query,
        }
    }
}
