//! Builders for the HTTP state handed to handlers.

use std::sync::Arc;

use actix_web::web;
use mockable::Clock;

use crate::domain::ports::{ApplicationRepository, InMemoryApplicationRepository};
use crate::domain::{ApplicationCommandService, ApplicationQueryService};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::DieselApplicationRepository;

use super::ServerConfig;

/// Build handler state: Diesel-backed services when a pool is configured,
/// in-memory services otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(mockable::DefaultClock);
    match &config.db_pool {
        Some(pool) => state_over(
            Arc::new(DieselApplicationRepository::new(pool.clone())),
            clock,
        ),
        None => state_over(Arc::new(InMemoryApplicationRepository::new()), clock),
    }
}

fn state_over<R>(repo: Arc<R>, clock: Arc<dyn Clock>) -> web::Data<HttpState>
where
    R: ApplicationRepository + 'static,
{
    let commands = Arc::new(ApplicationCommandService::new(repo.clone(), clock));
    let queries = Arc::new(ApplicationQueryService::new(repo));
    web::Data::new(HttpState::new(commands, queries))
}
