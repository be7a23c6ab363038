//! PostgreSQL-backed `ApplicationRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::application::{Application, ApplicationPatch, NewApplication};
use crate::domain::ports::{ApplicationRepository, ApplicationRepositoryError};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ApplicationChangeset, ApplicationRow, NewApplicationRow};
use super::pool::{DbPool, PoolError};
use super::schema::applications;

/// Diesel-backed implementation of the application repository port.
#[derive(Clone)]
pub struct DieselApplicationRepository {
    pool: DbPool,
}

impl DieselApplicationRepository {
    /// Create a repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn connection_error(error: PoolError) -> ApplicationRepositoryError {
    map_pool_error(error, ApplicationRepositoryError::connection)
}

fn query_error(error: diesel::result::Error) -> ApplicationRepositoryError {
    map_diesel_error(
        error,
        ApplicationRepositoryError::query,
        ApplicationRepositoryError::connection,
    )
}

#[async_trait]
impl ApplicationRepository for DieselApplicationRepository {
    async fn create(
        &self,
        application: &NewApplication,
    ) -> Result<Application, ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(connection_error)?;

        let row = diesel::insert_into(applications::table)
            .values(NewApplicationRow::from(application))
            .returning(ApplicationRow::as_returning())
            .get_result::<ApplicationRow>(&mut conn)
            .await
            .map_err(query_error)?;

        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Application>, ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(connection_error)?;

        let row = applications::table
            .filter(applications::id.eq(id))
            .select(ApplicationRow::as_select())
            .first::<ApplicationRow>(&mut conn)
            .await
            .optional()
            .map_err(query_error)?;

        Ok(row.map(Into::into))
    }

    async fn update(
        &self,
        id: i32,
        patch: &ApplicationPatch,
    ) -> Result<Option<Application>, ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(connection_error)?;

        // The service never sends an empty patch; Diesel rejects an empty
        // changeset at runtime.
        let row = diesel::update(applications::table.filter(applications::id.eq(id)))
            .set(ApplicationChangeset::from(patch))
            .returning(ApplicationRow::as_returning())
            .get_result::<ApplicationRow>(&mut conn)
            .await
            .optional()
            .map_err(query_error)?;

        Ok(row.map(Into::into))
    }
}
