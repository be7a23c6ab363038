//! Port for application record persistence.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;

use crate::domain::application::{Application, ApplicationPatch, NewApplication};

use super::define_port_error;

define_port_error! {
    /// Errors raised by application repository adapters.
    pub enum ApplicationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "application repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "application repository query failed: {message}",
    }
}

/// Port for writing and reading application records. Each call is a single
/// all-or-nothing record operation; the adapter supplies id generation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Persist a new application and return the stored record with its
    /// assigned id.
    async fn create(
        &self,
        application: &NewApplication,
    ) -> Result<Application, ApplicationRepositoryError>;

    /// Find an application by id.
    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Application>, ApplicationRepositoryError>;

    /// Apply a partial update and return the updated record, or `None` when
    /// no record has the given id. Callers must not send an empty patch.
    async fn update(
        &self,
        id: i32,
        patch: &ApplicationPatch,
    ) -> Result<Option<Application>, ApplicationRepositoryError>;
}

/// In-memory repository used by tests and database-less operation.
///
/// Ids are assigned from a monotonic counter starting at 1, mirroring a
/// serial primary key.
#[derive(Debug)]
pub struct InMemoryApplicationRepository {
    records: Mutex<BTreeMap<i32, Application>>,
    next_id: AtomicI32,
}

impl InMemoryApplicationRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    fn lock_records(&self) -> std::sync::MutexGuard<'_, BTreeMap<i32, Application>> {
        match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for InMemoryApplicationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn create(
        &self,
        application: &NewApplication,
    ) -> Result<Application, ApplicationRepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = application.clone().into_application(id);
        self.lock_records().insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Application>, ApplicationRepositoryError> {
        Ok(self.lock_records().get(&id).cloned())
    }

    async fn update(
        &self,
        id: i32,
        patch: &ApplicationPatch,
    ) -> Result<Option<Application>, ApplicationRepositoryError> {
        let mut records = self.lock_records();
        let Some(application) = records.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(application);
        Ok(Some(application.clone()))
    }
}
