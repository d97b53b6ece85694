use crate::error::StoreError;
use crate::models::status::StatusCheck;
use async_trait::async_trait;

/// In-process backend backing the endpoint tests.
#[cfg(test)]
pub mod memory;

/// MongoDB backend used by the running service.
pub mod mongo;

pub use mongo::MongoStatusStore;

/// # Status Check Persistence
///
/// Both operations are single store round-trips; handlers never combine them,
/// so no locking is layered on top of the backend's own atomicity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Persists one record exactly as given.
    async fn insert(&self, check: &StatusCheck) -> Result<(), StoreError>;

    /// Returns at most `limit` records in the backend's natural order.
    async fn list(&self, limit: usize) -> Result<Vec<StatusCheck>, StoreError>;
}
