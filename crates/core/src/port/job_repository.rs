// Job Repository Port (Interface)

use crate::domain::{Job, JobDetail, JobFilter, JobId, JobListing, JobPatch, NewJob};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Job persistence.
///
/// Every call is a single statement; there is no cross-call transaction and
/// no optimistic locking (concurrent updates are last-writer-wins).
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a new job and return it with its generated id
    async fn create(&self, job: &NewJob) -> Result<Job>;

    /// List jobs with their company name, ordered by title
    async fn find_all(&self, filter: Option<&JobFilter>) -> Result<Vec<JobListing>>;

    /// Fetch one job with its full company (NotFound if absent)
    async fn get(&self, id: JobId) -> Result<JobDetail>;

    /// Apply a partial update (Validation if empty, NotFound if absent)
    async fn update(&self, id: JobId, patch: &JobPatch) -> Result<Job>;

    /// Delete a job (NotFound if absent)
    async fn remove(&self, id: JobId) -> Result<()>;
}
