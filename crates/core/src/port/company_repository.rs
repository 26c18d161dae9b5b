// Company Repository Port (Interface)

use crate::domain::{Company, CompanyDetail, CompanyFilter, CompanyPatch, NewCompany};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Company persistence
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, company: &NewCompany) -> Result<Company>;

    /// List companies ordered by name
    async fn find_all(&self, filter: Option<&CompanyFilter>) -> Result<Vec<Company>>;

    /// Company plus its jobs (NotFound if absent)
    async fn get(&self, handle: &str) -> Result<CompanyDetail>;

    async fn update(&self, handle: &str, patch: &CompanyPatch) -> Result<Company>;

    /// Delete a company; its jobs go with it
    async fn remove(&self, handle: &str) -> Result<()>;
}
