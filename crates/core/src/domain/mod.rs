// Domain Layer - Records exchanged with the store

pub mod company;
pub mod equity;
pub mod job;

// Re-exports
pub use company::{
    Company, CompanyDetail, CompanyFilter, CompanyHandle, CompanyPatch, NewCompany,
    COMPANY_COLUMNS,
};
pub use equity::Equity;
pub use job::{Job, JobDetail, JobFilter, JobId, JobListing, JobPatch, NewJob, JOB_COLUMNS};

use serde::{Deserialize, Deserializer};

/// Lets `Option<Option<T>>` patch fields tell an explicit `null` (clear the
/// column) apart from a missing key (leave it alone).
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
