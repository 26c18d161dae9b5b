// Job Domain Model

use super::{deserialize_some, Company, CompanyHandle, Equity};
use crate::error::{AppError, Result};
use crate::sql::{ColumnMap, SqlValue};
use serde::{Deserialize, Serialize};

/// Job ID (store-generated, never reused)
pub type JobId = i64;

/// Mutable job fields (`title`, `salary`, `equity`) share their column names
pub const JOB_COLUMNS: ColumnMap = ColumnMap::new(&[]);

/// Job as stored in the `jobs` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<Equity>,
    pub company_handle: CompanyHandle,
}

/// Input for creating a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub equity: Option<Equity>,
    pub company_handle: CompanyHandle,
}

/// Flattened listing row: job fields plus the owning company's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: JobId,
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<Equity>,
    pub company_handle: CompanyHandle,
    pub company_name: String,
}

/// Single job with its full company nested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: JobId,
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<Equity>,
    pub company: Company,
}

/// Partial update for a job.
///
/// Only the mutable columns exist here; `id` and `companyHandle` cannot be
/// patched. `Some(None)` clears a nullable column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<Option<i64>>,

    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub equity: Option<Option<Equity>>,
}

impl JobPatch {
    /// Supplied fields in declaration order, keyed by their external names.
    pub fn fields(&self) -> Vec<(&'static str, SqlValue)> {
        let mut fields = Vec::with_capacity(3);
        if let Some(title) = &self.title {
            fields.push(("title", SqlValue::from(title.as_str())));
        }
        if let Some(salary) = self.salary {
            fields.push(("salary", SqlValue::from(salary)));
        }
        if let Some(equity) = &self.equity {
            fields.push(("equity", SqlValue::from(equity.clone())));
        }
        fields
    }
}

/// Criteria narrowing a job listing. All present criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilter {
    /// Case-insensitive substring of the title
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub min_salary: Option<i64>,
    /// Only `true` narrows the listing
    #[serde(default)]
    pub has_equity: Option<bool>,
}

impl JobFilter {
    /// Parse filter criteria from loosely-typed input (e.g. a decoded query
    /// string). Unknown keys and ill-typed values are validation errors.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| AppError::Validation(format!("Invalid job filter: {}", e)))
    }
}
