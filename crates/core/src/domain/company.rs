// Company Domain Model

use super::{deserialize_some, Job};
use crate::error::{AppError, Result};
use crate::sql::{ColumnMap, SqlValue};
use serde::{Deserialize, Serialize};

/// Company handle (slug, primary key)
pub type CompanyHandle = String;

/// External field names that differ from their `companies` column
pub const COMPANY_COLUMNS: ColumnMap =
    ColumnMap::new(&[("numEmployees", "num_employees"), ("logoUrl", "logo_url")]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: CompanyHandle,
    pub name: String,
    pub description: String,
    pub num_employees: i64,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompany {
    pub handle: CompanyHandle,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub num_employees: i64,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Company with the jobs it currently lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<Job>,
}

/// Partial update for a company. The handle is immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_employees: Option<i64>,

    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_url: Option<Option<String>>,
}

impl CompanyPatch {
    /// Supplied fields in declaration order, keyed by their external names.
    pub fn fields(&self) -> Vec<(&'static str, SqlValue)> {
        let mut fields = Vec::with_capacity(4);
        if let Some(name) = &self.name {
            fields.push(("name", SqlValue::from(name.as_str())));
        }
        if let Some(description) = &self.description {
            fields.push(("description", SqlValue::from(description.as_str())));
        }
        if let Some(num_employees) = self.num_employees {
            fields.push(("numEmployees", SqlValue::from(num_employees)));
        }
        if let Some(logo_url) = &self.logo_url {
            fields.push(("logoUrl", SqlValue::from(logo_url.clone())));
        }
        fields
    }
}

/// Criteria narrowing a company listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyFilter {
    /// Case-insensitive substring of the name
    #[serde(default)]
    pub name_like: Option<String>,
    #[serde(default)]
    pub min_employees: Option<i64>,
    #[serde(default)]
    pub max_employees: Option<i64>,
}

impl CompanyFilter {
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| AppError::Validation(format!("Invalid company filter: {}", e)))
    }
}
