// SQLite CompanyRepository Implementation

use crate::bind::bind_values;
use crate::error::map_sqlx_error;
use crate::job_repository::JobRow;
use async_trait::async_trait;
use jobly_core::domain::{
    Company, CompanyDetail, CompanyFilter, CompanyPatch, NewCompany, COMPANY_COLUMNS,
};
use jobly_core::error::{AppError, Result};
use jobly_core::port::CompanyRepository;
use jobly_core::sql::{
    fold_case, sql_for_company_filter, sql_for_partial_update, SqlDialect, SqlValue,
};
use sqlx::SqlitePool;
use tracing::debug;

const COMPANY_RETURNING: &str = "RETURNING handle, name, description, num_employees, logo_url";

pub struct SqliteCompanyRepository {
    pool: SqlitePool,
}

impl SqliteCompanyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn not_found(handle: &str) -> AppError {
    AppError::NotFound(format!("No company: {}", handle))
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepository {
    async fn create(&self, company: &NewCompany) -> Result<Company> {
        let sql = format!(
            "INSERT INTO companies \
             (handle, name, name_folded, description, num_employees, logo_url) \
             VALUES ($1, $2, $3, $4, $5, $6) {}",
            COMPANY_RETURNING
        );

        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(&company.handle)
            .bind(&company.name)
            .bind(fold_case(&company.name))
            .bind(&company.description)
            .bind(company.num_employees)
            .bind(company.logo_url.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(handle = %row.handle, "Company created");
        Ok(row.into())
    }

    async fn find_all(&self, filter: Option<&CompanyFilter>) -> Result<Vec<Company>> {
        let clause = sql_for_company_filter(filter, SqlDialect::Sqlite, 0)?;
        let sql = format!(
            "SELECT handle, name, description, num_employees, logo_url \
             FROM companies {} ORDER BY name_folded, name",
            clause.to_sql()
        );

        debug!(predicates = ?clause.predicates(), "Listing companies");

        let rows = bind_values(sqlx::query_as::<_, CompanyRow>(&sql), clause.values())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn get(&self, handle: &str) -> Result<CompanyDetail> {
        let company: Company = sqlx::query_as::<_, CompanyRow>(
            "SELECT handle, name, description, num_employees, logo_url \
             FROM companies WHERE handle = $1",
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| not_found(handle))?
        .into();

        let jobs = sqlx::query_as::<_, JobRow>(
            "SELECT id, title, salary, equity, company_handle \
             FROM jobs WHERE company_handle = $1 ORDER BY id",
        )
        .bind(handle)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .into_iter()
        .map(JobRow::into_job)
        .collect::<Result<Vec<_>>>()?;

        Ok(CompanyDetail { company, jobs })
    }

    async fn update(&self, handle: &str, patch: &CompanyPatch) -> Result<Company> {
        let mut fields = patch.fields();
        if let Some(name) = &patch.name {
            fields.push(("name_folded", SqlValue::from(fold_case(name))));
        }
        let update = sql_for_partial_update(&fields, &COMPANY_COLUMNS)?;
        let sql = format!(
            "UPDATE companies SET {} WHERE handle = ${} {}",
            update.set_cols,
            update.next_placeholder(),
            COMPANY_RETURNING
        );

        debug!(handle, set = %update.set_cols, "Updating company");

        let row = bind_values(sqlx::query_as::<_, CompanyRow>(&sql), &update.values)
            .bind(handle)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| not_found(handle))?;

        Ok(row.into())
    }

    async fn remove(&self, handle: &str) -> Result<()> {
        let deleted: Option<String> =
            sqlx::query_scalar("DELETE FROM companies WHERE handle = $1 RETURNING handle")
                .bind(handle)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        deleted.map(|_| ()).ok_or_else(|| not_found(handle))
    }
}

/// SQLite row representation of `companies`
#[derive(Debug, sqlx::FromRow)]
struct CompanyRow {
    handle: String,
    name: String,
    description: String,
    num_employees: i64,
    logo_url: Option<String>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            handle: row.handle,
            name: row.name,
            description: row.description,
            num_employees: row.num_employees,
            logo_url: row.logo_url,
        }
    }
}
