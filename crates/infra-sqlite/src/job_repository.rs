// SQLite JobRepository Implementation

use crate::bind::bind_values;
use crate::error::map_sqlx_error;
use async_trait::async_trait;
use jobly_core::domain::{
    Company, Equity, Job, JobDetail, JobFilter, JobId, JobListing, JobPatch, NewJob,
    JOB_COLUMNS,
};
use jobly_core::error::{AppError, Result};
use jobly_core::port::JobRepository;
use jobly_core::sql::{
    fold_case, sql_for_job_filter, sql_for_partial_update, SqlDialect, SqlValue,
};
use sqlx::SqlitePool;
use tracing::debug;

const DIALECT: SqlDialect = SqlDialect::Sqlite;

const JOB_RETURNING: &str = "RETURNING id, title, salary, equity, company_handle";

pub struct SqliteJobRepository {
    pool: SqlitePool,
}

impl SqliteJobRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn not_found(id: JobId) -> AppError {
    AppError::NotFound(format!("No job: {}", id))
}

#[async_trait]
impl JobRepository for SqliteJobRepository {
    async fn create(&self, job: &NewJob) -> Result<Job> {
        let sql = format!(
            "INSERT INTO jobs (title, title_folded, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4, $5) {}",
            JOB_RETURNING
        );

        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(&job.title)
            .bind(fold_case(&job.title))
            .bind(job.salary)
            .bind(job.equity.as_ref().map(Equity::as_str))
            .bind(&job.company_handle)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(job_id = row.id, company = %job.company_handle, "Job created");
        row.into_job()
    }

    async fn find_all(&self, filter: Option<&JobFilter>) -> Result<Vec<JobListing>> {
        let clause = sql_for_job_filter(filter, DIALECT, 0)?;
        let sql = format!(
            r#"
            SELECT j.id, j.title, j.salary, j.equity, j.company_handle,
                   c.name AS company_name
            FROM jobs AS j
            JOIN companies AS c ON j.company_handle = c.handle
            {}
            ORDER BY j.title_folded, j.title, j.id
            "#,
            clause.to_sql()
        );

        debug!(predicates = ?clause.predicates(), params = clause.values().len(), "Listing jobs");

        let rows = bind_values(sqlx::query_as::<_, JobListingRow>(&sql), clause.values())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(JobListingRow::into_listing).collect()
    }

    async fn get(&self, id: JobId) -> Result<JobDetail> {
        let row = sqlx::query_as::<_, JobDetailRow>(
            r#"
            SELECT j.id, j.title, j.salary, j.equity,
                   c.handle, c.name, c.description, c.num_employees, c.logo_url
            FROM jobs AS j
            JOIN companies AS c ON j.company_handle = c.handle
            WHERE j.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| not_found(id))?;

        row.into_detail()
    }

    async fn update(&self, id: JobId, patch: &JobPatch) -> Result<Job> {
        let mut fields = patch.fields();
        if let Some(title) = &patch.title {
            fields.push(("title_folded", SqlValue::from(fold_case(title))));
        }
        let update = sql_for_partial_update(&fields, &JOB_COLUMNS)?;
        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ${} {}",
            update.set_cols,
            update.next_placeholder(),
            JOB_RETURNING
        );

        debug!(job_id = id, set = %update.set_cols, "Updating job");

        let row = bind_values(sqlx::query_as::<_, JobRow>(&sql), &update.values)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| not_found(id))?;

        row.into_job()
    }

    async fn remove(&self, id: JobId) -> Result<()> {
        let deleted: Option<JobId> =
            sqlx::query_scalar("DELETE FROM jobs WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        match deleted {
            Some(_) => {
                debug!(job_id = id, "Job removed");
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }
}

/// Stored equity is trusted to be well-formed; anything else is corruption.
pub(crate) fn parse_equity(id: JobId, equity: Option<String>) -> Result<Option<Equity>> {
    equity
        .map(|raw| {
            raw.parse::<Equity>()
                .map_err(|e| AppError::Database(format!("Corrupt equity on job {}: {}", id, e)))
        })
        .transpose()
}

/// SQLite row representation of `jobs`
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct JobRow {
    id: i64,
    title: String,
    salary: Option<i64>,
    equity: Option<String>,
    company_handle: String,
}

impl JobRow {
    pub(crate) fn into_job(self) -> Result<Job> {
        Ok(Job {
            equity: parse_equity(self.id, self.equity)?,
            id: self.id,
            title: self.title,
            salary: self.salary,
            company_handle: self.company_handle,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct JobListingRow {
    id: i64,
    title: String,
    salary: Option<i64>,
    equity: Option<String>,
    company_handle: String,
    company_name: String,
}

impl JobListingRow {
    fn into_listing(self) -> Result<JobListing> {
        Ok(JobListing {
            equity: parse_equity(self.id, self.equity)?,
            id: self.id,
            title: self.title,
            salary: self.salary,
            company_handle: self.company_handle,
            company_name: self.company_name,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct JobDetailRow {
    id: i64,
    title: String,
    salary: Option<i64>,
    equity: Option<String>,
    handle: String,
    name: String,
    description: String,
    num_employees: i64,
    logo_url: Option<String>,
}

impl JobDetailRow {
    fn into_detail(self) -> Result<JobDetail> {
        Ok(JobDetail {
            equity: parse_equity(self.id, self.equity)?,
            id: self.id,
            title: self.title,
            salary: self.salary,
            company: Company {
                handle: self.handle,
                name: self.name,
                description: self.description,
                num_employees: self.num_employees,
                logo_url: self.logo_url,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};

    async fn setup_test_db() -> SqlitePool {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        run_migrations(&pool).await.unwrap();
        sqlx::query(
            "INSERT INTO companies (handle, name, name_folded, description, num_employees) \
             VALUES ('c1', 'C1', 'c1', 'Desc1', 1)",
        )
        .execute(&pool)
        .await
        .unwrap();
        pool
    }

    fn new_job(title: &str, salary: Option<i64>, equity: Option<&str>) -> NewJob {
        NewJob {
            title: title.to_string(),
            salary,
            equity: equity.map(|e| e.parse().unwrap()),
            company_handle: "c1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = SqliteJobRepository::new(setup_test_db().await);

        let job = repo
            .create(&new_job("New", Some(1000), Some("0.010")))
            .await
            .unwrap();
        assert!(job.id > 0);

        let detail = repo.get(job.id).await.unwrap();
        assert_eq!(detail.title, "New");
        assert_eq!(detail.equity.unwrap().as_str(), "0.010");
        assert_eq!(detail.company.handle, "c1");
    }

    #[tokio::test]
    async fn test_unknown_company_is_a_store_fault() {
        let repo = SqliteJobRepository::new(setup_test_db().await);

        let mut job = new_job("Orphan", None, None);
        job.company_handle = "nope".to_string();

        let result = repo.create(&job).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_has_equity_ignores_zero_text() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        repo.create(&new_job("Zero", None, Some("0.000"))).await.unwrap();
        repo.create(&new_job("Some", None, Some("0.001"))).await.unwrap();
        repo.create(&new_job("None", None, None)).await.unwrap();

        let filter = JobFilter {
            has_equity: Some(true),
            ..Default::default()
        };
        let jobs = repo.find_all(Some(&filter)).await.unwrap();

        let titles: Vec<_> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Some"]);
    }

    #[tokio::test]
    async fn test_title_filter_is_case_insensitive() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        repo.create(&new_job("Senior Engineer", None, None)).await.unwrap();
        repo.create(&new_job("Designer", None, None)).await.unwrap();

        let filter = JobFilter {
            title: Some("ENGINEER".to_string()),
            ..Default::default()
        };
        let jobs = repo.find_all(Some(&filter)).await.unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Senior Engineer");
        assert_eq!(jobs[0].company_name, "C1");
    }

    #[tokio::test]
    async fn test_update_keeps_unsupplied_fields() {
        let repo = SqliteJobRepository::new(setup_test_db().await);
        let job = repo
            .create(&new_job("Old", Some(1000), Some("0.010")))
            .await
            .unwrap();

        let patch = JobPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let updated = repo.update(job.id, &patch).await.unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.salary, Some(1000));
        assert_eq!(updated.equity, job.equity);
        assert_eq!(updated.company_handle, "c1");
    }
}
